use std::io;

use conectify_config::ConfigError;
use conectify_util::InvalidInput;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("Couldn't write output: {0}")]
    Io(#[from] io::Error),
    #[error("Couldn't encode output: {0}")]
    Json(#[from] serde_json::Error),
}
