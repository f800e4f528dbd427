use conectify_util::{InvalidInput, LevelThresholds, XpEvent, LEVEL_THRESHOLDS};
use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub mod logging;
mod rewards;

pub use logging::LoggingConfig;
pub use rewards::RewardConfig;

const CONFIG_ROOT_FOLDER: &str = "config/";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't access configuration at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Couldn't parse config at {path:?}. Reason: {message}. This is probably caused by a config update; just delete the old config and start Conectify again")]
    Parse { path: PathBuf, message: String },
    #[error("Invalid level thresholds: {0}")]
    InvalidThresholds(#[from] InvalidInput),
    #[error("Reward for {event} can not be negative (got {amount})")]
    NegativeReward { event: XpEvent, amount: i64 },
}

/// The level curve. Changing it changes the level of every user, so it lives in its own file.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ProgressionConfiguration {
    /// Cumulative XP at which each level starts. Must start at 0 and be strictly increasing.
    pub thresholds: Vec<i64>,
}

impl Default for ProgressionConfiguration {
    fn default() -> Self {
        Self {
            thresholds: LEVEL_THRESHOLDS.to_vec(),
        }
    }
}

impl ProgressionConfiguration {
    pub fn level_thresholds(&self) -> Result<LevelThresholds, InvalidInput> {
        LevelThresholds::new(self.thresholds.clone())
    }
}

/// Everything that can be tuned without touching the level curve.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct AdvancedConfiguration {
    pub logging: LoggingConfig,
    pub rewards: RewardConfig,
}

pub trait LoadConfiguration {
    /// Reads the configuration below `exec_dir`, writing the defaults first if the file is missing.
    fn load(exec_dir: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config_dir = exec_dir.join(CONFIG_ROOT_FOLDER);
        if !config_dir.exists() {
            log::debug!("creating new config root folder");
            fs::create_dir_all(&config_dir).map_err(|source| ConfigError::Io {
                path: config_dir.clone(),
                source,
            })?;
        }
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;

            toml::from_str(&file_content).map_err(|err| ConfigError::Parse {
                path: path.clone(),
                message: err.message().to_string(),
            })?
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(&path, serialized) {
                        warn!("Couldn't write default config to {:?}. Reason: {}", &path, err);
                    }
                }
                Err(err) => warn!("Couldn't serialize default config for {:?}: {}", &path, err),
            }

            content
        };

        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadConfiguration for ProgressionConfiguration {
    fn get_path() -> &'static Path {
        Path::new("progression.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        conectify_util::math::progression::validate_thresholds(&self.thresholds)?;
        Ok(())
    }
}

impl LoadConfiguration for AdvancedConfiguration {
    fn get_path() -> &'static Path {
        Path::new("features.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.rewards.validate()
    }
}
