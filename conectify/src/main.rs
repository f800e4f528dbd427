#![deny(clippy::all)]
// use log crate
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

use std::{io, process::ExitCode};

use clap::Parser;
use conectify::{cli::Cli, error::CliError, init_log_or_report, run};
use conectify_config::{AdvancedConfiguration, LoadConfiguration};

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The logger is configured from features.toml, so that file is read first. If it is
    // broken we still want to report it, using the default logging setup.
    let advanced = AdvancedConfiguration::load(&cli.config_dir);
    let logging = advanced
        .as_ref()
        .map(|advanced| advanced.logging.clone())
        .unwrap_or_default();
    init_log_or_report(&logging, &mut io::stderr());

    log::debug!("Starting Conectify {CARGO_PKG_VERSION}");

    let result = advanced
        .map_err(CliError::from)
        .and_then(|advanced| run(&cli, &advanced, &mut io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
