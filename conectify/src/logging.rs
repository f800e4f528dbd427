use std::io::Write;

use conectify_config::LoggingConfig;
use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Installs the terminal logger. Everything goes to stderr so stdout only carries command output.
///
/// `RUST_LOG` overrides the configured level. With logging disabled only errors are printed.
pub fn init_log(logging: &LoggingConfig) -> Result<(), SetLoggerError> {
    let mut config = ConfigBuilder::new();
    if logging.timestamp {
        config.set_time_format_custom(time::macros::format_description!(
            "[hour]:[minute]:[second]"
        ));
        config.set_time_level(LevelFilter::Error);
    } else {
        config.set_time_level(LevelFilter::Off);
    }

    if logging.threads {
        config.set_thread_level(LevelFilter::Info);
    } else {
        config.set_thread_level(LevelFilter::Off);
    }
    config.set_target_level(LevelFilter::Off);

    let color = if logging.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let env_level = std::env::var("RUST_LOG").ok();
    TermLogger::init(
        level_filter(logging, env_level.as_deref()),
        config.build(),
        TerminalMode::Stderr,
        color,
    )
}

/// Like [`init_log`], but a failure is written to `fallback`, since there is no logger to carry it.
/// Returns whether the logger was installed.
pub fn init_log_or_report(logging: &LoggingConfig, fallback: &mut impl Write) -> bool {
    match init_log(logging) {
        Ok(()) => true,
        Err(err) => {
            let _ = writeln!(fallback, "Couldn't initialize logging: {err}");
            false
        }
    }
}

fn level_filter(logging: &LoggingConfig, env_level: Option<&str>) -> LevelFilter {
    if !logging.enabled {
        return LevelFilter::Error;
    }
    env_level
        .and_then(|level| level.parse().ok())
        .unwrap_or(logging.level)
}

#[cfg(test)]
mod test {
    use conectify_config::LoggingConfig;
    use log::LevelFilter;

    use super::{init_log_or_report, level_filter};

    #[test]
    fn level_resolution() {
        let logging = LoggingConfig::default();
        assert_eq!(level_filter(&logging, None), LevelFilter::Info);
        assert_eq!(level_filter(&logging, Some("trace")), LevelFilter::Trace);
        assert_eq!(level_filter(&logging, Some("chatty")), LevelFilter::Info);

        let disabled = LoggingConfig {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(level_filter(&disabled, Some("debug")), LevelFilter::Error);
    }

    #[test]
    fn second_logger_is_reported() {
        let logging = LoggingConfig::default();
        let mut fallback = Vec::new();
        // This is the only test that installs a logger.
        assert!(init_log_or_report(&logging, &mut fallback));
        assert!(fallback.is_empty());

        assert!(!init_log_or_report(&logging, &mut fallback));
        let reported = String::from_utf8(fallback).unwrap();
        assert!(reported.starts_with("Couldn't initialize logging: "));
    }
}
