use std::io::Write;

use cli::output::{write_outcome, write_progression, write_table};
use cli::{Cli, Command};
use conectify_config::{AdvancedConfiguration, LoadConfiguration, ProgressionConfiguration};
use error::CliError;
use leveling::Leveling;

pub mod cli;
pub mod error;
pub mod leveling;
pub mod logging;

pub use logging::{init_log, init_log_or_report};

/// Loads the level table from `cli.config_dir` and executes the requested command.
pub fn run(
    cli: &Cli,
    advanced: &AdvancedConfiguration,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let progression = ProgressionConfiguration::load(&cli.config_dir)?;
    let leveling = Leveling::from_config(&progression, advanced)?;
    log::debug!(
        "Loaded {} levels from {:?}",
        leveling.table().max_level(),
        cli.config_dir
    );

    match &cli.command {
        Command::Progress { json, xp } => {
            for &xp in xp {
                let progression = leveling.progression(xp)?;
                write_progression(out, xp, &progression, *json)?;
            }
        }
        Command::Award { json, xp, events } => {
            let outcomes = leveling.award_all(*xp, events)?;
            for (&event, outcome) in events.iter().zip(&outcomes) {
                write_outcome(out, event, outcome, *json)?;
            }
        }
        Command::Table => write_table(out, leveling.table())?,
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use std::fs;

    use clap::Parser;
    use conectify_config::{AdvancedConfiguration, ConfigError};
    use conectify_util::InvalidInput;
    use tempfile::TempDir;

    use crate::{cli::Cli, error::CliError, run};

    fn run_in(dir: &TempDir, args: &[&str]) -> (Result<(), CliError>, String) {
        let config_dir = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(
            ["conectify", "--config-dir", config_dir]
                .into_iter()
                .chain(args.iter().copied()),
        )
        .unwrap();
        let mut out = Vec::new();
        let result = run(&cli, &AdvancedConfiguration::default(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn progress_with_default_table() {
        let dir = TempDir::new().unwrap();
        let (result, out) = run_in(&dir, &["progress", "0", "100"]);
        result.unwrap();
        assert_eq!(
            out,
            "0 XP: level 1 (0/100 XP, 0.0%), 100 XP to level 2\n100 XP: level 2 (0/200 XP, 0.0%), 200 XP to level 3\n"
        );
        assert!(dir.path().join("config/progression.toml").exists());
    }

    #[test]
    fn progress_rejects_negative_experience() {
        let dir = TempDir::new().unwrap();
        let (result, _) = run_in(&dir, &["progress", "-5"]);
        assert!(matches!(
            result,
            Err(CliError::InvalidInput(InvalidInput::NegativeExperience(-5)))
        ));
    }

    #[test]
    fn award_prints_each_event() {
        let dir = TempDir::new().unwrap();
        let (result, out) = run_in(&dir, &["award", "0", "project_completed", "question_answered"]);
        result.unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("project_completed: +100 XP, 100 XP: level 2"));
        assert!(lines[0].ends_with("[level up from 1]"));
        assert!(lines[1].starts_with("question_answered: +5 XP, 105 XP: level 2"));
    }

    #[test]
    fn table_uses_configured_thresholds() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        fs::write(
            dir.path().join("config/progression.toml"),
            "thresholds = [0, 5]\n",
        )
        .unwrap();

        let (result, out) = run_in(&dir, &["table"]);
        result.unwrap();
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn malformed_table_fails_fast() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        fs::write(
            dir.path().join("config/progression.toml"),
            "thresholds = [0, 5, 5]\n",
        )
        .unwrap();

        let (result, out) = run_in(&dir, &["progress", "1"]);
        assert!(matches!(
            result,
            Err(CliError::Config(ConfigError::InvalidThresholds(
                InvalidInput::NotStrictlyIncreasing { .. }
            )))
        ));
        assert!(out.is_empty());
    }
}
