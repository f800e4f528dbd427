use std::io::{self, Write};

use conectify_util::{LevelThresholds, RewardOutcome, UserProgression, XpEvent};
use serde::Serialize;

use crate::error::CliError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressLine<'a> {
    xp: i64,
    #[serde(flatten)]
    progression: &'a UserProgression,
    xp_to_next_level: Option<i64>,
}

#[derive(Serialize)]
struct AwardLine<'a> {
    event: XpEvent,
    #[serde(flatten)]
    outcome: &'a RewardOutcome,
}

/// One line per XP value, either human readable or one JSON object per line.
pub fn write_progression(
    out: &mut impl Write,
    xp: i64,
    progression: &UserProgression,
    json: bool,
) -> Result<(), CliError> {
    if json {
        let line = ProgressLine {
            xp,
            progression,
            xp_to_next_level: progression.xp_to_next_level(),
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", describe(xp, progression))?;
    Ok(())
}

pub fn write_outcome(
    out: &mut impl Write,
    event: XpEvent,
    outcome: &RewardOutcome,
    json: bool,
) -> Result<(), CliError> {
    if json {
        serde_json::to_writer(&mut *out, &AwardLine { event, outcome })?;
        writeln!(out)?;
        return Ok(());
    }

    let gained = outcome.xp - outcome.previous_xp;
    let mut line = format!("{event}: +{gained} XP, {}", describe(outcome.xp, &outcome.current));
    if outcome.leveled_up() {
        line.push_str(&format!(" [level up from {}]", outcome.previous.level));
    }
    writeln!(out, "{line}")?;
    Ok(())
}

pub fn write_table(out: &mut impl Write, table: &LevelThresholds) -> io::Result<()> {
    for (index, threshold) in table.as_slice().iter().enumerate() {
        writeln!(out, "level {:>3}: {threshold:>9} XP", index + 1)?;
    }
    Ok(())
}

fn describe(xp: i64, progression: &UserProgression) -> String {
    match (progression.xp_for_next_level, progression.xp_to_next_level()) {
        (Some(span), Some(missing)) => format!(
            "{xp} XP: level {} ({}/{span} XP, {:.1}%), {missing} XP to level {}",
            progression.level,
            progression.xp_into_level,
            progression.progress_percent,
            progression.level + 1
        ),
        _ => format!("{xp} XP: level {} (max level)", progression.level),
    }
}
