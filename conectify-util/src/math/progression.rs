use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::clamped_percent;

/// Cumulative XP required to reach each level; index `i` is level `i + 1`.
#[rustfmt::skip]
pub const LEVEL_THRESHOLDS: [i64; 50] = [
    0, 100, 300, 600, 1000, 1500, 2100, 2800, 3600, 4500,
    5500, 6600, 7800, 9100, 10_500, 12_000, 13_600, 15_300, 17_100, 19_000,
    21_000, 23_100, 25_300, 27_600, 30_000, 32_500, 35_100, 37_800, 40_600, 43_500,
    46_500, 49_600, 52_800, 56_100, 59_500, 63_000, 66_600, 70_300, 74_100, 78_000,
    82_000, 86_100, 90_300, 94_600, 99_000, 103_500, 108_100, 112_800, 117_600, 122_500,
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Experience can not be negative (got {0})")]
    NegativeExperience(i64),
    #[error("The level threshold table is empty")]
    EmptyTable,
    #[error("The level threshold table must start at 0, found {0}")]
    NonZeroBaseline(i64),
    #[error("Level threshold {value} at index {index} is not greater than the previous one ({previous})")]
    NotStrictlyIncreasing {
        index: usize,
        previous: i64,
        value: i64,
    },
    #[error("The level threshold table has {0} entries, levels must fit in a u32")]
    TooManyLevels(usize),
}

fn check_level_count(len: usize) -> Result<u32, InvalidInput> {
    u32::try_from(len).map_err(|_| InvalidInput::TooManyLevels(len))
}

/// Checks that `thresholds` is non-empty, starts at zero, is strictly increasing and has at
/// most `u32::MAX` entries.
pub fn validate_thresholds(thresholds: &[i64]) -> Result<(), InvalidInput> {
    let Some(&first) = thresholds.first() else {
        return Err(InvalidInput::EmptyTable);
    };
    check_level_count(thresholds.len())?;
    if first != 0 {
        return Err(InvalidInput::NonZeroBaseline(first));
    }

    for (index, pair) in thresholds.windows(2).enumerate() {
        let (previous, value) = (pair[0], pair[1]);
        if value <= previous {
            return Err(InvalidInput::NotStrictlyIncreasing {
                index: index + 1,
                previous,
                value,
            });
        }
    }

    Ok(())
}

/// Where a user stands for a given amount of cumulative XP.
///
/// This is always derived from the stored XP value and never persisted.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProgression {
    /// Current level, `1..=N` for a table with `N` thresholds.
    pub level: u32,
    /// Whether the highest threshold has been reached.
    pub is_max_level: bool,
    /// XP earned since the start of the current level.
    pub xp_into_level: i64,
    /// Width of the current level in XP, `None` at max level.
    pub xp_for_next_level: Option<i64>,
    /// `0.0..=100.0`. Zero XP is always `0.0`; any other XP at max level reports `100.0`.
    pub progress_percent: f64,
}

impl UserProgression {
    /// XP still missing before the next level, `None` at max level.
    pub fn xp_to_next_level(&self) -> Option<i64> {
        self.xp_for_next_level
            .map(|span| (span - self.xp_into_level).max(0))
    }

    /// Progress as a fraction `0.0..=1.0`, the form progress bars want.
    pub fn progress_fraction(&self) -> f64 {
        self.progress_percent / 100.0
    }
}

/// Computes the progression for `xp` against an arbitrary table.
///
/// The table is validated on every call; when the same table is used repeatedly,
/// build a [`LevelThresholds`] once and call [`LevelThresholds::progression`].
pub fn compute_progression(xp: i64, thresholds: &[i64]) -> Result<UserProgression, InvalidInput> {
    validate_thresholds(thresholds)?;
    check_experience(xp)?;
    Ok(progression_unchecked(thresholds, xp))
}

fn check_experience(xp: i64) -> Result<(), InvalidInput> {
    if xp < 0 {
        return Err(InvalidInput::NegativeExperience(xp));
    }
    Ok(())
}

/// `thresholds` must be valid and `xp` non-negative.
fn progression_unchecked(thresholds: &[i64], xp: i64) -> UserProgression {
    // thresholds[0] == 0 <= xp, so at least one threshold has been reached.
    // A threshold equal to `xp` counts as reached.
    let index = thresholds.partition_point(|&threshold| threshold <= xp) - 1;
    let level_start = thresholds[index];
    let xp_into_level = xp - level_start;
    // Validated tables have at most u32::MAX entries.
    let level = (index + 1) as u32;

    match thresholds.get(index + 1) {
        Some(&next_start) => {
            let span = next_start - level_start;
            UserProgression {
                level,
                is_max_level: false,
                xp_into_level,
                xp_for_next_level: Some(span),
                progress_percent: clamped_percent(xp_into_level, span),
            }
        }
        None => UserProgression {
            level,
            is_max_level: true,
            xp_into_level,
            xp_for_next_level: None,
            // Only a single-level table puts zero XP at max level.
            progress_percent: if xp == 0 { 0.0 } else { 100.0 },
        },
    }
}

/// A validated level threshold table.
///
/// Validation happens once in [`LevelThresholds::new`], so the table can be shared
/// freely between threads and queried without re-checking it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct LevelThresholds {
    thresholds: Arc<[i64]>,
}

impl LevelThresholds {
    pub fn new(thresholds: impl Into<Vec<i64>>) -> Result<Self, InvalidInput> {
        let thresholds = thresholds.into();
        validate_thresholds(&thresholds)?;
        Ok(Self {
            thresholds: thresholds.into(),
        })
    }

    pub fn progression(&self, xp: i64) -> Result<UserProgression, InvalidInput> {
        check_experience(xp)?;
        Ok(progression_unchecked(&self.thresholds, xp))
    }

    pub fn level_for(&self, xp: i64) -> Result<u32, InvalidInput> {
        self.progression(xp).map(|progression| progression.level)
    }

    /// Number of levels, which is also the highest reachable level.
    pub fn max_level(&self) -> u32 {
        // Validated tables have at most u32::MAX entries.
        self.thresholds.len() as u32
    }

    /// Cumulative XP at which `level` starts.
    pub fn threshold(&self, level: u32) -> Option<i64> {
        let index = usize::try_from(level).ok()?.checked_sub(1)?;
        self.thresholds.get(index).copied()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.thresholds
    }
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            thresholds: LEVEL_THRESHOLDS.into(),
        }
    }
}

impl TryFrom<Vec<i64>> for LevelThresholds {
    type Error = InvalidInput;

    fn try_from(thresholds: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(thresholds)
    }
}

impl From<LevelThresholds> for Vec<i64> {
    fn from(table: LevelThresholds) -> Self {
        table.thresholds.to_vec()
    }
}
