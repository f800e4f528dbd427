use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::progression::{InvalidInput, LevelThresholds, UserProgression};

#[derive(Debug, PartialEq, Eq)]
pub struct ParseXpEventError;

impl fmt::Display for ParseXpEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown XP event")
    }
}

impl std::error::Error for ParseXpEventError {}

/// Marketplace actions that award experience.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpEvent {
    ProjectCompleted,
    FiveStarReview,
    ProposalAccepted,
    AnswerAccepted,
    QuestionAnswered,
    ProfileCompleted,
}

impl XpEvent {
    pub const ALL: [Self; 6] = [
        Self::ProjectCompleted,
        Self::FiveStarReview,
        Self::ProposalAccepted,
        Self::AnswerAccepted,
        Self::QuestionAnswered,
        Self::ProfileCompleted,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ProjectCompleted => "project_completed",
            Self::FiveStarReview => "five_star_review",
            Self::ProposalAccepted => "proposal_accepted",
            Self::AnswerAccepted => "answer_accepted",
            Self::QuestionAnswered => "question_answered",
            Self::ProfileCompleted => "profile_completed",
        }
    }
}

impl fmt::Display for XpEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for XpEvent {
    type Err = ParseXpEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.name() == s)
            .ok_or(ParseXpEventError)
    }
}

/// Result of adding XP to a user.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RewardOutcome {
    pub previous_xp: i64,
    pub xp: i64,
    pub previous: UserProgression,
    pub current: UserProgression,
    pub levels_gained: u32,
}

impl RewardOutcome {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Adds `amount` XP to `xp` and reports the progression before and after.
///
/// XP never decreases: a negative `amount` is rejected. The sum saturates at `i64::MAX`.
pub fn apply_reward(
    table: &LevelThresholds,
    xp: i64,
    amount: i64,
) -> Result<RewardOutcome, InvalidInput> {
    if amount < 0 {
        return Err(InvalidInput::NegativeExperience(amount));
    }

    let previous = table.progression(xp)?;
    let new_xp = xp.saturating_add(amount);
    let current = table.progression(new_xp)?;

    Ok(RewardOutcome {
        previous_xp: xp,
        xp: new_xp,
        previous,
        current,
        levels_gained: current.level - previous.level,
    })
}
