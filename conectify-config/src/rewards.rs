use conectify_util::XpEvent;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// XP awarded for each marketplace event.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RewardConfig {
    pub project_completed: i64,
    pub five_star_review: i64,
    pub proposal_accepted: i64,
    pub answer_accepted: i64,
    pub question_answered: i64,
    pub profile_completed: i64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            project_completed: 100,
            five_star_review: 50,
            proposal_accepted: 25,
            answer_accepted: 15,
            question_answered: 5,
            profile_completed: 20,
        }
    }
}

impl RewardConfig {
    pub fn amount(&self, event: XpEvent) -> i64 {
        match event {
            XpEvent::ProjectCompleted => self.project_completed,
            XpEvent::FiveStarReview => self.five_star_review,
            XpEvent::ProposalAccepted => self.proposal_accepted,
            XpEvent::AnswerAccepted => self.answer_accepted,
            XpEvent::QuestionAnswered => self.question_answered,
            XpEvent::ProfileCompleted => self.profile_completed,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for event in XpEvent::ALL {
            let amount = self.amount(event);
            if amount < 0 {
                return Err(ConfigError::NegativeReward { event, amount });
            }
        }
        Ok(())
    }
}
