use conectify_config::{AdvancedConfiguration, ProgressionConfiguration, RewardConfig};
use conectify_util::{
    apply_reward, InvalidInput, LevelThresholds, RewardOutcome, UserProgression, XpEvent,
};

/// Binds a validated level table to the configured XP rewards.
///
/// Cloning is cheap; the table itself is shared.
#[derive(Clone, Debug)]
pub struct Leveling {
    table: LevelThresholds,
    rewards: RewardConfig,
}

impl Leveling {
    pub fn new(table: LevelThresholds, rewards: RewardConfig) -> Self {
        Self { table, rewards }
    }

    pub fn from_config(
        progression: &ProgressionConfiguration,
        advanced: &AdvancedConfiguration,
    ) -> Result<Self, InvalidInput> {
        let table = progression.level_thresholds()?;
        Ok(Self::new(table, advanced.rewards.clone()))
    }

    pub fn table(&self) -> &LevelThresholds {
        &self.table
    }

    pub fn progression(&self, xp: i64) -> Result<UserProgression, InvalidInput> {
        self.table.progression(xp)
    }

    /// Awards the configured amount for `event` on top of `xp`.
    pub fn award(&self, xp: i64, event: XpEvent) -> Result<RewardOutcome, InvalidInput> {
        let amount = self.rewards.amount(event);
        let outcome = apply_reward(&self.table, xp, amount)?;

        if outcome.leveled_up() {
            log::info!(
                "Reached level {} (+{amount} XP for {event}, {} -> {})",
                outcome.current.level,
                outcome.previous_xp,
                outcome.xp
            );
        } else {
            log::debug!("+{amount} XP for {event}, {} -> {}", outcome.previous_xp, outcome.xp);
        }

        Ok(outcome)
    }

    /// Applies `events` in order, each one starting from the XP the previous one left.
    pub fn award_all(
        &self,
        xp: i64,
        events: &[XpEvent],
    ) -> Result<Vec<RewardOutcome>, InvalidInput> {
        let mut outcomes = Vec::with_capacity(events.len());
        let mut xp = xp;
        for &event in events {
            let outcome = self.award(xp, event)?;
            xp = outcome.xp;
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }
}
