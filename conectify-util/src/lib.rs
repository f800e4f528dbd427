pub mod math;

pub use math::progression::{
    compute_progression, InvalidInput, LevelThresholds, UserProgression, LEVEL_THRESHOLDS,
};
pub use math::reward::{apply_reward, RewardOutcome, XpEvent};

#[macro_export]
macro_rules! assert_eq_delta {
    ($x:expr, $y:expr, $d:expr) => {
        if 2f64 * ($x - $y).abs() > $d * ($x.abs() + $y.abs()) {
            panic!("{} vs {} ({} vs {})", $x, $y, ($x - $y).abs(), $d);
        }
    };
}
