pub mod progression;
pub mod reward;

/// `part / whole` as a percentage clamped to `0.0..=100.0`. `whole` must be positive.
pub fn clamped_percent(part: i64, whole: i64) -> f64 {
    debug_assert!(whole > 0);
    (part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod test {
    use super::clamped_percent;

    #[test]
    fn percent_is_clamped() {
        assert_eq!(clamped_percent(0, 200), 0.0);
        assert_eq!(clamped_percent(50, 200), 25.0);
        assert_eq!(clamped_percent(200, 200), 100.0);
        assert_eq!(clamped_percent(450, 200), 100.0);
        assert_eq!(clamped_percent(-3, 200), 0.0);
    }
}
