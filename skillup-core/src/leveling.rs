//! XP and leveling math.
//!
//! Levels are 1000-XP bands starting at level 1: `level = floor(xp/1000) + 1`.
//! An exact multiple of 1000 lands at the start of the next level
//! (1000 XP is level 2 at 0%, not level 1 at 100%).

/// XP span of one level band.
pub const XP_PER_LEVEL: i64 = 1000;

/// Derived leveling state for a given XP total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    pub total_xp: i64,
    pub level: i64,
    pub xp_in_current_level: i64,
    /// Percent of the way through the current band, clamped to 0..=100.
    pub progress_percentage: f64,
    /// XP total at which the next level begins.
    pub next_level_xp: i64,
}

impl LevelProgress {
    /// Derive leveling state from a total XP value.
    /// Negative totals are treated as 0.
    pub fn from_total_xp(total_xp: i64) -> Self {
        let total_xp = total_xp.max(0);
        let level = total_xp / XP_PER_LEVEL + 1;
        let xp_in_current_level = total_xp - (level - 1) * XP_PER_LEVEL;
        let progress_percentage =
            (xp_in_current_level as f64 / XP_PER_LEVEL as f64 * 100.0).clamp(0.0, 100.0);
        Self {
            total_xp,
            level,
            xp_in_current_level,
            progress_percentage,
            // Saturates near i64::MAX, where the next band start would
            // overflow.
            next_level_xp: level.saturating_mul(XP_PER_LEVEL),
        }
    }
}

/// Sum completed courses' rewards. Missing or malformed rewards count as 0.
pub fn total_xp<I>(rewards: I) -> i64
where
    I: IntoIterator<Item = Option<i64>>,
{
    rewards.into_iter().map(|r| r.unwrap_or(0).max(0)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_one_starts_at_zero() {
        let p = LevelProgress::from_total_xp(0);
        assert_eq!(p.level, 1);
        assert_eq!(p.xp_in_current_level, 0);
        assert_eq!(p.progress_percentage, 0.0);
        assert_eq!(p.next_level_xp, 1000);
    }

    #[test]
    fn exact_multiple_rolls_to_next_level() {
        let p = LevelProgress::from_total_xp(1000);
        assert_eq!(p.level, 2);
        assert_eq!(p.xp_in_current_level, 0);
        assert_eq!(p.progress_percentage, 0.0);
        assert_eq!(p.next_level_xp, 2000);

        let p = LevelProgress::from_total_xp(999);
        assert_eq!(p.level, 1);
        assert_eq!(p.xp_in_current_level, 999);
    }

    #[test]
    fn worked_example_350_xp() {
        let xp = total_xp([Some(50), Some(100), Some(200)]);
        assert_eq!(xp, 350);
        let p = LevelProgress::from_total_xp(xp);
        assert_eq!(p.level, 1);
        assert_eq!(p.xp_in_current_level, 350);
        assert_eq!(p.progress_percentage, 35.0);
    }

    #[test]
    fn totals_near_i64_max_do_not_overflow() {
        let p = LevelProgress::from_total_xp(i64::MAX);
        assert_eq!(p.level, i64::MAX / XP_PER_LEVEL + 1);
        assert_eq!(p.next_level_xp, i64::MAX);
        assert!((0.0..=100.0).contains(&p.progress_percentage));
    }

    #[test]
    fn missing_rewards_count_as_zero() {
        assert_eq!(total_xp([Some(50), None, Some(100)]), 150);
        assert_eq!(total_xp(std::iter::empty::<Option<i64>>()), 0);
    }
}
