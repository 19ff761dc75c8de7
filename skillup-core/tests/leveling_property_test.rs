//! Property tests for the leveling math.

use proptest::prelude::*;
use skillup_core::leveling::{total_xp, LevelProgress, XP_PER_LEVEL};

proptest! {
    #[test]
    fn level_matches_floor_formula(xp in 0i64..10_000_000) {
        let p = LevelProgress::from_total_xp(xp);
        prop_assert_eq!(p.level, xp / XP_PER_LEVEL + 1);
    }

    #[test]
    fn exact_multiples_start_the_next_level(n in 0i64..10_000) {
        let p = LevelProgress::from_total_xp(n * XP_PER_LEVEL);
        prop_assert_eq!(p.level, n + 1);
        prop_assert_eq!(p.xp_in_current_level, 0);
    }

    #[test]
    fn progress_percentage_is_bounded(xp in any::<i64>()) {
        let p = LevelProgress::from_total_xp(xp);
        prop_assert!((0.0..=100.0).contains(&p.progress_percentage));
    }

    #[test]
    fn next_level_xp_is_always_ahead(xp in any::<i64>()) {
        let p = LevelProgress::from_total_xp(xp);
        prop_assert!(p.next_level_xp > p.total_xp - p.xp_in_current_level);
        prop_assert_eq!(p.next_level_xp, p.level.saturating_mul(XP_PER_LEVEL));
    }

    #[test]
    fn total_xp_never_negative(rewards in proptest::collection::vec(
        proptest::option::of(-500i64..500), 0..32
    )) {
        prop_assert!(total_xp(rewards) >= 0);
    }
}
