//! Dashboard aggregation: completion count, XP and level, estimated study
//! hours, and course recommendations.

use skillup_core::config::DashboardConfig;
use skillup_core::errors::StorageError;
use skillup_core::leveling::LevelProgress;
use skillup_core::model::CourseWithSector;
use skillup_storage::queries::{courses, progress};
use skillup_storage::views::user_stats;
use skillup_storage::DatabaseManager;

use crate::identity::CurrentUser;

/// Everything the dashboard page renders for one user.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub completed_courses: i64,
    pub total_xp: i64,
    pub level: LevelProgress,
    /// Completed count times the configured hours-per-course estimate.
    pub study_hours: f64,
    /// Up to the configured limit of unfinished courses, the caller's
    /// sector first when set, newest first.
    pub recommendations: Vec<CourseWithSector>,
}

/// Aggregate the dashboard for the given user.
pub fn load_dashboard(
    db: &DatabaseManager,
    config: &DashboardConfig,
    user: &CurrentUser,
) -> Result<DashboardStats, StorageError> {
    let completed = db.with_reader(|conn| progress::completed_count(conn, &user.id))?;
    let total_xp = db.with_reader(|conn| user_stats::total_xp_for(conn, &user.id))?;

    let recommendations = db.with_reader(|conn| {
        courses::list_unfinished_in_sector(
            conn,
            user.sector_id,
            &user.id,
            config.effective_recommendation_limit(),
        )
    })?;

    Ok(DashboardStats {
        completed_courses: completed,
        total_xp,
        level: LevelProgress::from_total_xp(total_xp),
        study_hours: completed as f64 * config.effective_hours_per_course(),
        recommendations,
    })
}
