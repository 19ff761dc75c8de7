//! Leaderboard entry as produced by `view_ranking_global`.

use serde::{Deserialize, Serialize};

/// One row of the ranking view. Read-only, recomputed by the store;
/// never cached by the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingEntry {
    pub user_id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub sector_name: Option<String>,
    pub total_xp: i64,
    pub modules_completed: i64,
}
