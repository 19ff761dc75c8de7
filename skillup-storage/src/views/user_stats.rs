//! view_user_stats reader — per-user XP totals.

use rusqlite::{params, Connection, OptionalExtension};
use skillup_core::errors::StorageError;

use crate::map_sqlite;

/// Total XP for one user. Users without a profile row read as 0, matching
/// the "no completed courses" default.
pub fn total_xp_for(conn: &Connection, user_id: &str) -> Result<i64, StorageError> {
    conn.prepare_cached("SELECT total_xp FROM view_user_stats WHERE user_id = ?1")
        .map_err(map_sqlite)?
        .query_row(params![user_id], |row| row.get(0))
        .optional()
        .map_err(map_sqlite)
        .map(|xp| xp.unwrap_or(0))
}
