//! view_ranking_global reader — the global leaderboard.

use rusqlite::Connection;
use skillup_core::errors::StorageError;
use skillup_core::model::RankingEntry;

use crate::map_sqlite;

/// Fetch the leaderboard in the view's order (total_xp descending).
/// No re-sorting happens here or downstream; ties keep the view's stable
/// order.
pub fn query_ranking(conn: &Connection) -> Result<Vec<RankingEntry>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT user_id, name, avatar_url, sector_name, total_xp, modules_completed
             FROM view_ranking_global",
        )
        .map_err(map_sqlite)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(RankingEntry {
                user_id: row.get(0)?,
                name: row.get(1)?,
                avatar_url: row.get(2)?,
                sector_name: row.get(3)?,
                total_xp: row.get(4)?,
                modules_completed: row.get(5)?,
            })
        })
        .map_err(map_sqlite)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(map_sqlite)
}
