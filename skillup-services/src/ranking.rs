//! Ranking page operation: fetch the pre-sorted leaderboard and split it
//! into podium and table.

use skillup_core::errors::StorageError;
use skillup_core::ranking::{partition, sector_names, RankingBoard};
use skillup_storage::views::ranking as ranking_view;
use skillup_storage::DatabaseManager;

/// The ranking page data: the partitioned board plus the sector names
/// available for filtering (taken from the unfiltered leaderboard).
#[derive(Debug, Clone)]
pub struct RankingPage {
    pub board: RankingBoard,
    pub sectors: Vec<String>,
}

/// Load the leaderboard, optionally filtered to one sector by name.
pub fn load_ranking(
    db: &DatabaseManager,
    sector: Option<&str>,
) -> Result<RankingPage, StorageError> {
    let entries = db.with_reader(|conn| ranking_view::query_ranking(conn))?;
    let sectors = sector_names(&entries);
    Ok(RankingPage {
        board: partition(entries, sector),
        sectors,
    })
}
