//! Ranking aggregation: podium/rest partition over a pre-sorted leaderboard.
//!
//! The view delivers entries already ordered by `total_xp` descending; this
//! module never re-sorts. Ties keep whatever stable order the view produced.

use crate::model::RankingEntry;

/// A ranking entry annotated with its display position (1-based).
#[derive(Debug, Clone)]
pub struct RankedEntry {
    pub position: usize,
    pub entry: RankingEntry,
}

/// The leaderboard split into podium (positions 1-3) and the rest
/// (positions 4+).
#[derive(Debug, Clone, Default)]
pub struct RankingBoard {
    pub podium: Vec<RankedEntry>,
    pub rest: Vec<RankedEntry>,
}

impl RankingBoard {
    pub fn is_empty(&self) -> bool {
        self.podium.is_empty() && self.rest.is_empty()
    }
}

/// Partition a pre-sorted leaderboard, optionally filtered to one sector.
/// The sector filter is a pure predicate over the already-fetched set.
pub fn partition(entries: Vec<RankingEntry>, sector: Option<&str>) -> RankingBoard {
    let filtered: Vec<RankingEntry> = match sector {
        Some(name) => entries
            .into_iter()
            .filter(|e| e.sector_name.as_deref() == Some(name))
            .collect(),
        None => entries,
    };

    let mut board = RankingBoard::default();
    for (index, entry) in filtered.into_iter().enumerate() {
        let ranked = RankedEntry {
            position: index + 1,
            entry,
        };
        if index < 3 {
            board.podium.push(ranked);
        } else {
            board.rest.push(ranked);
        }
    }
    board
}

/// Distinct sector names present in the leaderboard, in first-seen order.
/// Feeds the filter control; entries without a sector are skipped.
pub fn sector_names(entries: &[RankingEntry]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        if let Some(name) = entry.sector_name.as_deref() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}
