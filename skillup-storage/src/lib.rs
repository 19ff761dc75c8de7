//! SQLite persistence for SkillUp.
//!
//! Write access is serialized through a single connection; reads go through
//! a small round-robin pool. The schema carries the uniqueness and
//! referential-integrity rules the aggregation layer relies on, plus the
//! two precomputed views (`view_ranking_global`, `view_user_stats`).

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod views;

pub use connection::DatabaseManager;

use skillup_core::errors::StorageError;

/// Map a rusqlite error to the storage error taxonomy.
/// Uniqueness and foreign-key failures become `ConstraintViolation` so
/// callers can surface them as user-visible, non-fatal outcomes.
pub(crate) fn map_sqlite(e: rusqlite::Error) -> StorageError {
    match e.sqlite_error_code() {
        Some(rusqlite::ErrorCode::ConstraintViolation) => StorageError::ConstraintViolation {
            message: e.to_string(),
        },
        _ => StorageError::Sqlite {
            message: e.to_string(),
        },
    }
}
