//! Connection pragmas. Foreign keys are mandatory: sector deletes must be
//! rejected while courses or profiles still reference the sector.

use rusqlite::Connection;
use skillup_core::errors::StorageError;

use crate::map_sqlite;

/// Pragmas for the write connection.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = 5000;",
    )
    .map_err(map_sqlite)
}

/// Pragmas for read-only connections.
pub fn apply_read_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = 5000;",
    )
    .map_err(map_sqlite)
}
