//! Versioned schema migrations, tracked via `PRAGMA user_version`.

pub mod v001_initial;
pub mod v002_views;

use rusqlite::Connection;
use skillup_core::errors::StorageError;
use tracing::info;

use crate::map_sqlite;

const MIGRATIONS: &[(i32, &str)] = &[
    (1, v001_initial::MIGRATION_SQL),
    (2, v002_views::MIGRATION_SQL),
];

/// Latest schema version.
pub fn latest_version() -> i32 {
    MIGRATIONS.last().map(|(v, _)| *v).unwrap_or(0)
}

/// Current schema version of the given connection.
pub fn current_version(conn: &Connection) -> Result<i32, StorageError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(map_sqlite)
}

/// Run all pending migrations, in order, inside one transaction each.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current = current_version(conn)?;

    for &(version, sql) in MIGRATIONS {
        if version <= current {
            continue;
        }
        conn.execute_batch(sql)
            .map_err(|e| StorageError::MigrationFailed {
                version,
                message: e.to_string(),
            })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| StorageError::MigrationFailed {
                version,
                message: e.to_string(),
            })?;
        info!(version, "applied migration");
    }

    Ok(())
}
