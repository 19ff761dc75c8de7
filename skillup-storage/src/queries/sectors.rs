//! Queries for the sectors table.

use rusqlite::{params, Connection};
use skillup_core::errors::StorageError;
use skillup_core::model::Sector;

use crate::map_sqlite;

/// Insert a sector by name. Returns the new row id.
/// A duplicate name surfaces as a constraint violation.
pub fn insert_sector(conn: &Connection, name: &str) -> Result<i64, StorageError> {
    conn.execute("INSERT INTO sectors (name) VALUES (?1)", params![name])
        .map_err(map_sqlite)?;
    Ok(conn.last_insert_rowid())
}

/// All sectors ordered by id ascending.
pub fn list_sectors(conn: &Connection) -> Result<Vec<Sector>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT id, name FROM sectors ORDER BY id ASC")
        .map_err(map_sqlite)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Sector {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .map_err(map_sqlite)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(map_sqlite)
}

/// Delete a sector. Fails with a constraint violation while any course or
/// profile still references it; the caller surfaces that to the user and
/// keeps the row in the displayed list.
pub fn delete_sector(conn: &Connection, id: i64) -> Result<(), StorageError> {
    let changed = conn
        .execute("DELETE FROM sectors WHERE id = ?1", params![id])
        .map_err(map_sqlite)?;
    if changed == 0 {
        return Err(StorageError::NotFound {
            entity: "sector",
            id: id.to_string(),
        });
    }
    Ok(())
}
