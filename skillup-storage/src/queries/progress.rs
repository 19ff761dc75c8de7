//! Queries for the user_progress table.
//! One record per (user, course); records are upserted, never deleted.

use std::collections::HashMap;

use rusqlite::{params, Connection, OptionalExtension};
use skillup_core::errors::StorageError;
use skillup_core::model::ProgressRecord;

use crate::map_sqlite;

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProgressRecord> {
    Ok(ProgressRecord {
        user_id: row.get(0)?,
        course_id: row.get(1)?,
        progress_percent: row.get(2)?,
        completed: row.get(3)?,
        completed_at: row.get(4)?,
        last_accessed_at: row.get(5)?,
    })
}

const RECORD_COLUMNS: &str =
    "user_id, course_id, progress_percent, completed, completed_at, last_accessed_at";

/// Idempotent auto-enrollment: insert a zero-progress record if none exists.
/// Returns true when a row was created. Concurrent duplicate calls for the
/// same pair neither error nor double-create.
pub fn enroll_if_absent(
    conn: &Connection,
    user_id: &str,
    course_id: i64,
) -> Result<bool, StorageError> {
    let inserted = conn
        .execute(
            "INSERT INTO user_progress (user_id, course_id, progress_percent, completed)
             VALUES (?1, ?2, 0, 0)
             ON CONFLICT (user_id, course_id) DO NOTHING",
            params![user_id, course_id],
        )
        .map_err(map_sqlite)?;
    Ok(inserted > 0)
}

/// Fetch the progress record for one (user, course) pair.
pub fn get_progress(
    conn: &Connection,
    user_id: &str,
    course_id: i64,
) -> Result<Option<ProgressRecord>, StorageError> {
    conn.prepare_cached(&format!(
        "SELECT {RECORD_COLUMNS} FROM user_progress WHERE user_id = ?1 AND course_id = ?2"
    ))
    .map_err(map_sqlite)?
    .query_row(params![user_id, course_id], row_to_record)
    .optional()
    .map_err(map_sqlite)
}

/// Write a save-progress result. `completed_at` is only ever set, never
/// cleared: completion does not revert.
pub fn save_progress(
    conn: &Connection,
    user_id: &str,
    course_id: i64,
    progress_percent: i64,
    completed: bool,
    completed_at: Option<i64>,
    last_accessed_at: i64,
) -> Result<(), StorageError> {
    let changed = conn
        .execute(
            "UPDATE user_progress SET
                progress_percent = ?1,
                completed = ?2,
                completed_at = COALESCE(?3, completed_at),
                last_accessed_at = ?4
             WHERE user_id = ?5 AND course_id = ?6",
            params![
                progress_percent,
                completed,
                completed_at,
                last_accessed_at,
                user_id,
                course_id
            ],
        )
        .map_err(map_sqlite)?;
    if changed == 0 {
        return Err(StorageError::NotFound {
            entity: "progress record",
            id: format!("{user_id}/{course_id}"),
        });
    }
    Ok(())
}

/// Map of course id to watch percent for one user (catalog merge).
pub fn progress_map(conn: &Connection, user_id: &str) -> Result<HashMap<i64, i64>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT course_id, progress_percent, completed
             FROM user_progress WHERE user_id = ?1",
        )
        .map_err(map_sqlite)?;

    let rows = stmt
        .query_map(params![user_id], |row| {
            let course_id: i64 = row.get(0)?;
            let percent: i64 = row.get(1)?;
            let completed: bool = row.get(2)?;
            Ok((course_id, if completed { 100 } else { percent }))
        })
        .map_err(map_sqlite)?;

    rows.collect::<Result<HashMap<_, _>, _>>().map_err(map_sqlite)
}

/// Completed-course count for one user.
pub fn completed_count(conn: &Connection, user_id: &str) -> Result<i64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM user_progress WHERE user_id = ?1 AND completed = 1",
        params![user_id],
        |row| row.get(0),
    )
    .map_err(map_sqlite)
}
