//! Queries for the certificates table. The app only reads; issuance
//! happens externally on course completion.

use rusqlite::{params, Connection, OptionalExtension};
use skillup_core::errors::StorageError;
use skillup_core::model::Certificate;

use crate::map_sqlite;

/// Insert a certificate row. Exists for the external issuance path and for
/// test setup; nothing in the app's user surface calls this.
pub fn insert_certificate(conn: &Connection, cert: &Certificate) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO certificates (id, user_id, course_id, issued_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![cert.id, cert.user_id, cert.course_id, cert.issued_at],
    )
    .map_err(map_sqlite)?;
    Ok(())
}

/// Fetch a certificate by its verification token.
pub fn get_certificate(conn: &Connection, id: &str) -> Result<Option<Certificate>, StorageError> {
    conn.prepare_cached(
        "SELECT id, user_id, course_id, issued_at FROM certificates WHERE id = ?1",
    )
    .map_err(map_sqlite)?
    .query_row(params![id], |row| {
        Ok(Certificate {
            id: row.get(0)?,
            user_id: row.get(1)?,
            course_id: row.get(2)?,
            issued_at: row.get(3)?,
        })
    })
    .optional()
    .map_err(map_sqlite)
}
