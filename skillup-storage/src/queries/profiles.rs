//! Queries for the profiles table.

use rusqlite::{params, Connection, OptionalExtension};
use skillup_core::model::Profile;
use skillup_core::errors::StorageError;

use crate::map_sqlite;

fn row_to_profile(row: &rusqlite::Row<'_>) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get(0)?,
        name: row.get(1)?,
        avatar_url: row.get(2)?,
        role: row.get(3)?,
        sector_id: row.get(4)?,
        email: row.get(5)?,
    })
}

/// Insert a profile row. Normally done by the registration trigger on the
/// provider side; the app itself only ever updates.
pub fn insert_profile(conn: &Connection, profile: &Profile) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO profiles (id, name, avatar_url, role, sector_id, email)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            profile.id,
            profile.name,
            profile.avatar_url,
            profile.role,
            profile.sector_id,
            profile.email
        ],
    )
    .map_err(map_sqlite)?;
    Ok(())
}

/// Fetch a profile by id.
pub fn get_profile(conn: &Connection, id: &str) -> Result<Option<Profile>, StorageError> {
    conn.prepare_cached(
        "SELECT id, name, avatar_url, role, sector_id, email FROM profiles WHERE id = ?1",
    )
    .map_err(map_sqlite)?
    .query_row(params![id], row_to_profile)
    .optional()
    .map_err(map_sqlite)
}

/// Fetch a profile together with its sector's name.
pub fn get_profile_with_sector(
    conn: &Connection,
    id: &str,
) -> Result<Option<(Profile, Option<String>)>, StorageError> {
    conn.prepare_cached(
        "SELECT p.id, p.name, p.avatar_url, p.role, p.sector_id, p.email, s.name
         FROM profiles p
         LEFT JOIN sectors s ON s.id = p.sector_id
         WHERE p.id = ?1",
    )
    .map_err(map_sqlite)?
    .query_row(params![id], |row| {
        Ok((row_to_profile(row)?, row.get::<_, Option<String>>(6)?))
    })
    .optional()
    .map_err(map_sqlite)
}

/// Update the owner-mutable fields (name, sector).
pub fn update_profile(
    conn: &Connection,
    id: &str,
    name: &str,
    sector_id: Option<i64>,
) -> Result<(), StorageError> {
    let changed = conn
        .execute(
            "UPDATE profiles SET name = ?1, sector_id = ?2 WHERE id = ?3",
            params![name, sector_id, id],
        )
        .map_err(map_sqlite)?;
    if changed == 0 {
        return Err(StorageError::NotFound {
            entity: "profile",
            id: id.to_string(),
        });
    }
    Ok(())
}

/// Refresh the mirrored email after a provider-side change.
pub fn update_email(conn: &Connection, id: &str, email: &str) -> Result<(), StorageError> {
    let changed = conn
        .execute(
            "UPDATE profiles SET email = ?1 WHERE id = ?2",
            params![email, id],
        )
        .map_err(map_sqlite)?;
    if changed == 0 {
        return Err(StorageError::NotFound {
            entity: "profile",
            id: id.to_string(),
        });
    }
    Ok(())
}

/// Persist a freshly uploaded avatar URL.
pub fn update_avatar(conn: &Connection, id: &str, avatar_url: &str) -> Result<(), StorageError> {
    conn.execute(
        "UPDATE profiles SET avatar_url = ?1 WHERE id = ?2",
        params![avatar_url, id],
    )
    .map_err(map_sqlite)?;
    Ok(())
}
