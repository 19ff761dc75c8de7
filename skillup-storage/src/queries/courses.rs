//! Queries for the courses table.

use rusqlite::{params, Connection, OptionalExtension};
use skillup_core::errors::StorageError;
use skillup_core::model::{Course, CourseLevel, CourseWithSector};

use crate::map_sqlite;

/// Fields for a new course. `xp_reward` is derived from the level by the
/// admin service before this is written; it never arrives from a form.
#[derive(Debug, Clone)]
pub struct NewCourseRow {
    pub title: String,
    pub level: CourseLevel,
    pub sector_id: i64,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_hours: i64,
    pub xp_reward: i64,
    pub created_at: i64,
}

fn row_to_course(row: &rusqlite::Row<'_>) -> rusqlite::Result<Course> {
    let level_text: String = row.get(2)?;
    let level = level_text.parse::<CourseLevel>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            format!("unknown course level: {level_text}").into(),
        )
    })?;
    Ok(Course {
        id: row.get(0)?,
        title: row.get(1)?,
        level,
        sector_id: row.get(3)?,
        video_url: row.get(4)?,
        thumbnail_url: row.get(5)?,
        duration_hours: row.get(6)?,
        xp_reward: row.get(7)?,
        created_at: row.get(8)?,
    })
}

const COURSE_COLUMNS: &str =
    "id, title, level, sector_id, video_url, thumbnail_url, duration_hours, xp_reward, created_at";

/// Insert a new course. Returns the new row id.
pub fn insert_course(conn: &Connection, course: &NewCourseRow) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO courses
            (title, level, sector_id, video_url, thumbnail_url, duration_hours, xp_reward, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            course.title,
            course.level.as_str(),
            course.sector_id,
            course.video_url,
            course.thumbnail_url,
            course.duration_hours,
            course.xp_reward,
            course.created_at
        ],
    )
    .map_err(map_sqlite)?;
    Ok(conn.last_insert_rowid())
}

/// Fetch a course by id.
pub fn get_course(conn: &Connection, id: i64) -> Result<Option<Course>, StorageError> {
    conn.prepare_cached(&format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?1"))
        .map_err(map_sqlite)?
        .query_row(params![id], row_to_course)
        .optional()
        .map_err(map_sqlite)
}

/// All courses joined with their sector name, newest first.
pub fn list_courses_with_sector(conn: &Connection) -> Result<Vec<CourseWithSector>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT c.id, c.title, c.level, c.sector_id, c.video_url, c.thumbnail_url,
                    c.duration_hours, c.xp_reward, c.created_at, s.name
             FROM courses c
             LEFT JOIN sectors s ON s.id = c.sector_id
             ORDER BY c.id DESC",
        )
        .map_err(map_sqlite)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(CourseWithSector {
                course: row_to_course(row)?,
                sector_name: row.get(9)?,
            })
        })
        .map_err(map_sqlite)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(map_sqlite)
}

/// Courses in a sector that the user has not completed, newest first.
/// Feeds the dashboard recommendations.
pub fn list_unfinished_in_sector(
    conn: &Connection,
    sector_id: Option<i64>,
    user_id: &str,
    limit: usize,
) -> Result<Vec<CourseWithSector>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT c.id, c.title, c.level, c.sector_id, c.video_url, c.thumbnail_url,
                    c.duration_hours, c.xp_reward, c.created_at, s.name
             FROM courses c
             LEFT JOIN sectors s ON s.id = c.sector_id
             WHERE (?1 IS NULL OR c.sector_id = ?1)
               AND c.id NOT IN (
                   SELECT course_id FROM user_progress
                   WHERE user_id = ?2 AND completed = 1
               )
             ORDER BY c.id DESC
             LIMIT ?3",
        )
        .map_err(map_sqlite)?;

    let rows = stmt
        .query_map(params![sector_id, user_id, limit as i64], |row| {
            Ok(CourseWithSector {
                course: row_to_course(row)?,
                sector_name: row.get(9)?,
            })
        })
        .map_err(map_sqlite)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(map_sqlite)
}

/// Delete a course. Fails with a constraint violation while progress or
/// certificate rows still reference it.
pub fn delete_course(conn: &Connection, id: i64) -> Result<(), StorageError> {
    let changed = conn
        .execute("DELETE FROM courses WHERE id = ?1", params![id])
        .map_err(map_sqlite)?;
    if changed == 0 {
        return Err(StorageError::NotFound {
            entity: "course",
            id: id.to_string(),
        });
    }
    Ok(())
}
