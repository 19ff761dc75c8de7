//! Admin CRUD for courses and sectors.
//!
//! The XP reward is derived from the level here and never accepted from
//! the form. Deletes pass the store's constraint rejections through as
//! user-visible failures.

use chrono::Utc;
use skillup_core::errors::{AdminError, ValidationError};
use skillup_core::model::{Course, CourseLevel, Sector};
use skillup_core::video;
use skillup_storage::queries::courses::{self, NewCourseRow};
use skillup_storage::queries::sectors;
use skillup_storage::DatabaseManager;
use tracing::info;

/// Form input for a new course. `thumbnail_url` is optional; when absent
/// the thumbnail is derived from the video, then from the title.
#[derive(Debug, Clone)]
pub struct NewCourseInput {
    pub title: String,
    pub level: CourseLevel,
    pub sector_id: Option<i64>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_hours: i64,
}

/// Resolve the thumbnail chain: explicit URL, else the YouTube
/// `maxresdefault` frame, else a generated placeholder.
fn resolve_thumbnail(input: &NewCourseInput) -> String {
    if let Some(url) = input.thumbnail_url.as_deref() {
        if !url.trim().is_empty() {
            return url.trim().to_string();
        }
    }
    video::thumbnail_url(&input.video_url)
        .unwrap_or_else(|| video::placeholder_thumbnail(&input.title))
}

/// Validate and create a course. Returns the stored row.
pub fn create_course(db: &DatabaseManager, input: &NewCourseInput) -> Result<Course, AdminError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(ValidationError::MissingField { field: "title" }.into());
    }
    if input.video_url.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "video_url" }.into());
    }
    let sector_id = input
        .sector_id
        .ok_or(ValidationError::MissingField { field: "sector" })?;

    let row = NewCourseRow {
        title: title.to_string(),
        level: input.level,
        sector_id,
        video_url: input.video_url.trim().to_string(),
        thumbnail_url: resolve_thumbnail(input),
        duration_hours: input.duration_hours,
        xp_reward: input.level.xp_reward(),
        created_at: Utc::now().timestamp(),
    };

    let id = db.with_writer(|conn| courses::insert_course(conn, &row))?;
    info!(course_id = id, title = %row.title, "created course");

    Ok(Course {
        id,
        title: row.title,
        level: row.level,
        sector_id: row.sector_id,
        video_url: row.video_url,
        thumbnail_url: row.thumbnail_url,
        duration_hours: row.duration_hours,
        xp_reward: row.xp_reward,
        created_at: row.created_at,
    })
}

/// Delete a course. Fails while progress or certificates reference it.
pub fn delete_course(db: &DatabaseManager, id: i64) -> Result<(), AdminError> {
    db.with_writer(|conn| courses::delete_course(conn, id))?;
    info!(course_id = id, "deleted course");
    Ok(())
}

/// Validate and create a sector. Name uniqueness is enforced by the store
/// and surfaces as a constraint violation.
pub fn create_sector(db: &DatabaseManager, name: &str) -> Result<Sector, AdminError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField { field: "name" }.into());
    }

    let id = db.with_writer(|conn| sectors::insert_sector(conn, name))?;
    info!(sector_id = id, name, "created sector");

    Ok(Sector {
        id,
        name: name.to_string(),
    })
}

/// Delete a sector. Fails while courses or profiles reference it; the
/// caller surfaces [`AdminError::is_in_use`] as the "in use" notice.
pub fn delete_sector(db: &DatabaseManager, id: i64) -> Result<(), AdminError> {
    db.with_writer(|conn| sectors::delete_sector(conn, id))?;
    info!(sector_id = id, "deleted sector");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, video: &str, thumb: Option<&str>) -> NewCourseInput {
        NewCourseInput {
            title: title.to_string(),
            level: CourseLevel::Iniciante,
            sector_id: Some(1),
            video_url: video.to_string(),
            thumbnail_url: thumb.map(str::to_string),
            duration_hours: 2,
        }
    }

    #[test]
    fn explicit_thumbnail_wins() {
        let i = input(
            "Curso",
            "https://youtu.be/dQw4w9WgXcQ",
            Some("https://cdn.example.com/c.png"),
        );
        assert_eq!(resolve_thumbnail(&i), "https://cdn.example.com/c.png");
    }

    #[test]
    fn youtube_video_derives_maxresdefault() {
        let i = input("Curso", "https://youtu.be/dQw4w9WgXcQ", None);
        assert_eq!(
            resolve_thumbnail(&i),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
    }

    #[test]
    fn unrecognized_video_falls_back_to_placeholder() {
        let i = input("Curso de Rust", "https://vimeo.com/12345", None);
        assert!(resolve_thumbnail(&i).starts_with("https://placehold.co/"));
    }
}
