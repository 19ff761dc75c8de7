//! Course viewing and progress saves.
//!
//! Viewing a course auto-enrolls the user; saving moves the watch percent
//! in 5% steps and flips completion exactly at 100. Completion never
//! reverts: a later, lower save only touches `last_accessed_at`.

use chrono::Utc;
use skillup_core::errors::{ProgressError, ValidationError};
use skillup_core::model::{Course, ProgressRecord, ProgressState};
use skillup_storage::queries::{courses, progress};
use skillup_storage::DatabaseManager;
use tracing::warn;

/// What the course page renders: the course plus the caller's record.
#[derive(Debug, Clone)]
pub struct CourseView {
    pub course: Course,
    pub record: ProgressRecord,
}

impl CourseView {
    pub fn state(&self) -> ProgressState {
        self.record.state()
    }
}

/// Result of one save, as the UI reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Effective percent after the save (100 once completed).
    pub percent: i64,
    pub completed: bool,
    /// True only on the save that flipped completion.
    pub newly_completed: bool,
}

/// Load a course for viewing, enrolling the user if needed.
///
/// Enrollment failure is logged and non-blocking: the page still renders
/// with a zero-progress record, and the next save retries the write path.
pub fn view_course(
    db: &DatabaseManager,
    user_id: &str,
    course_id: i64,
) -> Result<CourseView, ProgressError> {
    let course = db
        .with_reader(|conn| courses::get_course(conn, course_id))?
        .ok_or(ProgressError::CourseNotFound { course_id })?;

    if let Err(e) = db.with_writer(|conn| progress::enroll_if_absent(conn, user_id, course_id)) {
        warn!(user_id, course_id, error = %e, "auto-enrollment failed");
    }

    let record = db
        .with_reader(|conn| progress::get_progress(conn, user_id, course_id))?
        .unwrap_or(ProgressRecord {
            user_id: user_id.to_string(),
            course_id,
            progress_percent: 0,
            completed: false,
            completed_at: None,
            last_accessed_at: None,
        });

    Ok(CourseView { course, record })
}

/// Save a watch-progress update for the current time.
pub fn save_progress(
    db: &DatabaseManager,
    user_id: &str,
    course_id: i64,
    percent: i64,
) -> Result<SaveOutcome, ProgressError> {
    save_progress_at(db, user_id, course_id, percent, Utc::now().timestamp())
}

/// Save a watch-progress update at an explicit timestamp.
pub fn save_progress_at(
    db: &DatabaseManager,
    user_id: &str,
    course_id: i64,
    percent: i64,
    now: i64,
) -> Result<SaveOutcome, ProgressError> {
    validate_percent(percent)?;

    db.with_reader(|conn| courses::get_course(conn, course_id))?
        .ok_or(ProgressError::CourseNotFound { course_id })?;

    let outcome = db.with_writer(|conn| {
        // The record normally exists from viewing; create it here so a
        // save after a failed auto-enroll still lands.
        progress::enroll_if_absent(conn, user_id, course_id)?;
        let current = progress::get_progress(conn, user_id, course_id)?;
        let already_completed = current.map(|r| r.completed).unwrap_or(false);

        let (stored_percent, completed, completed_at, newly_completed) = if already_completed {
            (100, true, None, false)
        } else if percent == 100 {
            (100, true, Some(now), true)
        } else {
            (percent, false, None, false)
        };

        progress::save_progress(
            conn,
            user_id,
            course_id,
            stored_percent,
            completed,
            completed_at,
            now,
        )?;

        Ok(SaveOutcome {
            percent: stored_percent,
            completed,
            newly_completed,
        })
    })?;

    Ok(outcome)
}

fn validate_percent(percent: i64) -> Result<(), ValidationError> {
    if !(0..=100).contains(&percent) {
        return Err(ValidationError::PercentOutOfRange { value: percent });
    }
    if percent % 5 != 0 {
        return Err(ValidationError::PercentNotStepAligned { value: percent });
    }
    Ok(())
}
