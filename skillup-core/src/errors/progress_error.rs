//! Progress tracking errors.
//! Aggregates validation and storage failures via `From` conversions.

use super::error_code::{self, SkillupErrorCode};
use super::{StorageError, ValidationError};

/// Errors that can occur while tracking course progress.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("Course not found: {course_id}")]
    CourseNotFound { course_id: i64 },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl SkillupErrorCode for ProgressError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::CourseNotFound { .. } => error_code::PROGRESS_ERROR,
        }
    }
}
