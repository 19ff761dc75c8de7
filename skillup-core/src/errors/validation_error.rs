//! Form validation errors. Surfaced inline before any store call is made.

use super::error_code::{self, SkillupErrorCode};

/// Errors from client-side validation of user input.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    MissingField { field: &'static str },

    #[error("Progress percent {value} out of range (0-100)")]
    PercentOutOfRange { value: i64 },

    #[error("Progress percent {value} is not a multiple of 5")]
    PercentNotStepAligned { value: i64 },

    #[error("Unknown course level: {0}")]
    UnknownLevel(String),
}

impl SkillupErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
