//! Admin CRUD errors.

use super::error_code::SkillupErrorCode;
use super::{StorageError, ValidationError};

/// Errors from the admin course/sector management surface.
/// Both variants wrap a subsystem error and report that subsystem's code;
/// there is no admin-owned code.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AdminError {
    /// True when a delete was rejected because the row is still referenced.
    pub fn is_in_use(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_constraint_violation())
    }
}

impl SkillupErrorCode for AdminError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
        }
    }
}
