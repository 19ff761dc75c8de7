//! Storage errors.

use super::error_code::{self, SkillupErrorCode};

/// Errors surfaced by the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Constraint violated: {message}")]
    ConstraintViolation { message: String },

    #[error("Migration failed at version {version}: {message}")]
    MigrationFailed { version: i32, message: String },
}

impl StorageError {
    /// True when the error came from a uniqueness or foreign-key constraint.
    /// Callers surface these as user-visible, non-fatal failures.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

impl SkillupErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}
