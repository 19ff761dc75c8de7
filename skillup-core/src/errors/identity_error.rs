//! Identity resolution and registration errors.

use super::error_code::{self, SkillupErrorCode};
use super::{AuthError, StorageError, ValidationError};

/// Errors from session resolution and sign-up.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("No profile for authenticated user {user_id}")]
    ProfileMissing { user_id: String },

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl SkillupErrorCode for IdentityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Auth(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::ProfileMissing { .. } => error_code::IDENTITY_ERROR,
        }
    }
}
