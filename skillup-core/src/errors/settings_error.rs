//! Profile settings errors (name/sector update, avatar upload).
//! Email changes fail independently; their `AuthError` travels in the
//! settings outcome instead of here.

use super::error_code::SkillupErrorCode;
use super::{FileStoreError, StorageError, ValidationError};

/// Errors from the profile settings surface.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("File store error: {0}")]
    FileStore(#[from] FileStoreError),
}

impl SkillupErrorCode for SettingsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::FileStore(e) => e.error_code(),
        }
    }
}
