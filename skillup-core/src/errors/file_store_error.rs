//! File storage boundary errors.

use super::error_code::{self, SkillupErrorCode};

/// Errors reported by the external file storage (avatar bucket).
#[derive(Debug, Clone, thiserror::Error)]
pub enum FileStoreError {
    #[error("Upload to bucket {bucket} failed: {message}")]
    UploadFailed { bucket: String, message: String },

    #[error("Bucket not found: {bucket}")]
    BucketNotFound { bucket: String },
}

impl SkillupErrorCode for FileStoreError {
    fn error_code(&self) -> &'static str {
        error_code::FILE_STORE_ERROR
    }
}
