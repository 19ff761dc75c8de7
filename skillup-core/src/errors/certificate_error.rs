//! Certificate resolution errors.

use super::error_code::{self, SkillupErrorCode};
use super::StorageError;

/// Errors that can occur while resolving a certificate for display.
/// Missing certificate, course, or user all surface as a not-found
/// navigational outcome.
#[derive(Debug, thiserror::Error)]
pub enum CertificateError {
    #[error("Certificate not found: {id}")]
    NotFound { id: String },

    #[error("Course missing for certificate {certificate_id}")]
    CourseMissing { certificate_id: String },

    #[error("User missing for certificate {certificate_id}")]
    UserMissing { certificate_id: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CertificateError {
    /// True for the outcomes the UI renders as a "not found" page.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::CourseMissing { .. } | Self::UserMissing { .. }
        )
    }
}

impl SkillupErrorCode for CertificateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            _ => error_code::CERTIFICATE_ERROR,
        }
    }
}
