//! Session/auth provider boundary errors.

use super::error_code::{self, SkillupErrorCode};

/// Errors reported by the external session provider.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Sign-up rejected: {message}")]
    SignUpFailed { message: String },

    #[error("Code exchange failed: {message}")]
    CodeExchangeFailed { message: String },

    #[error("User update failed: {message}")]
    UpdateFailed { message: String },

    #[error("Provider unavailable: {message}")]
    ProviderUnavailable { message: String },
}

impl SkillupErrorCode for AuthError {
    fn error_code(&self) -> &'static str {
        error_code::AUTH_ERROR
    }
}
