//! Stable error codes for every subsystem error.
//! Codes are part of the external contract: log sinks and UI notifications
//! key off them, so they never change once shipped.

/// Maps an error to its stable string code.
pub trait SkillupErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const STORAGE_ERROR: &str = "SKILLUP_STORAGE";
pub const CONFIG_ERROR: &str = "SKILLUP_CONFIG";
pub const VALIDATION_ERROR: &str = "SKILLUP_VALIDATION";
pub const CERTIFICATE_ERROR: &str = "SKILLUP_CERTIFICATE";
pub const AUTH_ERROR: &str = "SKILLUP_AUTH";
pub const PROGRESS_ERROR: &str = "SKILLUP_PROGRESS";
pub const FILE_STORE_ERROR: &str = "SKILLUP_FILE_STORE";
pub const IDENTITY_ERROR: &str = "SKILLUP_IDENTITY";
