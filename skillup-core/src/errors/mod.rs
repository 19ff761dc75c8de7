//! Error handling for SkillUp.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod admin_error;
pub mod auth_error;
pub mod certificate_error;
pub mod config_error;
pub mod error_code;
pub mod file_store_error;
pub mod identity_error;
pub mod progress_error;
pub mod settings_error;
pub mod storage_error;
pub mod validation_error;

pub use admin_error::AdminError;
pub use auth_error::AuthError;
pub use certificate_error::CertificateError;
pub use config_error::ConfigError;
pub use error_code::SkillupErrorCode;
pub use file_store_error::FileStoreError;
pub use identity_error::IdentityError;
pub use progress_error::ProgressError;
pub use settings_error::SettingsError;
pub use storage_error::StorageError;
pub use validation_error::ValidationError;
