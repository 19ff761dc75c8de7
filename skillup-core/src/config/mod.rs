//! Configuration system for SkillUp.
//! TOML-based, layered resolution: env > project file > defaults.

pub mod certificate_config;
pub mod dashboard_config;
pub mod database_config;
pub mod skillup_config;
pub mod storage_config;

pub use certificate_config::CertificateConfig;
pub use dashboard_config::DashboardConfig;
pub use database_config::DatabaseConfig;
pub use skillup_config::SkillupConfig;
pub use storage_config::StorageConfig;
