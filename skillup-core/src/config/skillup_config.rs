//! Top-level SkillUp configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CertificateConfig, DashboardConfig, DatabaseConfig, StorageConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SKILLUP_*`)
/// 2. Project config (`skillup.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SkillupConfig {
    pub database: DatabaseConfig,
    pub dashboard: DashboardConfig,
    pub certificate: CertificateConfig,
    pub storage: StorageConfig,
}

impl SkillupConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("skillup.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SkillupConfig) -> Result<(), ConfigError> {
        if let Some(hours) = config.dashboard.hours_per_course {
            if !(hours > 0.0 && hours.is_finite()) {
                return Err(ConfigError::ValidationFailed {
                    field: "dashboard.hours_per_course".to_string(),
                    message: "must be a positive number".to_string(),
                });
            }
        }
        if let Some(size) = config.database.read_pool_size {
            if size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "database.read_pool_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(ref email) = config.certificate.placeholder_email {
            if !email.contains('@') {
                return Err(ConfigError::ValidationFailed {
                    field: "certificate.placeholder_email".to_string(),
                    message: "must be an email address".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SkillupConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: SkillupConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut SkillupConfig, other: &SkillupConfig) {
        if other.database.path.is_some() {
            base.database.path = other.database.path.clone();
        }
        if other.database.read_pool_size.is_some() {
            base.database.read_pool_size = other.database.read_pool_size;
        }
        if other.dashboard.hours_per_course.is_some() {
            base.dashboard.hours_per_course = other.dashboard.hours_per_course;
        }
        if other.dashboard.recommendation_limit.is_some() {
            base.dashboard.recommendation_limit = other.dashboard.recommendation_limit;
        }
        if other.certificate.placeholder_email.is_some() {
            base.certificate.placeholder_email = other.certificate.placeholder_email.clone();
        }
        if other.storage.avatar_bucket.is_some() {
            base.storage.avatar_bucket = other.storage.avatar_bucket.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SKILLUP_DATABASE_PATH`, `SKILLUP_AVATAR_BUCKET`, etc.
    fn apply_env_overrides(config: &mut SkillupConfig) {
        if let Ok(val) = std::env::var("SKILLUP_DATABASE_PATH") {
            config.database.path = Some(val.into());
        }
        if let Ok(val) = std::env::var("SKILLUP_READ_POOL_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.database.read_pool_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SKILLUP_HOURS_PER_COURSE") {
            if let Ok(v) = val.parse::<f64>() {
                config.dashboard.hours_per_course = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SKILLUP_RECOMMENDATION_LIMIT") {
            if let Ok(v) = val.parse::<usize>() {
                config.dashboard.recommendation_limit = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SKILLUP_CERT_PLACEHOLDER_EMAIL") {
            config.certificate.placeholder_email = Some(val);
        }
        if let Ok(val) = std::env::var("SKILLUP_AVATAR_BUCKET") {
            config.storage.avatar_bucket = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
