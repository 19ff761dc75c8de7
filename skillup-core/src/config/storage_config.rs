//! File storage (avatar bucket) configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the external file storage boundary.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Bucket avatars are uploaded to. Default: `avatars`.
    pub avatar_bucket: Option<String>,
}

impl StorageConfig {
    /// Returns the effective avatar bucket name.
    pub fn effective_avatar_bucket(&self) -> &str {
        self.avatar_bucket.as_deref().unwrap_or("avatars")
    }
}
