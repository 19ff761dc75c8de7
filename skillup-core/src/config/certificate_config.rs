//! Certificate configuration.

use serde::{Deserialize, Serialize};

/// Configuration for certificate rendering.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CertificateConfig {
    /// Email used to derive the participant name when the certificate's
    /// user exists but has no email on record.
    /// Default: `participante@skillup.com`.
    pub placeholder_email: Option<String>,
}

impl CertificateConfig {
    /// Returns the effective placeholder email.
    pub fn effective_placeholder_email(&self) -> &str {
        self.placeholder_email
            .as_deref()
            .unwrap_or("participante@skillup.com")
    }
}
