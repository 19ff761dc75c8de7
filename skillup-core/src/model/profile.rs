//! User profile record. `id` mirrors the auth identity and never changes.

use serde::{Deserialize, Serialize};

/// One row of the `profiles` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub role: String,
    pub sector_id: Option<i64>,
    /// Mirrored from the auth provider at registration; the provider stays
    /// the source of truth for sign-in.
    pub email: Option<String>,
}
