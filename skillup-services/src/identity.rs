//! Session-to-user resolution and account registration.
//!
//! The resolved [`CurrentUser`] is owned by the caller and passed
//! explicitly to the other services; nothing here installs a global.

use skillup_core::errors::{IdentityError, ValidationError};
use skillup_core::model::Profile;
use skillup_storage::queries::profiles;
use skillup_storage::DatabaseManager;
use tracing::info;

use crate::providers::{AuthUser, SessionProvider, SignUpMetadata};
use crate::urlenc::percent_encode;

/// The signed-in user with their profile merged in. One of these is
/// resolved per session and handed to every page-level operation.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub email: Option<String>,
    pub name: String,
    pub avatar_url: Option<String>,
    pub role: String,
    pub sector_id: Option<i64>,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Resolve the current session into a [`CurrentUser`], or `None` when
/// signed out. An authenticated user without a profile row is an
/// inconsistency the caller cannot repair, surfaced as `ProfileMissing`.
pub fn resolve_current_user(
    provider: &dyn SessionProvider,
    db: &DatabaseManager,
) -> Result<Option<CurrentUser>, IdentityError> {
    let Some(auth) = provider.current_user()? else {
        return Ok(None);
    };

    let profile = db
        .with_reader(|conn| profiles::get_profile(conn, &auth.id))?
        .ok_or(IdentityError::ProfileMissing {
            user_id: auth.id.clone(),
        })?;

    Ok(Some(merge(auth, profile)))
}

fn merge(auth: AuthUser, profile: Profile) -> CurrentUser {
    CurrentUser {
        id: profile.id,
        // The provider is the source of truth for email; the mirrored
        // column is only a fallback for display.
        email: auth.email.or(profile.email),
        name: profile.name,
        avatar_url: profile.avatar_url,
        role: profile.role,
        sector_id: profile.sector_id,
    }
}

/// Initials avatar generated at registration, keyed on the full name.
pub fn initials_avatar_url(name: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/initials/svg?seed={}",
        percent_encode(name)
    )
}

/// Register a new account: sign up with the provider, then mirror the
/// profile row. Sector choice is required.
pub fn register(
    provider: &dyn SessionProvider,
    db: &DatabaseManager,
    name: &str,
    email: &str,
    password: &str,
    sector_id: Option<i64>,
) -> Result<CurrentUser, IdentityError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField { field: "name" }.into());
    }
    if email.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "email" }.into());
    }
    let sector_id = sector_id.ok_or(ValidationError::MissingField { field: "sector" })?;

    let metadata = SignUpMetadata {
        name: name.to_string(),
        sector_id,
        avatar_url: initials_avatar_url(name),
    };
    let auth = provider.sign_up(email, password, &metadata)?;

    let profile = Profile {
        id: auth.id.clone(),
        name: metadata.name.clone(),
        avatar_url: Some(metadata.avatar_url.clone()),
        role: "user".to_string(),
        sector_id: Some(sector_id),
        email: Some(email.to_string()),
    };
    db.with_writer(|conn| profiles::insert_profile(conn, &profile))?;

    info!(user_id = %auth.id, "registered new account");
    Ok(merge(auth, profile))
}
