//! Profile settings: name/sector update, email change, avatar upload.
//!
//! The profile update and the email change are independent sequential
//! steps with no rollback: a provider failure after a successful profile
//! write leaves the profile written and reports the email failure in the
//! outcome.

use chrono::Utc;
use skillup_core::config::StorageConfig;
use skillup_core::errors::{AuthError, SettingsError, ValidationError};
use skillup_storage::queries::profiles;
use skillup_storage::DatabaseManager;
use tracing::{info, warn};

use crate::providers::{FileStore, SessionProvider};

/// Form input for the settings page.
#[derive(Debug, Clone)]
pub struct SettingsUpdate {
    pub name: String,
    pub sector_id: Option<i64>,
    /// When set, an email change is requested after the profile write.
    pub new_email: Option<String>,
}

/// Result of a settings save. The profile write succeeded (or the whole
/// call errored); the email step may still have failed on its own.
#[derive(Debug)]
pub struct SettingsOutcome {
    pub email_changed: bool,
    /// Set when the email step was requested and failed.
    pub email_error: Option<AuthError>,
}

impl SettingsOutcome {
    /// True when every requested step landed.
    pub fn is_complete(&self) -> bool {
        self.email_error.is_none()
    }
}

/// Save the settings form: profile fields first, then the email change.
pub fn update_settings(
    db: &DatabaseManager,
    provider: &dyn SessionProvider,
    user_id: &str,
    update: &SettingsUpdate,
) -> Result<SettingsOutcome, SettingsError> {
    let name = update.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField { field: "name" }.into());
    }

    db.with_writer(|conn| profiles::update_profile(conn, user_id, name, update.sector_id))?;

    let Some(new_email) = update.new_email.as_deref().map(str::trim) else {
        return Ok(SettingsOutcome {
            email_changed: false,
            email_error: None,
        });
    };
    if new_email.is_empty() {
        return Ok(SettingsOutcome {
            email_changed: false,
            email_error: None,
        });
    }

    match provider.update_email(new_email) {
        Ok(()) => {
            // Keep the mirrored column in step; the provider confirms the
            // change out of band.
            db.with_writer(|conn| profiles::update_email(conn, user_id, new_email))?;
            info!(user_id, "requested email change");
            Ok(SettingsOutcome {
                email_changed: true,
                email_error: None,
            })
        }
        Err(e) => {
            warn!(user_id, error = %e, "email change failed after profile update");
            Ok(SettingsOutcome {
                email_changed: false,
                email_error: Some(e),
            })
        }
    }
}

/// Upload a new avatar and persist its public URL to the profile.
/// Returns the stored URL.
pub fn upload_avatar(
    db: &DatabaseManager,
    store: &dyn FileStore,
    config: &StorageConfig,
    user_id: &str,
    original_file_name: &str,
    bytes: &[u8],
    content_type: &str,
) -> Result<String, SettingsError> {
    upload_avatar_at(
        db,
        store,
        config,
        user_id,
        original_file_name,
        bytes,
        content_type,
        Utc::now().timestamp_millis(),
    )
}

/// Avatar upload at an explicit timestamp. The object name is
/// `{user_id}-{millis}.{ext}`; same-name collisions overwrite.
#[allow(clippy::too_many_arguments)]
pub fn upload_avatar_at(
    db: &DatabaseManager,
    store: &dyn FileStore,
    config: &StorageConfig,
    user_id: &str,
    original_file_name: &str,
    bytes: &[u8],
    content_type: &str,
    now_millis: i64,
) -> Result<String, SettingsError> {
    let ext = original_file_name
        .rsplit_once('.')
        .map(|(_, e)| e)
        .filter(|e| !e.is_empty())
        .unwrap_or("png");
    let name = format!("{user_id}-{now_millis}.{ext}");
    let bucket = config.effective_avatar_bucket();

    store.upload(bucket, &name, bytes, content_type)?;
    let url = store.public_url(bucket, &name);

    db.with_writer(|conn| profiles::update_avatar(conn, user_id, &url))?;
    info!(user_id, object = %name, "uploaded avatar");

    Ok(url)
}
