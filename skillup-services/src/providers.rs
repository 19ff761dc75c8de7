//! Boundary traits for the external systems the services depend on.
//!
//! The session provider owns credentials and email; the file store owns
//! avatar bytes. Neither is implemented here: production wires in real
//! clients, tests wire in mocks.

use skillup_core::errors::{AuthError, FileStoreError};

/// The authenticated identity as the session provider reports it.
/// Profile data (name, sector, role) lives in the profiles table, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

/// Metadata attached to a sign-up. The provider-side registration hook
/// copies it into the new profile row.
#[derive(Debug, Clone)]
pub struct SignUpMetadata {
    pub name: String,
    pub sector_id: i64,
    pub avatar_url: String,
}

/// Session and credential operations, backed by the external auth service.
pub trait SessionProvider {
    /// The current session's user, or `None` when signed out.
    fn current_user(&self) -> Result<Option<AuthUser>, AuthError>;

    fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &SignUpMetadata,
    ) -> Result<AuthUser, AuthError>;

    fn sign_out(&self) -> Result<(), AuthError>;

    /// Exchange a one-time callback code for a session.
    fn exchange_code(&self, code: &str) -> Result<AuthUser, AuthError>;

    /// Change the signed-in user's email. The provider confirms the change
    /// out of band; until then the old address stays active.
    fn update_email(&self, new_email: &str) -> Result<(), AuthError>;

    fn update_password(&self, new_password: &str) -> Result<(), AuthError>;

    fn request_password_reset(&self, email: &str, redirect_to: &str) -> Result<(), AuthError>;
}

/// Blob storage for user-uploaded files (the avatar bucket).
pub trait FileStore {
    /// Upload `bytes` under `name` in `bucket`, replacing any existing
    /// object with the same name.
    fn upload(
        &self,
        bucket: &str,
        name: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<(), FileStoreError>;

    /// Publicly reachable URL for an object. Purely syntactic; does not
    /// check that the object exists.
    fn public_url(&self, bucket: &str, name: &str) -> String;
}
