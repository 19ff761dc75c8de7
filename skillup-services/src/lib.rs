//! Operation layer for SkillUp.
//!
//! Each module backs one page-level surface: identity resolution and
//! registration, course progress, the dashboard, admin CRUD, certificate
//! display, profile settings, and the auth callback. External systems
//! (the session provider, the avatar bucket) enter only through the
//! traits in [`providers`]; everything else runs against
//! [`skillup_storage::DatabaseManager`].

pub mod admin;
pub mod auth_callback;
pub mod catalog;
pub mod certificate;
pub mod dashboard;
pub mod identity;
pub mod profile;
pub mod progress;
pub mod providers;
pub mod ranking;

pub(crate) mod urlenc;
