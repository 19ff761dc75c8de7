//! Per-table query modules. Each returns the typed rows from
//! `skillup_core::model`; nothing downstream touches raw rows.

pub mod certificates;
pub mod courses;
pub mod profiles;
pub mod progress;
pub mod sectors;
