//! Core types and business rules for the SkillUp learning platform.
//!
//! Everything here is pure: no I/O, no database handles. The storage and
//! services crates build on these types.

pub mod catalog;
pub mod certificate;
pub mod config;
pub mod errors;
pub mod leveling;
pub mod model;
pub mod ranking;
pub mod tracing;
pub mod video;
