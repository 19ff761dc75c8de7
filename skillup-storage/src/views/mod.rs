//! Readers for the precomputed views. The store recomputes these per
//! query; the app never caches them.

pub mod ranking;
pub mod user_stats;
