//! Dashboard configuration.

use serde::{Deserialize, Serialize};

/// Configuration for dashboard-derived stats.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    /// Estimated study hours credited per completed course. Default: 0.5.
    pub hours_per_course: Option<f64>,
    /// How many recommended courses to show. Default: 3.
    pub recommendation_limit: Option<usize>,
}

impl DashboardConfig {
    /// Returns the effective hours-per-course estimate, defaulting to 0.5.
    pub fn effective_hours_per_course(&self) -> f64 {
        self.hours_per_course.unwrap_or(0.5)
    }

    /// Returns the effective recommendation limit, defaulting to 3.
    pub fn effective_recommendation_limit(&self) -> usize {
        self.recommendation_limit.unwrap_or(3)
    }
}
