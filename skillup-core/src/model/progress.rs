//! Per-user, per-course progress record and its state machine view.

use serde::{Deserialize, Serialize};

/// One row of the `user_progress` table. At most one per (user, course).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub user_id: String,
    pub course_id: i64,
    pub progress_percent: i64,
    pub completed: bool,
    pub completed_at: Option<i64>,
    pub last_accessed_at: Option<i64>,
}

impl ProgressRecord {
    /// The percent shown to the user. Completed records always read as 100,
    /// whatever the stored value.
    pub fn effective_percent(&self) -> i64 {
        if self.completed {
            100
        } else {
            self.progress_percent
        }
    }

    pub fn state(&self) -> ProgressState {
        if self.completed {
            ProgressState::Completed
        } else {
            ProgressState::InProgress
        }
    }
}

/// State of a (user, course) pair. `NotStarted` means no record exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressState {
    NotStarted,
    InProgress,
    Completed,
}
