//! Course records and the fixed level enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Course difficulty level. The XP reward is a pure function of the level,
/// fixed at creation time and never caller-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Iniciante,
    Intermediario,
    Expert,
}

impl CourseLevel {
    /// XP granted on completion: 50 / 100 / 200.
    pub fn xp_reward(self) -> i64 {
        match self {
            Self::Iniciante => 50,
            Self::Intermediario => 100,
            Self::Expert => 200,
        }
    }

    /// Canonical lowercase form, as stored in the `courses.level` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iniciante => "iniciante",
            Self::Intermediario => "intermediario",
            Self::Expert => "expert",
        }
    }

    /// All levels, in ascending order of reward.
    pub fn all() -> [CourseLevel; 3] {
        [Self::Iniciante, Self::Intermediario, Self::Expert]
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iniciante" => Ok(Self::Iniciante),
            "intermediario" => Ok(Self::Intermediario),
            "expert" => Ok(Self::Expert),
            other => Err(ValidationError::UnknownLevel(other.to_string())),
        }
    }
}

/// One row of the `courses` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub level: CourseLevel,
    pub sector_id: i64,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_hours: i64,
    pub xp_reward: i64,
    pub created_at: i64,
}

/// A course joined with its sector's name, as the catalog fetches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseWithSector {
    pub course: Course,
    pub sector_name: Option<String>,
}
