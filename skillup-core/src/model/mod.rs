//! Typed records for every query shape.
//! Row shapes are validated at the storage boundary, not trusted at use sites.

pub mod certificate;
pub mod course;
pub mod profile;
pub mod progress;
pub mod ranking;
pub mod sector;

pub use certificate::Certificate;
pub use course::{Course, CourseLevel, CourseWithSector};
pub use profile::Profile;
pub use progress::{ProgressRecord, ProgressState};
pub use ranking::RankingEntry;
pub use sector::Sector;
