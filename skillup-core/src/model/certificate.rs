//! Certificate record. Issued externally on course completion; the app
//! only ever reads it. The id doubles as the shared verification token.

use serde::{Deserialize, Serialize};

/// One row of the `certificates` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub user_id: String,
    pub course_id: i64,
    pub issued_at: i64,
}
