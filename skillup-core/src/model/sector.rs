//! Organizational sector (department).

use serde::{Deserialize, Serialize};

/// One row of the `sectors` table. Names are unique, enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub id: i64,
    pub name: String,
}
