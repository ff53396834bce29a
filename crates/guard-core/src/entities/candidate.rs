//! Ban candidate - an unauthorized member selected for removal

use serde::{Deserialize, Serialize};

/// Member the filter found unauthorized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanCandidate {
    /// Platform user ID passed to the ban call
    pub user_id: i64,
    /// Human-readable form recorded in the action log
    pub identifier: String,
}

impl BanCandidate {
    pub fn new(user_id: i64, identifier: impl Into<String>) -> Self {
        Self {
            user_id,
            identifier: identifier.into(),
        }
    }
}
