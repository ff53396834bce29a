//! Chat user - a user as reported by a live platform event

use serde::{Deserialize, Serialize};

use crate::value_objects::MemberIdentity;

/// User carried by a platform event (join, message sender)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUser {
    pub id: i64,
    pub username: Option<String>,
}

impl ChatUser {
    pub fn new(id: i64, username: Option<String>) -> Self {
        Self { id, username }
    }

    /// Reduce to the shape the unauthorized filter matches on
    pub fn identity(&self) -> MemberIdentity {
        MemberIdentity::new(self.id.to_string(), self.username.clone())
    }
}
