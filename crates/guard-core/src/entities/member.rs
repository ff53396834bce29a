//! Member record - a user observed in a chat

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ChatId, MemberIdentity};

/// Known membership of a user in a chat, keyed by `(chat_id, user_id)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub chat_id: ChatId,
    /// Stored as text; rows written by older tooling may not be numeric
    pub user_id: String,
    pub username: Option<String>,
    pub last_seen: DateTime<Utc>,
}

impl MemberRecord {
    /// Create a record for a first sighting
    pub fn new(chat_id: ChatId, user_id: impl Into<String>, username: Option<String>) -> Self {
        Self {
            chat_id,
            user_id: user_id.into(),
            username,
            last_seen: Utc::now(),
        }
    }

    /// Record a later sighting
    pub fn touch(&mut self, username: Option<String>) {
        self.username = username;
        self.last_seen = Utc::now();
    }

    /// Reduce to the shape the unauthorized filter matches on
    pub fn identity(&self) -> MemberIdentity {
        MemberIdentity::new(self.user_id.clone(), self.username.clone())
    }
}
