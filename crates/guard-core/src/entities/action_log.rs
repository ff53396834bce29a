//! Action log entry - append-only audit record of a moderation decision

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::ChatId;

/// Outcome of a ban attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    /// The platform accepted the ban
    Banned,
    /// The user was no longer in the chat
    AlreadyLeft,
    /// The ban call failed for any other reason
    BanFailed,
}

impl ModerationAction {
    /// Stored string form
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Banned => "banned",
            Self::AlreadyLeft => "already_left",
            Self::BanFailed => "ban_failed",
        }
    }
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a stored action string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown moderation action: {0}")]
pub struct ModerationActionParseError(pub String);

impl FromStr for ModerationAction {
    type Err = ModerationActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "banned" => Ok(Self::Banned),
            "already_left" => Ok(Self::AlreadyLeft),
            "ban_failed" => Ok(Self::BanFailed),
            other => Err(ModerationActionParseError(other.to_string())),
        }
    }
}

/// Immutable record of one moderation action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLogEntry {
    pub chat_id: ChatId,
    pub user_identifier: String,
    pub action: ModerationAction,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ActionLogEntry {
    pub fn new(
        chat_id: ChatId,
        user_identifier: impl Into<String>,
        action: ModerationAction,
        reason: Option<String>,
    ) -> Self {
        Self {
            chat_id,
            user_identifier: user_identifier.into(),
            action,
            reason,
            created_at: Utc::now(),
        }
    }
}
