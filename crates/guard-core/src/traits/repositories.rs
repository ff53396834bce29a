//! Repository traits (ports) - define the interface for data access
//!
//! Every call is independently atomic; no operation spans a transaction
//! across calls.

use async_trait::async_trait;

use crate::entities::{ActionLogEntry, MemberRecord, ModerationAction};
use crate::error::DomainError;
use crate::value_objects::ChatId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Allow-List Repository
// ============================================================================

#[async_trait]
pub trait AllowListRepository: Send + Sync {
    /// Replace the whole allow-list, keeping the given order
    async fn replace_all(&self, identifiers: &[String]) -> RepoResult<()>;

    /// List every stored entry verbatim, in insertion order
    async fn list_all(&self) -> RepoResult<Vec<String>>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a member, or refresh username and last_seen of an existing one
    async fn upsert(&self, chat_id: ChatId, user_id: &str, username: Option<&str>) -> RepoResult<()>;

    /// List all known members of a chat
    async fn list_by_chat(&self, chat_id: ChatId) -> RepoResult<Vec<MemberRecord>>;

    /// Remove a member; removing an absent member is not an error
    async fn remove(&self, chat_id: ChatId, user_id: &str) -> RepoResult<()>;

    /// List every chat that has at least one known member
    async fn list_distinct_chats(&self) -> RepoResult<Vec<ChatId>>;
}

// ============================================================================
// Action Log Repository
// ============================================================================

#[async_trait]
pub trait ActionLogRepository: Send + Sync {
    /// Append an entry
    async fn append(
        &self,
        chat_id: ChatId,
        identifier: &str,
        action: ModerationAction,
        reason: Option<&str>,
    ) -> RepoResult<()>;

    /// List entries for a chat, oldest first
    async fn find_by_chat(&self, chat_id: ChatId) -> RepoResult<Vec<ActionLogEntry>>;
}
