//! Chat platform port

use async_trait::async_trait;

use crate::error::PlatformError;
use crate::value_objects::ChatId;

/// Calls the moderation engine makes into the chat platform
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Remove a user from a chat and prevent them from rejoining
    async fn ban_member(&self, chat_id: ChatId, user_id: i64) -> Result<(), PlatformError>;

    /// Send a plain text message to a chat
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), PlatformError>;
}
