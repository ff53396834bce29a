//! Bot API wire types
//!
//! Only the fields the bot reads are modelled; unknown fields are ignored.

use guard_core::{ChatId, ChatUser};
use serde::{Deserialize, Serialize};

/// Incoming update delivered to the webhook
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub from: Option<User>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub document: Option<Document>,
    #[serde(default)]
    pub new_chat_members: Vec<User>,
}

impl Message {
    /// Bot command in the first token of the text, lowercased and without
    /// the leading `/` or an `@botname` suffix
    pub fn command(&self) -> Option<String> {
        let first = self.text.as_deref()?.split_whitespace().next()?;
        let command = first.strip_prefix('/')?;
        let command = command.split('@').next().unwrap_or(command);
        if command.is_empty() {
            return None;
        }
        Some(command.to_lowercase())
    }

    pub fn chat_id(&self) -> ChatId {
        ChatId::new(self.chat.id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Chat {
    /// Group and supergroup chats are the ones the bot moderates
    pub fn is_group(&self) -> bool {
        matches!(self.kind.as_str(), "group" | "supergroup")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
}

impl From<&User> for ChatUser {
    fn from(user: &User) -> Self {
        ChatUser::new(user.id, user.username.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub file_id: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl Document {
    /// MIME types accepted as allow-list uploads
    const ACCEPTED_MIME_TYPES: [&'static str; 3] =
        ["text/plain", "application/octet-stream", "text/csv"];

    pub fn is_allow_list_upload(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|mime| Self::ACCEPTED_MIME_TYPES.contains(&mime))
    }
}

/// Result of `getFile`
#[derive(Debug, Clone, Deserialize)]
pub struct File {
    pub file_id: String,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub file_path: Option<String>,
}

/// Entry of the command menu registered with `setMyCommands`
#[derive(Debug, Clone, Serialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

/// Envelope of every Bot API answer
#[derive(Debug, Deserialize)]
pub struct TelegramResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub error_code: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}
