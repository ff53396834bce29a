//! Bot API client

use std::time::Duration;

use async_trait::async_trait;
use guard_common::TelegramConfig;
use guard_core::{ChatId, PlatformClient, PlatformError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, instrument};

use super::types::{BotCommand, File, TelegramResponse};

/// Per-request timeout for Bot API calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches uploaded documents from the platform
#[async_trait]
pub trait FileDownloader: Send + Sync {
    async fn download(&self, file_id: &str) -> Result<Vec<u8>, PlatformError>;
}

/// Telegram Bot API client
#[derive(Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    api_url: String,
    bot_token: String,
}

impl TelegramClient {
    /// Create a client for the configured API endpoint
    pub fn new(config: &TelegramConfig) -> Result<Self, PlatformError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(PlatformError::transport)?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            bot_token: config.bot_token.clone(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.api_url, self.bot_token)
    }

    fn file_url(&self, file_path: &str) -> String {
        format!("{}/file/bot{}/{file_path}", self.api_url, self.bot_token)
    }

    /// Call a Bot API method and unwrap its envelope
    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, PlatformError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        debug!(method, "Calling Bot API");

        let response = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await
            .map_err(PlatformError::transport)?;

        // Error answers carry a JSON envelope with a non-2xx status
        let envelope: TelegramResponse<T> =
            response.json().await.map_err(PlatformError::transport)?;

        if !envelope.ok {
            return Err(PlatformError::from_api(
                envelope.error_code.unwrap_or_default(),
                envelope
                    .description
                    .unwrap_or_else(|| format!("{method} failed")),
            ));
        }

        envelope
            .result
            .ok_or_else(|| PlatformError::transport(format!("{method} returned no result")))
    }

    /// Resolve a file id to its download path
    #[instrument(skip(self))]
    pub async fn get_file(&self, file_id: &str) -> Result<File, PlatformError> {
        self.call("getFile", &json!({ "file_id": file_id })).await
    }

    /// Register the command menu shown to users
    #[instrument(skip(self, commands))]
    pub async fn set_my_commands(&self, commands: &[BotCommand]) -> Result<(), PlatformError> {
        let _: bool = self
            .call("setMyCommands", &json!({ "commands": commands }))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl PlatformClient for TelegramClient {
    #[instrument(skip(self))]
    async fn ban_member(&self, chat_id: ChatId, user_id: i64) -> Result<(), PlatformError> {
        let _: bool = self
            .call(
                "banChatMember",
                &json!({ "chat_id": chat_id.into_inner(), "user_id": user_id }),
            )
            .await?;
        Ok(())
    }

    #[instrument(skip(self, text))]
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), PlatformError> {
        let _: serde_json::Value = self
            .call(
                "sendMessage",
                &json!({ "chat_id": chat_id.into_inner(), "text": text }),
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl FileDownloader for TelegramClient {
    #[instrument(skip(self))]
    async fn download(&self, file_id: &str) -> Result<Vec<u8>, PlatformError> {
        let file = self.get_file(file_id).await?;
        let file_path = file
            .file_path
            .ok_or_else(|| PlatformError::transport("file is not available for download"))?;

        let response = self
            .client
            .get(self.file_url(&file_path))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(PlatformError::transport)?;

        let bytes = response.bytes().await.map_err(PlatformError::transport)?;
        Ok(bytes.to_vec())
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("bot_token", &"<redacted>")
            .finish()
    }
}
