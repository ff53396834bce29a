//! Update dispatcher
//!
//! Routes each incoming message to a moderation workflow and applies the
//! command policy (group-only sweeps, admin-only when an admin is set).

use std::sync::Arc;

use guard_core::{ChatId, ChatUser};
use guard_service::{ModerationService, ServiceContext, ServiceResult};
use tracing::{error, info, instrument, warn};

use crate::telegram::{Document, FileDownloader, Message, Update};

const GREETING: &str = "Hi! Send me a .txt file with the allowed users, one per line, \
                        in a private chat. In a group, use /clean.";
const UPLOAD_HINT: &str = "Please send a .txt file with the allowed users.";
const GROUP_ONLY: &str = "The /clean command only works in a group.";
const ADMIN_ONLY: &str = "Only the admin can run /clean.";
const SWEEP_STARTED: &str = "Starting sweep... (checking known members)";

/// Routes updates to the moderation workflows
#[derive(Clone)]
pub struct UpdateDispatcher {
    ctx: ServiceContext,
    files: Arc<dyn FileDownloader>,
}

impl UpdateDispatcher {
    pub fn new(ctx: ServiceContext, files: Arc<dyn FileDownloader>) -> Self {
        Self { ctx, files }
    }

    /// Handle one update
    ///
    /// Failures are logged and, where a user is waiting, reported back to
    /// the chat.
    #[instrument(skip(self, update), fields(update_id = update.update_id))]
    pub async fn dispatch(&self, update: Update) {
        let Some(message) = update.message else {
            return;
        };

        info!(
            chat_id = message.chat.id,
            chat_type = %message.chat.kind,
            from = ?message.from.as_ref().map(|u| u.id),
            text = ?message.text,
            new_members = message.new_chat_members.len(),
            "Incoming message"
        );

        if let Some(document) = &message.document {
            self.handle_document(&message, document).await;
            return;
        }

        if !message.new_chat_members.is_empty() {
            self.handle_new_members(&message).await;
        }

        if message.chat.is_group() {
            if let Some(from) = &message.from {
                if let Err(e) = ModerationService::new(&self.ctx)
                    .record_activity(message.chat_id(), &ChatUser::from(from))
                    .await
                {
                    error!(error = %e, "Failed to record member activity");
                }
            }
        }

        match message.command().as_deref() {
            Some("start") => self.reply(&message, GREETING).await,
            Some("clean") => self.handle_clean(&message).await,
            _ => {}
        }
    }

    async fn handle_document(&self, message: &Message, document: &Document) {
        if !document.is_allow_list_upload() {
            self.reply(message, UPLOAD_HINT).await;
            return;
        }

        let result: ServiceResult<usize> = async {
            let content = self.files.download(&document.file_id).await?;
            ModerationService::new(&self.ctx)
                .ingest_allow_list(&content)
                .await
        }
        .await;

        match result {
            Ok(count) => {
                info!(
                    count,
                    by = ?message.from.as_ref().map(|u| u.id),
                    file_name = ?document.file_name,
                    "Allow-list uploaded"
                );
                self.reply(message, &format!("Allow-list updated: {count} entries."))
                    .await;
            }
            Err(e) => {
                error!(error = %e, "Failed to process allow-list upload");
                self.reply(message, &format!("Failed to process the file: {e}"))
                    .await;
            }
        }
    }

    async fn handle_new_members(&self, message: &Message) {
        let users: Vec<ChatUser> = message.new_chat_members.iter().map(ChatUser::from).collect();

        match ModerationService::new(&self.ctx)
            .handle_members_joined(message.chat_id(), &users)
            .await
        {
            Ok(banned) if banned > 0 => {
                info!(chat_id = message.chat.id, banned, "Banned unauthorized newcomers");
            }
            Ok(_) => {}
            Err(e) => error!(chat_id = message.chat.id, error = %e, "Failed to handle new members"),
        }
    }

    async fn handle_clean(&self, message: &Message) {
        if !message.chat.is_group() {
            self.reply(message, GROUP_ONLY).await;
            return;
        }

        if let Some(admin) = self.ctx.moderation().admin_chat_id {
            let sender = message.from.as_ref().map(|u| ChatId::new(u.id));
            if sender != Some(admin) {
                self.reply(message, ADMIN_ONLY).await;
                return;
            }
        }

        self.reply(message, SWEEP_STARTED).await;

        match ModerationService::new(&self.ctx)
            .sweep_chat(message.chat_id())
            .await
        {
            Ok(report) => self.reply(message, &report.summary()).await,
            Err(e) => {
                error!(chat_id = message.chat.id, error = %e, "Sweep failed");
                self.reply(message, &format!("Sweep failed: {e}")).await;
            }
        }
    }

    async fn reply(&self, message: &Message, text: &str) {
        if let Err(e) = self
            .ctx
            .platform()
            .send_message(message.chat_id(), text)
            .await
        {
            warn!(chat_id = message.chat.id, error = %e, "Failed to send reply");
        }
    }
}
