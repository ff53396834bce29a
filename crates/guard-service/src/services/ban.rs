//! Ban executor
//!
//! Applies bans one at a time, records every outcome in the action log and
//! reconciles the member store when the platform reports a user gone.

use guard_core::{BanCandidate, ChatId, ModerationAction, PlatformError};
use tracing::{error, info, instrument, warn};

use super::context::ServiceContext;

/// Ban service
pub struct BanService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BanService<'a> {
    /// Create a new BanService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ban every candidate in order and return how many bans succeeded
    ///
    /// Never fails: each candidate's outcome is logged and the batch always
    /// runs to completion. A pacing delay follows each successful ban.
    #[instrument(skip(self, candidates), fields(count = candidates.len()))]
    pub async fn ban_users(&self, chat_id: ChatId, candidates: &[BanCandidate]) -> usize {
        let pacing = self.ctx.moderation().ban_pacing();
        let mut banned = 0;

        for candidate in candidates {
            info!(
                chat_id = %chat_id,
                user_id = candidate.user_id,
                identifier = %candidate.identifier,
                "Attempting ban"
            );

            match self
                .ctx
                .platform()
                .ban_member(chat_id, candidate.user_id)
                .await
            {
                Ok(()) => {
                    banned += 1;
                    self.record(chat_id, candidate, ModerationAction::Banned, None)
                        .await;
                    info!(chat_id = %chat_id, identifier = %candidate.identifier, "User banned");
                    tokio::time::sleep(pacing).await;
                }
                Err(e) if e.is_not_participant() => {
                    self.reconcile_departed(chat_id, candidate).await;
                }
                Err(e) => {
                    error!(
                        chat_id = %chat_id,
                        identifier = %candidate.identifier,
                        error = %e,
                        "Failed to ban user"
                    );
                    let reason = e.to_string();
                    self.record(chat_id, candidate, ModerationAction::BanFailed, Some(&reason))
                        .await;
                    self.notify_admin(chat_id, candidate, &e).await;
                }
            }
        }

        banned
    }

    /// Forget a member the platform says is no longer in the chat
    async fn reconcile_departed(&self, chat_id: ChatId, candidate: &BanCandidate) {
        info!(
            chat_id = %chat_id,
            identifier = %candidate.identifier,
            "User is no longer a participant, removing member record"
        );

        let user_id = candidate.user_id.to_string();
        if let Err(e) = self.ctx.member_repo().remove(chat_id, &user_id).await {
            error!(
                chat_id = %chat_id,
                identifier = %candidate.identifier,
                error = %e,
                "Failed to remove member record"
            );
            return;
        }

        self.record(chat_id, candidate, ModerationAction::AlreadyLeft, None)
            .await;
    }

    /// Append to the action log; a failed append never stops the batch
    async fn record(
        &self,
        chat_id: ChatId,
        candidate: &BanCandidate,
        action: ModerationAction,
        reason: Option<&str>,
    ) {
        if let Err(e) = self
            .ctx
            .action_log_repo()
            .append(chat_id, &candidate.identifier, action, reason)
            .await
        {
            error!(
                chat_id = %chat_id,
                identifier = %candidate.identifier,
                action = %action,
                error = %e,
                "Failed to append action log entry"
            );
        }
    }

    async fn notify_admin(&self, chat_id: ChatId, candidate: &BanCandidate, cause: &PlatformError) {
        let Some(admin_chat) = self.ctx.moderation().admin_chat_id else {
            return;
        };

        let text = format!(
            "Failed to ban {} in chat {chat_id}: {cause}",
            candidate.identifier
        );
        if let Err(e) = self.ctx.platform().send_message(admin_chat, &text).await {
            warn!(admin_chat = %admin_chat, error = %e, "Failed to notify admin");
        }
    }
}
