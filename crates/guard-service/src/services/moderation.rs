//! Moderation orchestrator
//!
//! Composes the stores, the unauthorized filter and the ban executor into
//! the workflows platform events trigger.

use guard_core::{AllowSet, ChatId, ChatUser, MemberIdentity, MemberRecord};
use tracing::{debug, error, info, instrument};

use crate::dto::SweepReport;

use super::allow_list::AllowListService;
use super::ban::BanService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::filter::filter_unauthorized;

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Replace the allow-list from an uploaded file
    pub async fn ingest_allow_list(&self, content: &[u8]) -> ServiceResult<usize> {
        AllowListService::new(self.ctx).ingest(content).await
    }

    /// Record new members and ban the ones not on the allow-list
    ///
    /// Only the joining batch is checked. Returns the number banned.
    #[instrument(skip(self, users), fields(count = users.len()))]
    pub async fn handle_members_joined(
        &self,
        chat_id: ChatId,
        users: &[ChatUser],
    ) -> ServiceResult<usize> {
        for user in users {
            info!(chat_id = %chat_id, user_id = user.id, username = ?user.username, "New member");
            self.ctx
                .member_repo()
                .upsert(chat_id, &user.id.to_string(), user.username.as_deref())
                .await?;
        }

        let allowed = self.load_allow_set().await?;
        let identities: Vec<MemberIdentity> = users.iter().map(ChatUser::identity).collect();
        let candidates = filter_unauthorized(&identities, &allowed);

        if candidates.is_empty() {
            return Ok(0);
        }

        Ok(BanService::new(self.ctx).ban_users(chat_id, &candidates).await)
    }

    /// Remember a user seen speaking in a chat
    #[instrument(skip(self))]
    pub async fn record_activity(&self, chat_id: ChatId, user: &ChatUser) -> ServiceResult<()> {
        self.ctx
            .member_repo()
            .upsert(chat_id, &user.id.to_string(), user.username.as_deref())
            .await?;
        Ok(())
    }

    /// Check every known member of a chat and ban the unauthorized ones
    #[instrument(skip(self))]
    pub async fn sweep_chat(&self, chat_id: ChatId) -> ServiceResult<SweepReport> {
        info!(chat_id = %chat_id, "Starting sweep");

        let members = self.ctx.member_repo().list_by_chat(chat_id).await?;
        debug!(chat_id = %chat_id, known = members.len(), "Loaded known members");

        let allowed = self.load_allow_set().await?;
        let identities: Vec<MemberIdentity> = members.iter().map(MemberRecord::identity).collect();
        let candidates = filter_unauthorized(&identities, &allowed);

        info!(
            chat_id = %chat_id,
            checked = members.len(),
            to_ban = candidates.len(),
            "Sweep candidates selected"
        );

        let banned = BanService::new(self.ctx).ban_users(chat_id, &candidates).await;

        let report = SweepReport {
            checked: members.len(),
            to_ban: candidates.len(),
            banned,
        };
        info!(
            chat_id = %chat_id,
            checked = report.checked,
            to_ban = report.to_ban,
            banned = report.banned,
            "Sweep finished"
        );
        Ok(report)
    }

    /// Sweep every chat with known members, one after another
    ///
    /// A chat that fails is logged and skipped. Returns the reports of the
    /// chats that completed.
    #[instrument(skip(self))]
    pub async fn sweep_all_known_chats(&self) -> ServiceResult<Vec<(ChatId, SweepReport)>> {
        let chats = self.ctx.member_repo().list_distinct_chats().await?;
        let mut reports = Vec::with_capacity(chats.len());

        for chat_id in chats {
            match self.sweep_chat(chat_id).await {
                Ok(report) => reports.push((chat_id, report)),
                Err(e) => error!(chat_id = %chat_id, error = %e, "Sweep failed"),
            }
        }

        Ok(reports)
    }

    async fn load_allow_set(&self) -> ServiceResult<AllowSet> {
        let entries = self.ctx.allow_list_repo().list_all().await?;
        Ok(AllowSet::from_entries(entries))
    }
}
