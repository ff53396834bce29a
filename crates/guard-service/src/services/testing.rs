//! Hand-written fakes shared by the service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::Instant;

use guard_common::ModerationConfig;
use guard_core::{
    ActionLogEntry, ActionLogRepository, ChatId, DomainError, ModerationAction, PlatformClient,
    PlatformError, RepoResult,
};
use guard_db::{InMemoryActionLogRepository, InMemoryAllowListRepository, InMemoryMemberRepository};

use super::context::{ServiceContext, ServiceContextBuilder};

/// Platform that answers ban calls from a script and records every call
#[derive(Default)]
pub struct ScriptedPlatform {
    ban_failures: Mutex<HashMap<i64, PlatformError>>,
    fail_messages: bool,
    ban_latency: Duration,
    bans_in_flight: AtomicUsize,
    max_bans_in_flight: AtomicUsize,
    bans: Mutex<Vec<(ChatId, i64)>>,
    ban_windows: Mutex<Vec<(Instant, Instant)>>,
    messages: Mutex<Vec<(ChatId, String)>>,
}

impl ScriptedPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform whose `send_message` always fails
    pub fn with_failing_messages() -> Self {
        Self {
            fail_messages: true,
            ..Self::default()
        }
    }

    /// Platform whose ban calls take `latency` to answer
    pub fn with_ban_latency(latency: Duration) -> Self {
        Self {
            ban_latency: latency,
            ..Self::default()
        }
    }

    /// Make every ban of `user_id` fail with `error`
    pub fn fail_ban(&self, user_id: i64, error: PlatformError) {
        self.ban_failures.lock().insert(user_id, error);
    }

    pub fn bans(&self) -> Vec<(ChatId, i64)> {
        self.bans.lock().clone()
    }

    /// Start and end instant of every ban call, in call order
    pub fn ban_windows(&self) -> Vec<(Instant, Instant)> {
        self.ban_windows.lock().clone()
    }

    /// Highest number of ban calls that were running at once
    pub fn max_bans_in_flight(&self) -> usize {
        self.max_bans_in_flight.load(Ordering::SeqCst)
    }

    pub fn messages(&self) -> Vec<(ChatId, String)> {
        self.messages.lock().clone()
    }
}

#[async_trait]
impl PlatformClient for ScriptedPlatform {
    async fn ban_member(&self, chat_id: ChatId, user_id: i64) -> Result<(), PlatformError> {
        let started = Instant::now();
        let running = self.bans_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_bans_in_flight.fetch_max(running, Ordering::SeqCst);
        self.bans.lock().push((chat_id, user_id));

        if !self.ban_latency.is_zero() {
            tokio::time::sleep(self.ban_latency).await;
        }

        self.bans_in_flight.fetch_sub(1, Ordering::SeqCst);
        self.ban_windows.lock().push((started, Instant::now()));

        match self.ban_failures.lock().get(&user_id) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), PlatformError> {
        if self.fail_messages {
            return Err(PlatformError::transport("connection refused"));
        }
        self.messages.lock().push((chat_id, text.to_string()));
        Ok(())
    }
}

/// Action log whose appends always fail
#[derive(Default)]
pub struct FailingActionLog;

#[async_trait]
impl ActionLogRepository for FailingActionLog {
    async fn append(
        &self,
        _chat_id: ChatId,
        _identifier: &str,
        _action: ModerationAction,
        _reason: Option<&str>,
    ) -> RepoResult<()> {
        Err(DomainError::DatabaseError("disk full".to_string()))
    }

    async fn find_by_chat(&self, _chat_id: ChatId) -> RepoResult<Vec<ActionLogEntry>> {
        Ok(vec![])
    }
}

/// In-memory stores plus a scripted platform, all reachable from the test
pub struct Harness {
    pub allow_list: Arc<InMemoryAllowListRepository>,
    pub members: Arc<InMemoryMemberRepository>,
    pub action_log: Arc<InMemoryActionLogRepository>,
    pub platform: Arc<ScriptedPlatform>,
    pub ctx: ServiceContext,
}

impl Harness {
    /// Zero pacing, no admin chat
    pub fn new() -> Self {
        Self::with_settings(ScriptedPlatform::new(), None)
    }

    pub fn with_settings(platform: ScriptedPlatform, admin_chat_id: Option<ChatId>) -> Self {
        Self::with_pacing(platform, admin_chat_id, 0)
    }

    pub fn with_pacing(
        platform: ScriptedPlatform,
        admin_chat_id: Option<ChatId>,
        ban_pacing_ms: u64,
    ) -> Self {
        let allow_list = Arc::new(InMemoryAllowListRepository::new());
        let members = Arc::new(InMemoryMemberRepository::new());
        let action_log = Arc::new(InMemoryActionLogRepository::new());
        let platform = Arc::new(platform);

        let ctx = ServiceContextBuilder::new()
            .allow_list_repo(allow_list.clone())
            .member_repo(members.clone())
            .action_log_repo(action_log.clone())
            .platform(platform.clone())
            .moderation(ModerationConfig {
                admin_chat_id,
                ban_pacing_ms,
                ..ModerationConfig::default()
            })
            .build()
            .expect("all dependencies set");

        Self {
            allow_list,
            members,
            action_log,
            platform,
            ctx,
        }
    }
}
