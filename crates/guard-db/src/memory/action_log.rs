use async_trait::async_trait;
use parking_lot::RwLock;

use guard_core::{ActionLogEntry, ActionLogRepository, ChatId, ModerationAction, RepoResult};

/// In-memory append-only action log
#[derive(Debug, Default)]
pub struct InMemoryActionLogRepository {
    entries: RwLock<Vec<ActionLogEntry>>,
}

impl InMemoryActionLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every entry across all chats
    pub fn entries(&self) -> Vec<ActionLogEntry> {
        self.entries.read().clone()
    }
}

#[async_trait]
impl ActionLogRepository for InMemoryActionLogRepository {
    async fn append(
        &self,
        chat_id: ChatId,
        identifier: &str,
        action: ModerationAction,
        reason: Option<&str>,
    ) -> RepoResult<()> {
        self.entries.write().push(ActionLogEntry::new(
            chat_id,
            identifier,
            action,
            reason.map(str::to_string),
        ));
        Ok(())
    }

    async fn find_by_chat(&self, chat_id: ChatId) -> RepoResult<Vec<ActionLogEntry>> {
        Ok(self
            .entries
            .read()
            .iter()
            .filter(|entry| entry.chat_id == chat_id)
            .cloned()
            .collect())
    }
}
