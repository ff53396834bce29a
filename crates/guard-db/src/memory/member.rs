use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use guard_core::{ChatId, MemberRecord, MemberRepository, RepoResult};

/// In-memory member store keyed by `(chat_id, user_id)`
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    members: RwLock<BTreeMap<(ChatId, String), MemberRecord>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn upsert(&self, chat_id: ChatId, user_id: &str, username: Option<&str>) -> RepoResult<()> {
        let username = username.map(str::to_string);
        self.members
            .write()
            .entry((chat_id, user_id.to_string()))
            .and_modify(|record| record.touch(username.clone()))
            .or_insert_with(|| MemberRecord::new(chat_id, user_id, username));
        Ok(())
    }

    async fn list_by_chat(&self, chat_id: ChatId) -> RepoResult<Vec<MemberRecord>> {
        Ok(self
            .members
            .read()
            .values()
            .filter(|record| record.chat_id == chat_id)
            .cloned()
            .collect())
    }

    async fn remove(&self, chat_id: ChatId, user_id: &str) -> RepoResult<()> {
        self.members.write().remove(&(chat_id, user_id.to_string()));
        Ok(())
    }

    async fn list_distinct_chats(&self) -> RepoResult<Vec<ChatId>> {
        let mut chats: Vec<ChatId> = self.members.read().keys().map(|(chat, _)| *chat).collect();
        chats.dedup();
        Ok(chats)
    }
}
