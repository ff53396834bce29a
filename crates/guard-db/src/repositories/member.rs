//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guard_core::{ChatId, MemberRecord, MemberRepository, RepoResult};

use crate::models::MemberModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn upsert(&self, chat_id: ChatId, user_id: &str, username: Option<&str>) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO members (chat_id, user_id, username, last_seen)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (chat_id, user_id)
            DO UPDATE SET username = EXCLUDED.username, last_seen = NOW()
            ",
        )
        .bind(chat_id.into_inner())
        .bind(user_id)
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_chat(&self, chat_id: ChatId) -> RepoResult<Vec<MemberRecord>> {
        let results = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT chat_id, user_id, username, last_seen
            FROM members
            WHERE chat_id = $1
            ORDER BY user_id
            ",
        )
        .bind(chat_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MemberRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn remove(&self, chat_id: ChatId, user_id: &str) -> RepoResult<()> {
        sqlx::query("DELETE FROM members WHERE chat_id = $1 AND user_id = $2")
            .bind(chat_id.into_inner())
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_distinct_chats(&self) -> RepoResult<Vec<ChatId>> {
        let results = sqlx::query_scalar::<_, i64>(
            r"
            SELECT DISTINCT chat_id
            FROM members
            ORDER BY chat_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ChatId::new).collect())
    }
}
