//! PostgreSQL implementation of ActionLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guard_core::{ActionLogEntry, ActionLogRepository, ChatId, ModerationAction, RepoResult};

use crate::models::ActionLogModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ActionLogRepository
#[derive(Clone)]
pub struct PgActionLogRepository {
    pool: PgPool,
}

impl PgActionLogRepository {
    /// Create a new PgActionLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActionLogRepository for PgActionLogRepository {
    #[instrument(skip(self))]
    async fn append(
        &self,
        chat_id: ChatId,
        identifier: &str,
        action: ModerationAction,
        reason: Option<&str>,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO action_logs (chat_id, user_identifier, action, reason)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(chat_id.into_inner())
        .bind(identifier)
        .bind(action.as_str())
        .bind(reason)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_chat(&self, chat_id: ChatId) -> RepoResult<Vec<ActionLogEntry>> {
        let results = sqlx::query_as::<_, ActionLogModel>(
            r"
            SELECT id, chat_id, user_identifier, action, reason, created_at
            FROM action_logs
            WHERE chat_id = $1
            ORDER BY id
            ",
        )
        .bind(chat_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(ActionLogEntry::try_from).collect()
    }
}
