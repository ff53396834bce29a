//! PostgreSQL implementation of AllowListRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use guard_core::{AllowListRepository, RepoResult};

use crate::models::AllowedUserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AllowListRepository
#[derive(Clone)]
pub struct PgAllowListRepository {
    pool: PgPool,
}

impl PgAllowListRepository {
    /// Create a new PgAllowListRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AllowListRepository for PgAllowListRepository {
    #[instrument(skip(self, identifiers), fields(count = identifiers.len()))]
    async fn replace_all(&self, identifiers: &[String]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM allowed_users")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if !identifiers.is_empty() {
            // BIGSERIAL ids follow ordinality, so list_all reads back upload order
            sqlx::query(
                r"
                INSERT INTO allowed_users (user_identifier)
                SELECT entry FROM UNNEST($1::text[]) WITH ORDINALITY AS t(entry, ord)
                ORDER BY ord
                ",
            )
            .bind(identifiers)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        info!(count = identifiers.len(), "Allow-list replaced");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<String>> {
        let results = sqlx::query_as::<_, AllowedUserModel>(
            r"
            SELECT id, user_identifier, created_at
            FROM allowed_users
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(|m| m.user_identifier).collect())
    }
}
