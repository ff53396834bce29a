//! Action log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for action_logs table
#[derive(Debug, Clone, FromRow)]
pub struct ActionLogModel {
    pub id: i64,
    pub chat_id: i64,
    pub user_identifier: String,
    /// One of `banned`, `already_left`, `ban_failed`
    pub action: String,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}
