//! Member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub chat_id: i64,
    pub user_id: String,
    pub username: Option<String>,
    pub last_seen: DateTime<Utc>,
}
