//! Allow-list database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for allowed_users table
#[derive(Debug, Clone, FromRow)]
pub struct AllowedUserModel {
    pub id: i64,
    pub user_identifier: String,
    pub created_at: DateTime<Utc>,
}
