//! Response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Moderation Responses
// ============================================================================

/// Outcome of sweeping one chat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Known members examined
    pub checked: usize,
    /// Members the filter found unauthorized
    pub to_ban: usize,
    /// Bans the platform accepted
    pub banned: usize,
}

impl SweepReport {
    /// Text sent back to the chat that asked for the sweep
    pub fn summary(&self) -> String {
        format!(
            "Checked: {}. Found: {}. Banned: {}.",
            self.checked, self.to_ban, self.banned
        )
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    /// `healthy`, `unhealthy`, or `in_memory` when no database is configured
    pub database: String,
}

impl ReadinessResponse {
    /// `database` is `None` when the stores are in memory
    pub fn ready(database: Option<bool>) -> Self {
        let (ready, database) = match database {
            Some(true) => (true, "healthy"),
            Some(false) => (false, "unhealthy"),
            None => (true, "in_memory"),
        };
        Self {
            status: if ready { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: database.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
