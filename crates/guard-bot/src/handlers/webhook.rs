//! Telegram webhook handler

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use guard_common::AppError;
use tracing::{debug, warn};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;
use crate::telegram::Update;

/// Header Telegram echoes the configured webhook secret in
pub const SECRET_HEADER: &str = "x-telegram-bot-api-secret-token";

/// Receive an update
///
/// POST /telegram/webhook
///
/// Acknowledges as soon as the update parses; processing continues on a
/// spawned task so slow bans never hold the platform's request open.
pub async fn telegram_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<StatusCode> {
    if let Some(expected) = state.config().telegram.webhook_secret.as_deref() {
        let provided = headers.get(SECRET_HEADER).and_then(|v| v.to_str().ok());
        if provided != Some(expected) {
            warn!("Rejected webhook call with a wrong secret");
            return Err(AppError::InvalidWebhookSecret.into());
        }
    }

    let update: Update =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidPayload(e.to_string()))?;
    debug!(update_id = update.update_id, "Update accepted");

    let dispatcher = state.dispatcher();
    tokio::spawn(async move {
        dispatcher.dispatch(update).await;
    });

    Ok(StatusCode::OK)
}
