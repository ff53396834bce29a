//! Test helpers for integration tests
//!
//! Provides a fake Bot API, a test server bound to a local port, and
//! polling helpers for the asynchronously processed updates.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use guard_bot::{create_app, create_app_state};
use guard_common::AppConfig;
use parking_lot::Mutex;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Bind an axum app to an ephemeral local port
async fn serve(app: Router) -> Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    Ok((addr, handle))
}

#[derive(Default)]
struct FakeState {
    calls: Vec<(String, Value)>,
    files: HashMap<String, Vec<u8>>,
    ban_errors: HashMap<i64, String>,
}

type Shared = Arc<Mutex<FakeState>>;

/// Local stand-in for the Telegram Bot API that records every call
pub struct FakeBotApi {
    pub addr: SocketAddr,
    state: Shared,
    _handle: JoinHandle<()>,
}

impl FakeBotApi {
    pub async fn start() -> Result<Self> {
        let state = Shared::default();
        let app = Router::new()
            .route("/:token/:method", post(method))
            .route("/file/:token/*path", get(file))
            .with_state(state.clone());
        let (addr, handle) = serve(app).await?;

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Serve `content` for `file_id`
    pub fn put_file(&self, file_id: &str, content: &[u8]) {
        self.state
            .lock()
            .files
            .insert(file_id.to_string(), content.to_vec());
    }

    /// Answer bans of `user_id` with an error description
    pub fn fail_ban(&self, user_id: i64, description: &str) {
        self.state
            .lock()
            .ban_errors
            .insert(user_id, description.to_string());
    }

    /// Bodies of every call to `method`, in order
    pub fn calls(&self, method: &str) -> Vec<Value> {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|(m, _)| m == method)
            .map(|(_, body)| body.clone())
            .collect()
    }

    /// Texts of every message sent to `chat_id`
    pub fn messages_to(&self, chat_id: i64) -> Vec<String> {
        self.calls("sendMessage")
            .into_iter()
            .filter(|body| body["chat_id"] == chat_id)
            .filter_map(|body| body["text"].as_str().map(str::to_string))
            .collect()
    }

    /// User ids of every ban call, in order
    pub fn banned_ids(&self) -> Vec<i64> {
        self.calls("banChatMember")
            .into_iter()
            .filter_map(|body| body["user_id"].as_i64())
            .collect()
    }
}

async fn method(
    State(state): State<Shared>,
    Path((_token, method)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock();
    state.calls.push((method.clone(), body.clone()));

    match method.as_str() {
        "banChatMember" => {
            let user_id = body["user_id"].as_i64().unwrap_or_default();
            match state.ban_errors.get(&user_id) {
                Some(description) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"ok": false, "error_code": 400, "description": description})),
                ),
                None => (StatusCode::OK, Json(json!({"ok": true, "result": true}))),
            }
        }
        "getFile" => {
            let file_id = body["file_id"].as_str().unwrap_or_default().to_string();
            (
                StatusCode::OK,
                Json(json!({"ok": true, "result": {"file_id": file_id, "file_path": format!("documents/{file_id}")}})),
            )
        }
        "sendMessage" => (
            StatusCode::OK,
            Json(json!({"ok": true, "result": {"message_id": 1, "chat": {"id": body["chat_id"], "type": "private"}}})),
        ),
        _ => (StatusCode::OK, Json(json!({"ok": true, "result": true}))),
    }
}

async fn file(
    State(state): State<Shared>,
    Path((_token, path)): Path<(String, String)>,
) -> (StatusCode, Vec<u8>) {
    let file_id = path.trim_start_matches("documents/");
    match state.lock().files.get(file_id) {
        Some(content) => (StatusCode::OK, content.clone()),
        None => (StatusCode::NOT_FOUND, Vec::new()),
    }
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with in-memory stores talking to `api`
    pub async fn start(api: &FakeBotApi, extra: &[(&str, &str)]) -> Result<Self> {
        let config = test_config(api, extra)?;
        let state = create_app_state(config).await?;
        let (addr, handle) = serve(create_app(state)).await?;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Deliver an update to the webhook
    pub async fn deliver(&self, update: &Value) -> Result<Response> {
        self.deliver_with_secret(update, None).await
    }

    /// Deliver an update with an optional secret header
    pub async fn deliver_with_secret(&self, update: &Value, secret: Option<&str>) -> Result<Response> {
        let url = format!("{}/telegram/webhook", self.base_url());
        let mut request = self.client.post(&url).json(update);
        if let Some(secret) = secret {
            request = request.header("x-telegram-bot-api-secret-token", secret);
        }
        Ok(request.send().await?)
    }
}

/// Configuration for a memory-backed server pointed at the fake API
pub fn test_config(api: &FakeBotApi, extra: &[(&str, &str)]) -> Result<AppConfig> {
    let mut vars: HashMap<String, String> = extra
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    vars.insert("BOT_TOKEN".to_string(), "123456:TEST".to_string());
    vars.insert("TELEGRAM_API_URL".to_string(), api.base_url());
    vars.entry("BAN_PACING_MS".to_string())
        .or_insert_with(|| "0".to_string());

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Poll `check` until it holds or two seconds pass
pub async fn eventually<F>(mut check: F) -> bool
where
    F: FnMut() -> bool,
{
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    check()
}
