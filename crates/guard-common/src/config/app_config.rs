//! Application configuration structs
//!
//! Loads configuration from environment variables (and an optional `.env` file).

use guard_core::ChatId;
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub telegram: TelegramConfig,
    pub moderation: ModerationConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Webhook server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
///
/// Without a URL the service runs on in-memory stores.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Telegram Bot API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Expected value of the webhook secret header, if any
    pub webhook_secret: Option<String>,
}

/// Moderation engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ModerationConfig {
    /// Chat that receives ban-failure notices; its user is also the only
    /// one allowed to run `/clean`
    pub admin_chat_id: Option<ChatId>,
    #[serde(default = "default_ban_pacing_ms")]
    pub ban_pacing_ms: u64,
    #[serde(default = "default_check_interval_seconds")]
    pub check_interval_seconds: u64,
    /// Sweep every known chat on `check_interval_seconds`
    #[serde(default)]
    pub auto_clean: bool,
}

impl ModerationConfig {
    /// Delay after each successful ban
    #[must_use]
    pub fn ban_pacing(&self) -> Duration {
        Duration::from_millis(self.ban_pacing_ms)
    }

    /// Interval between periodic sweeps
    #[must_use]
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_seconds)
    }
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            admin_chat_id: None,
            ban_pacing_ms: default_ban_pacing_ms(),
            check_interval_seconds: default_check_interval_seconds(),
            auto_clean: false,
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "chat-guard".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_ban_pacing_ms() -> u64 {
    200
}

fn default_check_interval_seconds() -> u64 {
    3600 // 1 hour
}

/// Parse a boolean flag the way operators write them in `.env` files
fn parse_flag(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if required variables are missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        let bot_token = var("BOT_TOKEN").ok_or(ConfigError::MissingVar("BOT_TOKEN"))?;

        let port = match var("HTTP_PORT") {
            Some(s) => s
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT", s))?,
            None => default_port(),
        };

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
                json_logs: var("LOG_FORMAT").is_some_and(|s| s.eq_ignore_ascii_case("json")),
            },
            server: ServerConfig {
                host: var("HTTP_HOST").unwrap_or_else(default_host),
                port,
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL"),
                max_connections: var("DATABASE_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: var("DATABASE_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            telegram: TelegramConfig {
                bot_token,
                api_url: var("TELEGRAM_API_URL").unwrap_or_else(default_api_url),
                webhook_secret: var("WEBHOOK_SECRET"),
            },
            moderation: ModerationConfig {
                // An unparsable admin id disables admin features instead of failing startup
                admin_chat_id: var("ADMIN_CHAT_ID").and_then(|s| ChatId::parse(&s).ok()),
                ban_pacing_ms: var("BAN_PACING_MS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_ban_pacing_ms),
                check_interval_seconds: var("CHECK_INTERVAL_SECONDS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_check_interval_seconds),
                auto_clean: var("AUTO_CLEAN").is_some_and(|s| parse_flag(&s)),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
