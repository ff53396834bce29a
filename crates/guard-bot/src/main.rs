//! chat-guard entry point
//!
//! Run with:
//! ```bash
//! BOT_TOKEN=... cargo run -p guard-bot
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env`.

use guard_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration first: it decides the log format
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::from_settings(&config.app)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.server.port,
        database = config.database.url.is_some(),
        auto_clean = config.moderation.auto_clean,
        "Configuration loaded"
    );

    guard_bot::run(config).await?;

    Ok(())
}
