//! Server setup and initialization
//!
//! Wires the stores, the platform client and the services together and runs
//! the webhook server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use guard_common::{AppConfig, AppError};
use guard_core::{ActionLogRepository, AllowListRepository, MemberRepository};
use guard_db::{
    create_pool, run_migrations, InMemoryActionLogRepository, InMemoryAllowListRepository,
    InMemoryMemberRepository, PgActionLogRepository, PgAllowListRepository, PgMemberRepository,
    PgPool,
};
use guard_service::{spawn_periodic_sweeper, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::dispatcher::UpdateDispatcher;
use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;
use crate::telegram::{BotCommand, TelegramClient};

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

struct Stores {
    allow_list: Arc<dyn AllowListRepository>,
    members: Arc<dyn MemberRepository>,
    action_log: Arc<dyn ActionLogRepository>,
    pool: Option<PgPool>,
}

/// PostgreSQL stores when a database is configured, in-memory otherwise
async fn create_stores(config: &AppConfig) -> Result<Stores, AppError> {
    let Some(url) = config.database.url.clone() else {
        warn!("DATABASE_URL is not set, using in-memory stores; state is lost on restart");
        return Ok(Stores {
            allow_list: Arc::new(InMemoryAllowListRepository::new()),
            members: Arc::new(InMemoryMemberRepository::new()),
            action_log: Arc::new(InMemoryActionLogRepository::new()),
            pool: None,
        });
    };

    info!("Connecting to PostgreSQL...");
    let db_config = guard_db::DatabaseConfig {
        url,
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    Ok(Stores {
        allow_list: Arc::new(PgAllowListRepository::new(pool.clone())),
        members: Arc::new(PgMemberRepository::new(pool.clone())),
        action_log: Arc::new(PgActionLogRepository::new(pool.clone())),
        pool: Some(pool),
    })
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let telegram = Arc::new(TelegramClient::new(&config.telegram)?);
    create_app_state_with_client(config, telegram).await
}

/// Same as [`create_app_state`] with an already-built platform client
pub async fn create_app_state_with_client(
    config: AppConfig,
    telegram: Arc<TelegramClient>,
) -> Result<AppState, AppError> {
    let stores = create_stores(&config).await?;

    let service_context = ServiceContextBuilder::new()
        .allow_list_repo(stores.allow_list)
        .member_repo(stores.members)
        .action_log_repo(stores.action_log)
        .platform(telegram.clone())
        .moderation(config.moderation.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let dispatcher = UpdateDispatcher::new(service_context.clone(), telegram);

    Ok(AppState::new(service_context, dispatcher, stores.pool, config))
}

/// Register the command menu; failure only costs the menu
async fn register_commands(telegram: &TelegramClient) {
    let commands = [
        BotCommand::new("start", "How to use this bot"),
        BotCommand::new("clean", "Ban known members not on the allow-list"),
    ];
    match telegram.set_my_commands(&commands).await {
        Ok(()) => info!("Bot commands registered"),
        Err(e) => warn!(error = %e, "Failed to register bot commands"),
    }
}

/// Run the HTTP server until Ctrl-C
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::internal)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let telegram = Arc::new(TelegramClient::new(&config.telegram)?);
    register_commands(&telegram).await;

    let state = create_app_state_with_client(config, telegram).await?;

    let moderation = state.config().moderation.clone();
    let _sweeper = moderation.auto_clean.then(|| {
        spawn_periodic_sweeper(state.service_context().clone(), moderation.check_interval())
    });

    let app = create_app(state);
    run_server(app, addr).await
}
