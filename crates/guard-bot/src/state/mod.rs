//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the update dispatcher and the configuration.

use std::sync::Arc;

use guard_common::AppConfig;
use guard_db::PgPool;
use guard_service::ServiceContext;

use crate::dispatcher::UpdateDispatcher;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    dispatcher: Arc<UpdateDispatcher>,
    /// Present only when the stores are backed by PostgreSQL
    pool: Option<PgPool>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        dispatcher: UpdateDispatcher,
        pool: Option<PgPool>,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            dispatcher: Arc::new(dispatcher),
            pool,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Shared handle to the dispatcher, for spawned update tasks
    pub fn dispatcher(&self) -> Arc<UpdateDispatcher> {
        Arc::clone(&self.dispatcher)
    }

    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("config", &"AppConfig")
            .finish()
    }
}
