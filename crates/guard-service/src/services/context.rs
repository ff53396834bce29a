//! Service context - dependency container for services
//!
//! Holds the stores, the platform client and the moderation settings.

use std::sync::Arc;

use guard_common::ModerationConfig;
use guard_core::{ActionLogRepository, AllowListRepository, MemberRepository, PlatformClient};

/// Service context containing all dependencies
///
/// Built once at startup and cloned into request handlers and background
/// tasks; clones share the same stores.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    allow_list_repo: Arc<dyn AllowListRepository>,
    member_repo: Arc<dyn MemberRepository>,
    action_log_repo: Arc<dyn ActionLogRepository>,

    // Platform
    platform: Arc<dyn PlatformClient>,

    // Settings
    moderation: ModerationConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        allow_list_repo: Arc<dyn AllowListRepository>,
        member_repo: Arc<dyn MemberRepository>,
        action_log_repo: Arc<dyn ActionLogRepository>,
        platform: Arc<dyn PlatformClient>,
        moderation: ModerationConfig,
    ) -> Self {
        Self {
            allow_list_repo,
            member_repo,
            action_log_repo,
            platform,
            moderation,
        }
    }

    // === Repositories ===

    pub fn allow_list_repo(&self) -> &dyn AllowListRepository {
        self.allow_list_repo.as_ref()
    }

    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    pub fn action_log_repo(&self) -> &dyn ActionLogRepository {
        self.action_log_repo.as_ref()
    }

    // === Platform ===

    pub fn platform(&self) -> &dyn PlatformClient {
        self.platform.as_ref()
    }

    // === Settings ===

    pub fn moderation(&self) -> &ModerationConfig {
        &self.moderation
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("platform", &"...")
            .field("moderation", &self.moderation)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    allow_list_repo: Option<Arc<dyn AllowListRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    action_log_repo: Option<Arc<dyn ActionLogRepository>>,
    platform: Option<Arc<dyn PlatformClient>>,
    moderation: Option<ModerationConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_list_repo(mut self, repo: Arc<dyn AllowListRepository>) -> Self {
        self.allow_list_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn action_log_repo(mut self, repo: Arc<dyn ActionLogRepository>) -> Self {
        self.action_log_repo = Some(repo);
        self
    }

    pub fn platform(mut self, platform: Arc<dyn PlatformClient>) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Moderation settings; defaults apply when not set
    pub fn moderation(mut self, config: ModerationConfig) -> Self {
        self.moderation = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.allow_list_repo
                .ok_or_else(|| ServiceError::validation("allow_list_repo is required"))?,
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.action_log_repo
                .ok_or_else(|| ServiceError::validation("action_log_repo is required"))?,
            self.platform
                .ok_or_else(|| ServiceError::validation("platform is required"))?,
            self.moderation.unwrap_or_default(),
        ))
    }
}
