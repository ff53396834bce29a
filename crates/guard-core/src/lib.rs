//! # guard-core
//!
//! Domain layer containing moderation entities, identifier normalization,
//! store traits, and the platform port.
//! This crate has zero dependencies on infrastructure (database, HTTP, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{ActionLogEntry, BanCandidate, ChatUser, MemberRecord, ModerationAction};
pub use error::{DomainError, PlatformError};
pub use traits::{
    ActionLogRepository, AllowListRepository, MemberRepository, PlatformClient, RepoResult,
};
pub use value_objects::{AllowSet, ChatId, ChatIdParseError, MemberIdentity};
