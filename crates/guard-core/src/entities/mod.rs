//! Domain entities - core moderation objects

mod action_log;
mod candidate;
mod chat_user;
mod member;

pub use action_log::{ActionLogEntry, ModerationAction, ModerationActionParseError};
pub use candidate::BanCandidate;
pub use chat_user::ChatUser;
pub use member::MemberRecord;
