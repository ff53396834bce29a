//! Database models - SQLx-compatible structs for PostgreSQL tables

mod action_log;
mod allowed_user;
mod member;

pub use action_log::ActionLogModel;
pub use allowed_user::AllowedUserModel;
pub use member::MemberModel;
