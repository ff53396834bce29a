//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in guard-core.

mod action_log;
mod allow_list;
mod error;
mod member;

pub use action_log::PgActionLogRepository;
pub use allow_list::PgAllowListRepository;
pub use member::PgMemberRepository;
