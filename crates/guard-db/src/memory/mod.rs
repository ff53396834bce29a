//! In-memory repositories
//!
//! Same contracts as the PostgreSQL repositories, backed by `parking_lot`
//! locks. Used when no `DATABASE_URL` is configured and as test doubles.

mod action_log;
mod allow_list;
mod member;

pub use action_log::InMemoryActionLogRepository;
pub use allow_list::InMemoryAllowListRepository;
pub use member::InMemoryMemberRepository;
