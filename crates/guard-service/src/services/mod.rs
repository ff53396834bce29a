//! Moderation services
//!
//! Services borrow a `ServiceContext` and are cheap to construct per call.

pub mod allow_list;
pub mod ban;
pub mod context;
pub mod error;
pub mod filter;
pub mod moderation;
pub mod scheduler;

#[cfg(test)]
pub(crate) mod testing;

pub use allow_list::{parse_allow_list, AllowListService};
pub use ban::BanService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use filter::filter_unauthorized;
pub use moderation::ModerationService;
pub use scheduler::spawn_periodic_sweeper;
