//! Ports - interfaces the domain needs from the outside world

mod platform;
mod repositories;

pub use platform::PlatformClient;
pub use repositories::{ActionLogRepository, AllowListRepository, MemberRepository, RepoResult};
