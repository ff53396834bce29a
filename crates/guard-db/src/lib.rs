//! # guard-db
//!
//! Store implementations for the repository traits defined in `guard-core`.
//!
//! ## Overview
//!
//! - PostgreSQL repositories via SQLx, with connection pool management and
//!   an embedded schema
//! - In-memory repositories with the same contracts, used when no database
//!   is configured and as test doubles
//!
//! ## Usage
//!
//! ```rust,ignore
//! use guard_db::{create_pool, run_migrations, DatabaseConfig, PgMemberRepository};
//! use guard_core::MemberRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let members = PgMemberRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{InMemoryActionLogRepository, InMemoryAllowListRepository, InMemoryMemberRepository};
pub use pool::{create_pool, create_pool_from_env, health_check, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgActionLogRepository, PgAllowListRepository, PgMemberRepository};
