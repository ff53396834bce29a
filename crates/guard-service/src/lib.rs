//! # guard-service
//!
//! Application layer: the unauthorized filter, the ban executor, and the
//! workflows that compose them (allow-list ingestion, join handling, sweeps).

pub mod dto;
pub mod services;

pub use dto::{HealthResponse, ReadinessResponse, SweepReport};
pub use services::{
    filter_unauthorized, parse_allow_list, spawn_periodic_sweeper, AllowListService, BanService,
    ModerationService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
