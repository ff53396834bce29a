//! Data transfer objects returned by the workflows and probes

mod responses;

pub use responses::{HealthChecks, HealthResponse, ReadinessResponse, SweepReport};
