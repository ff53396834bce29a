//! # guard-bot
//!
//! Telegram webhook server built with Axum. Receives platform updates,
//! dispatches them to the moderation workflows and exposes health probes.

pub mod dispatcher;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod telegram;

pub use server::{create_app, create_app_state, run};
