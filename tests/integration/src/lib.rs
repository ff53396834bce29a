//! Integration test utilities for chat-guard
//!
//! Runs the webhook server against a local stand-in for the Telegram Bot
//! API, so whole update flows can be driven over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
