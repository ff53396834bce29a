//! Telegram Bot API adapter
//!
//! Wire types for incoming updates and an HTTP client implementing the
//! platform port.

mod client;
mod types;

pub use client::{FileDownloader, TelegramClient};
pub use types::{BotCommand, Chat, Document, File, Message, TelegramResponse, Update, User};
