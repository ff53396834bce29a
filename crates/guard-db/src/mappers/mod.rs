//! Model to entity mappers
//!
//! - `From<Model> for Entity` where every row maps cleanly
//! - `TryFrom<Model> for Entity` where a row can hold values the domain rejects

mod action_log;
mod member;
