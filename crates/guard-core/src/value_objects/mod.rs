//! Value objects - immutable types compared by value

mod chat_id;
mod identifier;

pub use chat_id::{ChatId, ChatIdParseError};
pub use identifier::{is_numeric_id, AllowSet, MemberIdentity};
