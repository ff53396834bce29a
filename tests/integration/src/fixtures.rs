//! Update payloads as the platform sends them

use serde_json::{json, Value};
use std::sync::atomic::{AtomicI64, Ordering};

/// Counter for unique update ids
static UPDATE_ID: AtomicI64 = AtomicI64::new(1);

fn next_update_id() -> i64 {
    UPDATE_ID.fetch_add(1, Ordering::SeqCst)
}

/// User object
pub fn user(id: i64, username: Option<&str>) -> Value {
    let mut user = json!({"id": id, "is_bot": false, "first_name": format!("User {id}")});
    if let Some(username) = username {
        user["username"] = json!(username);
    }
    user
}

fn wrap(message: Value) -> Value {
    json!({"update_id": next_update_id(), "message": message})
}

/// Text message in a supergroup
pub fn group_text(chat_id: i64, from: Value, text: &str) -> Value {
    wrap(json!({
        "message_id": 1,
        "date": 1_700_000_000,
        "from": from,
        "chat": {"id": chat_id, "type": "supergroup", "title": "Test group"},
        "text": text,
    }))
}

/// Service message announcing new members
pub fn members_joined(chat_id: i64, added_by: Value, members: Vec<Value>) -> Value {
    wrap(json!({
        "message_id": 2,
        "date": 1_700_000_000,
        "from": added_by,
        "chat": {"id": chat_id, "type": "supergroup", "title": "Test group"},
        "new_chat_members": members,
    }))
}

/// Document sent in a private chat
pub fn private_document(from: Value, file_id: &str, mime_type: &str) -> Value {
    let chat_id = from["id"].clone();
    wrap(json!({
        "message_id": 3,
        "date": 1_700_000_000,
        "from": from,
        "chat": {"id": chat_id, "type": "private"},
        "document": {"file_id": file_id, "file_name": "allowed.txt", "mime_type": mime_type},
    }))
}
