//! MemberRecord entity <-> model mapper

use guard_core::{ChatId, MemberRecord};

use crate::models::MemberModel;

impl From<MemberModel> for MemberRecord {
    fn from(model: MemberModel) -> Self {
        MemberRecord {
            chat_id: ChatId::new(model.chat_id),
            user_id: model.user_id,
            username: model.username,
            last_seen: model.last_seen,
        }
    }
}
