//! ActionLogEntry entity <-> model mapper

use guard_core::{ActionLogEntry, ChatId, DomainError, ModerationAction};

use crate::models::ActionLogModel;

impl TryFrom<ActionLogModel> for ActionLogEntry {
    type Error = DomainError;

    fn try_from(model: ActionLogModel) -> Result<Self, Self::Error> {
        let action = model
            .action
            .parse::<ModerationAction>()
            .map_err(|e| DomainError::InvalidAction(e.0))?;

        Ok(ActionLogEntry {
            chat_id: ChatId::new(model.chat_id),
            user_identifier: model.user_identifier,
            action,
            reason: model.reason,
            created_at: model.created_at,
        })
    }
}
