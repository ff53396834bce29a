//! Platform errors - outcomes of calls into the chat platform

use thiserror::Error;

/// Lowercased description fragments meaning the user is not in the chat
const NOT_PARTICIPANT_MARKERS: [&str; 3] =
    ["user_not_participant", "user not participant", "user not found"];

/// Error returned by a `PlatformClient` call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The user is not (or no longer) a member of the chat
    #[error("User is not a participant: {0}")]
    NotParticipant(String),

    /// The platform rejected the call
    #[error("Platform API error {code}: {description}")]
    Api { code: i32, description: String },

    /// The call never got a platform answer
    #[error("Platform transport error: {0}")]
    Transport(String),
}

impl PlatformError {
    /// Classify a platform error answer by its description
    pub fn from_api(code: i32, description: impl Into<String>) -> Self {
        let description = description.into();
        let lowered = description.to_lowercase();

        if NOT_PARTICIPANT_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker))
        {
            Self::NotParticipant(description)
        } else {
            Self::Api { code, description }
        }
    }

    /// Create a transport error from any displayable error
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// Check if the user is already gone from the chat
    pub fn is_not_participant(&self) -> bool {
        matches!(self, Self::NotParticipant(_))
    }

    /// Get an error code string for logs and API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotParticipant(_) => "NOT_PARTICIPANT",
            Self::Api { .. } => "PLATFORM_API_ERROR",
            Self::Transport(_) => "PLATFORM_TRANSPORT_ERROR",
        }
    }
}
