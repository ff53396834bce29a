//! Chat ID - the platform's signed 64-bit chat identifier
//!
//! Group chats carry negative IDs on most platforms, so the full `i64`
//! range is valid and zero is the only reserved value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Platform chat identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ChatId(i64);

impl ChatId {
    /// Create a new ChatId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the ChatId is zero (uninitialized)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, ChatIdParseError> {
        s.trim()
            .parse::<i64>()
            .map(ChatId)
            .map_err(|_| ChatIdParseError::InvalidFormat(s.to_string()))
    }
}

/// Error when parsing a ChatId from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatIdParseError {
    #[error("invalid chat id: {0:?}")]
    InvalidFormat(String),
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ChatId> for i64 {
    fn from(id: ChatId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ChatId {
    type Err = ChatIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChatId::parse(s)
    }
}

// Platform APIs take chat ids as JSON numbers
impl Serialize for ChatId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

// Deserialize from number or numeric string
impl<'de> Deserialize<'de> for ChatId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ChatIdVisitor;

        impl Visitor<'_> for ChatIdVisitor {
            type Value = ChatId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or numeric string chat id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<ChatId, E>
            where
                E: de::Error,
            {
                Ok(ChatId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<ChatId, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(ChatId)
                    .map_err(|_| de::Error::custom("chat id out of range"))
            }

            fn visit_str<E>(self, value: &str) -> Result<ChatId, E>
            where
                E: de::Error,
            {
                ChatId::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(ChatIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_group_id() {
        let id = ChatId::parse("-1001234567890").unwrap();
        assert_eq!(id.into_inner(), -1_001_234_567_890);
        assert_eq!(id.to_string(), "-1001234567890");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ChatId::parse("group").is_err());
        assert!(ChatId::parse("").is_err());
        assert!("12a".parse::<ChatId>().is_err());
    }

    #[test]
    fn test_serde_accepts_number_and_string() {
        let from_number: ChatId = serde_json::from_str("-42").unwrap();
        let from_string: ChatId = serde_json::from_str("\"-42\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "-42");
    }

    #[test]
    fn test_is_zero() {
        assert!(ChatId::default().is_zero());
        assert!(!ChatId::new(-5).is_zero());
    }
}
