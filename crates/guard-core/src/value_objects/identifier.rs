//! Identifier normalization
//!
//! Allow-list entries and chat members are both reduced to sets of
//! comparable strings. A member is authorized when the two sets intersect:
//!
//! - `@Handle` entries contribute `@handle` and `handle`
//! - all-digit entries (numeric user IDs) are kept as given
//! - anything else is case-folded
//!
//! A member contributes `@username`, `username` (both lowercased) and its
//! numeric ID, so either form on either side produces a match.

use std::collections::HashSet;

/// Check whether `s` is a non-empty run of ASCII digits
#[inline]
pub fn is_numeric_id(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Normalized set of identifiers permitted by the allow-list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowSet(HashSet<String>);

impl AllowSet {
    /// Normalize raw allow-list entries
    ///
    /// Entries are trimmed; blank entries are ignored.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();

        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }

            if let Some(handle) = entry.strip_prefix('@') {
                set.insert(entry.to_lowercase());
                let bare = handle.to_lowercase();
                if !bare.is_empty() {
                    set.insert(bare);
                }
            } else if is_numeric_id(entry) {
                set.insert(entry.to_string());
            } else {
                set.insert(entry.to_lowercase());
            }
        }

        Self(set)
    }

    /// Check a single normalized identifier
    #[inline]
    pub fn contains(&self, identifier: &str) -> bool {
        self.0.contains(identifier)
    }

    /// Check whether any of the member's identifiers is allowed
    pub fn permits(&self, member: &MemberIdentity) -> bool {
        member
            .identifiers()
            .iter()
            .any(|identifier| self.0.contains(identifier))
    }

    /// Number of normalized identifiers
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The `{user_id, username}` shape every member source is reduced to
/// before matching
///
/// `user_id` is kept as text: persisted rows may hold values that do not
/// parse as integers, and the filter has to see them to skip them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberIdentity {
    pub user_id: Option<String>,
    pub username: Option<String>,
}

impl MemberIdentity {
    /// Create an identity from a user ID and optional username
    pub fn new(user_id: impl Into<String>, username: Option<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            username,
        }
    }

    /// Username, treating an empty string as absent
    fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }

    /// All identifiers this member can be matched by
    ///
    /// Empty when the member has neither a username nor an ID.
    pub fn identifiers(&self) -> HashSet<String> {
        let mut identifiers = HashSet::new();

        if let Some(username) = self.username() {
            let lowered = username.to_lowercase();
            identifiers.insert(format!("@{lowered}"));
            identifiers.insert(lowered);
        }

        if let Some(user_id) = &self.user_id {
            identifiers.insert(user_id.clone());
        }

        identifiers
    }

    /// Integer user ID, if the stored ID parses as one
    pub fn numeric_id(&self) -> Option<i64> {
        self.user_id.as_deref()?.trim().parse().ok()
    }

    /// Identifier used in logs and reports: `@username` when known,
    /// otherwise the numeric ID
    pub fn display_identifier(&self, numeric_id: i64) -> String {
        match self.username() {
            Some(username) => format!("@{username}"),
            None => numeric_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_entry_adds_both_forms() {
        let set = AllowSet::from_entries(["@Masha123"]);
        assert!(set.contains("@masha123"));
        assert!(set.contains("masha123"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_numeric_entry_preserved() {
        let set = AllowSet::from_entries(["987654321"]);
        assert!(set.contains("987654321"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_plain_entry_case_folded() {
        let set = AllowSet::from_entries(["Bob_The_Builder"]);
        assert!(set.contains("bob_the_builder"));
        assert!(!set.contains("Bob_The_Builder"));
        assert!(!set.contains("@bob_the_builder"));
    }

    #[test]
    fn test_blank_entries_ignored() {
        let set = AllowSet::from_entries(["", "   ", "\t"]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_entries_are_trimmed() {
        let set = AllowSet::from_entries(["  @Liza  ", " 42 "]);
        assert!(set.contains("@liza"));
        assert!(set.contains("liza"));
        assert!(set.contains("42"));
    }

    #[test]
    fn test_lone_at_sign_adds_no_bare_handle() {
        let set = AllowSet::from_entries(["@"]);
        assert!(set.contains("@"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = AllowSet::from_entries(["@liza", "@LIZA", "liza"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_identity_with_username_and_id() {
        let identity = MemberIdentity::new("42", Some("GoodUser".to_string()));
        let identifiers = identity.identifiers();
        assert!(identifiers.contains("@gooduser"));
        assert!(identifiers.contains("gooduser"));
        assert!(identifiers.contains("42"));
        assert_eq!(identifiers.len(), 3);
    }

    #[test]
    fn test_identity_without_fields_is_empty() {
        assert!(MemberIdentity::default().identifiers().is_empty());

        let blank_username = MemberIdentity {
            user_id: None,
            username: Some(String::new()),
        };
        assert!(blank_username.identifiers().is_empty());
    }

    #[test]
    fn test_permits_matches_either_form() {
        let set = AllowSet::from_entries(["gooduser", "77"]);

        let by_name = MemberIdentity::new("1", Some("GOODUSER".to_string()));
        let by_id = MemberIdentity::new("77", None);
        let stranger = MemberIdentity::new("2", Some("stranger".to_string()));

        assert!(set.permits(&by_name));
        assert!(set.permits(&by_id));
        assert!(!set.permits(&stranger));
    }

    #[test]
    fn test_numeric_id_parsing() {
        assert_eq!(MemberIdentity::new("42", None).numeric_id(), Some(42));
        assert_eq!(MemberIdentity::new(" 7 ", None).numeric_id(), Some(7));
        assert_eq!(MemberIdentity::new("abc", None).numeric_id(), None);
        assert_eq!(MemberIdentity::default().numeric_id(), None);
    }

    #[test]
    fn test_display_identifier_prefers_username() {
        let named = MemberIdentity::new("42", Some("Masha".to_string()));
        assert_eq!(named.display_identifier(42), "@Masha");

        let anonymous = MemberIdentity::new("42", None);
        assert_eq!(anonymous.display_identifier(42), "42");
    }

    #[test]
    fn test_is_numeric_id() {
        assert!(is_numeric_id("0123"));
        assert!(!is_numeric_id(""));
        assert!(!is_numeric_id("-5"));
        assert!(!is_numeric_id("12a"));
    }
}
