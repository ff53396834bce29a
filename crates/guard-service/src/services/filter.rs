//! Unauthorized filter
//!
//! Pure selection step between the stores and the ban executor.

use guard_core::{AllowSet, BanCandidate, MemberIdentity};
use tracing::warn;

/// Select the members no allow-list entry matches
///
/// Members whose ID does not parse as an integer cannot be banned and are
/// skipped with a warning. Output keeps input order.
pub fn filter_unauthorized(members: &[MemberIdentity], allowed: &AllowSet) -> Vec<BanCandidate> {
    members
        .iter()
        .filter(|member| !allowed.permits(member))
        .filter_map(|member| match member.numeric_id() {
            Some(user_id) => Some(BanCandidate::new(
                user_id,
                member.display_identifier(user_id),
            )),
            None => {
                warn!(user_id = ?member.user_id, username = ?member.username, "Skipping member without a usable id");
                None
            }
        })
        .collect()
}
