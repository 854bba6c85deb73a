//! Ownership and access request rules.
//!
//! Both rules return an optional [`Access`] fragment; the parent transformer
//! merges whatever fires.

use tracing::warn;

use crate::model::legacy::{LegacyParentJson, OwnerId};
use crate::model::target::{Access, AccessSettings};

/// Lifetime of secret links created for records with access conditions.
pub const SECRET_LINK_EXPIRATION_DAYS: u32 = 30;

/// Resolve the single owner of a parent.
///
/// `owners` is consulted first and `_deposit.owners` only when `owners` is
/// missing or empty. The first slot of the chosen list wins; a `null` first
/// slot means no owner. The parent schema holds one owner, so any further
/// owners are dropped.
pub fn resolve_owner(json: &LegacyParentJson) -> Option<OwnerId> {
    let owners = non_empty(json.owners.as_deref())
        .or_else(|| non_empty(json.deposit.as_ref()?.owners.as_deref()))?;

    let first = &owners[0];
    if owners.len() > 1 {
        warn!(
            kept = ?first,
            dropped = owners.len() - 1,
            "legacy entry has several owners, keeping the first"
        );
    }

    first.clone()
}

fn non_empty(owners: Option<&[Option<OwnerId>]>) -> Option<&[Option<OwnerId>]> {
    owners.filter(|o| !o.is_empty())
}

/// Owner fragment.
pub fn ownership(json: &LegacyParentJson) -> Option<Access> {
    resolve_owner(json).map(Access::owned_by)
}

/// Access request settings for records with legacy access conditions.
pub fn settings_for(json: &LegacyParentJson) -> Option<AccessSettings> {
    let text = json.access_conditions.as_deref().filter(|t| !t.is_empty())?;
    Some(AccessSettings {
        allow_user_requests: true,
        allow_guest_requests: true,
        accept_conditions_text: text.to_string(),
        secret_link_expiration: SECRET_LINK_EXPIRATION_DAYS,
    })
}

/// Settings fragment.
pub fn settings(json: &LegacyParentJson) -> Option<Access> {
    settings_for(json).map(Access::with_settings)
}
