//! Community membership rule.

use crate::model::legacy::LegacyParentJson;
use crate::model::target::{Communities, DefaultCommunity};

/// Legacy meta-communities that do not express real membership.
pub const IGNORED_COMMUNITIES: &[&str] = &["zenodo", "ecfunded"];

/// Derive the parent communities from the legacy slug list.
///
/// Ignored slugs are dropped; the rest keep their legacy order, duplicates
/// included. A single remaining slug also becomes the default.
pub fn normalize(json: &LegacyParentJson) -> Communities {
    let Some(slugs) = json.communities.as_deref() else {
        return Communities::Empty;
    };

    let ids: Vec<String> = slugs
        .iter()
        .filter(|slug| !IGNORED_COMMUNITIES.contains(&slug.as_str()))
        .cloned()
        .collect();

    let default = match ids.as_slice() {
        [] => return Communities::Empty,
        [only] => DefaultCommunity::Default(only.clone()),
        _ => DefaultCommunity::NoDefault,
    };

    Communities::Assigned { ids, default }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(slugs: &[&str]) -> LegacyParentJson {
        LegacyParentJson {
            communities: Some(slugs.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn single_slug_becomes_default() {
        let c = normalize(&with(&["zenodo", "physics", "ecfunded"]));
        assert_eq!(
            c,
            Communities::Assigned {
                ids: vec!["physics".into()],
                default: DefaultCommunity::Default("physics".into()),
            }
        );
    }

    #[test]
    fn several_slugs_have_no_default() {
        let c = normalize(&with(&["bio", "chem"]));
        assert_eq!(c.ids(), ["bio".to_string(), "chem".to_string()]);
        assert_eq!(
            c,
            Communities::Assigned {
                ids: vec!["bio".into(), "chem".into()],
                default: DefaultCommunity::NoDefault,
            }
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let c = normalize(&with(&["bio", "bio"]));
        assert_eq!(c.ids().len(), 2);
        assert!(matches!(
            c,
            Communities::Assigned {
                default: DefaultCommunity::NoDefault,
                ..
            }
        ));
    }

    #[test]
    fn empty_missing_or_only_ignored() {
        assert!(normalize(&with(&[])).is_empty());
        assert!(normalize(&LegacyParentJson::default()).is_empty());
        assert!(normalize(&with(&["zenodo", "ecfunded"])).is_empty());
    }
}
