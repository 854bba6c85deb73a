//! properties.rs
//!
//! Property checks over generated legacy entries.

use assert_matches::assert_matches;
use proptest::prelude::*;

use zenodo_migrator_core::prelude::*;

fn slug() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("zenodo".to_string()),
        Just("ecfunded".to_string()),
        "[a-z]{1,8}",
    ]
}

fn doi() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        "10\\.5281/zenodo\\.[0-9]{1,6}",
        "10\\.5072/zenodo\\.[0-9]{1,6}",
        "10\\.[0-9]{4}/[a-z]{1,6}\\.[0-9]{1,4}",
    ])
}

fn owners() -> impl Strategy<Value = Option<Vec<Option<OwnerId>>>> {
    proptest::option::of(proptest::collection::vec(
        proptest::option::of(prop_oneof![
            any::<i64>().prop_map(OwnerId::Int),
            "[0-9]{1,5}".prop_map(OwnerId::Str),
        ]),
        0..4,
    ))
}

prop_compose! {
    fn legacy_body()(
        draft in any::<bool>(),
        communities in proptest::option::of(proptest::collection::vec(slug(), 0..5)),
        doi in doi(),
        conceptdoi in doi(),
        owners in owners(),
        deposit_owners in owners(),
        access_conditions in proptest::option::of(".{0,12}"),
    ) -> LegacyParentJson {
        let schema = if draft {
            "https://zenodo.org/schemas/deposits/records/record-v1.0.0.json"
        } else {
            "https://zenodo.org/schemas/records/record-v1.0.0.json"
        };
        LegacyParentJson {
            schema: Some(schema.to_string()),
            conceptrecid: None,
            communities,
            doi,
            conceptdoi,
            owners,
            deposit: Some(LegacyDeposit { owners: deposit_owners }),
            access_conditions,
        }
    }
}

proptest! {
    #[test]
    fn transform_is_idempotent(body in legacy_body(), recid in "[1-9][0-9]{0,6}") {
        let entry = LegacyEntry {
            created: Some(serde_json::json!("2023-01-01T00:00:00")),
            json: Some(LegacyParentJson { conceptrecid: Some(recid), ..body }),
            ..Default::default()
        };
        let t = ParentRecordEntry::new(false);
        let a = serde_json::to_vec(&t.transform(&entry).unwrap()).unwrap();
        let b = serde_json::to_vec(&t.transform(&entry).unwrap()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn conceptrecid_is_required(body in legacy_body(), partial in any::<bool>()) {
        let entry = LegacyEntry { json: Some(body), ..Default::default() };
        let err = ParentRecordEntry::new(partial).transform(&entry).unwrap_err();
        assert_matches!(err, MigratorError::NoConceptRecid { .. });
    }

    #[test]
    fn default_community_iff_single_eligible_slug(body in legacy_body()) {
        let entry = LegacyEntry {
            json: Some(LegacyParentJson { conceptrecid: Some("1".into()), ..body }),
            ..Default::default()
        };
        let out = ParentRecordEntry::new(false).transform(&entry).unwrap();
        let communities = out.json.unwrap().communities;
        match &communities {
            Communities::Empty => {}
            Communities::Assigned { ids, default } => {
                prop_assert!(!ids.is_empty());
                prop_assert!(ids.iter().all(|s| s != "zenodo" && s != "ecfunded"));
                prop_assert_eq!(ids.len() == 1, matches!(default, DefaultCommunity::Default(_)));
            }
        }
    }
}
