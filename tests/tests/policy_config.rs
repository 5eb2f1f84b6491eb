//! Loading policies from JSON documents.

use pretty_assertions::assert_eq;
use strip_constraint::{ConfigError, PolicyConfig};
use strip_tests::prelude::*;

#[test]
fn test_documents_for_named_policies() {
    let documents = [
        (NamedPolicy::Conservative, r#"{ "max_actions": 2 }"#),
        (
            NamedPolicy::Header,
            r#"{ "max_actions": 1, "disallowed": ["CUSTOM"] }"#,
        ),
        (NamedPolicy::Simple, r#"{ "extends": "conservative", "max_titled_actions": 1 }"#),
        (
            NamedPolicy::Navigation,
            r#"{ "extends": "conservative", "max_actions": 4, "max_titled_actions": 1, "required": ["CUSTOM"] }"#,
        ),
    ];

    for (named, json) in documents {
        let policy = ConstraintSet::from_json(json).unwrap();
        assert_eq!(&policy, named.policy(), "{}", named);
    }
}

#[test]
fn test_loaded_policy_validates_like_builder_policy() {
    // GIVEN a policy loaded from JSON
    let policy = ConstraintSet::from_json(
        r#"{ "max_actions": 3, "required": ["BACK"], "disallowed": ["PAN"] }"#,
    )
    .unwrap();

    // THEN it enforces its rules
    Case::new("pan", &policy)
        .actions([Action::back(), Action::pan()])
        .fails_with(ValidationError::disallowed_category(ActionCategory::Pan, 1))
        .run()
        .unwrap();
    Case::new("no_back", &policy)
        .actions([Action::custom()])
        .fails_like(ValidationError::missing_required_categories(CategorySet::new()))
        .run()
        .unwrap();
    Case::new("ok", &policy)
        .actions([Action::custom(), Action::back()])
        .passes()
        .run()
        .unwrap();
}

#[test]
fn test_policy_embedded_in_larger_document() {
    #[derive(serde::Deserialize)]
    struct Screen {
        policy: ConstraintSet,
    }

    let ok: Screen =
        serde_json::from_str(r#"{ "policy": { "extends": "header" } }"#).unwrap();
    assert_eq!(ok.policy, *HEADER);

    let bad = serde_json::from_str::<Screen>(
        r#"{ "policy": { "max_actions": 0, "required": ["PAN"] } }"#,
    );
    assert!(bad.is_err());
}

#[test]
fn test_config_round_trip_through_struct() {
    let config = PolicyConfig::from(NAVIGATION.clone());

    assert_eq!(config.max_actions, Some(4));
    assert_eq!(config.into_policy().unwrap(), *NAVIGATION);
}

#[test]
fn test_config_errors() {
    assert!(matches!(
        ConstraintSet::from_json("not json"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        ConstraintSet::from_json(r#"{ "extends": "nope" }"#),
        Err(ConfigError::UnknownPolicy { .. })
    ));
    assert!(matches!(
        ConstraintSet::from_json(r#"{ "max_actions": 0, "required": ["BACK"] }"#),
        Err(ConfigError::Policy(PolicyError::RequiredExceedsMax { .. }))
    ));
}
