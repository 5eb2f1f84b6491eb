//! Message template construction against the shared policies.

use pretty_assertions::assert_eq;
use strip_template::{MessageTemplate, TemplateError};
use strip_tests::prelude::*;

#[test]
fn test_template_uses_simple_policy_for_actions() {
    assert_eq!(MessageTemplate::action_policy(), &*SIMPLE);
}

#[test]
fn test_full_template() {
    // GIVEN every field set
    let template = MessageTemplate::builder("Could not reach the server")
        .title("Offline")
        .header_action(Some(Action::back()))
        .unwrap()
        .action_list(vec![Action::custom().with_title("Retry"), Action::custom()])
        .unwrap()
        .debug_message("timeout after 30s")
        .build()
        .unwrap();

    // THEN it is built as given
    assert_eq!(template.header_action(), Some(&Action::back()));
    assert_eq!(template.actions().len(), 2);
    assert_eq!(template.debug_message(), Some("timeout after 30s"));
}

#[test]
fn test_header_errors_surface_unchanged() {
    let err = MessageTemplate::builder("Hello")
        .header_action(Some(Action::custom()))
        .unwrap_err();

    assert_eq!(
        err.validation_error(),
        Some(&validate(&HEADER, &[Action::custom()]).unwrap_err())
    );
}

#[test]
fn test_action_list_errors_surface_unchanged() {
    let actions = vec![Action::pan(), Action::pan(), Action::pan()];

    let err = MessageTemplate::builder("Hello")
        .action_list(actions.clone())
        .unwrap_err();

    assert_eq!(
        err,
        TemplateError::ActionList(validate(&SIMPLE, &actions).unwrap_err())
    );
}

#[test]
fn test_truncation_is_opt_in() {
    let actions = vec![Action::back(), Action::pan(), Action::app_icon()];

    // checked setter rejects
    assert!(MessageTemplate::builder("Hello")
        .action_list(actions.clone())
        .is_err());

    // truncating setter keeps the first two
    let template = MessageTemplate::builder("Hello")
        .title("Greeting")
        .action_list_truncated(actions)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(template.actions(), &[Action::back(), Action::pan()]);
}

#[test]
fn test_error_messages_are_actionable() {
    let err = MessageTemplate::builder("Hello")
        .action_list(vec![Action::back(); 3])
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid action list: Action strip exceeded max of 2 actions (action 2)"
    );
}
