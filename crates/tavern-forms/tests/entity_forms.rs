//! Forms synthesized from the real entity payload types.

use std::cell::RefCell;

use pretty_assertions::assert_eq;
use serde_json::json;
use tavern_core::entities::{CharacterCreate, GameCreate, QuestCreate};
use tavern_core::enums::{CharacterKind, EntityType, QuestStatus};
use tavern_forms::{FieldKind, FormError, FormMode, SmartForm, entity_form};

#[test]
fn every_entity_type_has_create_and_update_forms() {
    for ty in EntityType::ALL {
        for mode in [FormMode::Create, FormMode::Update] {
            let form = entity_form(ty, mode).unwrap();
            let name = form.field("name").unwrap();
            assert_eq!(name.kind, FieldKind::Text);
            assert_eq!(name.required, mode == FormMode::Create, "{ty} {mode:?}");

            let content = form.field("content").unwrap();
            assert_eq!(content.kind, FieldKind::Textarea);
            assert!(content.help.is_some());
            assert!(form.field("content_plain_text").is_none());
        }
    }
}

#[test]
fn long_descriptions_become_textareas() {
    let form = entity_form(EntityType::Faction, FormMode::Create).unwrap();
    let description = form.field("description").unwrap();
    assert_eq!(description.kind, FieldKind::Textarea);
    assert_eq!(description.max_length, Some(4000));
    assert!(description.nullable);
    assert!(!description.required);
}

#[test]
fn enums_become_selects() {
    let quest = SmartForm::for_type::<QuestCreate>().unwrap();
    assert_eq!(
        quest.field("status").unwrap().kind,
        FieldKind::Select {
            options: vec![
                "rumored".into(),
                "active".into(),
                "completed".into(),
                "failed".into()
            ]
        }
    );

    let character = SmartForm::for_type::<CharacterCreate>().unwrap();
    assert_eq!(
        character.field("kind").unwrap().kind,
        FieldKind::Select {
            options: vec!["player".into(), "non_player".into()]
        }
    );
}

#[test]
fn int_or_string_ids_are_plain_text() {
    let form = entity_form(EntityType::Location, FormMode::Create).unwrap();
    let parent = form.field("parent_location_id").unwrap();
    assert_eq!(parent.kind, FieldKind::Text);
    assert!(parent.nullable);
}

#[test]
fn validation_reports_each_field() {
    let form = SmartForm::for_type::<QuestCreate>().unwrap();
    let err = form
        .validate(&json!({"status": "abandoned", "description": 7}))
        .unwrap_err();

    assert!(!err.field_errors("name").is_empty(), "{err}");
    assert!(!err.field_errors("status").is_empty(), "{err}");
    assert!(!err.field_errors("description").is_empty(), "{err}");
    assert!(err.field_errors("content").is_empty());
}

#[test]
fn length_constraints_are_enforced() {
    let form = SmartForm::for_type::<GameCreate>().unwrap();
    assert!(form.validate(&json!({"name": "Curse of the Crimson Throne"})).is_ok());
    let err = form.validate(&json!({"name": ""})).unwrap_err();
    assert_eq!(err.field_errors("name").len(), 1);
    assert!(form.validate(&json!({"name": "x".repeat(121)})).is_err());
}

#[test]
fn parse_yields_the_payload() {
    let form = SmartForm::for_type::<CharacterCreate>().unwrap();
    let payload: CharacterCreate = form
        .parse(json!({"name": "Ana", "kind": "player"}))
        .unwrap();
    assert_eq!(payload.name, "Ana");
    assert_eq!(payload.kind, Some(CharacterKind::Player));
}

#[tokio::test]
async fn submit_runs_handler_then_success_callback() {
    let form = SmartForm::for_type::<QuestCreate>().unwrap();
    let seen = RefCell::new(None);

    let result = form
        .submit(
            json!({"name": "Find the heir", "status": "rumored"}),
            |payload: QuestCreate| async move { Ok::<_, String>(payload.status) },
            |status: &Option<QuestStatus>| *seen.borrow_mut() = *status,
        )
        .await
        .unwrap();

    assert_eq!(result, Some(QuestStatus::Rumored));
    assert_eq!(*seen.borrow(), Some(QuestStatus::Rumored));
}

#[tokio::test]
async fn invalid_values_never_reach_the_handler() {
    let form = SmartForm::for_type::<QuestCreate>().unwrap();
    let called = RefCell::new(false);

    let err = form
        .submit(
            json!({}),
            |_: QuestCreate| async {
                *called.borrow_mut() = true;
                Ok::<_, String>(())
            },
            |_: &()| panic!("success callback on invalid values"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, FormError::Invalid { .. }));
    assert!(!*called.borrow());
}

#[tokio::test]
async fn handler_failure_is_one_submission_error() {
    let form = SmartForm::for_type::<QuestCreate>().unwrap();
    let err = form
        .submit(
            json!({"name": "Doomed"}),
            |_: QuestCreate| async { Err::<(), _>("server said no") },
            |_: &()| panic!("success callback after failure"),
        )
        .await
        .unwrap_err();

    match err {
        FormError::Submission(message) => assert_eq!(message, "server said no"),
        other => panic!("unexpected error: {other}"),
    }
}
