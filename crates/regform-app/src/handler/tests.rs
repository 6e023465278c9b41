//! Tests for the update function and key handling

use super::*;
use crate::input_key::InputKey;
use crate::state::{AppState, FormFocus};
use regform_core::{FieldName, FieldSet, FieldUpdate, Phase};

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        drive(state, Message::Key(InputKey::Char(c)));
    }
}

/// Run a message and any follow-ups, collecting actions
fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn fill_valid(state: &mut AppState) {
    for update in [
        FieldUpdate::Name("Ana".to_string()),
        FieldUpdate::Surname("Lopez".to_string()),
        FieldUpdate::Email("ana@test.com".to_string()),
        FieldUpdate::Password("abcd1234".to_string()),
        FieldUpdate::Gender("feminine".to_string()),
        FieldUpdate::Terms(true),
    ] {
        drive(state, Message::Field(update));
    }
}

// ─────────────────────────────────────────────────────────
// update()
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_sets_flag() {
    let mut state = AppState::new();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_tick_changes_nothing() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Tick);
    assert!(result.message.is_none());
    assert!(result.action.is_none());
    assert_eq!(state.session.phase(), Phase::Editing);
}

#[test]
fn test_submit_valid_form_opens_summary() {
    let mut state = AppState::new();
    fill_valid(&mut state);
    drive(&mut state, Message::Submit);
    assert_eq!(state.session.phase(), Phase::ReviewingSummary);
}

#[test]
fn test_blocked_submit_focuses_first_error() {
    let mut state = AppState::new();
    fill_valid(&mut state);
    drive(
        &mut state,
        Message::Field(FieldUpdate::Email("bad-email".to_string())),
    );
    drive(&mut state, Message::Field(FieldUpdate::Terms(false)));
    state.focus = FormFocus::Submit;

    drive(&mut state, Message::Submit);

    assert_eq!(state.session.phase(), Phase::Editing);
    assert_eq!(state.focus, FormFocus::Email);
}

#[test]
fn test_blocked_submit_keeps_focus_when_disabled() {
    let mut state = AppState::new();
    state.settings.behavior.focus_first_error = false;
    state.focus = FormFocus::Submit;

    drive(&mut state, Message::Submit);

    assert_eq!(state.focus, FormFocus::Submit);
    assert_eq!(state.session.errors().len(), 6);
}

#[test]
fn test_confirm_emits_registered_action_and_resets_focus() {
    let mut state = AppState::new();
    fill_valid(&mut state);
    drive(&mut state, Message::Submit);
    state.focus = FormFocus::Submit;

    let actions = drive(&mut state, Message::Confirm);

    assert_eq!(actions.len(), 1);
    let UpdateAction::Registered(summary) = &actions[0];
    assert_eq!(summary.name, "Ana");
    assert_eq!(state.focus, FormFocus::Name);
    assert_eq!(state.session.phase(), Phase::Success);
    assert_eq!(state.session.fields(), &FieldSet::default());
}

#[test]
fn test_confirm_outside_summary_emits_nothing() {
    let mut state = AppState::new();
    assert!(drive(&mut state, Message::Confirm).is_empty());
    assert_eq!(state.session.phase(), Phase::Editing);
}

#[test]
fn test_edit_and_dismiss_messages() {
    let mut state = AppState::new();
    fill_valid(&mut state);
    drive(&mut state, Message::Submit);
    drive(&mut state, Message::EditFromSummary);
    assert_eq!(state.session.phase(), Phase::Editing);
    assert_eq!(state.session.fields().surname, "Lopez");

    drive(&mut state, Message::Submit);
    drive(&mut state, Message::Confirm);
    drive(&mut state, Message::DismissSuccess);
    assert_eq!(state.session.phase(), Phase::Editing);
    assert!(state.session.errors().is_empty());
}

// ─────────────────────────────────────────────────────────
// Key handling: editing
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_fills_focused_field() {
    let mut state = AppState::new();
    type_text(&mut state, "José");
    assert_eq!(state.session.fields().name, "José");

    drive(&mut state, Message::Key(InputKey::Tab));
    type_text(&mut state, "Ruiz Díaz");
    assert_eq!(state.session.fields().surname, "Ruiz Díaz");
}

#[test]
fn test_backspace_and_clear() {
    let mut state = AppState::new();
    type_text(&mut state, "Anna");
    drive(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.session.fields().name, "Ann");

    drive(&mut state, Message::Key(InputKey::CharCtrl('u')));
    assert_eq!(state.session.fields().name, "");

    // Nothing left to delete
    assert!(handle_key(&state, InputKey::Backspace).is_none());
    assert!(handle_key(&state, InputKey::Delete).is_none());
}

#[test]
fn test_typing_clears_field_error() {
    let mut state = AppState::new();
    drive(&mut state, Message::Submit);
    assert!(state.session.errors().contains(FieldName::Name));

    state.focus = FormFocus::Name;
    type_text(&mut state, "A");

    assert!(!state.session.errors().contains(FieldName::Name));
    assert!(state.session.errors().contains(FieldName::Surname));
}

#[test]
fn test_navigation_keys() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Tab), Some(Message::FocusNext));
    assert_eq!(handle_key(&state, InputKey::Down), Some(Message::FocusNext));
    assert_eq!(handle_key(&state, InputKey::BackTab), Some(Message::FocusPrev));
    assert_eq!(handle_key(&state, InputKey::Up), Some(Message::FocusPrev));
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Quit));
}

#[test]
fn test_enter_submits_from_text_field() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::Submit));
}

#[test]
fn test_gender_keys_cycle_options() {
    let mut state = AppState::new();
    state.focus = FormFocus::Gender;

    drive(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.session.fields().gender, "masculine");
    drive(&mut state, Message::Key(InputKey::Char(' ')));
    assert_eq!(state.session.fields().gender, "feminine");
    drive(&mut state, Message::Key(InputKey::Left));
    assert_eq!(state.session.fields().gender, "masculine");
    drive(&mut state, Message::Key(InputKey::End));
    assert_eq!(state.session.fields().gender, "other");
    drive(&mut state, Message::Key(InputKey::Home));
    assert_eq!(state.session.fields().gender, "masculine");
    drive(&mut state, Message::Key(InputKey::Delete));
    assert_eq!(state.session.fields().gender, "");
}

#[test]
fn test_gender_ignores_typed_letters() {
    let mut state = AppState::new();
    state.focus = FormFocus::Gender;
    assert!(handle_key(&state, InputKey::Char('x')).is_none());
}

#[test]
fn test_terms_toggle() {
    let mut state = AppState::new();
    state.focus = FormFocus::Terms;

    drive(&mut state, Message::Key(InputKey::Char(' ')));
    assert!(state.session.fields().terms_accepted);
    drive(&mut state, Message::Key(InputKey::Enter));
    assert!(!state.session.fields().terms_accepted);
}

#[test]
fn test_submit_button() {
    let mut state = AppState::new();
    state.focus = FormFocus::Submit;
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::Submit));
    assert_eq!(handle_key(&state, InputKey::Char(' ')), Some(Message::Submit));
    assert!(handle_key(&state, InputKey::Char('a')).is_none());
}

#[test]
fn test_ctrl_c_quits_in_every_phase() {
    let mut state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));

    fill_valid(&mut state);
    drive(&mut state, Message::Submit);
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));

    drive(&mut state, Message::Confirm);
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

// ─────────────────────────────────────────────────────────
// Key handling: modals
// ─────────────────────────────────────────────────────────

#[test]
fn test_summary_keys() {
    let mut state = AppState::new();
    fill_valid(&mut state);
    drive(&mut state, Message::Submit);

    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::Confirm));
    assert_eq!(handle_key(&state, InputKey::Char('y')), Some(Message::Confirm));
    assert_eq!(
        handle_key(&state, InputKey::Char('e')),
        Some(Message::EditFromSummary)
    );
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::EditFromSummary));
    // Typing does not leak into the form behind the modal
    assert!(handle_key(&state, InputKey::Char('z')).is_none());
    assert!(handle_key(&state, InputKey::Tab).is_none());
}

#[test]
fn test_full_keyboard_flow() {
    let mut state = AppState::new();
    type_text(&mut state, "Ana");
    drive(&mut state, Message::Key(InputKey::Tab));
    type_text(&mut state, "Lopez");
    drive(&mut state, Message::Key(InputKey::Tab));
    type_text(&mut state, "ana@test.com");
    drive(&mut state, Message::Key(InputKey::Tab));
    type_text(&mut state, "abcd1234");
    drive(&mut state, Message::Key(InputKey::Tab));
    drive(&mut state, Message::Key(InputKey::Right));
    drive(&mut state, Message::Key(InputKey::Tab));
    drive(&mut state, Message::Key(InputKey::Char(' ')));
    drive(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.focus, FormFocus::Submit);

    drive(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.session.phase(), Phase::ReviewingSummary);

    let actions = drive(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(actions.len(), 1);
    assert_eq!(state.session.phase(), Phase::Success);

    drive(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.session.phase(), Phase::Editing);
    assert!(state.session.fields().is_empty());
}
