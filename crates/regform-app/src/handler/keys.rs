//! Key event handlers for the form phases

use regform_core::{FieldName, FieldUpdate, Phase};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FormFocus};

/// Convert key events to messages based on the current phase
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.session.phase() {
        Phase::Editing => handle_key_editing(state, key),
        Phase::ReviewingSummary => handle_key_summary(key),
        Phase::Success => handle_key_success(key),
    }
}

/// Handle key events while the summary modal is open
fn handle_key_summary(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('c' | 'C' | 'y' | 'Y') => Some(Message::Confirm),
        InputKey::Esc | InputKey::Backspace | InputKey::Char('e' | 'E') => {
            Some(Message::EditFromSummary)
        }
        _ => None,
    }
}

/// Handle key events while the success modal is open
fn handle_key_success(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissSuccess),
        _ => None,
    }
}

/// Handle key events on the editable form
fn handle_key_editing(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Down => return Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::FocusPrev),
        InputKey::Esc => return Some(Message::Quit),
        _ => {}
    }

    match state.focus {
        FormFocus::Gender => handle_key_gender(state, key),
        FormFocus::Terms => handle_key_terms(state, key),
        FormFocus::Submit => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::Submit),
            _ => None,
        },
        focus => {
            let field = focus.field()?;
            handle_key_text(state, field, key)
        }
    }
}

/// Typing into one of the free-text fields
fn handle_key_text(state: &AppState, field: FieldName, key: InputKey) -> Option<Message> {
    let current = state.session.fields().text(field)?;
    let value = match key {
        InputKey::Enter => return Some(Message::Submit),
        InputKey::Char(c) => {
            let mut value = current.to_string();
            value.push(c);
            value
        }
        InputKey::Backspace => {
            let mut value = current.to_string();
            value.pop()?;
            value
        }
        InputKey::CharCtrl('u') | InputKey::Delete => {
            if current.is_empty() {
                return None;
            }
            String::new()
        }
        _ => return None,
    };
    FieldUpdate::text(field, value).map(Message::Field)
}

/// Choosing among the configured gender options
fn handle_key_gender(state: &AppState, key: InputKey) -> Option<Message> {
    let value = match key {
        InputKey::Enter => return Some(Message::Submit),
        InputKey::Right | InputKey::Char(' ' | 'l') => state.cycle_gender(true)?,
        InputKey::Left | InputKey::Char('h') => state.cycle_gender(false)?,
        InputKey::Home => state.gender_options().first()?.value.clone(),
        InputKey::End => state.gender_options().last()?.value.clone(),
        InputKey::Backspace | InputKey::Delete => String::new(),
        _ => return None,
    };
    Some(Message::Field(FieldUpdate::Gender(value)))
}

/// Toggling the terms checkbox
fn handle_key_terms(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::Field(FieldUpdate::Terms(
            !state.session.fields().terms_accepted,
        ))),
        _ => None,
    }
}
