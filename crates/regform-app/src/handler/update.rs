//! Main update function - handles state transitions (TEA pattern)

use regform_core::prelude::*;
use regform_core::Phase;

use crate::message::Message;
use crate::state::{AppState, FormFocus};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            info!("Quit requested");
            state.should_quit = true;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Session Messages
        // ─────────────────────────────────────────────────────────
        Message::Field(field_update) => {
            state.session.on_field_change(field_update);
            UpdateResult::none()
        }

        Message::Submit => {
            let accepted = state.session.on_submit();
            if !accepted
                && state.session.phase() == Phase::Editing
                && state.settings.behavior.focus_first_error
            {
                if let Some(field) = state.session.errors().first_field() {
                    state.focus = FormFocus::from(field);
                }
            }
            UpdateResult::none()
        }

        Message::EditFromSummary => {
            state.session.on_edit_from_summary();
            UpdateResult::none()
        }

        Message::Confirm => match state.session.on_confirm() {
            Some(summary) => {
                state.focus = FormFocus::default();
                UpdateResult::action(UpdateAction::Registered(summary))
            }
            None => UpdateResult::none(),
        },

        Message::DismissSuccess => {
            state.session.on_dismiss_success();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus = state.focus.prev();
            UpdateResult::none()
        }
    }
}
