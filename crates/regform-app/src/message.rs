//! Message types for the application (TEA pattern)

use regform_core::{FieldName, FieldUpdate};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Leave the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Session Messages
    // ─────────────────────────────────────────────────────────
    /// A field's raw value changed
    Field(FieldUpdate),
    /// Validate and, if clean, show the summary
    Submit,
    /// Go back from the summary to the form
    EditFromSummary,
    /// Accept the summary
    Confirm,
    /// Close the success message
    DismissSuccess,

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next form control
    FocusNext,
    /// Move focus to the previous form control
    FocusPrev,
}

impl Message {
    /// Variant name for logs
    ///
    /// Never includes the payload, so typed characters and field values
    /// stay out of the log file.
    pub fn name(&self) -> &'static str {
        match self {
            Message::Key(_) => "Key",
            Message::Tick => "Tick",
            Message::Quit => "Quit",
            Message::Field(update) => match update.field() {
                FieldName::Name => "Field(name)",
                FieldName::Surname => "Field(surname)",
                FieldName::Email => "Field(email)",
                FieldName::Password => "Field(password)",
                FieldName::Gender => "Field(gender)",
                FieldName::Terms => "Field(terms)",
            },
            Message::Submit => "Submit",
            Message::EditFromSummary => "EditFromSummary",
            Message::Confirm => "Confirm",
            Message::DismissSuccess => "DismissSuccess",
            Message::FocusNext => "FocusNext",
            Message::FocusPrev => "FocusPrev",
        }
    }
}
