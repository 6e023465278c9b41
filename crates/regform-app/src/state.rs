//! Application state (Model in TEA pattern)

use regform_core::{FieldName, GenderOption};

use crate::config::Settings;
use crate::session::FormSession;

/// Focusable control on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Surname,
    Email,
    Password,
    Gender,
    Terms,
    Submit,
}

impl FormFocus {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Surname,
            Self::Surname => Self::Email,
            Self::Email => Self::Password,
            Self::Password => Self::Gender,
            Self::Gender => Self::Terms,
            Self::Terms => Self::Submit,
            Self::Submit => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Submit,
            Self::Surname => Self::Name,
            Self::Email => Self::Surname,
            Self::Password => Self::Email,
            Self::Gender => Self::Password,
            Self::Terms => Self::Gender,
            Self::Submit => Self::Terms,
        }
    }

    /// The field behind this control, `None` for the submit button
    pub fn field(self) -> Option<FieldName> {
        match self {
            Self::Name => Some(FieldName::Name),
            Self::Surname => Some(FieldName::Surname),
            Self::Email => Some(FieldName::Email),
            Self::Password => Some(FieldName::Password),
            Self::Gender => Some(FieldName::Gender),
            Self::Terms => Some(FieldName::Terms),
            Self::Submit => None,
        }
    }
}

impl From<FieldName> for FormFocus {
    fn from(field: FieldName) -> Self {
        match field {
            FieldName::Name => Self::Name,
            FieldName::Surname => Self::Surname,
            FieldName::Email => Self::Email,
            FieldName::Password => Self::Password,
            FieldName::Gender => Self::Gender,
            FieldName::Terms => Self::Terms,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The registration form session
    pub session: FormSession,

    /// Focused control on the form
    pub focus: FormFocus,

    /// Loaded configuration
    pub settings: Settings,

    /// Set once the user asked to leave
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn gender_options(&self) -> &[GenderOption] {
        &self.settings.form.gender_options
    }

    /// Gender value `step` positions away from the current selection
    ///
    /// With nothing selected, moving forward picks the first option and
    /// moving backward the last. Values outside the option list are
    /// treated as nothing selected.
    pub fn cycle_gender(&self, forward: bool) -> Option<String> {
        let options = self.gender_options();
        if options.is_empty() {
            return None;
        }

        let current = &self.session.fields().gender;
        let position = options.iter().position(|o| &o.value == current);
        let index = match (position, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
        };
        Some(options[index].value.clone())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
