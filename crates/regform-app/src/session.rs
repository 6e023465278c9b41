//! Form session - the registration state machine
//!
//! A [`FormSession`] exclusively owns the field values, the current
//! validation errors and the interaction [`Phase`]. Its five operations are
//! total: calling one in a phase where it does not apply is a no-op.

use regform_core::prelude::*;
use regform_core::{validate, ErrorMap, FieldSet, FieldUpdate, Phase};
use serde::Serialize;

use crate::snapshot::FormSnapshot;

/// Data confirmed by the user, without the password
///
/// Produced once by [`FormSession::on_confirm`] so outer layers can announce
/// the registration. Nothing keeps it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationSummary {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub gender: String,
    pub terms_accepted: bool,
}

impl From<&FieldSet> for RegistrationSummary {
    fn from(fields: &FieldSet) -> Self {
        Self {
            name: fields.name.clone(),
            surname: fields.surname.clone(),
            email: fields.email.clone(),
            gender: fields.gender.clone(),
            terms_accepted: fields.terms_accepted,
        }
    }
}

/// One isolated registration form session
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    fields: FieldSet,
    errors: ErrorMap,
    phase: Phase,
}

impl FormSession {
    /// Create a session in [`Phase::Editing`] with empty fields
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read-only copy of the session for renderers
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self.fields.clone(),
            errors: self.errors.clone(),
            phase: self.phase,
        }
    }

    /// Store a new raw value and drop that field's error
    ///
    /// The error is cleared whether or not the new value is valid; errors
    /// only come back on the next submit. Allowed in every phase.
    pub fn on_field_change(&mut self, update: FieldUpdate) {
        let field = update.field();
        self.fields.apply(update);
        if self.errors.clear_field(field) {
            trace!("Cleared error for field '{}'", field);
        }
    }

    /// Validate the form and move to the summary when it is clean
    ///
    /// Returns `true` when the phase moved to [`Phase::ReviewingSummary`].
    pub fn on_submit(&mut self) -> bool {
        if self.phase != Phase::Editing {
            debug!("Ignoring submit in phase {:?}", self.phase);
            return false;
        }

        self.errors = validate(&self.fields);
        if self.errors.is_empty() {
            self.phase = Phase::ReviewingSummary;
            debug!("Submit accepted, reviewing summary");
            true
        } else {
            debug!("Submit blocked by {} invalid field(s)", self.errors.len());
            false
        }
    }

    /// Leave the summary and go back to editing, keeping every value
    pub fn on_edit_from_summary(&mut self) {
        if self.phase != Phase::ReviewingSummary {
            debug!("Ignoring edit in phase {:?}", self.phase);
            return;
        }
        self.phase = Phase::Editing;
    }

    /// Accept the summary: show success and discard the form data
    pub fn on_confirm(&mut self) -> Option<RegistrationSummary> {
        if self.phase != Phase::ReviewingSummary {
            debug!("Ignoring confirm in phase {:?}", self.phase);
            return None;
        }

        let summary = RegistrationSummary::from(&self.fields);
        self.fields = FieldSet::default();
        self.errors.clear();
        self.phase = Phase::Success;
        info!("Registration confirmed");
        Some(summary)
    }

    /// Close the success message and start over
    pub fn on_dismiss_success(&mut self) {
        if self.phase != Phase::Success {
            debug!("Ignoring dismiss in phase {:?}", self.phase);
            return;
        }
        self.phase = Phase::Editing;
    }
}
