//! Field validation
//!
//! [`validate`] maps a [`FieldSet`] to an [`ErrorMap`]. Every rule runs on
//! every pass so the map always describes the whole form. Values are never
//! trimmed before checking.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fields::{FieldName, FieldSet};

pub const NAME_INVALID: &str =
    "Name is too short or contains invalid characters (at least 2 letters or spaces)";
pub const SURNAME_INVALID: &str =
    "Surname is too short or contains invalid characters (at least 2 letters or spaces)";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email has an invalid format (example: user@domain.com)";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_WEAK: &str = "Password must be at least 8 characters with a letter and a digit";
pub const GENDER_REQUIRED: &str = "Gender selection is required";
pub const TERMS_REQUIRED: &str = "You must accept the terms and conditions";

/// Minimum character count for name and surname
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum character count for the password
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Accented letters accepted in names besides ASCII letters
const ACCENTED_LETTERS: &[char] = &['á', 'é', 'í', 'ó', 'ú', 'Á', 'É', 'Í', 'Ó', 'Ú', 'ñ', 'Ñ'];

/// Current validation failures, keyed by field
///
/// A field with no entry is valid. Empty messages are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure; an empty message clears the field instead
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.0.remove(&field);
        } else {
            self.0.insert(field, message);
        }
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    /// Remove one field's error, returning whether one was present
    pub fn clear_field(&mut self, field: FieldName) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First invalid field in display order
    pub fn first_field(&self) -> Option<FieldName> {
        self.0.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Validate every field at once
pub fn validate(fields: &FieldSet) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for field in FieldName::ALL {
        if let Some(message) = validate_field(fields, field) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Error message for a single field, `None` when it is valid
pub fn validate_field(fields: &FieldSet, field: FieldName) -> Option<&'static str> {
    match field {
        FieldName::Name => (!is_valid_name(&fields.name)).then_some(NAME_INVALID),
        FieldName::Surname => (!is_valid_name(&fields.surname)).then_some(SURNAME_INVALID),
        FieldName::Email => {
            if fields.email.is_empty() {
                Some(EMAIL_REQUIRED)
            } else if !is_valid_email(&fields.email) {
                Some(EMAIL_INVALID)
            } else {
                None
            }
        }
        FieldName::Password => {
            if fields.password.is_empty() {
                Some(PASSWORD_REQUIRED)
            } else if !is_valid_password(&fields.password) {
                Some(PASSWORD_WEAK)
            } else {
                None
            }
        }
        FieldName::Gender => fields.gender.is_empty().then_some(GENDER_REQUIRED),
        FieldName::Terms => (!fields.terms_accepted).then_some(TERMS_REQUIRED),
    }
}

/// At least two characters, each a letter (ASCII or accented) or whitespace
///
/// A value made only of whitespace passes once it reaches two characters.
pub fn is_valid_name(value: &str) -> bool {
    value.chars().count() >= MIN_NAME_CHARS && value.chars().all(is_name_char)
}

/// `local@domain.tld` with exactly one `@`
///
/// The domain needs a non-empty part before its last `.`, and the TLD
/// after it must be two or more ASCII letters.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// At least eight characters including an ASCII letter and an ASCII digit
pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_CHARS
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || ACCENTED_LETTERS.contains(&c) || is_form_whitespace(c)
}

/// Whitespace as browsers' form patterns define it
///
/// Differs from [`char::is_whitespace`]: includes U+FEFF, excludes U+0085.
fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
