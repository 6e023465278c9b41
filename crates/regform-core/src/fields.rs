//! Form fields: names, raw values and typed per-field updates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The six fields collected by the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Name,
    Surname,
    Email,
    Password,
    Gender,
    Terms,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Surname,
        FieldName::Email,
        FieldName::Password,
        FieldName::Gender,
        FieldName::Terms,
    ];

    /// Stable key used in snapshots and the headless protocol
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Surname => "surname",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::Gender => "gender",
            FieldName::Terms => "terms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Surname => "Surname",
            FieldName::Email => "Email",
            FieldName::Password => "Password",
            FieldName::Gender => "Gender",
            FieldName::Terms => "Terms",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| Error::unknown_field(s))
    }
}

/// Raw values of every field
///
/// `Default` is the empty form: all strings empty, terms not accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub terms_accepted: bool,
}

impl FieldSet {
    /// Current text of a text-like field (`gender` included)
    ///
    /// Returns `None` for the terms checkbox.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Name => Some(&self.name),
            FieldName::Surname => Some(&self.surname),
            FieldName::Email => Some(&self.email),
            FieldName::Password => Some(&self.password),
            FieldName::Gender => Some(&self.gender),
            FieldName::Terms => None,
        }
    }

    /// Overwrite the targeted field with the update's value
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(v) => self.name = v,
            FieldUpdate::Surname(v) => self.surname = v,
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::Password(v) => self.password = v,
            FieldUpdate::Gender(v) => self.gender = v,
            FieldUpdate::Terms(v) => self.terms_accepted = v,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FieldSet::default()
    }
}

/// A change to exactly one field, carrying a value of that field's type
///
/// Serialized as `{"field": "email", "value": "ana@test.com"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate {
    Name(String),
    Surname(String),
    Email(String),
    Password(String),
    Gender(String),
    Terms(bool),
}

impl FieldUpdate {
    /// The field this update targets
    pub fn field(&self) -> FieldName {
        match self {
            FieldUpdate::Name(_) => FieldName::Name,
            FieldUpdate::Surname(_) => FieldName::Surname,
            FieldUpdate::Email(_) => FieldName::Email,
            FieldUpdate::Password(_) => FieldName::Password,
            FieldUpdate::Gender(_) => FieldName::Gender,
            FieldUpdate::Terms(_) => FieldName::Terms,
        }
    }

    /// Build a text update for a text-like field
    ///
    /// Returns `None` for the terms checkbox, which takes a bool.
    pub fn text(field: FieldName, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        match field {
            FieldName::Name => Some(FieldUpdate::Name(value)),
            FieldName::Surname => Some(FieldUpdate::Surname(value)),
            FieldName::Email => Some(FieldUpdate::Email(value)),
            FieldName::Password => Some(FieldUpdate::Password(value)),
            FieldName::Gender => Some(FieldUpdate::Gender(value)),
            FieldName::Terms => None,
        }
    }

    /// Build an update from an untyped `(key, raw)` pair
    ///
    /// The terms field accepts `true/false`, `1/0`, `yes/no` and `on/off`
    /// (case-insensitive).
    pub fn parse(key: &str, raw: &str) -> Result<Self> {
        let field: FieldName = key.parse()?;
        match FieldUpdate::text(field, raw) {
            Some(update) => Ok(update),
            None => parse_flag(raw)
                .map(FieldUpdate::Terms)
                .ok_or_else(|| Error::invalid_field_value(key, raw)),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// One selectable gender option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderOption {
    /// Stored field value
    pub value: String,
    /// Text shown to the user
    pub label: String,
}

impl GenderOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The built-in option list: masculine, feminine, non-binary, other
    pub fn defaults() -> Vec<GenderOption> {
        vec![
            GenderOption::new("masculine", "Masculine"),
            GenderOption::new("feminine", "Feminine"),
            GenderOption::new("non-binary", "Non-binary"),
            GenderOption::new("other", "Other"),
        ]
    }
}
