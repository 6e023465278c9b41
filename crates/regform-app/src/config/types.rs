//! Configuration types for regform
//!
//! Defines:
//! - `Settings` - Application settings (.regform/config.toml)
//! - Related sub-sections

use std::collections::HashSet;

use regform_core::prelude::*;
use regform_core::GenderOption;
use serde::{Deserialize, Serialize};

/// Application settings (.regform/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub form: FormSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Reject settings the form cannot work with
    pub fn validate(&self) -> Result<()> {
        self.form.validate()
    }
}

/// Form content settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FormSettings {
    /// Selectable gender options, in display order
    #[serde(default = "GenderOption::defaults")]
    pub gender_options: Vec<GenderOption>,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            gender_options: GenderOption::defaults(),
        }
    }
}

impl FormSettings {
    fn validate(&self) -> Result<()> {
        if self.gender_options.is_empty() {
            return Err(Error::config_invalid("form.gender_options must not be empty"));
        }

        let mut seen = HashSet::new();
        for option in &self.gender_options {
            if option.value.is_empty() {
                return Err(Error::config_invalid(format!(
                    "gender option '{}' has an empty value",
                    option.label
                )));
            }
            if !seen.insert(option.value.as_str()) {
                return Err(Error::config_invalid(format!(
                    "duplicate gender option value '{}'",
                    option.value
                )));
            }
        }
        Ok(())
    }

    /// Label for a stored gender value, falling back to the value itself
    pub fn gender_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.gender_options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
            .unwrap_or(value)
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Move focus to the first invalid field after a blocked submit
    #[serde(default = "default_true")]
    pub focus_first_error: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            focus_first_error: true,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Render the password as bullets
    #[serde(default = "default_true")]
    pub mask_password: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mask_password: true,
        }
    }
}

fn default_true() -> bool {
    true
}
