//! Settings parser for .regform/config.toml

use std::path::{Path, PathBuf};

use regform_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const REGFORM_DIR: &str = ".regform";

/// Path of the config file under a base directory
pub fn config_path(base_path: &Path) -> PathBuf {
    base_path.join(REGFORM_DIR).join(CONFIG_FILENAME)
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from .regform/config.toml
///
/// Returns default settings if the file doesn't exist, can't be parsed, or
/// describes a form that cannot work (see [`Settings::validate`]).
pub fn load_settings(base_path: &Path) -> Settings {
    let config_path = config_path(base_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => match settings.validate() {
                Ok(()) => {
                    debug!("Loaded settings from {:?}", config_path);
                    settings
                }
                Err(e) => {
                    warn!("Ignoring {:?}: {}", config_path, e);
                    Settings::default()
                }
            },
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a default config file in .regform/ if none exists
///
/// Idempotent: an existing config.toml is left untouched. Returns the path
/// of the config file.
pub fn init_config_dir(base_path: &Path) -> Result<PathBuf> {
    let regform_dir = base_path.join(REGFORM_DIR);

    if !regform_dir.exists() {
        std::fs::create_dir_all(&regform_dir)
            .map_err(|e| Error::config(format!("Failed to create .regform dir: {}", e)))?;
        info!("Created .regform directory");
    }

    let config_path = regform_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config.toml");
    }

    Ok(config_path)
}

fn generate_default_config() -> String {
    r#"# regform Configuration

[form]
# Options offered by the gender selector (value is what gets submitted)
gender_options = [
  { value = "masculine", label = "Masculine" },
  { value = "feminine", label = "Feminine" },
  { value = "non-binary", label = "Non-binary" },
  { value = "other", label = "Other" },
]

[behavior]
focus_first_error = true   # Jump to the first invalid field after submit

[ui]
mask_password = true       # Show the password as bullets
"#
    .to_string()
}
