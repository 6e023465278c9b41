//! Configuration file parsing for regform
//!
//! Supports `.regform/config.toml` under a base directory (the working
//! directory unless `--config-dir` is given).

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
