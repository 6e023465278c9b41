//! Application error types with rich context
//!
//! These are system failures (I/O, terminal, configuration, malformed
//! headless input). User-input validation failures are never errors: they
//! are reported as [`crate::ErrorMap`] entries.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Form Input Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown form field: {name}")]
    UnknownField { name: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidFieldValue { field: String, value: String },

    // ─────────────────────────────────────────────────────────────
    // Headless Protocol Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Headless protocol error: {message}")]
    Protocol { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    pub fn invalid_field_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Whether the offending input can be skipped and work can go on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Json(_)
                | Error::UnknownField { .. }
                | Error::InvalidFieldValue { .. }
                | Error::Protocol { .. }
                | Error::ConfigInvalid { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for logging where a failure happened
pub trait ResultExt<T> {
    /// Log `context` with the error at `error` level, then convert it
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("bad section");
        assert_eq!(err.to_string(), "Configuration error: bad section");

        let err = Error::unknown_field("nickname");
        assert_eq!(err.to_string(), "Unknown form field: nickname");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::protocol("bad line").is_recoverable());
        assert!(Error::unknown_field("x").is_recoverable());
        assert!(Error::invalid_field_value("terms", "maybe").is_recoverable());
        assert!(!Error::TerminalInit("no tty".to_string()).is_recoverable());
        assert!(!Error::terminal("draw failed").is_recoverable());
    }

    #[test]
    fn test_invalid_field_value_mentions_field_and_value() {
        let err = Error::invalid_field_value("terms", "maybe");
        let msg = err.to_string();
        assert!(msg.contains("terms"));
        assert!(msg.contains("maybe"));
    }

    #[test]
    fn test_context_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("reading config").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
