//! Headless mode - NDJSON commands in, NDJSON events out
//!
//! Drives the same form session as the TUI without a terminal, so scripts
//! and end-to-end tests can fill in and submit the form.
//!
//! # Commands (stdin, one per line)
//!
//! ```json
//! {"command":"change","update":{"field":"name","value":"Ana"}}
//! {"command":"submit"}
//! {"command":"confirm"}
//! ```
//!
//! # Events (stdout, one per line)
//!
//! ```json
//! {"event":"ready","timestamp":1704700001000}
//! {"event":"snapshot","phase":"editing","fields":{...},"errors":{},"timestamp":1704700002000}
//! {"event":"registered","summary":{...},"timestamp":1704700003000}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use regform_app::{FormSnapshot, Message, RegistrationSummary};
use regform_core::prelude::*;
use regform_core::FieldUpdate;
use serde::{Deserialize, Serialize};

pub use runner::{run_headless, run_with_io};

/// Commands accepted on stdin
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HeadlessCommand {
    /// Change one field's value
    Change { update: FieldUpdate },
    Submit,
    /// Leave the summary and go back to editing
    Edit,
    Confirm,
    /// Close the success message
    Dismiss,
    Quit,
}

impl HeadlessCommand {
    /// Parse one NDJSON line
    pub fn parse(line: &str) -> Result<Self> {
        serde_json::from_str(line)
            .map_err(|e| Error::protocol(format!("invalid command '{}': {}", line, e)))
    }

    /// The update-loop message this command stands for
    pub fn into_message(self) -> Message {
        match self {
            HeadlessCommand::Change { update } => Message::Field(update),
            HeadlessCommand::Submit => Message::Submit,
            HeadlessCommand::Edit => Message::EditFromSummary,
            HeadlessCommand::Confirm => Message::Confirm,
            HeadlessCommand::Dismiss => Message::DismissSuccess,
            HeadlessCommand::Quit => Message::Quit,
        }
    }
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Session created, commands are accepted from now on
    Ready { timestamp: i64 },

    /// Session state after an operation
    Snapshot {
        #[serde(flatten)]
        snapshot: FormSnapshot,
        timestamp: i64,
    },

    /// The user confirmed the summary
    Registered {
        summary: RegistrationSummary,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as a single JSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready() -> Self {
        Self::Ready {
            timestamp: Self::now(),
        }
    }

    pub fn snapshot(snapshot: FormSnapshot) -> Self {
        Self::Snapshot {
            snapshot,
            timestamp: Self::now(),
        }
    }

    pub fn registered(summary: RegistrationSummary) -> Self {
        Self::Registered {
            summary,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
