//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each form phase

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use crate::session::RegistrationSummary;

// Re-export main entry points
pub use keys::handle_key;
pub use update::update;

/// Actions that the front end should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// A registration was confirmed; the data is already gone from the session
    Registered(RegistrationSummary),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the front end to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
