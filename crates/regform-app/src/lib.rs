//! regform-app - Form session state and orchestration for regform
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the [`FormSession`] state machine, the [`AppState`] model
//! around it, [`Message`]s, the `update()` reducer, key mapping and
//! configuration loading. It has no terminal dependencies; front ends feed
//! it messages and render [`AppState`] or a [`FormSnapshot`].

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod session;
pub mod snapshot;
pub mod state;

// Re-export primary types
pub use handler::{handle_key, update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use session::{FormSession, RegistrationSummary};
pub use snapshot::FormSnapshot;
pub use state::{AppState, FormFocus};
