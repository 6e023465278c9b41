//! Message processing
//!
//! Runs a message through the TEA update function, following up on any
//! messages it produces, and hands back the actions the front end must carry
//! out.

use regform_core::prelude::*;

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed immediately, in order, so the state is
/// consistent when this returns.
pub fn process_message(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        trace!("Processing {}", m.name());
        let result = handler::update(state, m);
        if let Some(action) = result.action {
            actions.push(action);
        }
        msg = result.message;
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use regform_core::{FieldUpdate, Phase};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    #[test]
    fn test_key_message_is_followed_through() {
        let mut state = AppState::new();
        let actions = process_message(&mut state, Message::Key(InputKey::Char('A')));
        assert!(actions.is_empty());
        assert_eq!(state.session.fields().name, "A");
    }

    #[test]
    fn test_confirm_key_yields_registered_action() {
        let mut state = AppState::new();
        for (key, raw) in [
            ("name", "Ana"),
            ("surname", "Lopez"),
            ("email", "ana@test.com"),
            ("password", "abcd1234"),
            ("gender", "other"),
            ("terms", "true"),
        ] {
            let update = FieldUpdate::parse(key, raw).unwrap();
            process_message(&mut state, Message::Field(update));
        }
        process_message(&mut state, Message::Submit);
        assert_eq!(state.session.phase(), Phase::ReviewingSummary);

        let actions = process_message(&mut state, Message::Key(InputKey::Enter));
        assert!(matches!(actions.as_slice(), [UpdateAction::Registered(_)]));
    }

    /// In-memory log sink for the subscriber below
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("trace"))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn test_registration_flow_keeps_field_values_out_of_logs() {
        let log = capture_logs(|| {
            let mut state = AppState::new();
            for c in "Ana".chars() {
                process_message(&mut state, Message::Key(InputKey::Char(c)));
            }
            for update in [
                FieldUpdate::Surname("Lopez".to_string()),
                FieldUpdate::Email("ana@test.com".to_string()),
                FieldUpdate::Password("abcd1234".to_string()),
                FieldUpdate::Gender("feminine".to_string()),
                FieldUpdate::Terms(true),
            ] {
                process_message(&mut state, Message::Field(update));
            }
            process_message(&mut state, Message::Submit);
            process_message(&mut state, Message::Confirm);
            process_message(&mut state, Message::DismissSuccess);
            assert_eq!(state.session.phase(), Phase::Editing);
        });

        assert!(log.contains("Registration confirmed"));
        for value in ["Ana", "Lopez", "ana@test.com", "abcd1234", "feminine"] {
            assert!(!log.contains(value), "log leaked {:?}:\n{}", value, log);
        }
    }
}
