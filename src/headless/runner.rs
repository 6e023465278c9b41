//! Headless mode runner - line-driven loop without TUI

use std::io::{BufRead, Write};

use regform_app::config::Settings;
use regform_app::{process_message, AppState, UpdateAction};
use regform_core::prelude::*;
use regform_core::Phase;

use super::{HeadlessCommand, HeadlessEvent};

/// What the loop does after a line was handled
enum LineOutcome {
    Continue,
    Quit,
}

/// Run in headless mode on stdin/stdout
pub fn run_headless(settings: Settings) -> Result<()> {
    info!("regform starting in HEADLESS mode");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = run_with_io(settings, stdin.lock(), stdout.lock());

    if let Err(ref e) = result {
        HeadlessEvent::error(e.to_string(), true).emit();
    }
    info!("regform headless mode exiting");
    result
}

/// Process commands from `input` until EOF or `quit`, writing events to `output`
///
/// Lines that cannot be used (not UTF-8, not a command, a `change` outside
/// editing) produce a non-fatal `error` event and are skipped. Only I/O
/// failures end the run early.
pub fn run_with_io<R: BufRead, W: Write>(settings: Settings, input: R, mut output: W) -> Result<()> {
    let mut state = AppState::with_settings(settings);

    HeadlessEvent::ready().write_to(&mut output)?;
    HeadlessEvent::snapshot(state.session.snapshot()).write_to(&mut output)?;

    for chunk in input.split(b'\n') {
        let bytes = chunk.context("Reading headless input")?;

        match handle_line(&mut state, &bytes, &mut output) {
            Ok(LineOutcome::Continue) => {}
            Ok(LineOutcome::Quit) => {
                info!("Quit requested");
                return Ok(());
            }
            Err(e) if e.is_recoverable() => {
                // The message may quote the line, so it only goes to stdout
                warn!("Rejected headless input line");
                HeadlessEvent::error(e.to_string(), false)
                    .write_to(&mut output)
                    .context("Writing headless event")?;
            }
            Err(e) => return Err(e),
        }
    }

    info!("Input closed");
    Ok(())
}

fn handle_line<W: Write>(state: &mut AppState, bytes: &[u8], output: &mut W) -> Result<LineOutcome> {
    let line = std::str::from_utf8(bytes)
        .map_err(|e| Error::protocol(format!("line is not valid UTF-8: {}", e)))?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(LineOutcome::Continue);
    }

    let command = HeadlessCommand::parse(trimmed)?;
    let phase = state.session.phase();
    if matches!(command, HeadlessCommand::Change { .. }) && phase != Phase::Editing {
        return Err(Error::protocol(format!(
            "change is only accepted while editing (phase: {:?})",
            phase
        )));
    }

    let message = command.into_message();
    debug!("Headless command: {}", message.name());

    for action in process_message(state, message) {
        match action {
            UpdateAction::Registered(summary) => {
                info!("Registration submitted");
                HeadlessEvent::registered(summary).write_to(output)?;
            }
        }
    }

    if state.should_quit() {
        return Ok(LineOutcome::Quit);
    }
    HeadlessEvent::snapshot(state.session.snapshot()).write_to(output)?;
    Ok(LineOutcome::Continue)
}
