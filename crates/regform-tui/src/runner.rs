//! TUI runner - entry point and event loop

use regform_app::config::Settings;
use regform_app::{process_message, AppState, UpdateAction};
use regform_core::prelude::*;

use super::{event, render, terminal};

/// Run the form in the terminal until the user quits
pub fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let mut state = AppState::with_settings(settings);
    info!(
        "TUI started with {} gender option(s)",
        state.gender_options().len()
    );

    let result = run_loop(&mut term, &mut state);
    terminal::restore();
    result
}

/// Main event loop: draw, wait for input, update
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            for action in process_message(state, message) {
                handle_action(action);
            }
        }
    }

    info!("TUI loop finished");
    Ok(())
}

/// The summary is dropped here: confirmed data is never kept or logged
fn handle_action(action: UpdateAction) {
    match action {
        UpdateAction::Registered(_summary) => info!("Registration submitted"),
    }
}
