//! Terminal setup and restoration

use regform_core::prelude::*;

/// Install a panic hook that restores the terminal before reporting
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Switch to the alternate screen in raw mode
pub fn init() -> Result<ratatui::DefaultTerminal> {
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

pub fn restore() {
    ratatui::restore();
    debug!("Terminal restored");
}
