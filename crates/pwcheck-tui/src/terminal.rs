//! Terminal setup and restoration

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use pwcheck_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        disable_mouse_capture();
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Start receiving mouse movement events
pub fn enable_mouse_capture() -> Result<()> {
    execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(|e| Error::TerminalInit(format!("Failed to enable mouse capture: {}", e)))
}

/// Stop receiving mouse events. Failures are logged, not returned.
pub fn disable_mouse_capture() {
    if let Err(e) = execute!(std::io::stdout(), DisableMouseCapture) {
        warn!("Failed to disable mouse capture: {}", e);
    }
}
