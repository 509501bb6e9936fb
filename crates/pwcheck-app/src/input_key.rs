//! Abstract input key event, independent of terminal library.
//!
//! Keeps pwcheck-app free of crossterm types so the headless runner can drive
//! the same controller without a terminal.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    Enter,
    Esc,
    Backspace,

    /// Function key (F1-F12)
    F(u8),
}
