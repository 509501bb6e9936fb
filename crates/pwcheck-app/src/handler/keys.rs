//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;

/// Convert a key event to a message.
///
/// There is a single screen, so the mapping does not depend on state: every
/// printable character goes to the password field.
pub fn handle_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::CharCtrl('u') => Some(Message::ClearInput),

        InputKey::Enter => Some(Message::Submit),

        InputKey::CharCtrl('v') | InputKey::F(2) => Some(Message::ToggleVisibility),
        InputKey::CharCtrl('t') | InputKey::F(3) => Some(Message::ToggleTheme),

        InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}
