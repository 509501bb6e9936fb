//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEvent, MouseEventKind};
use pwcheck_app::message::Message;
use pwcheck_app::InputKey;
use pwcheck_core::prelude::*;
use std::time::Duration;

/// Poll interval; every timeout becomes a `Tick` (20 FPS)
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a mouse event into a pointer message for a `width` x `height` screen.
///
/// Only movement counts; clicks and scrolling are ignored.
pub fn mouse_event_to_message(mouse: MouseEvent, width: u16, height: u16) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Message::PointerMoved {
            column: mouse.column,
            row: mouse.row,
            width,
            height,
        }),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    if event::poll(POLL_INTERVAL)? {
        let event = event::read()?;

        match event {
            Event::Key(key) => {
                if key.kind == event::KeyEventKind::Press {
                    Ok(key_event_to_input(key).map(Message::Key))
                } else {
                    Ok(None)
                }
            }
            Event::Mouse(mouse) => {
                let (width, height) = crossterm::terminal::size()?;
                Ok(mouse_event_to_message(mouse, width, height))
            }
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout for animations
        Ok(Some(Message::Tick))
    }
}
