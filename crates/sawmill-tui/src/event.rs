//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use sawmill_core::prelude::*;

use crate::app::Message;

/// Convert a crossterm key event to a viewer message
pub fn key_event_to_message(key: crossterm::event::KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Message::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char('r') => Some(Message::Reparse),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::ScrollDown),
        KeyCode::PageUp => Some(Message::PageUp),
        KeyCode::PageDown => Some(Message::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Message::ScrollTop),
        KeyCode::End | KeyCode::Char('G') => Some(Message::ScrollBottom),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Message::WindowGrow),
        KeyCode::Char('-') => Some(Message::WindowShrink),
        _ => None, // Unsupported keys ignored
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(key_event_to_message(key))
            }
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout so the status line can refresh
        Ok(Some(Message::Tick))
    }
}
