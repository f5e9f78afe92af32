//! Keyboard handling: crossterm key events mapped to engine commands.
//!
//! Key repeat comes from the terminal itself; holding an arrow key streams
//! Press events and each one becomes a command. Release events are ignored.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::types::Command;

/// Map a key code to an engine command.
///
/// Bindings: Enter starts, arrow keys (or WASD) move, Space rotates, Esc
/// pauses, q quits.
pub fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Down),
        KeyCode::Char(' ') => Some(Command::Rotate),
        KeyCode::Esc => Some(Command::Pause),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Terminate),
        _ => None,
    }
}

/// Map a full key event, dropping releases
pub fn map_key_event(key: KeyEvent) -> Option<Command> {
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => map_key(key.code),
        KeyEventKind::Release => None,
    }
}

/// Wait up to `timeout` for a key press and translate it.
///
/// Returns `Ok(None)` when the timeout elapses, when a non-key event arrives,
/// or when the key has no binding. The driver loop calls this once per
/// iteration, so the timeout doubles as the loop's frame pacing.
pub fn poll_command(timeout: Duration) -> Result<Option<Command>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) => Ok(map_key_event(key)),
        _ => Ok(None),
    }
}
