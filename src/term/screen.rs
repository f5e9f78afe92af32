//! TerminalScreen: owns the terminal session and flushes rendered frames.
//!
//! Raw mode plus the alternate screen for the lifetime of the game; `exit`
//! restores the caller's terminal. Drawing is a full-frame rewrite, queued
//! and flushed once. At ~10 frames per second that is well below what a
//! terminal can absorb, so no diffing is done.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::Print,
    terminal::{self, Clear, ClearType},
    QueueableCommand,
};

use crate::core::snapshot::GameSnapshot;
use crate::term::view;

pub struct TerminalScreen {
    stdout: io::Stdout,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Render a snapshot to the terminal
    pub fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let lines = view::render_lines(snapshot);
        for (y, line) in lines.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, y as u16))?;
            self.stdout.queue(Clear(ClearType::CurrentLine))?;
            self.stdout.queue(Print(line))?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}
