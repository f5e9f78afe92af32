//! Terminal Tetris runner.
//!
//! The driver loop does three things per iteration: poll the keyboard with a
//! timeout, let the engine advance gravity, and draw the resulting snapshot.
//! It exits when the engine reports the session-ended sentinel.

use std::time::Duration;

use anyhow::Result;

use brick_tetris::core::Game;
use brick_tetris::input::poll_command;
use brick_tetris::storage::HighScoreStore;
use brick_tetris::term::TerminalScreen;
use brick_tetris::types::INPUT_POLL_MS;

fn main() -> Result<()> {
    let mut screen = TerminalScreen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TerminalScreen) -> Result<()> {
    let mut game = Game::new(HighScoreStore::default());
    let poll_timeout = Duration::from_millis(INPUT_POLL_MS);

    loop {
        screen.draw(&game.snapshot())?;

        if let Some(command) = poll_command(poll_timeout)? {
            game.handle(command);
        }
        game.update();

        if !game.snapshot().running() {
            return Ok(());
        }
    }
}
