//! Terminal module - rendering the game to a terminal
//!
//! `view` is the pure snapshot-to-text mapping; `screen` owns the terminal
//! session and does the actual I/O.

pub mod screen;
pub mod view;

pub use screen::TerminalScreen;
pub use view::render_lines;
