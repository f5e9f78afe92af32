//! Core module - pure game logic with no external I/O
//!
//! Game rules, the engine FSM, and state live here. Nothing in this module
//! touches the terminal or the filesystem except the engine's high-score
//! store, which is injected.

pub mod board;
pub mod game;
pub mod pieces;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game::{Game, Phase};
pub use pieces::{pattern, ActivePiece, Pattern};
pub use snapshot::{FieldGrid, GameSnapshot, NextGrid};
