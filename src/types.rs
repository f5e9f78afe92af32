//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Field dimensions
pub const FIELD_WIDTH: u8 = 10;
pub const FIELD_HEIGHT: u8 = 20;

/// Side length of a piece's bounding pattern
pub const PIECE_SIZE: u8 = 4;

/// Spawn anchor: top center, fully above the visible field
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = -3;

/// Gravity timing (milliseconds): interval = BASE_DROP_MS - DROP_STEP_MS * speed
pub const BASE_DROP_MS: u64 = 1000;
pub const DROP_STEP_MS: u64 = 75;

/// Level is derived from score and clamps here; speed mirrors level
pub const MAX_LEVEL: u32 = 10;
pub const LEVEL_SCORE_STEP: u32 = 600;

/// Points awarded for clearing 1..=4 rows in a single attach
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 700, 1500];

/// Input poll timeout for the driver loop (milliseconds)
pub const INPUT_POLL_MS: u64 = 100;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    L,
    O,
    T,
    S,
    Z,
    J,
}

impl PieceKind {
    /// All seven variants, in pattern-table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
    ];
}

/// Commands accepted by the engine FSM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Terminate,
    Left,
    Right,
    Down,
    Rotate,
}
