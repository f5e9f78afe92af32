//! Read-only view of the game handed to renderers.

use crate::types::{FIELD_HEIGHT, FIELD_WIDTH, PIECE_SIZE};

/// Occupancy grid of the visible field, falling piece included
pub type FieldGrid = [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];

/// 4x4 preview pattern of the lookahead piece
pub type NextGrid = [[u8; PIECE_SIZE as usize]; PIECE_SIZE as usize];

/// Snapshot of everything a renderer needs.
///
/// `field` and `next` both `None` is the session-ended sentinel: the driver
/// loop stops when it sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub field: Option<FieldGrid>,
    pub next: Option<NextGrid>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub speed: u32,
    pub paused: bool,
}

impl GameSnapshot {
    /// Whether the session is still alive
    pub fn running(&self) -> bool {
        self.field.is_some() || self.next.is_some()
    }
}
