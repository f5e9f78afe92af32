//! GameView: maps a `GameSnapshot` into terminal text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Occupied cells render as `[]` and empty cells as ` .`, two terminal columns
//! per cell to compensate for the glyph aspect ratio. The stats panel sits to
//! the right of the field.

use crate::core::snapshot::{FieldGrid, GameSnapshot, NextGrid};
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH, PIECE_SIZE};

const CELL_OCCUPIED: &str = "[]";
const CELL_EMPTY: &str = " .";
const PANEL_GAP: &str = "   ";

/// Terminal columns spanned by the bordered field
const FIELD_COLS: usize = 2 + 2 * FIELD_WIDTH as usize;

/// Render a snapshot into one string per terminal row.
///
/// Always returns `FIELD_HEIGHT + 2` lines (field plus borders); the stats
/// panel is appended to the right of the rows it fits beside.
pub fn render_lines(snapshot: &GameSnapshot) -> Vec<String> {
    let field = snapshot.field.unwrap_or([[0; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize]);
    let panel = panel_lines(snapshot);

    let border: String = format!("+{}+", "-".repeat(2 * FIELD_WIDTH as usize));
    let mut lines = Vec::with_capacity(FIELD_HEIGHT as usize + 2);
    lines.push(border.clone());
    for (y, row) in field.iter().enumerate() {
        let mut line = String::with_capacity(FIELD_COLS + 24);
        line.push('|');
        for &cell in row {
            line.push_str(if cell != 0 { CELL_OCCUPIED } else { CELL_EMPTY });
        }
        line.push('|');
        if let Some(text) = panel.get(y) {
            if !text.is_empty() {
                line.push_str(PANEL_GAP);
                line.push_str(text);
            }
        }
        lines.push(line);
    }
    lines.push(border);
    lines
}

fn panel_lines(snapshot: &GameSnapshot) -> Vec<String> {
    let mut panel = vec![
        format!("SCORE  {:>7}", snapshot.score),
        format!("HIGH   {:>7}", snapshot.high_score),
        format!("LEVEL  {:>7}", snapshot.level),
        format!("SPEED  {:>7}", snapshot.speed),
        String::new(),
        "NEXT".to_string(),
    ];
    panel.extend(preview_lines(snapshot.next));
    panel.push(String::new());
    panel.push(if snapshot.paused {
        "** PAUSED **".to_string()
    } else {
        String::new()
    });
    panel.push(String::new());
    panel.push("enter start   esc pause".to_string());
    panel.push("arrows move   space rotate".to_string());
    panel.push("q quit".to_string());
    panel
}

fn preview_lines(next: Option<NextGrid>) -> Vec<String> {
    let grid = next.unwrap_or([[0; PIECE_SIZE as usize]; PIECE_SIZE as usize]);
    grid.iter()
        .map(|row| {
            let mut line = String::from("  ");
            for &cell in row {
                line.push_str(if cell != 0 { CELL_OCCUPIED } else { "  " });
            }
            line.trim_end().to_string()
        })
        .collect()
}

/// Debug helper: the bare field without the stats panel
pub fn field_lines(field: &FieldGrid) -> Vec<String> {
    render_lines(&GameSnapshot {
        field: Some(*field),
        next: None,
        score: 0,
        high_score: 0,
        level: 0,
        speed: 0,
        paused: false,
    })
    .into_iter()
    .map(|line| line.chars().take(FIELD_COLS).collect())
    .collect()
}
