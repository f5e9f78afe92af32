//! Board module - manages the game field
//!
//! The field is a 20x10 grid of 0/1 occupancy, stored as a flat array for
//! cache locality and zero allocation. It holds locked cells only; the falling
//! piece is validated against it and merged in exactly once, at attach time.
//! Coordinates: (x, y) with x in 0..9 left to right, y in 0..19 top to bottom.
//! A piece's y may be negative while it is above the visible field.

use arrayvec::ArrayVec;

use crate::core::pieces::{pattern_cells, Pattern};
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells on the board
const FIELD_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// The game field - 10 columns x 20 rows of 0/1 cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [u8; FIELD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (FIELD_WIDTH as usize) + (x as usize))
    }

    /// Get cell occupancy at (x, y), or None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell occupancy at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied as u8;
                true
            }
            None => false,
        }
    }

    /// Check whether a locked cell occupies (x, y)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(1))
    }

    /// Check whether a pattern anchored at (x, y) is a legal piece position.
    ///
    /// A cell is illegal when it leaves the field to the left, right, or
    /// bottom, or lands on a locked cell. Cells above the field (y < 0) are
    /// legal as long as their column is in range: pieces spawn above row 0.
    pub fn fits(&self, p: &Pattern, x: i8, y: i8) -> bool {
        pattern_cells(p).all(|(dx, dy)| {
            let cx = x + dx;
            let cy = y + dy;
            if cx < 0 || cx >= FIELD_WIDTH as i8 || cy >= FIELD_HEIGHT as i8 {
                return false;
            }
            cy < 0 || !self.is_occupied(cx, cy)
        })
    }

    /// Merge a pattern's cells into the field at (x, y).
    ///
    /// Cells above row 0 are skipped; the field has no rows up there.
    pub fn attach(&mut self, p: &Pattern, x: i8, y: i8) {
        for (dx, dy) in pattern_cells(p) {
            let cy = y + dy;
            if cy >= 0 {
                self.set(x + dx, cy, true);
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= FIELD_HEIGHT as usize {
            return false;
        }
        let start = y * FIELD_WIDTH as usize;
        let end = start + FIELD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell == 1)
    }

    /// Collapse a row: shift every row above it down by one and clear row 0
    pub fn collapse_row(&mut self, y: usize) {
        if y >= FIELD_HEIGHT as usize {
            return;
        }

        let width = FIELD_WIDTH as usize;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }
        for cell in &mut self.cells[..width] {
            *cell = 0;
        }
    }

    /// Collapse every full row, top to bottom, and return the row indices
    /// that were cleared. A single attach can complete at most 4 rows.
    pub fn collapse_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        for y in 0..FIELD_HEIGHT as usize {
            if self.is_row_full(y) {
                cleared.push(y);
                self.collapse_row(y);
            }
        }
        cleared
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [0; FIELD_SIZE];
    }

    /// Copy the field into a 2D occupancy grid
    pub fn to_grid(&self) -> [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize] {
        let mut grid = [[0u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];
        for (y, row) in grid.iter_mut().enumerate() {
            let start = y * FIELD_WIDTH as usize;
            row.copy_from_slice(&self.cells[start..start + FIELD_WIDTH as usize]);
        }
        grid
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pieces::pattern;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_fits_allows_cells_above_field() {
        let board = Board::new();
        let p = pattern(PieceKind::O, 0);

        // Fully above the field but in-column: legal.
        assert!(board.fits(&p, 3, -3));
        // Straddling row 0: legal on an empty board.
        assert!(board.fits(&p, 3, -1));
    }

    #[test]
    fn test_fits_rejects_out_of_bounds() {
        let board = Board::new();
        let p = pattern(PieceKind::O, 0);

        // O occupies pattern columns 0..=1.
        assert!(!board.fits(&p, -1, 5));
        assert!(board.fits(&p, 8, 5));
        assert!(!board.fits(&p, 9, 5));
        // O occupies pattern rows 0..=1; bottom bound is row 19.
        assert!(board.fits(&p, 3, 18));
        assert!(!board.fits(&p, 3, 19));
    }

    #[test]
    fn test_fits_rejects_locked_cells() {
        let mut board = Board::new();
        let p = pattern(PieceKind::O, 0);

        board.set(3, 10, true);
        assert!(!board.fits(&p, 3, 10));
        assert!(!board.fits(&p, 3, 9));
        assert!(board.fits(&p, 4, 10));
    }

    #[test]
    fn test_attach_skips_rows_above_field() {
        let mut board = Board::new();
        let p = pattern(PieceKind::O, 0);

        // Pattern rows 0..=1 at anchor y=-1 -> only row 0 lands on the field.
        board.attach(&p, 3, -1);
        assert!(board.is_occupied(3, 0));
        assert!(board.is_occupied(4, 0));
        assert_eq!(board.cells().iter().map(|&c| c as u32).sum::<u32>(), 2);
    }

    #[test]
    fn test_collapse_row_shifts_rows_down() {
        let mut board = Board::new();
        // Mark a cell in row 5 and fill row 10.
        board.set(2, 5, true);
        for x in 0..FIELD_WIDTH as i8 {
            board.set(x, 10, true);
        }

        board.collapse_row(10);

        // Row 10 now holds what was in row 9 (empty), the marker moved down.
        assert!(!board.is_row_full(10));
        assert!(!board.is_occupied(2, 5));
        assert!(board.is_occupied(2, 6));
        // Row 0 is cleared.
        assert!((0..FIELD_WIDTH as i8).all(|x| !board.is_occupied(x, 0)));
    }

    #[test]
    fn test_collapse_full_rows_counts_cleared() {
        let mut board = Board::new();
        for y in [17, 19] {
            for x in 0..FIELD_WIDTH as i8 {
                board.set(x, y, true);
            }
        }
        board.set(0, 18, true);

        let cleared = board.collapse_full_rows();
        assert_eq!(cleared.len(), 2);
        // The partial row slides to the bottom.
        assert!(board.is_occupied(0, 19));
        assert_eq!(board.cells().iter().map(|&c| c as u32).sum::<u32>(), 1);
    }

    #[test]
    fn test_adjacent_full_rows_all_clear() {
        let mut board = Board::new();
        for y in 16..20 {
            for x in 0..FIELD_WIDTH as i8 {
                board.set(x, y, true);
            }
        }

        let cleared = board.collapse_full_rows();
        assert_eq!(cleared.len(), 4);
        assert!(board.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_cells_are_zero_or_one() {
        let mut board = Board::new();
        board.attach(&pattern(PieceKind::T, 0), 3, 10);
        board.attach(&pattern(PieceKind::T, 0), 3, 10);
        assert!(board.cells().iter().all(|&c| c == 0 || c == 1));
    }
}
