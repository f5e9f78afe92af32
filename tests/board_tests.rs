//! Field behavior through the public API: placement, collision, line clears.

use brick_tetris::core::{pattern, Board};
use brick_tetris::types::{PieceKind, FIELD_WIDTH};

fn occupied_count(board: &Board) -> u32 {
    board.cells().iter().map(|&c| u32::from(c)).sum()
}

#[test]
fn pieces_stack_without_overlap() {
    let mut board = Board::new();
    let o = pattern(PieceKind::O, 0);

    board.attach(&o, 0, 18);
    assert!(!board.fits(&o, 0, 18));
    assert!(!board.fits(&o, 1, 18));
    // Stacking directly on top is legal.
    assert!(board.fits(&o, 0, 16));
    board.attach(&o, 0, 16);
    assert_eq!(occupied_count(&board), 8);
}

#[test]
fn a_row_of_o_pieces_clears_the_bottom_two_rows() {
    let mut board = Board::new();
    let o = pattern(PieceKind::O, 0);

    // Five O pieces side by side fill rows 18 and 19 exactly.
    for i in 0..5 {
        let x = i * 2;
        assert!(board.fits(&o, x, 18));
        board.attach(&o, x, 18);
    }

    let cleared = board.collapse_full_rows();
    assert_eq!(cleared.len(), 2);
    assert_eq!(occupied_count(&board), 0);
}

#[test]
fn partial_rows_slide_down_after_a_clear() {
    let mut board = Board::new();

    // A lone marker in row 17, then a full row 19.
    board.set(4, 17, true);
    for x in 0..FIELD_WIDTH as i8 {
        board.set(x, 19, true);
    }

    let cleared = board.collapse_full_rows();
    assert_eq!(cleared.as_slice(), &[19]);
    assert!(board.is_occupied(4, 18));
    assert!(!board.is_occupied(4, 17));
    assert_eq!(occupied_count(&board), 1);
}

#[test]
fn vertical_i_fits_flush_against_the_walls() {
    let board = Board::new();
    // Vertical I occupies pattern column 2.
    let i = pattern(PieceKind::I, 1);

    assert!(board.fits(&i, -2, 10));
    assert!(!board.fits(&i, -3, 10));
    assert!(board.fits(&i, 7, 10));
    assert!(!board.fits(&i, 8, 10));
}

#[test]
fn every_rotation_of_every_kind_fits_mid_field() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for rotation in 0..4 {
            assert!(
                board.fits(&pattern(kind, rotation), 3, 8),
                "{:?} rotation {} should fit in open field",
                kind,
                rotation
            );
        }
    }
}
