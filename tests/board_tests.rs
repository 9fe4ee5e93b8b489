//! Board collision and line clear tests, through the public API.

use tetrion::core::pieces::{Coord, Piece};
use tetrion::core::Board;
use tetrion::types::{Collision, PieceColor, PieceKind, MAX_X, MAX_Y};

fn piece_at(kind: PieceKind, x: i8, y: i8) -> Piece {
    let mut piece = Piece::new(kind, PieceColor::Red);
    piece.anchor = Coord::new(x, y);
    piece
}

fn fill_row(board: &mut Board, y: i8, color: PieceColor) {
    for x in 0..=MAX_X {
        board.set(x, y, Some(color));
    }
}

// ============== Cells ==============

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for y in 0..=MAX_Y {
        for x in 0..=MAX_X {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_set_and_get_round_trip() {
    let mut board = Board::new();
    assert!(board.set(3, 7, Some(PieceColor::Green)));
    assert_eq!(board.get(3, 7), Some(Some(PieceColor::Green)));
    assert!(board.is_taken(3, 7));
}

#[test]
fn test_out_of_bounds_access() {
    let mut board = Board::new();
    assert!(!board.set(-1, 0, Some(PieceColor::Red)));
    assert!(!board.set(0, MAX_Y + 1, Some(PieceColor::Red)));
    assert_eq!(board.get(10, 0), None);
    assert!(!board.is_taken(-1, -1));
}

// ============== Collision Classification ==============

#[test]
fn test_piece_in_open_interior_is_free() {
    let board = Board::new();
    let piece = piece_at(PieceKind::T, 4, 10);
    assert_eq!(board.collision_check(&piece), Collision::Free);
}

#[test]
fn test_side_wall_reported_before_floor() {
    let board = Board::new();
    // Anchor past both the left wall and the floor: the wall wins.
    let piece = piece_at(PieceKind::O, -1, -5);
    assert_eq!(board.collision_check(&piece), Collision::LeftBound);
}

#[test]
fn test_right_wall_reported_for_overhang() {
    let board = Board::new();
    let piece = piece_at(PieceKind::L, MAX_X, 10);
    assert_eq!(board.collision_check(&piece), Collision::RightBound);
}

#[test]
fn test_floor_reports_collision() {
    let board = Board::new();
    let piece = piece_at(PieceKind::T, 4, -1);
    assert_eq!(board.collision_check(&piece), Collision::Collided);
}

#[test]
fn test_taken_cell_reports_collision() {
    let mut board = Board::new();
    board.set(4, 10, Some(PieceColor::Cyan));
    let piece = piece_at(PieceKind::T, 4, 10);
    assert_eq!(board.collision_check(&piece), Collision::Collided);
}

#[test]
fn test_cells_above_top_row_are_open_air() {
    let board = Board::new();
    // Vertical I at the spawn row pokes two cells above the well.
    let piece = piece_at(PieceKind::I, 4, MAX_Y);
    assert_eq!(board.collision_check(&piece), Collision::Free);
}

// ============== Locking ==============

#[test]
fn test_lock_writes_piece_color() {
    let mut board = Board::new();
    let piece = piece_at(PieceKind::O, 4, 10);

    board.lock(&piece);

    assert_eq!(board.get(4, 10), Some(Some(PieceColor::Red)));
    assert_eq!(board.get(5, 10), Some(Some(PieceColor::Red)));
    assert_eq!(board.get(4, 11), Some(Some(PieceColor::Red)));
    assert_eq!(board.get(5, 11), Some(Some(PieceColor::Red)));
}

#[test]
fn test_lock_drops_cells_above_top_row() {
    let mut board = Board::new();
    let piece = piece_at(PieceKind::I, 4, MAX_Y);

    board.lock(&piece);

    // Only the anchor and the cell below it are inside the well.
    assert!(board.is_taken(4, MAX_Y));
    assert!(board.is_taken(4, MAX_Y - 1));
    assert!(!board.is_row_full(MAX_Y as usize));
}

// ============== Line Clears ==============

#[test]
fn test_clear_on_empty_board_returns_nothing() {
    let mut board = Board::new();
    let cleared = board.clear_full_lines();
    assert!(cleared.is_empty());
    assert_eq!(board, Board::new());
}

#[test]
fn test_clear_shifts_rows_above_down() {
    let mut board = Board::new();
    fill_row(&mut board, 0, PieceColor::Red);
    board.set(3, 1, Some(PieceColor::Green));

    let cleared = board.clear_full_lines();

    assert_eq!(cleared.as_slice(), &[0]);
    assert_eq!(board.get(3, 0), Some(Some(PieceColor::Green)));
    assert_eq!(board.get(3, 1), Some(None));
}

#[test]
fn test_partial_row_does_not_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 4, PieceColor::Yellow);
    board.set(0, 4, None);

    let cleared = board.clear_full_lines();

    assert!(cleared.is_empty());
    assert!(board.is_taken(1, 4));
}

#[test]
fn test_multiple_rows_clear_top_down() {
    let mut board = Board::new();
    fill_row(&mut board, 2, PieceColor::Red);
    fill_row(&mut board, 5, PieceColor::Cyan);

    let cleared = board.clear_full_lines();

    assert_eq!(cleared.as_slice(), &[5, 2]);
}

#[test]
fn test_adjacent_full_rows_all_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 3, PieceColor::Green);
    fill_row(&mut board, 4, PieceColor::Green);
    board.set(7, 5, Some(PieceColor::LightGray));

    let cleared = board.clear_full_lines();

    assert_eq!(cleared.as_slice(), &[4, 3]);
    assert_eq!(board.get(7, 3), Some(Some(PieceColor::LightGray)));
    assert_eq!(board.get(7, 5), Some(None));
}

#[test]
fn test_clearing_a_full_board_empties_it() {
    let mut board = Board::new();
    for y in 0..=MAX_Y {
        fill_row(&mut board, y, PieceColor::Red);
    }

    let cleared = board.clear_full_lines();

    assert_eq!(cleared.len(), MAX_Y as usize + 1);
    assert_eq!(board, Board::new());
}
