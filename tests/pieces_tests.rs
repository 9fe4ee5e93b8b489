//! Piece geometry and rotation tests.

use tetrion::core::pieces::{spawn_offsets, Coord, Piece};
use tetrion::core::{try_rotate, Board};
use tetrion::types::{PieceColor, PieceKind, SPAWN_X, SPAWN_Y};

// ============== Shape Table ==============

#[test]
fn test_spawn_offsets_match_shape_table() {
    let table = [
        (PieceKind::I, [(0, -1), (0, 1), (0, 2)]),
        (PieceKind::J, [(-1, 0), (0, 1), (0, 2)]),
        (PieceKind::L, [(1, 0), (0, 1), (0, 2)]),
        (PieceKind::O, [(1, 0), (0, 1), (1, 1)]),
        (PieceKind::S, [(-1, 0), (0, 1), (1, 1)]),
        (PieceKind::Z, [(-1, 1), (0, 1), (1, 0)]),
        (PieceKind::T, [(0, 1), (-1, 0), (1, 0)]),
    ];

    for (kind, expected) in table {
        let offsets = spawn_offsets(kind);
        for (offset, (x, y)) in offsets.iter().zip(expected) {
            assert_eq!(*offset, Coord::new(x, y), "offset table for {:?}", kind);
        }
    }
}

#[test]
fn test_new_piece_sits_at_spawn_anchor() {
    let piece = Piece::new(PieceKind::T, PieceColor::Red);
    assert_eq!(piece.anchor, Coord::new(SPAWN_X, SPAWN_Y));
    assert_eq!(piece.offsets, spawn_offsets(PieceKind::T));
}

#[test]
fn test_cells_lists_anchor_first() {
    let piece = Piece::new(PieceKind::J, PieceColor::Cyan);
    let cells = piece.cells();
    assert_eq!(cells[0], piece.anchor);
    assert_eq!(cells[1], Coord::new(SPAWN_X - 1, SPAWN_Y));
}

// ============== Movement ==============

#[test]
fn test_translate_moves_anchor_only() {
    let mut piece = Piece::new(PieceKind::S, PieceColor::Green);
    let offsets = piece.offsets;

    piece.translate(-2, -5);

    assert_eq!(piece.anchor, Coord::new(SPAWN_X - 2, SPAWN_Y - 5));
    assert_eq!(piece.offsets, offsets);
}

#[test]
fn test_move_to_spawn_keeps_orientation() {
    let mut piece = Piece::new(PieceKind::L, PieceColor::Yellow);
    piece.rotate_cw();
    let rotated = piece.offsets;
    piece.translate(3, -7);

    piece.move_to_spawn();

    assert_eq!(piece.anchor, Coord::new(SPAWN_X, SPAWN_Y));
    assert_eq!(piece.offsets, rotated);
}

#[test]
fn test_parking_resets_orientation() {
    let mut piece = Piece::new(PieceKind::Z, PieceColor::Red);
    piece.rotate_cw();
    piece.rotate_cw();

    piece.park_in_next_box();
    assert_eq!(piece.anchor, Coord::new(13, 18));
    assert_eq!(piece.offsets, spawn_offsets(PieceKind::Z));

    piece.rotate_ccw();
    piece.park_in_hold_box();
    assert_eq!(piece.anchor, Coord::new(13, 11));
    assert_eq!(piece.offsets, spawn_offsets(PieceKind::Z));
}

// ============== Rotation ==============

#[test]
fn test_rotate_cw_maps_offsets() {
    let mut piece = Piece::new(PieceKind::T, PieceColor::LightGray);

    piece.rotate_cw();

    // (x, y) -> (y, -x)
    assert_eq!(piece.offsets[0], Coord::new(1, 0));
    assert_eq!(piece.offsets[1], Coord::new(0, 1));
    assert_eq!(piece.offsets[2], Coord::new(0, -1));
}

#[test]
fn test_rotate_ccw_undoes_cw() {
    for kind in PieceKind::ALL {
        let original = Piece::new(kind, PieceColor::Cyan);
        let mut piece = original;

        piece.rotate_cw();
        piece.rotate_ccw();

        assert_eq!(piece, original, "{:?}", kind);
    }
}

#[test]
fn test_four_cw_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let original = Piece::new(kind, PieceColor::Green);
        let mut piece = original;

        for _ in 0..4 {
            piece.rotate_cw();
        }

        assert_eq!(piece, original, "{:?}", kind);
    }
}

#[test]
fn test_square_piece_never_rotates() {
    let original = Piece::new(PieceKind::O, PieceColor::Yellow);
    let mut piece = original;

    piece.rotate_cw();
    assert_eq!(piece, original);
    piece.rotate_ccw();
    assert_eq!(piece, original);
}

// ============== Wall Kicks ==============

#[test]
fn test_rotation_on_open_board_sticks() {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::T, PieceColor::Red);
    piece.translate(0, -10);
    let anchor = piece.anchor;

    let rotated = try_rotate(&mut piece, |p| board.collision_check(p));

    assert!(rotated);
    assert_eq!(piece.anchor, anchor);
    assert_ne!(piece.offsets, spawn_offsets(PieceKind::T));
}

#[test]
fn test_kick_steps_off_left_wall() {
    let board = Board::new();
    // Vertical I against the left wall; rotating turns it horizontal and
    // pokes one cell past the wall.
    let mut piece = Piece::new(PieceKind::I, PieceColor::Cyan);
    piece.anchor = Coord::new(0, 10);

    let rotated = try_rotate(&mut piece, |p| board.collision_check(p));

    assert!(rotated);
    assert_eq!(piece.anchor, Coord::new(1, 10));
}

#[test]
fn test_kick_walks_two_cells_off_right_wall() {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::I, PieceColor::Cyan);
    piece.anchor = Coord::new(9, 10);

    let rotated = try_rotate(&mut piece, |p| board.collision_check(p));

    assert!(rotated);
    assert_eq!(piece.anchor, Coord::new(7, 10));
}

#[test]
fn test_blocked_rotation_rolls_back() {
    let board = Board::new();
    // T on the floor; rotating would push a cell below it.
    let mut piece = Piece::new(PieceKind::T, PieceColor::Red);
    piece.anchor = Coord::new(4, 0);
    let original = piece;

    let rotated = try_rotate(&mut piece, |p| board.collision_check(p));

    assert!(!rotated);
    assert_eq!(piece, original);
}

#[test]
fn test_kick_dead_end_restores_anchor_and_orientation() {
    let mut board = Board::new();
    // The kick target cell is occupied, so the walk ends in a collision.
    board.set(2, 10, Some(PieceColor::Green));

    let mut piece = Piece::new(PieceKind::I, PieceColor::Cyan);
    piece.anchor = Coord::new(0, 10);
    let original = piece;

    let rotated = try_rotate(&mut piece, |p| board.collision_check(p));

    assert!(!rotated);
    assert_eq!(piece, original);
}
