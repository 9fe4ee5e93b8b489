//! Pieces module - tetromino geometry and rotation
//!
//! A piece is one anchor cell plus three offsets relative to it, so
//! translation touches only the anchor and rotation is a single transform
//! applied to each offset. The square piece is exempt from rotation.

use serde::{Deserialize, Serialize};

use crate::types::{
    Collision, PieceColor, PieceKind, HOLD_BOX_X, HOLD_BOX_Y, NEXT_BOX_X, NEXT_BOX_Y, SPAWN_X,
    SPAWN_Y,
};

/// A grid coordinate: absolute for anchors, relative for offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Coord { x, y }
    }
}

/// Offsets of the three auxiliary cells for each kind, y up
pub fn spawn_offsets(kind: PieceKind) -> [Coord; 3] {
    match kind {
        PieceKind::I => [Coord::new(0, -1), Coord::new(0, 1), Coord::new(0, 2)],
        PieceKind::J => [Coord::new(-1, 0), Coord::new(0, 1), Coord::new(0, 2)],
        PieceKind::L => [Coord::new(1, 0), Coord::new(0, 1), Coord::new(0, 2)],
        PieceKind::O => [Coord::new(1, 0), Coord::new(0, 1), Coord::new(1, 1)],
        PieceKind::S => [Coord::new(-1, 0), Coord::new(0, 1), Coord::new(1, 1)],
        PieceKind::Z => [Coord::new(-1, 1), Coord::new(0, 1), Coord::new(1, 0)],
        PieceKind::T => [Coord::new(0, 1), Coord::new(-1, 0), Coord::new(1, 0)],
    }
}

/// One tetromino: kind, color, absolute anchor, three relative cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
    pub anchor: Coord,
    pub offsets: [Coord; 3],
}

impl Piece {
    /// New piece at the spawn anchor with table offsets
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Piece {
            kind,
            color,
            anchor: Coord::new(SPAWN_X, SPAWN_Y),
            offsets: spawn_offsets(kind),
        }
    }

    /// Absolute coordinates of all four cells, anchor first.
    /// Collision scanning depends on this order.
    pub fn cells(&self) -> [Coord; 4] {
        let a = self.anchor;
        [
            a,
            Coord::new(a.x + self.offsets[0].x, a.y + self.offsets[0].y),
            Coord::new(a.x + self.offsets[1].x, a.y + self.offsets[1].y),
            Coord::new(a.x + self.offsets[2].x, a.y + self.offsets[2].y),
        ]
    }

    /// Shift the anchor; offsets are relative and unaffected.
    /// No validation here, callers probe with a collision check.
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.anchor.x += dx;
        self.anchor.y += dy;
    }

    /// Rotate 90 degrees clockwise: each offset (x, y) becomes (y, -x).
    /// The square kind keeps its offsets.
    pub fn rotate_cw(&mut self) {
        if self.kind == PieceKind::O {
            return;
        }
        for off in self.offsets.iter_mut() {
            *off = Coord::new(off.y, -off.x);
        }
    }

    /// Inverse of `rotate_cw`: each offset (x, y) becomes (-y, x)
    pub fn rotate_ccw(&mut self) {
        if self.kind == PieceKind::O {
            return;
        }
        for off in self.offsets.iter_mut() {
            *off = Coord::new(-off.y, off.x);
        }
    }

    /// Reposition to the spawn anchor at the top of the well.
    /// Offsets keep whatever orientation the piece already has.
    pub fn move_to_spawn(&mut self) {
        self.anchor = Coord::new(SPAWN_X, SPAWN_Y);
    }

    /// Park in the preview box; orientation resets to the table shape
    pub fn park_in_next_box(&mut self) {
        self.anchor = Coord::new(NEXT_BOX_X, NEXT_BOX_Y);
        self.offsets = spawn_offsets(self.kind);
    }

    /// Park in the hold box; orientation resets to the table shape
    pub fn park_in_hold_box(&mut self) {
        self.anchor = Coord::new(HOLD_BOX_X, HOLD_BOX_Y);
        self.offsets = spawn_offsets(self.kind);
    }
}

/// Rotate a piece in place, kicking off a side wall if that is all that
/// blocks it. `probe` classifies the piece's current position against the
/// well.
///
/// Policy: rotate first, then
/// - `Free` keeps the rotation;
/// - `Collided` (floor or locked cell) undoes it;
/// - a bound report walks the piece away from that wall one cell at a
///   time until the probe frees it, or undoes shift and rotation both
///   when the walk ends in a true collision.
///
/// Returns true if the piece ends up rotated.
pub fn try_rotate(piece: &mut Piece, probe: impl Fn(&Piece) -> Collision) -> bool {
    if piece.kind == PieceKind::O {
        return false;
    }

    let start_x = piece.anchor.x;
    piece.rotate_cw();

    match probe(piece) {
        Collision::Free => true,
        Collision::Collided => {
            piece.rotate_ccw();
            false
        }
        Collision::LeftBound => kick_away(piece, 1, start_x, probe),
        Collision::RightBound => kick_away(piece, -1, start_x, probe),
    }
}

fn kick_away(
    piece: &mut Piece,
    step: i8,
    start_x: i8,
    probe: impl Fn(&Piece) -> Collision,
) -> bool {
    let wall = if step > 0 {
        Collision::LeftBound
    } else {
        Collision::RightBound
    };

    loop {
        piece.anchor.x += step;
        match probe(piece) {
            c if c == wall => continue,
            Collision::Free => return true,
            _ => {
                piece.anchor.x = start_x;
                piece.rotate_ccw();
                return false;
            }
        }
    }
}
