//! Board module - manages the well grid
//!
//! The well is a 10x21 grid where each cell is empty or taken with a color.
//! Coordinates: (x, y) with x ranging 0..=9 (left to right) and y ranging
//! 0..=20 (bottom to top), so y = 0 is the floor row and pieces spawn on
//! the top row. Cells above the top row do not exist; a piece may poke
//! above the well while falling and those cells are simply not stored.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::core::pieces::{Coord, Piece};
use crate::types::{Cell, Collision, MAX_X, MAX_Y, WELL_HEIGHT, WELL_WIDTH};

const COLS: usize = WELL_WIDTH as usize;
const ROWS: usize = WELL_HEIGHT as usize;

/// The well - 10 columns x 21 rows, indexed \[row\]\[column\]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Check if (x, y) is a cell of the well
    pub fn in_bounds(&self, x: i8, y: i8) -> bool {
        (0..=MAX_X).contains(&x) && (0..=MAX_Y).contains(&y)
    }

    /// Get cell at (x, y); None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.cells[y as usize][x as usize])
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.cells[y as usize][x as usize] = cell;
        true
    }

    /// Check if (x, y) is within bounds and taken
    pub fn is_taken(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely taken
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ROWS {
            return false;
        }
        self.cells[y].iter().all(|cell| cell.is_some())
    }

    /// Classify a single cell position against the well.
    /// The x bound checks come first, so a cell that is both past a side
    /// wall and below the floor reports the wall.
    fn classify(&self, c: Coord) -> Collision {
        if c.x < 0 {
            return Collision::LeftBound;
        }
        if c.x > MAX_X {
            return Collision::RightBound;
        }
        if c.y < 0 {
            return Collision::Collided;
        }
        if c.y <= MAX_Y && self.cells[c.y as usize][c.x as usize].is_some() {
            return Collision::Collided;
        }
        // Above the top row is open air.
        Collision::Free
    }

    /// Classify a piece position against the well: the anchor cell is
    /// probed first, then the three offset cells in table order, and the
    /// first non-free classification wins. Movement undo and wall-kick
    /// direction both rely on this scan order.
    pub fn collision_check(&self, piece: &Piece) -> Collision {
        for cell in piece.cells() {
            let hit = self.classify(cell);
            if hit != Collision::Free {
                return hit;
            }
        }
        Collision::Free
    }

    /// Write a piece's color into its four cells, marking them taken.
    /// Callers must have verified the position via `collision_check`;
    /// cells poking above the top row are not stored.
    pub fn lock(&mut self, piece: &Piece) {
        for cell in piece.cells() {
            if cell.y > MAX_Y {
                continue;
            }
            debug_assert!(
                self.in_bounds(cell.x, cell.y) && !self.is_taken(cell.x, cell.y),
                "locking into an invalid cell at ({}, {})",
                cell.x,
                cell.y
            );
            self.set(cell.x, cell.y, Some(piece.color));
        }
    }

    /// Clear every full row and return the cleared row indices in scan
    /// order (top of the well first).
    ///
    /// The scan walks from the top row toward the floor; on a full row it
    /// shifts every row above down by one and empties the top row. Rows
    /// below the cleared one keep their index until the scan reaches
    /// them, so simultaneous clears are all caught in a single pass.
    pub fn clear_full_lines(&mut self) -> ArrayVec<usize, ROWS> {
        let mut cleared = ArrayVec::new();
        for y in (0..ROWS).rev() {
            if !self.is_row_full(y) {
                continue;
            }
            cleared.push(y);
            for yy in y..ROWS - 1 {
                self.cells[yy] = self.cells[yy + 1];
            }
            self.cells[ROWS - 1] = [None; COLS];
        }
        cleared
    }

    /// Empty the entire well
    pub fn clear(&mut self) {
        self.cells = [[None; COLS]; ROWS];
    }

    /// Fill a whole row for test and bench setups
    pub fn fill_row(&mut self, y: usize, cell: Cell) {
        self.cells[y] = [cell; COLS];
    }

    /// Count taken cells for test assertions
    #[cfg(test)]
    pub fn taken_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
