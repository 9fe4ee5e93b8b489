//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use serde::{Deserialize, Serialize};

/// Well dimensions. Coordinates are x in 0..=MAX_X left to right and
/// y in 0..=MAX_Y bottom to top, so y = 0 is the floor row.
pub const WELL_WIDTH: u8 = 10;
pub const WELL_HEIGHT: u8 = 21;
pub const MAX_X: i8 = WELL_WIDTH as i8 - 1;
pub const MAX_Y: i8 = WELL_HEIGHT as i8 - 1;

/// Display anchors (spawn is centered on the top row; the next/hold boxes
/// sit outside the well on the panel side)
pub const SPAWN_X: i8 = MAX_X / 2;
pub const SPAWN_Y: i8 = MAX_Y;
pub const NEXT_BOX_X: i8 = 13;
pub const NEXT_BOX_Y: i8 = 18;
pub const HOLD_BOX_X: i8 = 13;
pub const HOLD_BOX_Y: i8 = 11;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const BASE_FALL_MS: u32 = 1000;

/// Level progression
pub const MAX_LEVEL: u32 = 5;
pub const LINES_PER_LEVEL: u32 = 10;

/// Scoring: points per cleared line, plus a bonus per line beyond the
/// first when several clear at once
pub const LINE_SCORE: u32 = 10;
pub const MULTI_LINE_BONUS: u32 = 5;

/// Longest player name accepted for save files and leaderboard records
pub const MAX_NAME_LEN: usize = 11;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];
}

/// Cell colors (the palette is independent of the piece kind; the
/// generator draws both at random)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    LightGray,
    Red,
    Yellow,
    Green,
    Cyan,
}

impl PieceColor {
    pub const ALL: [PieceColor; 5] = [
        PieceColor::LightGray,
        PieceColor::Red,
        PieceColor::Yellow,
        PieceColor::Green,
        PieceColor::Cyan,
    ];
}

/// Outcome of probing a piece position against the well.
///
/// The variants are ordered by how movement code reacts to them: `Free`
/// accepts the move, the two bound variants trigger a wall-kick during
/// rotation, and `Collided` (floor or locked cell) always rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Free,
    Collided,
    LeftBound,
    RightBound,
}

/// Top-level game phases. Exactly one is active; `GameSession` keeps a
/// single previous-phase slot for returning out of dialog phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    MainMenu,
    Playing,
    Paused,
    Ranking,
    Help,
    LoadPrompt,
    SavePrompt,
    Success,
    LoadFailed,
    SaveFailed,
    ConfirmRestart,
    ConfirmMainMenu,
    GameOver,
    RecordEntry,
}

/// Discrete player commands, dispatched by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    ToggleHold,
    Pause,
    Resume,
    RequestRestart,
    RequestMainMenu,
    RequestSave,
    RequestLoad,
    RequestHelp,
}

/// Cell on the board (None = empty, Some = taken with a color)
pub type Cell = Option<PieceColor>;
