use serde::{Deserialize, Serialize};

use crate::core::pieces::Piece;
use crate::core::Board;

/// Everything a save file captures: the well, all three piece slots,
/// the counters and the hold flags. The phase is not part of it; a
/// restored game re-enters play through the success dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub board: Board,
    pub falling: Option<Piece>,
    pub preview: Option<Piece>,
    pub held: Option<Piece>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub just_released: bool,
    pub skip_hold_round: bool,
}
