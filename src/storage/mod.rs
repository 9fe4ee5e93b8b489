//! Disk persistence: per-player save files and the shared leaderboard.
//!
//! Everything lives under one directory (default `saves/`). Callers pass
//! the directory explicitly so tests can point at a scratch location.

pub mod records;
pub mod save;

pub use records::{load_records, save_record, ScoreRecord};
pub use save::{load_game, save_game, SAVE_DIR};
