//! tetrion - terminal falling-block game
//!
//! `core` holds the pure game logic (well, pieces, session flow),
//! `storage` the save files and the leaderboard, `input` the
//! key-to-command mapping, and `term` the frame buffer, renderer and
//! views.

pub mod core;
pub mod input;
pub mod storage;
pub mod term;
pub mod types;
