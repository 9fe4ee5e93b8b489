//! Core module - pure game logic with no external dependencies
//!
//! Game rules, session flow and state management. Zero dependencies on
//! the terminal, input handling, or file I/O.

pub mod board;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use pieces::{try_rotate, Piece};
pub use rng::PieceGenerator;
pub use session::GameSession;
pub use snapshot::SavedGame;
