//! Terminal rendering layer.
//!
//! Renders into a plain framebuffer that is diffed and flushed to the
//! terminal backend, keeping `core` free of any I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, UiState, Viewport, MENU_ITEMS};
pub use renderer::TerminalRenderer;
