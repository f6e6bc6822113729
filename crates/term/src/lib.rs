//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the board is drawn into a plain
//! framebuffer, which is then flushed to the terminal with `crossterm`.
//!
//! Goals:
//! - Keep `core` free of any character or color encoding
//! - Keep the snapshot-to-framebuffer step pure and unit-testable
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_mines_core as core;
pub use tui_mines_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_glyph, GameView, Viewport, TOO_SMALL_MESSAGE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
