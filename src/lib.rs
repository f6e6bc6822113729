//! TUI Mines (workspace facade crate).
//!
//! Re-exports the workspace crates under short module names so the binary,
//! integration tests and benches share one import path:
//! `tui_mines::{core, input, term, types}`.

pub use tui_mines_core as core;
pub use tui_mines_input as input;
pub use tui_mines_term as term;
pub use tui_mines_types as types;
