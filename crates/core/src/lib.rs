//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI, terminal, or threads, making it:
//!
//! - **Deterministic**: Same seed produces the same minefield
//! - **Testable**: Prepared layouts via [`Minefield::from_mines`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`minefield`]: hidden grid, mine placement and adjacency counts
//! - [`game_state`]: visible grid, cursor, reveal/flood/flag and win/loss
//! - [`snapshot`]: read-only view handed to the renderer
//! - [`error`]: construction errors
//!
//! # Game Rules
//!
//! - Selecting a mine loses and shows every mine
//! - Selecting a zero cell flood-reveals its connected zero region and border
//! - Flagged cells cannot be selected; flags are capped at the mine count
//! - The game is won once every cell is either revealed or flagged
//! - After the game ends, select and flag do nothing
//!
//! # Example
//!
//! ```
//! use tui_mines_core::{CellState, GameState, Outcome};
//! use tui_mines_types::GameAction;
//!
//! // A 2x2 board without mines is cleared by a single select.
//! let mut game = GameState::new(2, 2, 0, 12345).unwrap();
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Select);
//!
//! assert_eq!(game.revealed_count(), 4);
//! assert_eq!(game.outcome(), Outcome::Won);
//! assert!(game.visible_cells().iter().all(|&c| c == CellState::WonMarker));
//! ```

pub mod error;
pub mod game_state;
pub mod minefield;
pub mod snapshot;

pub use tui_mines_types as types;

// Re-export commonly used types for convenience
pub use error::{GameError, Result};
pub use game_state::{CellState, GameState, Outcome};
pub use minefield::{CellValue, Minefield};
pub use snapshot::GameSnapshot;
