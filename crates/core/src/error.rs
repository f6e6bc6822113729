//! Construction errors for the game core.
//!
//! Gameplay operations never fail: invalid moves are no-ops. Only building a
//! board from bad parameters is reported to the caller.

use thiserror::Error;

use crate::types::Pos;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },
    #[error("too many mines: {mines} leaves no free cell on a {width}x{height} board")]
    TooManyMines { mines: u32, width: u16, height: u16 },
    #[error("mine position {0:?} is outside the board")]
    InvalidCoords(Pos),
    #[error("mine position {0:?} listed twice")]
    DuplicateMine(Pos),
}

pub type Result<T> = core::result::Result<T, GameError>;
