use crate::game_state::CellState;
use crate::types::{Outcome, Pos};

/// Read-only copy of everything the view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Visible grid, row-major.
    pub cells: Vec<CellState>,
    pub cursor: Pos,
    pub revealed: u32,
    pub flagged: u32,
    pub max_flags: u32,
    pub game_over: bool,
    pub outcome: Outcome,
}

impl GameSnapshot {
    /// Visible state at `(row, col)`, `None` if out of bounds.
    pub fn cell(&self, row: u16, col: u16) -> Option<CellState> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(Pos::new(row, col).index(self.width)).copied()
    }

    pub fn flags_left(&self) -> u32 {
        self.max_flags.saturating_sub(self.flagged)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            cursor: Pos::default(),
            revealed: 0,
            flagged: 0,
            max_flags: 0,
            game_over: false,
            outcome: Outcome::Playing,
        }
    }
}
