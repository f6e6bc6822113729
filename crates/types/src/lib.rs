//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types passed between the game core,
//! the input adapter and the terminal view. Nothing here depends on I/O.
//!
//! # Coordinates
//!
//! Boards are indexed by `(row, col)`:
//!
//! - **row**: `0..height`, top to bottom
//! - **col**: `0..width`, left to right
//!
//! # Difficulty Presets
//!
//! | Preset | Width | Height | Mines |
//! |--------|-------|--------|-------|
//! | `easy` | 8 | 8 | 10 |
//! | `medium` | 16 | 16 | 40 |
//! | `hard` | 30 | 16 | 99 |
//!
//! # Examples
//!
//! ```
//! use tui_mines_types::{Difficulty, GameAction, Pos};
//!
//! let config = Difficulty::from_str("hard").unwrap().config();
//! assert_eq!((config.width, config.height, config.mines), (30, 16, 99));
//!
//! let action = GameAction::from_str("toggleFlag").unwrap();
//! assert_eq!(action, GameAction::ToggleFlag);
//!
//! // Moving off the board yields None.
//! assert_eq!(Pos::new(0, 0).offset(-1, 0, 8, 8), None);
//! assert_eq!(Pos::new(0, 0).offset(1, 1, 8, 8), Some(Pos::new(1, 1)));
//! ```

/// Eight-neighborhood offsets as `(row delta, col delta)`.
pub const NEIGHBOR_DELTAS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Pos {
    pub row: u16,
    pub col: u16,
}

impl Pos {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Apply a delta, returning `None` when the result leaves a `width x height` board.
    pub fn offset(self, d_row: i16, d_col: i16, width: u16, height: u16) -> Option<Pos> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        if row >= height || col >= width {
            return None;
        }
        Some(Pos { row, col })
    }

    /// Flat row-major index on a board of the given width.
    #[inline(always)]
    pub fn index(self, width: u16) -> usize {
        (self.row as usize) * (width as usize) + (self.col as usize)
    }

    /// Inverse of [`Pos::index`].
    #[inline(always)]
    pub fn from_index(index: usize, width: u16) -> Pos {
        let w = width as usize;
        Pos {
            row: (index / w) as u16,
            col: (index % w) as u16,
        }
    }
}

/// Board dimensions plus mine count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: u16,
    pub height: u16,
    pub mines: u32,
}

impl BoardConfig {
    pub const fn new(width: u16, height: u16, mines: u32) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub const fn total_cells(&self) -> u32 {
        (self.width as u32) * (self.height as u32)
    }
}

/// Named board presets selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_mines_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("impossible"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub const fn config(&self) -> BoardConfig {
        match self {
            Difficulty::Easy => BoardConfig::new(8, 8, 10),
            Difficulty::Medium => BoardConfig::new(16, 16, 40),
            Difficulty::Hard => BoardConfig::new(30, 16, 99),
        }
    }
}

/// Abstract player actions produced by the input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the cursor one row up
    MoveUp,
    /// Move the cursor one row down
    MoveDown,
    /// Move the cursor one column left
    MoveLeft,
    /// Move the cursor one column right
    MoveRight,
    /// Reveal the cell under the cursor
    Select,
    /// Place or remove a flag under the cursor
    ToggleFlag,
    /// Leave the game
    Quit,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "select" => Some(GameAction::Select),
            "toggleflag" => Some(GameAction::ToggleFlag),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Select => "select",
            GameAction::ToggleFlag => "toggleFlag",
            GameAction::Quit => "quit",
        }
    }

    /// Cursor delta `(row, col)` for movement actions.
    pub const fn cursor_delta(&self) -> Option<(i16, i16)> {
        match self {
            GameAction::MoveUp => Some((-1, 0)),
            GameAction::MoveDown => Some((1, 0)),
            GameAction::MoveLeft => Some((0, -1)),
            GameAction::MoveRight => Some((0, 1)),
            _ => None,
        }
    }
}

/// Where a game stands; `Won` and `Lost` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Playing => "playing",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_classic_boards() {
        assert_eq!(Difficulty::Easy.config(), BoardConfig::new(8, 8, 10));
        assert_eq!(Difficulty::Medium.config(), BoardConfig::new(16, 16, 40));
        assert_eq!(Difficulty::Hard.config(), BoardConfig::new(30, 16, 99));
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn difficulty_names_parse_back() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(difficulty.as_str()), Some(difficulty));
        }
        assert_eq!(Difficulty::Hard.as_str(), "hard");
    }

    #[test]
    fn outcome_names() {
        assert_eq!(Outcome::default(), Outcome::Playing);
        assert_eq!(Outcome::Playing.as_str(), "playing");
        assert_eq!(Outcome::Won.as_str(), "won");
        assert_eq!(Outcome::Lost.as_str(), "lost");
    }

    #[test]
    fn offset_clips_at_every_edge() {
        let (w, h) = (3, 2);
        assert_eq!(Pos::new(0, 0).offset(0, -1, w, h), None);
        assert_eq!(Pos::new(0, 2).offset(0, 1, w, h), None);
        assert_eq!(Pos::new(1, 1).offset(1, 0, w, h), None);
        assert_eq!(Pos::new(1, 1).offset(-1, 1, w, h), Some(Pos::new(0, 2)));
    }

    #[test]
    fn index_round_trips_through_from_index() {
        let p = Pos::new(3, 5);
        assert_eq!(p.index(7), 26);
        assert_eq!(Pos::from_index(26, 7), p);
    }

    #[test]
    fn action_names_parse_back() {
        for action in [
            GameAction::MoveUp,
            GameAction::MoveDown,
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Select,
            GameAction::ToggleFlag,
            GameAction::Quit,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn only_movement_actions_have_deltas() {
        assert_eq!(GameAction::MoveUp.cursor_delta(), Some((-1, 0)));
        assert_eq!(GameAction::MoveRight.cursor_delta(), Some((0, 1)));
        assert_eq!(GameAction::Select.cursor_delta(), None);
        assert_eq!(GameAction::Quit.cursor_delta(), None);
    }

    #[test]
    fn neighbor_deltas_exclude_center() {
        assert_eq!(NEIGHBOR_DELTAS.len(), 8);
        assert!(!NEIGHBOR_DELTAS.contains(&(0, 0)));
    }
}
