//! Game state module - manages the complete game state
//!
//! Ties the immutable [`Minefield`] to the player-visible grid, the cursor and
//! the progress counters. Every rule of the game lives here: reveal, flood
//! reveal, flagging, and win/loss detection.
//!
//! Operations never fail. Anything that does not apply (acting after the game
//! ended, selecting a flagged cell, moving off the board, flagging past the
//! mine count) leaves the state untouched and returns `false`.

use std::collections::VecDeque;

use crate::error::Result;
use crate::minefield::{CellValue, Minefield};
use crate::snapshot::GameSnapshot;
use crate::types::{BoardConfig, GameAction, Pos};

/// What the player sees for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Unchecked,
    /// Revealed safe cell with its adjacent mine count.
    Revealed(u8),
    Flagged,
    /// Mine shown after a loss.
    RevealedMine,
    /// Every cell after a win.
    WonMarker,
}

pub use crate::types::Outcome;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    minefield: Minefield,
    /// Visible grid, row-major like the minefield.
    visible: Vec<CellState>,
    cursor: Pos,
    revealed_count: u32,
    flagged_count: u32,
    max_flags: u32,
    game_over: bool,
    outcome: Outcome,
    seed: Option<u64>,
}

impl GameState {
    /// Create a new game with randomly placed mines.
    ///
    /// Fails when a dimension is zero or `num_mines >= width * height`.
    pub fn new(width: u16, height: u16, num_mines: u32, seed: u64) -> Result<Self> {
        let minefield = Minefield::generate(BoardConfig::new(width, height, num_mines), seed)?;
        let mut state = Self::from_minefield(minefield);
        state.seed = Some(seed);
        Ok(state)
    }

    /// Create a game over a prepared minefield.
    pub fn from_minefield(minefield: Minefield) -> Self {
        let total = minefield.total_cells() as usize;
        let max_flags = minefield.mine_count();
        Self {
            minefield,
            visible: vec![CellState::Unchecked; total],
            cursor: Pos::default(),
            revealed_count: 0,
            flagged_count: 0,
            max_flags,
            game_over: false,
            outcome: Outcome::Playing,
            seed: None,
        }
    }

    pub fn width(&self) -> u16 {
        self.minefield.width()
    }

    pub fn height(&self) -> u16 {
        self.minefield.height()
    }

    pub fn total_cells(&self) -> u32 {
        self.minefield.total_cells()
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    pub fn revealed_count(&self) -> u32 {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> u32 {
        self.flagged_count
    }

    pub fn max_flags(&self) -> u32 {
        self.max_flags
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Seed used to generate the minefield (`None` for prepared layouts).
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    /// Visible grid, row-major.
    pub fn visible_cells(&self) -> &[CellState] {
        &self.visible
    }

    /// Visible state at `pos`, `None` if out of bounds.
    pub fn cell_state(&self, pos: Pos) -> Option<CellState> {
        if !self.minefield.contains(pos) {
            return None;
        }
        Some(self.visible[self.idx(pos)])
    }

    #[inline(always)]
    fn idx(&self, pos: Pos) -> usize {
        pos.index(self.minefield.width())
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.width();
        out.height = self.height();
        out.cells.clear();
        out.cells.extend_from_slice(&self.visible);
        out.cursor = self.cursor;
        out.revealed = self.revealed_count;
        out.flagged = self.flagged_count;
        out.max_flags = self.max_flags;
        out.game_over = self.game_over;
        out.outcome = self.outcome;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Move the cursor; positions off the board are ignored.
    pub fn move_cursor(&mut self, d_row: i16, d_col: i16) -> bool {
        match self
            .cursor
            .offset(d_row, d_col, self.width(), self.height())
        {
            Some(next) if next != self.cursor => {
                self.cursor = next;
                true
            }
            _ => false,
        }
    }

    /// Reveal the cell at `pos`.
    ///
    /// A mine ends the game and shows every mine. A zero-count cell also
    /// reveals its connected zero region and that region's border.
    pub fn reveal(&mut self, pos: Pos) -> bool {
        if self.game_over {
            return false;
        }
        let Some(value) = self.minefield.value(pos) else {
            return false;
        };
        if self.visible[self.idx(pos)] != CellState::Unchecked {
            return false;
        }

        match value {
            CellValue::Mine => {
                self.lose(pos);
                return true;
            }
            CellValue::Empty(0) => {
                self.show(pos, 0);
                self.flood_reveal(pos);
            }
            CellValue::Empty(n) => self.show(pos, n),
        }

        self.finish_if_won();
        true
    }

    /// Breadth-first reveal starting from a revealed zero-count cell.
    ///
    /// Only unchecked safe cells are opened; flags stay in place and mines are
    /// never touched. Returns the number of cells newly revealed, so calling it
    /// twice from the same cell returns 0 the second time.
    pub fn flood_reveal(&mut self, origin: Pos) -> usize {
        if self.game_over || self.cell_state(origin) != Some(CellState::Revealed(0)) {
            return 0;
        }

        let mut opened = 0;
        let mut queue = VecDeque::new();
        queue.push_back(origin);

        while let Some(current) = queue.pop_front() {
            for next in self.minefield.neighbors(current) {
                if self.visible[self.idx(next)] != CellState::Unchecked {
                    continue;
                }
                let CellValue::Empty(n) = self.minefield.value(next).unwrap_or(CellValue::Mine)
                else {
                    continue;
                };
                self.show(next, n);
                opened += 1;
                if n == 0 {
                    queue.push_back(next);
                }
            }
        }

        tracing::trace!(row = origin.row, col = origin.col, opened, "flood reveal");
        opened
    }

    /// Place or remove a flag at `pos`.
    ///
    /// Flags cannot exceed the number of mines. Any flag, correct or not,
    /// counts toward completing the board.
    pub fn toggle_flag(&mut self, pos: Pos) -> bool {
        if self.game_over || !self.minefield.contains(pos) {
            return false;
        }

        let idx = self.idx(pos);
        let changed = match self.visible[idx] {
            CellState::Unchecked if self.flagged_count < self.max_flags => {
                self.visible[idx] = CellState::Flagged;
                self.flagged_count += 1;
                true
            }
            CellState::Flagged => {
                self.visible[idx] = CellState::Unchecked;
                self.flagged_count -= 1;
                true
            }
            _ => false,
        };

        self.finish_if_won();
        changed
    }

    /// Reveal the cell under the cursor.
    pub fn select(&mut self) -> bool {
        self.reveal(self.cursor)
    }

    /// Toggle the flag under the cursor.
    pub fn flag_cursor(&mut self) -> bool {
        self.toggle_flag(self.cursor)
    }

    /// Apply a game action
    ///
    /// Returns whether anything observable changed. `Quit` belongs to the
    /// caller's loop and never changes the state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveUp
            | GameAction::MoveDown
            | GameAction::MoveLeft
            | GameAction::MoveRight => match action.cursor_delta() {
                Some((dr, dc)) => self.move_cursor(dr, dc),
                None => false,
            },
            GameAction::Select => self.select(),
            GameAction::ToggleFlag => self.flag_cursor(),
            GameAction::Quit => false,
        }
    }

    fn show(&mut self, pos: Pos, count: u8) {
        let idx = self.idx(pos);
        self.visible[idx] = CellState::Revealed(count);
        self.revealed_count += 1;
    }

    fn lose(&mut self, hit: Pos) {
        for i in 0..self.minefield.mines().len() {
            let idx = self.idx(self.minefield.mines()[i]);
            if self.visible[idx] == CellState::Flagged {
                self.flagged_count -= 1;
            }
            self.visible[idx] = CellState::RevealedMine;
        }
        self.game_over = true;
        self.outcome = Outcome::Lost;
        tracing::debug!(row = hit.row, col = hit.col, "mine revealed, game lost");
    }

    fn finish_if_won(&mut self) {
        if self.game_over || self.revealed_count + self.flagged_count != self.total_cells() {
            return;
        }
        self.visible.fill(CellState::WonMarker);
        self.game_over = true;
        self.outcome = Outcome::Won;
        tracing::debug!(
            revealed = self.revealed_count,
            flagged = self.flagged_count,
            "board complete, game won"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: u16, height: u16, mines: &[(u16, u16)]) -> GameState {
        let mines: Vec<Pos> = mines.iter().map(|&(r, c)| Pos::new(r, c)).collect();
        GameState::from_minefield(Minefield::from_mines(width, height, &mines).unwrap())
    }

    fn count_state(state: &GameState, wanted: CellState) -> usize {
        state.visible_cells().iter().filter(|&&c| c == wanted).count()
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(8, 8, 10, 12345).unwrap();

        assert_eq!(state.width(), 8);
        assert_eq!(state.height(), 8);
        assert_eq!(state.max_flags(), 10);
        assert_eq!(state.revealed_count(), 0);
        assert_eq!(state.flagged_count(), 0);
        assert_eq!(state.cursor(), Pos::new(0, 0));
        assert_eq!(state.seed(), Some(12345));
        assert!(!state.game_over());
        assert_eq!(state.outcome(), Outcome::Playing);
        assert_eq!(count_state(&state, CellState::Unchecked), 64);
    }

    #[test]
    fn test_new_rejects_too_many_mines() {
        assert!(GameState::new(2, 2, 4, 1).is_err());
        assert!(GameState::new(2, 2, 3, 1).is_ok());
    }

    #[test]
    fn test_reveal_numbered_cell_reveals_only_itself() {
        let mut state = layout(3, 1, &[(0, 0)]);
        assert!(state.reveal(Pos::new(0, 1)));
        assert_eq!(state.cell_state(Pos::new(0, 1)), Some(CellState::Revealed(1)));
        assert_eq!(state.cell_state(Pos::new(0, 2)), Some(CellState::Unchecked));
        assert_eq!(state.revealed_count(), 1);
    }

    #[test]
    fn test_flood_stops_at_numbered_border() {
        // [Mine, 1, 0]
        let mut state = layout(3, 1, &[(0, 0)]);
        assert!(state.reveal(Pos::new(0, 2)));

        assert_eq!(state.cell_state(Pos::new(0, 2)), Some(CellState::Revealed(0)));
        assert_eq!(state.cell_state(Pos::new(0, 1)), Some(CellState::Revealed(1)));
        assert_eq!(state.cell_state(Pos::new(0, 0)), Some(CellState::Unchecked));
        assert_eq!(state.revealed_count(), 2);
        assert!(!state.game_over());
    }

    #[test]
    fn test_flood_reveal_is_idempotent() {
        let mut state = layout(5, 5, &[(4, 4)]);
        // Flag a safe cell so the flood cannot complete the board.
        assert!(state.toggle_flag(Pos::new(4, 0)));
        assert!(state.reveal(Pos::new(0, 0)));
        assert!(!state.game_over());

        let before = state.visible_cells().to_vec();
        let revealed = state.revealed_count();
        assert_eq!(state.flood_reveal(Pos::new(0, 0)), 0);
        assert_eq!(state.visible_cells(), &before[..]);
        assert_eq!(state.revealed_count(), revealed);
    }

    #[test]
    fn test_flood_leaves_flags_and_mines_alone() {
        let mut state = layout(4, 4, &[(3, 3)]);
        assert!(state.toggle_flag(Pos::new(0, 3)));
        assert!(state.reveal(Pos::new(0, 0)));

        assert_eq!(state.cell_state(Pos::new(0, 3)), Some(CellState::Flagged));
        assert_eq!(state.cell_state(Pos::new(3, 3)), Some(CellState::Unchecked));
        // 16 cells - 1 mine - 1 flag
        assert_eq!(state.revealed_count(), 14);
    }

    #[test]
    fn test_flood_requires_revealed_zero_origin() {
        let mut state = layout(3, 1, &[(0, 0)]);
        assert_eq!(state.flood_reveal(Pos::new(0, 2)), 0);
        assert_eq!(state.revealed_count(), 0);
    }

    #[test]
    fn test_reveal_mine_loses_and_shows_all_mines() {
        let mut state = layout(3, 3, &[(0, 0), (2, 2)]);
        assert!(state.toggle_flag(Pos::new(2, 2)));
        assert!(state.reveal(Pos::new(0, 0)));

        assert!(state.game_over());
        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.cell_state(Pos::new(0, 0)), Some(CellState::RevealedMine));
        assert_eq!(state.cell_state(Pos::new(2, 2)), Some(CellState::RevealedMine));
        assert_eq!(state.flagged_count(), 0);
        assert_eq!(count_state(&state, CellState::RevealedMine), 2);
    }

    #[test]
    fn test_no_mutation_after_loss() {
        let mut state = layout(3, 3, &[(0, 0)]);
        state.reveal(Pos::new(0, 0));
        let before = state.visible_cells().to_vec();

        assert!(!state.reveal(Pos::new(2, 2)));
        assert!(!state.toggle_flag(Pos::new(1, 1)));
        assert_eq!(state.visible_cells(), &before[..]);
        assert_eq!(state.revealed_count(), 0);
    }

    #[test]
    fn test_flagged_cell_is_protected_from_reveal() {
        let mut state = layout(2, 2, &[(0, 0)]);
        assert!(state.toggle_flag(Pos::new(0, 0)));
        assert!(!state.reveal(Pos::new(0, 0)));
        assert!(!state.game_over());

        assert!(state.toggle_flag(Pos::new(0, 0)));
        assert_eq!(state.cell_state(Pos::new(0, 0)), Some(CellState::Unchecked));
        assert_eq!(state.flagged_count(), 0);
    }

    #[test]
    fn test_reveal_twice_counts_once() {
        let mut state = layout(3, 1, &[(0, 0)]);
        assert!(state.reveal(Pos::new(0, 1)));
        assert!(!state.reveal(Pos::new(0, 1)));
        assert_eq!(state.revealed_count(), 1);
    }

    #[test]
    fn test_cannot_flag_revealed_cell() {
        let mut state = layout(3, 1, &[(0, 0)]);
        state.reveal(Pos::new(0, 1));
        assert!(!state.toggle_flag(Pos::new(0, 1)));
        assert_eq!(state.flagged_count(), 0);
    }

    #[test]
    fn test_flag_limit_is_mine_count() {
        let mut state = layout(3, 3, &[(0, 0), (0, 1)]);
        assert!(state.toggle_flag(Pos::new(2, 0)));
        assert!(state.toggle_flag(Pos::new(2, 1)));
        assert!(!state.toggle_flag(Pos::new(2, 2)));
        assert_eq!(state.flagged_count(), 2);
        assert_eq!(state.cell_state(Pos::new(2, 2)), Some(CellState::Unchecked));
    }

    #[test]
    fn test_zero_mine_board_wins_on_first_select() {
        let mut state = GameState::new(2, 2, 0, 9).unwrap();
        assert!(state.select());

        assert_eq!(state.revealed_count(), 4);
        assert!(state.game_over());
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(count_state(&state, CellState::WonMarker), 4);
    }

    #[test]
    fn test_win_by_flagging_the_last_mine() {
        let mut state = layout(3, 1, &[(0, 0)]);
        state.reveal(Pos::new(0, 2));
        assert!(!state.game_over());

        assert!(state.toggle_flag(Pos::new(0, 0)));
        assert!(state.game_over());
        assert_eq!(state.outcome(), Outcome::Won);
        assert!(state
            .visible_cells()
            .iter()
            .all(|&c| c == CellState::WonMarker));
    }

    #[test]
    fn test_win_counts_flags_not_flag_placement() {
        // Every cell of a 2x2 board with one mine has count 1.
        let mut state = layout(2, 2, &[(0, 0)]);
        assert!(state.reveal(Pos::new(1, 1)));
        assert!(state.reveal(Pos::new(0, 1)));

        // A misplaced flag covers a safe cell and spends the only flag.
        assert!(state.toggle_flag(Pos::new(1, 0)));
        assert_eq!(state.revealed_count() + state.flagged_count(), 3);
        assert!(!state.toggle_flag(Pos::new(0, 0)));
        assert!(!state.game_over());

        // Moving the flag onto the mine after revealing the safe cell completes the board.
        assert!(state.toggle_flag(Pos::new(1, 0)));
        assert!(state.reveal(Pos::new(1, 0)));
        assert!(!state.game_over());
        assert!(state.toggle_flag(Pos::new(0, 0)));
        assert_eq!(state.outcome(), Outcome::Won);
    }

    #[test]
    fn test_flagged_safe_cell_is_not_flooded() {
        // [Mine, 1, 0] with the safe middle cell flagged.
        let mut state = layout(3, 1, &[(0, 0)]);
        assert!(state.toggle_flag(Pos::new(0, 1)));
        assert!(state.reveal(Pos::new(0, 2)));
        assert_eq!(state.cell_state(Pos::new(0, 1)), Some(CellState::Flagged));
        assert_eq!(state.revealed_count(), 1);
        assert!(!state.game_over());
    }

    #[test]
    fn test_move_cursor_clamps_silently() {
        let mut state = layout(3, 2, &[]);
        assert!(!state.move_cursor(-1, 0));
        assert!(!state.move_cursor(0, -1));
        assert_eq!(state.cursor(), Pos::new(0, 0));

        assert!(state.move_cursor(1, 0));
        assert!(!state.move_cursor(1, 0));
        assert!(state.move_cursor(0, 1));
        assert!(state.move_cursor(0, 1));
        assert!(!state.move_cursor(0, 1));
        assert_eq!(state.cursor(), Pos::new(1, 2));
    }

    #[test]
    fn test_apply_action_routes_to_cursor() {
        let mut state = layout(3, 1, &[(0, 0)]);
        assert!(state.apply_action(GameAction::MoveRight));
        assert!(state.apply_action(GameAction::ToggleFlag));
        assert_eq!(state.cell_state(Pos::new(0, 1)), Some(CellState::Flagged));
        assert!(!state.apply_action(GameAction::Select));
        assert!(state.apply_action(GameAction::ToggleFlag));
        assert!(state.apply_action(GameAction::Select));
        assert_eq!(state.cell_state(Pos::new(0, 1)), Some(CellState::Revealed(1)));
        assert!(!state.apply_action(GameAction::Quit));
        assert!(!state.apply_action(GameAction::MoveUp));
    }

    #[test]
    fn test_out_of_bounds_operations_are_noops() {
        let mut state = layout(2, 2, &[(0, 0)]);
        assert!(!state.reveal(Pos::new(5, 5)));
        assert!(!state.toggle_flag(Pos::new(0, 2)));
        assert_eq!(state.cell_state(Pos::new(2, 0)), None);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = layout(3, 1, &[(0, 0)]);
        state.move_cursor(0, 2);
        state.reveal(Pos::new(0, 2));

        let snap = state.snapshot();
        assert_eq!((snap.width, snap.height), (3, 1));
        assert_eq!(snap.cursor, Pos::new(0, 2));
        assert_eq!(snap.revealed, 2);
        assert_eq!(snap.cell(0, 1), Some(CellState::Revealed(1)));
        assert_eq!(snap.cell(0, 3), None);
        assert_eq!(snap.flags_left(), 1);
        assert!(snap.playable());
    }
}
