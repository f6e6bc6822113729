//! Minefield module - the hidden grid
//!
//! Holds the ground truth for every cell: either a mine or the number of mines
//! in its eight-neighborhood. The grid is built once and never changes, so the
//! precomputed counts can never go stale.
//!
//! Storage is a flat row-major `Vec` (`row * width + col`), same as the
//! visible grid in [`crate::GameState`].

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{GameError, Result};
use crate::types::{BoardConfig, Pos, NEIGHBOR_DELTAS};

/// Ground-truth contents of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellValue {
    Mine,
    /// Not a mine; holds the adjacent mine count (0..=8).
    Empty(u8),
}

impl CellValue {
    pub fn is_mine(self) -> bool {
        matches!(self, CellValue::Mine)
    }
}

/// Immutable hidden grid plus the list of mine positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minefield {
    width: u16,
    height: u16,
    cells: Vec<CellValue>,
    mines: Vec<Pos>,
}

impl Minefield {
    /// Place `config.mines` mines uniformly at random using an RNG seeded from `seed`.
    ///
    /// Uses a partial Fisher-Yates shuffle over the flat index space, so the
    /// running time does not depend on how crowded the board is.
    pub fn generate(config: BoardConfig, seed: u64) -> Result<Self> {
        validate(config)?;

        let total = config.total_cells() as usize;
        let wanted = config.mines as usize;
        let mut rng = StdRng::seed_from_u64(seed);

        let mut order: Vec<usize> = (0..total).collect();
        for i in 0..wanted {
            let j = rng.random_range(i..total);
            order.swap(i, j);
        }

        let mines: Vec<Pos> = order[..wanted]
            .iter()
            .map(|&idx| Pos::from_index(idx, config.width))
            .collect();

        tracing::debug!(
            width = config.width,
            height = config.height,
            mines = wanted,
            seed,
            "generated minefield"
        );
        Ok(Self::build(config.width, config.height, mines))
    }

    /// Build a minefield from explicit mine positions.
    ///
    /// Rejects out-of-bounds and duplicate positions. Useful for fixed layouts.
    pub fn from_mines(width: u16, height: u16, mines: &[Pos]) -> Result<Self> {
        validate(BoardConfig::new(width, height, mines.len() as u32))?;

        let mut seen = vec![false; (width as usize) * (height as usize)];
        for &pos in mines {
            if pos.row >= height || pos.col >= width {
                return Err(GameError::InvalidCoords(pos));
            }
            let idx = pos.index(width);
            if seen[idx] {
                return Err(GameError::DuplicateMine(pos));
            }
            seen[idx] = true;
        }

        Ok(Self::build(width, height, mines.to_vec()))
    }

    fn build(width: u16, height: u16, mines: Vec<Pos>) -> Self {
        let mut field = Self {
            width,
            height,
            cells: vec![CellValue::Empty(0); (width as usize) * (height as usize)],
            mines,
        };
        for i in 0..field.mines.len() {
            let idx = field.mines[i].index(width);
            field.cells[idx] = CellValue::Mine;
        }
        field.compute_counts();
        field
    }

    /// One pass over every cell, counting mines among its clipped neighbors.
    fn compute_counts(&mut self) {
        for idx in 0..self.cells.len() {
            if self.cells[idx].is_mine() {
                continue;
            }
            let pos = Pos::from_index(idx, self.width);
            let count = self
                .neighbors(pos)
                .iter()
                .filter(|n| self.cells[n.index(self.width)].is_mine())
                .count();
            self.cells[idx] = CellValue::Empty(count as u8);
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn total_cells(&self) -> u32 {
        self.cells.len() as u32
    }

    pub fn mine_count(&self) -> u32 {
        self.mines.len() as u32
    }

    /// Mine positions in placement order.
    pub fn mines(&self) -> &[Pos] {
        &self.mines
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Cell value at `pos`, `None` if out of bounds.
    pub fn value(&self, pos: Pos) -> Option<CellValue> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.cells[pos.index(self.width)])
    }

    pub fn is_mine(&self, pos: Pos) -> bool {
        matches!(self.value(pos), Some(CellValue::Mine))
    }

    /// In-bounds neighbors of `pos`; edges are clipped, never wrapped.
    pub fn neighbors(&self, pos: Pos) -> ArrayVec<Pos, 8> {
        NEIGHBOR_DELTAS
            .iter()
            .filter_map(|&(dr, dc)| pos.offset(dr, dc, self.width, self.height))
            .collect()
    }
}

fn validate(config: BoardConfig) -> Result<()> {
    if config.width == 0 || config.height == 0 {
        return Err(GameError::InvalidDimensions {
            width: config.width,
            height: config.height,
        });
    }
    if config.mines >= config.total_cells() {
        return Err(GameError::TooManyMines {
            mines: config.mines,
            width: config.width,
            height: config.height,
        });
    }
    Ok(())
}
