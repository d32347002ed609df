//! Board module - manages the game grid
//!
//! The board is a 15x15 grid of cells, each holding an optional letter, a blank flag,
//! a locked flag and an optional one-time bonus.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates are `Coord` values, so every access is in bounds by construction.
//!
//! The board never inspects adjacency or legality; that is the validator's job.

use crate::types::{bonus_at, BonusKind, Coord, BOARD_CELLS, BOARD_SIZE};

/// One grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// Uppercase letter, `None` until played
    pub letter: Option<char>,
    /// Letter was played with a blank tile and always scores 0
    pub blank: bool,
    /// Letter survived a valid turn and can never change again
    pub locked: bool,
    /// Unconsumed bonus; cleared when the cell is locked
    pub bonus: Option<BonusKind>,
}

impl Cell {
    pub fn has_letter(&self) -> bool {
        self.letter.is_some()
    }
}

/// The game board - 15 x 15 cells using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board carrying the static bonus layout
    pub fn new() -> Self {
        let mut board = Self::without_bonuses();
        for (i, cell) in board.cells.iter_mut().enumerate() {
            if let Some(coord) = Coord::new(i / BOARD_SIZE, i % BOARD_SIZE) {
                cell.bonus = bonus_at(coord);
            }
        }
        board
    }

    /// Create an empty board with no bonus cells at all
    pub fn without_bonuses() -> Self {
        Self {
            cells: [Cell::default(); BOARD_CELLS],
        }
    }

    /// Cells along each axis
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn get(&self, coord: Coord) -> &Cell {
        &self.cells[coord.index()]
    }

    pub fn has_letter(&self, coord: Coord) -> bool {
        self.get(coord).has_letter()
    }

    pub fn is_locked(&self, coord: Coord) -> bool {
        self.get(coord).locked
    }

    /// Write (or erase, with `None`) the letter at `coord`
    pub fn set_letter(&mut self, coord: Coord, letter: Option<char>, blank: bool) {
        let cell = &mut self.cells[coord.index()];
        cell.letter = letter;
        cell.blank = blank;
    }

    /// Remove the letter at `coord`; its bonus stays
    pub fn clear_letter(&mut self, coord: Coord) {
        self.set_letter(coord, None, false);
    }

    pub fn set_locked(&mut self, coord: Coord, locked: bool) {
        self.cells[coord.index()].locked = locked;
    }

    pub fn clear_bonus(&mut self, coord: Coord) {
        self.cells[coord.index()].bonus = None;
    }

    /// Overwrite the full contents of a cell (restoring a saved game)
    pub fn set_cell(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.index()] = cell;
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * BOARD_SIZE;
        &self.cells[start..start + BOARD_SIZE]
    }

    /// Letters of `coords` concatenated in order; empty cells are skipped
    pub fn letters(&self, coords: &[Coord]) -> String {
        coords.iter().filter_map(|&c| self.get(c).letter).collect()
    }

    /// Number of locked cells
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.locked).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
