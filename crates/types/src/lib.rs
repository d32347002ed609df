//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, persistence, the adapter protocol).
//!
//! # Board Dimensions
//!
//! The grid is a fixed square:
//!
//! - **Size**: 15 rows x 15 columns (indexed 0-14)
//! - **Center**: (7, 7), which the first word of a game must cover
//!
//! # Turn Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_TILES_PER_TURN` | 7 | Most tiles a team may place in one turn |
//! | `FULL_RACK_BONUS` | 50 | Flat bonus for placing exactly 7 tiles |
//! | `MIN_TEAMS` | 2 | Fewest teams in a game |
//! | `MAX_TEAMS` | 4 | Most teams in a game |
//!
//! # Bonus Cells
//!
//! | Tag | Kind | Effect |
//! |-----|------|--------|
//! | `2L` | Double letter | letter value x2 |
//! | `3L` | Triple letter | letter value x3 |
//! | `2W` | Double word | word total x2 |
//! | `3W` | Triple word | word total x3 |
//!
//! # Examples
//!
//! ```
//! use wordgrid_types::{bonus_at, Axis, BonusKind, Coord, BOARD_SIZE, CENTER};
//!
//! // Coordinates are bounds-checked at construction
//! assert!(Coord::new(14, 14).is_some());
//! assert!(Coord::new(BOARD_SIZE, 0).is_none());
//!
//! // Bonus tags parse from their persisted form
//! assert_eq!(BonusKind::from_str("3W"), Some(BonusKind::TripleWord));
//!
//! // The corners are triple-word cells, the center carries nothing
//! assert_eq!(bonus_at(Coord::new(0, 0).unwrap()), Some(BonusKind::TripleWord));
//! assert_eq!(bonus_at(CENTER), None);
//!
//! // Walking along an axis
//! let c = Coord::new(3, 4).unwrap();
//! assert_eq!(c.step(Axis::Horizontal, true), Coord::new(3, 5));
//! ```

/// Board size in cells along each axis (15 x 15)
pub const BOARD_SIZE: usize = 15;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Center cell; the first word of a game must pass through it
pub const CENTER: Coord = Coord { row: 7, col: 7 };

/// Most tiles a team may place in a single turn (one full rack)
pub const MAX_TILES_PER_TURN: usize = 7;

/// Flat bonus for using the whole rack in one turn
pub const FULL_RACK_BONUS: u32 = 50;

/// Fewest teams a game may have
pub const MIN_TEAMS: usize = 2;

/// Most teams a game may have
pub const MAX_TEAMS: usize = 4;

/// Base letter values, indexed by `letter - 'A'`
pub const LETTER_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // A-M
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // N-Z
];

/// A position on the board, always within `[0, BOARD_SIZE)` on both axes
///
/// Ordering is row-major, so sorting a set of coordinates walks the board
/// top to bottom, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, or `None` if it falls off the board
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub const fn row(self) -> usize {
        self.row as usize
    }

    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Flat row-major index into a `BOARD_CELLS` array
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Position of this coordinate along `axis` (column for horizontal, row for vertical)
    pub const fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.col as usize,
            Axis::Vertical => self.row as usize,
        }
    }

    /// Same line on `axis`, moved to position `pos` along it
    pub const fn with_along(self, axis: Axis, pos: usize) -> Option<Self> {
        match axis {
            Axis::Horizontal => Self::new(self.row as usize, pos),
            Axis::Vertical => Self::new(pos, self.col as usize),
        }
    }

    /// One step along `axis`: right/down when `forward`, left/up otherwise
    pub fn step(self, axis: Axis, forward: bool) -> Option<Self> {
        let pos = self.along(axis);
        let next = if forward {
            pos + 1
        } else {
            pos.checked_sub(1)?
        };
        self.with_along(axis, next)
    }

    /// Orthogonal neighbors that lie on the board
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        [
            self.step(Axis::Vertical, false),
            self.step(Axis::Vertical, true),
            self.step(Axis::Horizontal, false),
            self.step(Axis::Horizontal, true),
        ]
        .into_iter()
        .flatten()
    }
}

/// Word orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The axis at a right angle to this one
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// One-time score multiplier carried by a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BonusKind {
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl BonusKind {
    /// Parse from the persisted tag (`"2L"`, `"3L"`, `"2W"`, `"3W"`)
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid_types::BonusKind;
    ///
    /// assert_eq!(BonusKind::from_str("2L"), Some(BonusKind::DoubleLetter));
    /// assert_eq!(BonusKind::from_str("2w"), Some(BonusKind::DoubleWord));
    /// assert_eq!(BonusKind::from_str("4W"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "2L" => Some(BonusKind::DoubleLetter),
            "3L" => Some(BonusKind::TripleLetter),
            "2W" => Some(BonusKind::DoubleWord),
            "3W" => Some(BonusKind::TripleWord),
            _ => None,
        }
    }

    /// Persisted tag
    pub fn as_str(&self) -> &'static str {
        match self {
            BonusKind::DoubleLetter => "2L",
            BonusKind::TripleLetter => "3L",
            BonusKind::DoubleWord => "2W",
            BonusKind::TripleWord => "3W",
        }
    }

    /// Multiplier applied to the letter on this cell
    pub fn letter_multiplier(&self) -> u32 {
        match self {
            BonusKind::DoubleLetter => 2,
            BonusKind::TripleLetter => 3,
            BonusKind::DoubleWord | BonusKind::TripleWord => 1,
        }
    }

    /// Multiplier applied to every word running through this cell
    pub fn word_multiplier(&self) -> u32 {
        match self {
            BonusKind::DoubleWord => 2,
            BonusKind::TripleWord => 3,
            BonusKind::DoubleLetter | BonusKind::TripleLetter => 1,
        }
    }
}

use BonusKind::{DoubleLetter as DL, DoubleWord as DW, TripleLetter as TL, TripleWord as TW};

/// Static bonus layout as `(row, col, kind)`, symmetric about both diagonals.
///
/// The center cell is deliberately absent.
#[rustfmt::skip]
pub const BONUS_LAYOUT: [(u8, u8, BonusKind); 60] = [
    // Triple word
    (0, 0, TW), (0, 7, TW), (0, 14, TW),
    (7, 0, TW), (7, 14, TW),
    (14, 0, TW), (14, 7, TW), (14, 14, TW),
    // Double word, main diagonal
    (1, 1, DW), (2, 2, DW), (3, 3, DW), (4, 4, DW),
    (10, 10, DW), (11, 11, DW), (12, 12, DW), (13, 13, DW),
    // Double word, anti-diagonal
    (1, 13, DW), (2, 12, DW), (3, 11, DW), (4, 10, DW),
    (10, 4, DW), (11, 3, DW), (12, 2, DW), (13, 1, DW),
    // Triple letter
    (5, 1, TL), (9, 1, TL), (5, 5, TL), (9, 5, TL),
    (1, 5, TL), (13, 5, TL), (5, 9, TL), (9, 9, TL),
    (1, 9, TL), (13, 9, TL), (5, 13, TL), (9, 13, TL),
    // Double letter
    (3, 0, DL), (11, 0, DL), (6, 2, DL), (8, 2, DL),
    (0, 3, DL), (7, 3, DL), (14, 3, DL), (2, 6, DL),
    (6, 6, DL), (8, 6, DL), (12, 6, DL), (3, 7, DL),
    (11, 7, DL), (2, 8, DL), (6, 8, DL), (8, 8, DL),
    (12, 8, DL), (0, 11, DL), (7, 11, DL), (14, 11, DL),
    (6, 12, DL), (8, 12, DL), (3, 14, DL), (11, 14, DL),
];

/// Bonus printed on a fresh board at `coord`
pub fn bonus_at(coord: Coord) -> Option<BonusKind> {
    BONUS_LAYOUT
        .iter()
        .find(|&&(row, col, _)| row as usize == coord.row() && col as usize == coord.col())
        .map(|&(_, _, kind)| kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_values_match_classic_tile_set() {
        let value = |c: char| LETTER_VALUES[(c as u8 - b'A') as usize];
        assert_eq!(value('A'), 1);
        assert_eq!(value('C'), 3);
        assert_eq!(value('D'), 2);
        assert_eq!(value('K'), 5);
        assert_eq!(value('J'), 8);
        assert_eq!(value('X'), 8);
        assert_eq!(value('Q'), 10);
        assert_eq!(value('Z'), 10);
    }

    #[test]
    fn bonus_layout_has_no_duplicates_and_skips_center() {
        for (i, a) in BONUS_LAYOUT.iter().enumerate() {
            assert!((a.0 as usize) < BOARD_SIZE && (a.1 as usize) < BOARD_SIZE);
            for b in &BONUS_LAYOUT[i + 1..] {
                assert!(a.0 != b.0 || a.1 != b.1, "duplicate cell {:?}", (a.0, a.1));
            }
        }
        assert_eq!(bonus_at(CENTER), None);
    }

    #[test]
    fn bonus_layout_is_symmetric() {
        for &(row, col, kind) in &BONUS_LAYOUT {
            let transposed = Coord::new(col as usize, row as usize).unwrap();
            assert_eq!(bonus_at(transposed), Some(kind), "({row}, {col})");
            let mirrored = Coord::new(row as usize, BOARD_SIZE - 1 - col as usize).unwrap();
            assert_eq!(bonus_at(mirrored), Some(kind), "({row}, {col})");
        }
    }

    #[test]
    fn coord_step_stops_at_edges() {
        let origin = Coord::new(0, 0).unwrap();
        assert_eq!(origin.step(Axis::Horizontal, false), None);
        assert_eq!(origin.step(Axis::Vertical, false), None);

        let corner = Coord::new(14, 14).unwrap();
        assert_eq!(corner.step(Axis::Horizontal, true), None);
        assert_eq!(corner.step(Axis::Vertical, true), None);
        assert_eq!(corner.neighbors().count(), 2);
        assert_eq!(CENTER.neighbors().count(), 4);
    }

    #[test]
    fn coord_ordering_is_row_major() {
        let mut coords = vec![
            Coord::new(2, 0).unwrap(),
            Coord::new(1, 5).unwrap(),
            Coord::new(1, 2).unwrap(),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coord::new(1, 2).unwrap(),
                Coord::new(1, 5).unwrap(),
                Coord::new(2, 0).unwrap(),
            ]
        );
    }
}
