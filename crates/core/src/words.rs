//! Word resolution - turns this turn's placed coordinates into words
//!
//! A word is a maximal run of lettered cells along one axis. Resolution yields
//! one main word along the placement line plus a secondary (cross) word for
//! every placed tile that forms a perpendicular run longer than one cell.
//!
//! Words hold coordinates into the live board rather than copies of cells, so
//! scoring and locking always see the current contents.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Axis, Coord, BOARD_SIZE};

/// A contiguous run of cells along one row or column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    axis: Axis,
    cells: ArrayVec<Coord, BOARD_SIZE>,
}

impl Word {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Cells in reading order (left to right, or top to bottom)
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Current letters of the word as read off `board`
    pub fn text(&self, board: &Board) -> String {
        board.letters(&self.cells)
    }
}

/// Main word plus cross words formed by one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWords {
    pub main: Word,
    pub secondary: Vec<Word>,
}

impl ResolvedWords {
    /// Main word first, then secondary words in placement order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        std::iter::once(&self.main).chain(self.secondary.iter())
    }

    pub fn orientation(&self) -> Axis {
        self.main.axis
    }
}

/// Maximal run along `axis` that covers `from..=to`.
///
/// Walks outward from both ends while the neighboring cell holds a letter,
/// locked or not. Cells between `from` and `to` are included as-is.
pub fn extend(board: &Board, from: Coord, to: Coord, axis: Axis) -> Word {
    let mut start = from;
    while let Some(prev) = start.step(axis, false) {
        if !board.has_letter(prev) {
            break;
        }
        start = prev;
    }

    let mut end = to;
    while let Some(next) = end.step(axis, true) {
        if !board.has_letter(next) {
            break;
        }
        end = next;
    }

    let cells = (start.along(axis)..=end.along(axis))
        .filter_map(|pos| start.with_along(axis, pos))
        .collect();
    Word { axis, cells }
}

/// Maximal run along `axis` through a single cell
pub fn run_through(board: &Board, at: Coord, axis: Axis) -> Word {
    extend(board, at, at, axis)
}

/// Axis shared by every placed coordinate, if any.
///
/// A lone tile lies on both axes; horizontal is reported for it.
pub fn shared_axis(placed: &[Coord]) -> Option<Axis> {
    let first = placed.first()?;
    if placed.iter().all(|c| c.row() == first.row()) {
        Some(Axis::Horizontal)
    } else if placed.iter().all(|c| c.col() == first.col()) {
        Some(Axis::Vertical)
    } else {
        None
    }
}

/// Resolve the main and secondary words for this turn's placements.
///
/// Returns `None` when nothing was placed, when the placements do not share a
/// line, or when a lone tile touches no other letter.
pub fn resolve(board: &Board, placed: &[Coord]) -> Option<ResolvedWords> {
    let mut sorted = placed.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let main = match sorted.as_slice() {
        [] => return None,
        [single] => {
            let horizontal = run_through(board, *single, Axis::Horizontal);
            let vertical = run_through(board, *single, Axis::Vertical);
            match (horizontal.len() > 1, vertical.len() > 1) {
                // Ties go to the horizontal run
                (true, true) if vertical.len() > horizontal.len() => vertical,
                (true, _) => horizontal,
                (false, true) => vertical,
                (false, false) => return None,
            }
        }
        [first, .., last] => {
            let axis = shared_axis(&sorted)?;
            extend(board, *first, *last, axis)
        }
    };

    let cross = main.axis.perpendicular();
    let secondary = sorted
        .iter()
        .map(|&c| run_through(board, c, cross))
        .filter(|w| w.len() > 1)
        .collect();

    Some(ResolvedWords { main, secondary })
}
