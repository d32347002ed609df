//! Move validation - the legality pipeline for one turn
//!
//! Stages run in a fixed order and the first failure wins:
//!
//! 1. tile count (1..=7)
//! 2. single line
//! 3. first word covers the center (only until a first word exists)
//! 4. contiguity between the outermost placed tiles
//! 5. connectivity to a locked cell (only once a first word exists)
//! 6. every resolved word is in the dictionary
//!
//! Every stage is a pure read of the board and the placed coordinates.

use derive_more::{Display, Error};

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::types::{Axis, Coord, CENTER, MAX_TILES_PER_TURN};
use crate::words::{resolve, shared_axis, ResolvedWords};

/// Why a turn was rejected
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("no tiles were placed")]
    NoTiles,
    #[display("{count} tiles placed, at most {} allowed", MAX_TILES_PER_TURN)]
    TooManyTiles { count: usize },
    #[display("tiles must share one row or column")]
    NotInLine,
    #[display("the first word must cover the center cell")]
    MissesCenter,
    #[display("gap at ({row}, {col})")]
    Gap { row: usize, col: usize },
    #[display("a lone tile must touch another letter")]
    IsolatedTile,
    #[display("tiles must touch a word already on the board")]
    Disconnected,
    #[display("no word formed")]
    NoWord,
    #[display("{word:?} is not in the dictionary")]
    UnknownWord { word: String },
}

impl MoveError {
    /// Stable identifier for protocol clients
    pub fn code(&self) -> &'static str {
        match self {
            MoveError::NoTiles => "no_tiles",
            MoveError::TooManyTiles { .. } => "too_many_tiles",
            MoveError::NotInLine => "not_in_line",
            MoveError::MissesCenter => "misses_center",
            MoveError::Gap { .. } => "gap",
            MoveError::IsolatedTile => "isolated_tile",
            MoveError::Disconnected => "disconnected",
            MoveError::NoWord => "no_word",
            MoveError::UnknownWord { .. } => "unknown_word",
        }
    }
}

/// Run the full pipeline and hand back the resolved words on success
pub fn validate(
    board: &Board,
    placed: &[Coord],
    first_word_placed: bool,
    dictionary: &Dictionary,
) -> Result<ResolvedWords, MoveError> {
    check_tile_count(placed)?;
    check_single_line(placed)?;
    if !first_word_placed {
        check_covers_center(placed)?;
    }
    check_contiguous(board, placed)?;
    if first_word_placed {
        check_connected(board, placed)?;
    }
    let words = resolve(board, placed).ok_or(MoveError::NoWord)?;
    check_in_dictionary(board, &words, dictionary)?;
    Ok(words)
}

pub fn check_tile_count(placed: &[Coord]) -> Result<(), MoveError> {
    match placed.len() {
        0 => Err(MoveError::NoTiles),
        count if count > MAX_TILES_PER_TURN => Err(MoveError::TooManyTiles { count }),
        _ => Ok(()),
    }
}

pub fn check_single_line(placed: &[Coord]) -> Result<Axis, MoveError> {
    shared_axis(placed).ok_or(MoveError::NotInLine)
}

pub fn check_covers_center(placed: &[Coord]) -> Result<(), MoveError> {
    if placed.contains(&CENTER) {
        Ok(())
    } else {
        Err(MoveError::MissesCenter)
    }
}

/// Every cell between the outermost placed tiles must hold a letter.
///
/// A lone tile has nothing to span, so it must instead touch a letter.
pub fn check_contiguous(board: &Board, placed: &[Coord]) -> Result<(), MoveError> {
    if let [single] = placed {
        return if single.neighbors().any(|n| board.has_letter(n)) {
            Ok(())
        } else {
            Err(MoveError::IsolatedTile)
        };
    }

    let axis = check_single_line(placed)?;
    let Some(first) = placed.first() else {
        return Err(MoveError::NoTiles);
    };
    let lo = placed.iter().map(|c| c.along(axis)).min().unwrap_or(0);
    let hi = placed.iter().map(|c| c.along(axis)).max().unwrap_or(0);

    for coord in (lo..=hi).filter_map(|pos| first.with_along(axis, pos)) {
        if !board.has_letter(coord) {
            return Err(MoveError::Gap {
                row: coord.row(),
                col: coord.col(),
            });
        }
    }
    Ok(())
}

/// At least one placed tile must sit next to a locked cell
pub fn check_connected(board: &Board, placed: &[Coord]) -> Result<(), MoveError> {
    let touches_locked = placed
        .iter()
        .any(|c| c.neighbors().any(|n| board.is_locked(n)));
    if touches_locked {
        Ok(())
    } else {
        Err(MoveError::Disconnected)
    }
}

pub fn check_in_dictionary(
    board: &Board,
    words: &ResolvedWords,
    dictionary: &Dictionary,
) -> Result<(), MoveError> {
    for word in words.iter() {
        let text = word.text(board);
        if text.is_empty() {
            return Err(MoveError::NoWord);
        }
        if !dictionary.contains(&text) {
            return Err(MoveError::UnknownWord { word: text });
        }
    }
    Ok(())
}
