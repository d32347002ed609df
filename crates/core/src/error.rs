//! Error types for the engine.
//!
//! Contract violations ([`GameError`]) and malformed saves ([`RecordError`]) are
//! errors. An illegal move is not: it is reported through
//! [`MoveError`](crate::validate::MoveError) inside a turn outcome.

use std::path::PathBuf;

use derive_more::{Display, Error, From};

use crate::game_state::TurnOutcome;
use crate::types::{MAX_TEAMS, MIN_TEAMS};

/// Misuse of the engine-facing API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[display("cell ({row}, {col}) is locked")]
    CellLocked { row: usize, col: usize },
    #[display("{letter:?} is not a letter A-Z")]
    InvalidLetter { letter: char },
    #[display("a game needs {} to {} teams, got {}", MIN_TEAMS, MAX_TEAMS, teams)]
    TeamCount { teams: usize },
}

/// A persisted record that cannot be turned back into a game
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RecordError {
    #[display("board must be {size}x{size} cells")]
    BoardShape { size: usize },
    #[display("record has {teams} scores, a game needs {} to {}", MIN_TEAMS, MAX_TEAMS)]
    TeamCount { teams: usize },
    #[display("current player {player} out of range for {teams} teams")]
    PlayerIndex { player: usize, teams: usize },
    #[display("cell ({row}, {col}) holds invalid letter {letter:?}")]
    InvalidLetter {
        row: usize,
        col: usize,
        letter: String,
    },
    #[display("cell ({row}, {col}) holds unknown bonus {bonus:?}")]
    UnknownBonus {
        row: usize,
        col: usize,
        bonus: String,
    },
}

/// Failure at the persistence boundary
#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    #[display("save file I/O failed: {_0}")]
    Io(std::io::Error),
    #[display("save file is not valid JSON: {_0}")]
    Json(serde_json::Error),
    #[display("save file holds an invalid game: {_0}")]
    Record(RecordError),
}

/// Word list could not be read
#[derive(Debug, Display, Error)]
#[display("failed to read word list {}: {}", path.display(), source)]
pub struct DictionaryError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// `end_turn` applied the turn in memory but could not save it.
///
/// The outcome is still returned; the game has already moved on.
#[derive(Debug, Display, Error)]
#[display("turn applied but not saved: {source}")]
pub struct TurnError {
    pub outcome: TurnOutcome,
    pub source: StoreError,
}
