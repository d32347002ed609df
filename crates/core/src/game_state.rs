//! Game state module - board, team scores and the turn in progress
//!
//! The durable part of a game (board, scores, current player, first-word flag) lives
//! here next to the ephemeral [`Turn`] working set. The turn is replaced wholesale at
//! transaction boundaries and never patched partially.
//!
//! [`GameState::resolve_turn`] is the in-memory end-of-turn transaction. Persisting the
//! result is the job of [`Game`](crate::game::Game).

use tracing::{debug, info};

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::scoring::{calculate_score, ScoreResult};
use crate::types::{Coord, MAX_TEAMS, MIN_TEAMS};
use crate::validate::{validate, MoveError};

/// Ephemeral working set of the turn in progress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    /// Tentatively placed coordinates, in placement order
    placed: Vec<Coord>,
    /// Cell currently selected for input
    selected: Option<Coord>,
}

impl Turn {
    pub fn placed(&self) -> &[Coord] {
        &self.placed
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }
}

/// How a turn ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(ScoreResult),
    Rejected(MoveError),
}

/// Result of one end-of-turn transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Team that acted
    pub player: usize,
    /// Team whose turn it is now
    pub next_player: usize,
    pub verdict: Verdict,
}

impl TurnOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self.verdict, Verdict::Accepted(_))
    }

    /// Points awarded to `player` (0 when rejected)
    pub fn points(&self) -> u32 {
        match &self.verdict {
            Verdict::Accepted(score) => score.total,
            Verdict::Rejected(_) => 0,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    scores: Vec<u32>,
    current_player: usize,
    first_word_placed: bool,
    turn: Turn,
}

impl GameState {
    /// Start a fresh game for `teams` teams
    pub fn new(teams: usize) -> Result<Self, GameError> {
        if !(MIN_TEAMS..=MAX_TEAMS).contains(&teams) {
            return Err(GameError::TeamCount { teams });
        }
        Ok(Self {
            board: Board::new(),
            scores: vec![0; teams],
            current_player: 0,
            first_word_placed: false,
            turn: Turn::default(),
        })
    }

    /// Reassemble a game from already-validated saved parts
    pub(crate) fn from_parts(
        board: Board,
        scores: Vec<u32>,
        current_player: usize,
        first_word_placed: bool,
    ) -> Self {
        Self {
            board,
            scores,
            current_player,
            first_word_placed,
            turn: Turn::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn team_count(&self) -> usize {
        self.scores.len()
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn first_word_placed(&self) -> bool {
        self.first_word_placed
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn placed_tiles(&self) -> &[Coord] {
        &self.turn.placed
    }

    pub fn selected(&self) -> Option<Coord> {
        self.turn.selected
    }

    /// Select a cell for input; selecting a locked cell is ignored.
    ///
    /// Returns whether the selection changed.
    pub fn select(&mut self, row: usize, col: usize) -> Result<bool, GameError> {
        let coord = coord(row, col)?;
        if self.board.is_locked(coord) {
            return Ok(false);
        }
        self.turn.selected = Some(coord);
        Ok(true)
    }

    pub fn clear_selection(&mut self) {
        self.turn.selected = None;
    }

    /// Tentatively place `letter` at `(row, col)` for this turn.
    ///
    /// Placing on a cell already placed this turn replaces its letter.
    pub fn place_tile(
        &mut self,
        row: usize,
        col: usize,
        letter: char,
        blank: bool,
    ) -> Result<(), GameError> {
        let coord = coord(row, col)?;
        if self.board.is_locked(coord) {
            return Err(GameError::CellLocked { row, col });
        }
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter { letter });
        }

        let letter = letter.to_ascii_uppercase();
        self.board.set_letter(coord, Some(letter), blank);
        if !self.turn.placed.contains(&coord) {
            self.turn.placed.push(coord);
        }
        debug!(row, col, %letter, blank, "tile placed");
        Ok(())
    }

    /// Remove a tentative placement.
    ///
    /// Returns whether a tile placed this turn was removed.
    pub fn clear_tile(&mut self, row: usize, col: usize) -> Result<bool, GameError> {
        let coord = coord(row, col)?;
        if self.board.is_locked(coord) {
            return Err(GameError::CellLocked { row, col });
        }
        let Some(pos) = self.turn.placed.iter().position(|&c| c == coord) else {
            return Ok(false);
        };
        self.turn.placed.remove(pos);
        self.board.clear_letter(coord);
        debug!(row, col, "tile cleared");
        Ok(true)
    }

    /// Take back every tentative placement without ending the turn
    pub fn reset_turn(&mut self) {
        self.rollback_placed();
        self.turn = Turn::default();
    }

    /// Validate, score and commit (or roll back) the turn in progress.
    ///
    /// The turn always passes to the next team, legal move or not.
    pub fn resolve_turn(&mut self, dictionary: &Dictionary) -> TurnOutcome {
        let player = self.current_player;
        let placed = std::mem::take(&mut self.turn).placed;

        let verdict = match validate(&self.board, &placed, self.first_word_placed, dictionary) {
            Ok(words) => {
                self.first_word_placed = true;
                let score = calculate_score(&self.board, &words, placed.len());
                self.scores[player] = self.scores[player].saturating_add(score.total);
                for &coord in &placed {
                    self.board.set_locked(coord, true);
                    self.board.clear_bonus(coord);
                }
                info!(player, points = score.total, words = ?score.words, "move accepted");
                Verdict::Accepted(score)
            }
            Err(reason) => {
                for &coord in &placed {
                    self.board.clear_letter(coord);
                }
                info!(player, %reason, "move rejected, tiles removed");
                Verdict::Rejected(reason)
            }
        };

        self.current_player = (player + 1) % self.scores.len();
        TurnOutcome {
            player,
            next_player: self.current_player,
            verdict,
        }
    }

    fn rollback_placed(&mut self) {
        for &coord in &self.turn.placed {
            self.board.clear_letter(coord);
        }
    }
}

fn coord(row: usize, col: usize) -> Result<Coord, GameError> {
    Coord::new(row, col).ok_or(GameError::OutOfBounds { row, col })
}
