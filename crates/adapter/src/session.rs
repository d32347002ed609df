//! Session - applies protocol commands to the game
//!
//! A session owns at most one [`Game`]. Every command is applied synchronously, in
//! arrival order, so mutating calls never interleave.

use std::sync::Arc;

use arrayvec::ArrayVec;
use tracing::{debug, info, warn};

use crate::core::error::StoreError;
use crate::core::{Dictionary, Game, GameStore, TurnError};
use crate::protocol::*;

/// Replies to one command: a single message, or a turn report followed by a
/// persistence error.
pub type Replies = ArrayVec<ServerMessage, 2>;

pub struct Session<S> {
    dictionary: Arc<Dictionary>,
    /// Handle on the save record; each game gets a clone
    store: S,
    game: Option<Game<S>>,
}

impl<S: GameStore + Clone> Session<S> {
    pub fn new(dictionary: Arc<Dictionary>, store: S) -> Self {
        Self {
            dictionary,
            store,
            game: None,
        }
    }

    pub fn game(&self) -> Option<&Game<S>> {
        self.game.as_ref()
    }

    /// Replace any game in progress with a fresh one
    pub fn new_game(&mut self, teams: usize) -> Result<(), crate::core::GameError> {
        let game = Game::new(teams, Arc::clone(&self.dictionary), self.store.clone())?;
        info!(teams, "new game");
        self.game = Some(game);
        Ok(())
    }

    /// Resume the saved game; `Ok(false)` when there is none
    pub fn resume(&mut self) -> Result<bool, StoreError> {
        match Game::load(Arc::clone(&self.dictionary), self.store.clone())? {
            Some(game) => {
                info!(
                    teams = game.state().team_count(),
                    current_player = game.state().current_player(),
                    "game resumed"
                );
                self.game = Some(game);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Parse and apply one protocol line
    pub fn handle_line(&mut self, line: &str) -> Replies {
        match serde_json::from_str::<ClientMessage>(line) {
            Ok(msg) => self.handle(msg),
            Err(e) => {
                warn!(error = %e, "invalid message");
                let mut replies = Replies::new();
                replies.push(ServerMessage::error(
                    extract_seq_best_effort(line),
                    ErrorCode::InvalidMessage,
                    e.to_string(),
                ));
                replies
            }
        }
    }

    pub fn handle(&mut self, msg: ClientMessage) -> Replies {
        let ClientMessage { seq, command } = msg;
        debug!(seq, command = command.name(), "command");
        let mut replies = Replies::new();

        match command {
            Command::NewGame { teams } => {
                replies.push(match self.new_game(teams) {
                    Ok(()) => ServerMessage::ack(seq),
                    Err(e) => ServerMessage::error(seq, ErrorCode::from(&e), e.to_string()),
                });
                return replies;
            }
            Command::Load => {
                replies.push(match self.resume() {
                    Ok(true) => ServerMessage::ack(seq),
                    Ok(false) => ServerMessage::error(seq, ErrorCode::NoSave, "no saved game"),
                    Err(e) => ServerMessage::error(seq, ErrorCode::Persist, e.to_string()),
                });
                return replies;
            }
            _ => {}
        }

        let Some(game) = self.game.as_mut() else {
            replies.push(ServerMessage::error(
                seq,
                ErrorCode::NoGame,
                "no game in progress",
            ));
            return replies;
        };

        let applied = match command {
            Command::Place {
                row,
                col,
                letter,
                blank,
            } => game.place_tile(row, col, letter, blank),
            Command::Clear { row, col } => game.clear_tile(row, col).map(drop),
            Command::Select { row, col } => game.select(row, col).map(drop),
            Command::ClearSelection => {
                game.clear_selection();
                Ok(())
            }
            Command::ResetTurn => {
                game.reset_turn();
                Ok(())
            }
            Command::Observe => {
                replies.push(ServerMessage::Observation(Observation::new(
                    seq,
                    game.state(),
                )));
                return replies;
            }
            Command::EndTurn => {
                match game.end_turn() {
                    Ok(outcome) => {
                        replies.push(ServerMessage::Turn(TurnReport::new(seq, &outcome)));
                    }
                    Err(TurnError { outcome, source }) => {
                        replies.push(ServerMessage::Turn(TurnReport::new(seq, &outcome)));
                        replies.push(ServerMessage::error(
                            seq,
                            ErrorCode::Persist,
                            source.to_string(),
                        ));
                    }
                }
                return replies;
            }
            Command::NewGame { .. } | Command::Load => Ok(()),
        };

        replies.push(match applied {
            Ok(()) => ServerMessage::ack(seq),
            Err(e) => ServerMessage::error(seq, ErrorCode::from(&e), e.to_string()),
        });
        replies
    }
}

/// Pull `seq` out of a line that failed to parse as a command
fn extract_seq_best_effort(line: &str) -> Option<u64> {
    serde_json::from_str::<serde_json::Value>(line)
        .ok()?
        .get("seq")?
        .as_u64()
}
