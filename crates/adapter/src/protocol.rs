//! Protocol module - JSON message types for the engine adapter
//!
//! One JSON object per line in each direction, discriminated by `type`.
//! Client commands may carry a `seq` number; every reply to that command echoes it.

use serde::{Deserialize, Serialize};

use crate::core::error::GameError;
use crate::core::{GameRecord, GameState, TurnOutcome, Verdict};
use crate::types::{Coord, MIN_TEAMS};

// ============== Client -> Engine Messages ==============

/// A command line from the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMessage {
    #[serde(default)]
    pub seq: Option<u64>,
    #[serde(flatten)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    NewGame {
        #[serde(default = "default_teams")]
        teams: usize,
    },
    Load,
    Place {
        row: usize,
        col: usize,
        letter: char,
        #[serde(default)]
        blank: bool,
    },
    Clear {
        row: usize,
        col: usize,
    },
    Select {
        row: usize,
        col: usize,
    },
    ClearSelection,
    ResetTurn,
    EndTurn,
    Observe,
}

fn default_teams() -> usize {
    MIN_TEAMS
}

impl Command {
    /// Protocol name of the command, as written in `type`
    pub fn name(&self) -> &'static str {
        match self {
            Command::NewGame { .. } => "new_game",
            Command::Load => "load",
            Command::Place { .. } => "place",
            Command::Clear { .. } => "clear",
            Command::Select { .. } => "select",
            Command::ClearSelection => "clear_selection",
            Command::ResetTurn => "reset_turn",
            Command::EndTurn => "end_turn",
            Command::Observe => "observe",
        }
    }
}

// ============== Engine -> Client Messages ==============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Ack {
        seq: Option<u64>,
    },
    Turn(TurnReport),
    Observation(Observation),
    Error(ErrorReport),
}

impl ServerMessage {
    pub fn ack(seq: Option<u64>) -> Self {
        ServerMessage::Ack { seq }
    }

    pub fn error(seq: Option<u64>, code: ErrorCode, message: impl Into<String>) -> Self {
        ServerMessage::Error(ErrorReport {
            seq,
            code,
            message: message.into(),
        })
    }
}

/// Verdict of an `end_turn` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub seq: Option<u64>,
    pub player: usize,
    pub next_player: usize,
    pub accepted: bool,
    /// Machine-readable rejection reason, e.g. `"unknown_word"`
    pub reason: Option<String>,
    /// Human-readable rejection reason
    pub message: Option<String>,
    pub points: u32,
    pub words: Vec<WordPoints>,
    pub full_rack_bonus: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPoints {
    pub word: String,
    pub points: u32,
}

impl TurnReport {
    pub fn new(seq: Option<u64>, outcome: &TurnOutcome) -> Self {
        let mut report = Self {
            seq,
            player: outcome.player,
            next_player: outcome.next_player,
            accepted: outcome.is_accepted(),
            reason: None,
            message: None,
            points: outcome.points(),
            words: Vec::new(),
            full_rack_bonus: 0,
        };
        match &outcome.verdict {
            Verdict::Accepted(score) => {
                report.words = score
                    .words
                    .iter()
                    .map(|w| WordPoints {
                        word: w.word.clone(),
                        points: w.points,
                    })
                    .collect();
                report.full_rack_bonus = score.full_rack_bonus;
            }
            Verdict::Rejected(reason) => {
                report.reason = Some(reason.code().to_string());
                report.message = Some(reason.to_string());
            }
        }
        report
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl From<Coord> for Position {
    fn from(coord: Coord) -> Self {
        Self {
            row: coord.row(),
            col: coord.col(),
        }
    }
}

/// Full snapshot for rendering: the saved record plus the turn in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub seq: Option<u64>,
    #[serde(flatten)]
    pub record: GameRecord,
    /// Tentative placements of the current turn, in placement order
    pub placed: Vec<Position>,
    pub selected: Option<Position>,
}

impl Observation {
    pub fn new(seq: Option<u64>, state: &GameState) -> Self {
        Self {
            seq,
            record: GameRecord::from(state),
            placed: state.placed_tiles().iter().copied().map(Position::from).collect(),
            selected: state.selected().map(Position::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub seq: Option<u64>,
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidMessage,
    NoGame,
    NoSave,
    OutOfBounds,
    CellLocked,
    InvalidLetter,
    TeamCount,
    Persist,
}

impl From<&GameError> for ErrorCode {
    fn from(err: &GameError) -> Self {
        match err {
            GameError::OutOfBounds { .. } => ErrorCode::OutOfBounds,
            GameError::CellLocked { .. } => ErrorCode::CellLocked,
            GameError::InvalidLetter { .. } => ErrorCode::InvalidLetter,
            GameError::TeamCount { .. } => ErrorCode::TeamCount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    #[test]
    fn test_parse_commands() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"place","seq":4,"row":7,"col":6,"letter":"c"}"#)
                .unwrap();
        assert_eq!(msg.seq, Some(4));
        assert_eq!(
            msg.command,
            Command::Place {
                row: 7,
                col: 6,
                letter: 'c',
                blank: false
            }
        );

        let msg: ClientMessage = serde_json::from_str(r#"{"type":"end_turn"}"#).unwrap();
        assert_eq!(msg.seq, None);
        assert_eq!(msg.command, Command::EndTurn);

        let msg: ClientMessage = serde_json::from_str(r#"{"type":"new_game"}"#).unwrap();
        assert_eq!(msg.command, Command::NewGame { teams: 2 });
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"shuffle"}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"clear","row":1}"#).is_err());
    }

    #[test]
    fn test_ack_and_error_shape() {
        let ack = serde_json::to_value(ServerMessage::ack(Some(3))).unwrap();
        assert_eq!(ack, serde_json::json!({"type": "ack", "seq": 3}));

        let err = ServerMessage::error(None, ErrorCode::NoGame, "no game in progress");
        assert_eq!(
            serde_json::to_value(err).unwrap(),
            serde_json::json!({"type": "error", "seq": null, "code": "no_game", "message": "no game in progress"})
        );
    }

    #[test]
    fn test_turn_report_for_rejection() {
        let mut state = GameState::new(2).unwrap();
        state.place_tile(0, 0, 'Q', false).unwrap();
        let outcome = state.resolve_turn(&Dictionary::from_words(["CAT"]));

        let report = TurnReport::new(Some(9), &outcome);
        assert!(!report.accepted);
        assert_eq!(report.reason.as_deref(), Some("misses_center"));
        assert_eq!(report.points, 0);
        assert!(report.words.is_empty());
        assert_eq!(report.next_player, 1);
    }

    #[test]
    fn test_observation_flattens_record() {
        let mut state = GameState::new(2).unwrap();
        state.place_tile(7, 7, 'A', false).unwrap();
        let value = serde_json::to_value(ServerMessage::Observation(Observation::new(
            Some(1),
            &state,
        )))
        .unwrap();

        assert_eq!(value["type"], "observation");
        assert_eq!(value["current_player"], 0);
        assert_eq!(value["board"][7][7]["letter"], "A");
        assert_eq!(value["board"][7][7]["locked"], false);
        assert_eq!(value["placed"], serde_json::json!([{"row": 7, "col": 7}]));
        assert_eq!(value["selected"], serde_json::Value::Null);
    }
}
