//! Persistence record - the saved form of a game
//!
//! One JSON document per save:
//!
//! ```text
//! {
//!   "board": [[{"letter": "A"|null, "blank": bool, "locked": bool, "bonus": "2L"|"3L"|"2W"|"3W"|null}, ...], ...],
//!   "scores": [int, ...],
//!   "current_player": int,
//!   "first_word_placed": bool
//! }
//! ```
//!
//! The team count is the length of `scores`. The turn in progress is never saved.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};
use crate::error::RecordError;
use crate::game_state::GameState;
use crate::types::{BonusKind, Coord, BOARD_SIZE, MAX_TEAMS, MIN_TEAMS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub letter: Option<String>,
    pub blank: bool,
    pub locked: bool,
    pub bonus: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub board: Vec<Vec<CellRecord>>,
    pub scores: Vec<u32>,
    pub current_player: usize,
    pub first_word_placed: bool,
}

impl From<&Cell> for CellRecord {
    fn from(cell: &Cell) -> Self {
        Self {
            letter: cell.letter.map(String::from),
            blank: cell.blank,
            locked: cell.locked,
            bonus: cell.bonus.map(|b| b.as_str().to_string()),
        }
    }
}

impl From<&GameState> for GameRecord {
    fn from(state: &GameState) -> Self {
        let board = state.board();
        Self {
            board: (0..board.size())
                .map(|row| board.row(row).iter().map(CellRecord::from).collect())
                .collect(),
            scores: state.scores().to_vec(),
            current_player: state.current_player(),
            first_word_placed: state.first_word_placed(),
        }
    }
}

impl CellRecord {
    fn to_cell(&self, row: usize, col: usize) -> Result<Cell, RecordError> {
        let letter = match self.letter.as_deref() {
            None | Some("") => None,
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
                    _ => {
                        return Err(RecordError::InvalidLetter {
                            row,
                            col,
                            letter: s.to_string(),
                        })
                    }
                }
            }
        };

        let bonus = match self.bonus.as_deref() {
            None => None,
            Some(tag) => Some(BonusKind::from_str(tag).ok_or_else(|| {
                RecordError::UnknownBonus {
                    row,
                    col,
                    bonus: tag.to_string(),
                }
            })?),
        };

        Ok(Cell {
            letter,
            blank: self.blank,
            locked: self.locked,
            bonus,
        })
    }
}

impl TryFrom<GameRecord> for GameState {
    type Error = RecordError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let teams = record.scores.len();
        if !(MIN_TEAMS..=MAX_TEAMS).contains(&teams) {
            return Err(RecordError::TeamCount { teams });
        }
        if record.current_player >= teams {
            return Err(RecordError::PlayerIndex {
                player: record.current_player,
                teams,
            });
        }
        if record.board.len() != BOARD_SIZE || record.board.iter().any(|r| r.len() != BOARD_SIZE)
        {
            return Err(RecordError::BoardShape { size: BOARD_SIZE });
        }

        let mut board = Board::without_bonuses();
        for (row, cells) in record.board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let coord = Coord::new(row, col).ok_or(RecordError::BoardShape { size: BOARD_SIZE })?;
                board.set_cell(coord, cell.to_cell(row, col)?);
            }
        }

        Ok(GameState::from_parts(
            board,
            record.scores,
            record.current_player,
            record.first_word_placed,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn played_game() -> GameState {
        let mut state = GameState::new(3).unwrap();
        state.place_tile(7, 6, 'C', false).unwrap();
        state.place_tile(7, 7, 'A', true).unwrap();
        state.place_tile(7, 8, 'T', false).unwrap();
        state.resolve_turn(&Dictionary::from_words(["CAT"]));
        state
    }

    #[test]
    fn test_record_round_trip_restores_everything() {
        let state = played_game();
        let record = GameRecord::from(&state);
        let json = serde_json::to_string(&record).unwrap();
        let back: GameRecord = serde_json::from_str(&json).unwrap();
        let restored = GameState::try_from(back).unwrap();

        assert_eq!(restored, state);
        assert_eq!(restored.board().cells(), state.board().cells());
        assert_eq!(restored.scores(), &[4, 0, 0]);
        assert_eq!(restored.current_player(), 1);
        assert!(restored.first_word_placed());
    }

    #[test]
    fn test_record_json_shape() {
        let record = GameRecord::from(&played_game());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["board"].as_array().unwrap().len(), 15);
        assert_eq!(value["board"][0].as_array().unwrap().len(), 15);
        assert_eq!(
            value["board"][7][7],
            serde_json::json!({"letter": "A", "blank": true, "locked": true, "bonus": null})
        );
        assert_eq!(
            value["board"][0][0],
            serde_json::json!({"letter": null, "blank": false, "locked": false, "bonus": "3W"})
        );
        assert_eq!(value["scores"], serde_json::json!([4, 0, 0]));
        assert_eq!(value["current_player"], 1);
        assert_eq!(value["first_word_placed"], true);
    }

    #[test]
    fn test_empty_string_letter_loads_as_empty_cell() {
        let mut record = GameRecord::from(&GameState::new(2).unwrap());
        record.board[3][3].letter = Some(String::new());
        let state = GameState::try_from(record).unwrap();
        assert_eq!(state.board().get(Coord::new(3, 3).unwrap()).letter, None);
    }

    #[test]
    fn test_malformed_records_are_rejected() {
        let good = GameRecord::from(&GameState::new(2).unwrap());

        let mut r = good.clone();
        r.scores = vec![0];
        assert_eq!(GameState::try_from(r), Err(RecordError::TeamCount { teams: 1 }));

        let mut r = good.clone();
        r.current_player = 2;
        assert_eq!(
            GameState::try_from(r),
            Err(RecordError::PlayerIndex {
                player: 2,
                teams: 2
            })
        );

        let mut r = good.clone();
        r.board.pop();
        assert_eq!(
            GameState::try_from(r),
            Err(RecordError::BoardShape { size: 15 })
        );

        let mut r = good.clone();
        r.board[1][2].letter = Some("AB".to_string());
        assert!(matches!(
            GameState::try_from(r),
            Err(RecordError::InvalidLetter { row: 1, col: 2, .. })
        ));

        let mut r = good;
        r.board[0][0].bonus = Some("4W".to_string());
        assert!(matches!(
            GameState::try_from(r),
            Err(RecordError::UnknownBonus { row: 0, col: 0, .. })
        ));
    }
}
