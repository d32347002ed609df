//! Core game logic - move validation, scoring and turn flow
//!
//! This crate contains every rule of the word-placement game. It knows nothing about
//! rendering or input devices; a presentation layer feeds it placement intents and
//! reads back the board and scores.
//!
//! # Module Structure
//!
//! - [`board`]: 15x15 grid of cells with the static bonus layout
//! - [`words`]: resolves the main word and cross words formed by a turn
//! - [`validate`]: the ordered legality pipeline
//! - [`scoring`]: letter/word multipliers and the full-rack bonus
//! - [`dictionary`]: immutable set of playable words
//! - [`game_state`]: durable game data plus the turn in progress
//! - [`game`]: the turn controller, which persists after every turn
//! - [`snapshot`]: the saved JSON record
//! - [`store`]: the persistence boundary
//!
//! # Game Rules
//!
//! - 2 to 4 teams take turns placing up to 7 letters in one row or column
//! - The first word must cover the center cell; later words must touch a locked letter
//! - Every word formed must be in the dictionary, or the tiles are removed
//! - An illegal move still costs the turn
//! - Bonus cells count once, on the turn that locks them
//! - Placing all 7 tiles earns 50 extra points
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wordgrid_core::{Dictionary, Game, MemoryStore};
//!
//! let dictionary = Arc::new(Dictionary::from_words(["CAT"]));
//! let mut game = Game::new(2, dictionary, MemoryStore::new()).unwrap();
//!
//! game.place_tile(7, 6, 'C', false).unwrap();
//! game.place_tile(7, 7, 'A', false).unwrap();
//! game.place_tile(7, 8, 'T', false).unwrap();
//!
//! let outcome = game.end_turn().unwrap();
//! assert!(outcome.is_accepted());
//! assert_eq!(game.state().scores(), &[5, 0]);
//! assert_eq!(game.state().current_player(), 1);
//! ```

pub mod board;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod game_state;
pub mod scoring;
pub mod snapshot;
pub mod store;
pub mod validate;
pub mod words;

pub use wordgrid_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use dictionary::Dictionary;
pub use error::{DictionaryError, GameError, RecordError, StoreError, TurnError};
pub use game::Game;
pub use game_state::{GameState, Turn, TurnOutcome, Verdict};
pub use scoring::{calculate_score, calculate_word_score, ScoreResult, WordScore};
pub use snapshot::{CellRecord, GameRecord};
pub use store::{GameStore, JsonFileStore, MemoryStore};
pub use validate::{validate, MoveError};
pub use words::{resolve, ResolvedWords, Word};
