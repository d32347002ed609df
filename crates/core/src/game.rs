//! Turn controller - drives one game session end to end
//!
//! Owns the [`GameState`], the shared dictionary and the store. Tentative placements
//! go straight to the state; [`Game::end_turn`] runs the full transaction and then
//! persists, success or failure.

use std::sync::Arc;

use tracing::{error, instrument};

use crate::dictionary::Dictionary;
use crate::error::{GameError, StoreError, TurnError};
use crate::game_state::{GameState, TurnOutcome};
use crate::snapshot::GameRecord;
use crate::store::GameStore;

#[derive(Debug)]
pub struct Game<S> {
    state: GameState,
    dictionary: Arc<Dictionary>,
    store: S,
}

impl<S: GameStore> Game<S> {
    /// Start a fresh game; nothing is saved until the first turn ends
    pub fn new(teams: usize, dictionary: Arc<Dictionary>, store: S) -> Result<Self, GameError> {
        Ok(Self {
            state: GameState::new(teams)?,
            dictionary,
            store,
        })
    }

    /// Resume the game held by `store`, if there is one
    #[instrument(skip_all)]
    pub fn load(dictionary: Arc<Dictionary>, store: S) -> Result<Option<Self>, StoreError> {
        let Some(record) = store.load()? else {
            return Ok(None);
        };
        let state = GameState::try_from(record)?;
        Ok(Some(Self {
            state,
            dictionary,
            store,
        }))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn place_tile(
        &mut self,
        row: usize,
        col: usize,
        letter: char,
        blank: bool,
    ) -> Result<(), GameError> {
        self.state.place_tile(row, col, letter, blank)
    }

    pub fn clear_tile(&mut self, row: usize, col: usize) -> Result<bool, GameError> {
        self.state.clear_tile(row, col)
    }

    pub fn select(&mut self, row: usize, col: usize) -> Result<bool, GameError> {
        self.state.select(row, col)
    }

    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
    }

    pub fn reset_turn(&mut self) {
        self.state.reset_turn();
    }

    /// End the current turn: validate, score or roll back, advance, save.
    ///
    /// A save failure does not undo the turn; the outcome comes back inside the error.
    #[instrument(skip(self), fields(player = self.state.current_player()))]
    pub fn end_turn(&mut self) -> Result<TurnOutcome, TurnError> {
        let outcome = self.state.resolve_turn(&self.dictionary);
        match self.save() {
            Ok(()) => Ok(outcome),
            Err(source) => {
                error!(error = %source, "turn applied but not saved");
                Err(TurnError { outcome, source })
            }
        }
    }

    /// Write the current state to the store
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store.save(&GameRecord::from(&self.state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::Verdict;
    use crate::store::MemoryStore;

    fn dictionary() -> Arc<Dictionary> {
        Arc::new(Dictionary::from_words(["CAT", "CATS"]))
    }

    #[test]
    fn test_every_end_turn_persists() {
        let mut game = Game::new(2, dictionary(), MemoryStore::new()).unwrap();
        game.place_tile(0, 0, 'Z', false).unwrap();
        let outcome = game.end_turn().unwrap();
        assert!(!outcome.is_accepted());
        assert_eq!(game.store().saves(), 1);

        for (col, letter) in [(6, 'C'), (7, 'A'), (8, 'T')] {
            game.place_tile(7, col, letter, false).unwrap();
        }
        let outcome = game.end_turn().unwrap();
        assert!(outcome.is_accepted());
        assert_eq!(game.store().saves(), 2);

        let saved = game.store().record().unwrap();
        assert_eq!(saved, GameRecord::from(game.state()));
        assert_eq!(saved.scores, vec![0, 5]);
        assert_eq!(saved.current_player, 0);
    }

    #[test]
    fn test_save_failure_keeps_the_turn() {
        let mut game = Game::new(2, dictionary(), MemoryStore::failing()).unwrap();
        for (col, letter) in [(6, 'C'), (7, 'A'), (8, 'T')] {
            game.place_tile(7, col, letter, false).unwrap();
        }
        let err = game.end_turn().unwrap_err();
        assert!(matches!(err.outcome.verdict, Verdict::Accepted(_)));
        assert!(matches!(err.source, StoreError::Io(_)));
        assert_eq!(game.state().current_player(), 1);
        assert_eq!(game.state().scores(), &[5, 0]);
    }

    #[test]
    fn test_load_resumes_saved_game() {
        let mut game = Game::new(3, dictionary(), MemoryStore::new()).unwrap();
        for (col, letter) in [(6, 'C'), (7, 'A'), (8, 'T')] {
            game.place_tile(7, col, letter, false).unwrap();
        }
        game.end_turn().unwrap();
        let before = game.state().clone();

        let store = game.into_store();
        let resumed = Game::load(dictionary(), store).unwrap().unwrap();
        assert_eq!(resumed.state(), &before);

        assert!(Game::load(dictionary(), MemoryStore::new())
            .unwrap()
            .is_none());
    }
}
