//! Scoring module - word values with letter/word multipliers
//!
//! Each word is scored on its own:
//! - every non-blank letter contributes its base value, times any letter bonus on its cell;
//! - word bonuses on its cells multiply the word total, compounding;
//! - blanks contribute 0 but still collect word bonuses.
//!
//! Placing a full rack adds a flat bonus once per turn. Bonuses are only read here;
//! they are consumed when the turn locks its tiles, so a cell's bonus counts exactly once.

use crate::board::Board;
use crate::types::{FULL_RACK_BONUS, LETTER_VALUES, MAX_TILES_PER_TURN};
use crate::words::{ResolvedWords, Word};

/// Points for one word of a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordScore {
    pub word: String,
    pub points: u32,
}

/// Score calculation result
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Main word first, then secondary words.
    pub words: Vec<WordScore>,
    pub full_rack_bonus: u32,
    pub total: u32,
}

/// Base value of a letter; anything outside A-Z is worth 0
pub fn letter_value(letter: char) -> u32 {
    if letter.is_ascii_uppercase() {
        LETTER_VALUES[(letter as u8 - b'A') as usize]
    } else {
        0
    }
}

/// Score one word as it currently sits on `board`
pub fn calculate_word_score(board: &Board, word: &Word) -> u32 {
    let mut letter_total = 0;
    let mut word_multiplier = 1;

    for &coord in word.cells() {
        let cell = board.get(coord);
        let bonus = cell.bonus;

        if let Some(letter) = cell.letter.filter(|_| !cell.blank) {
            let multiplier = bonus.map_or(1, |b| b.letter_multiplier());
            letter_total += letter_value(letter) * multiplier;
        }
        if let Some(b) = bonus {
            word_multiplier *= b.word_multiplier();
        }
    }

    letter_total * word_multiplier
}

pub fn full_rack_bonus(tiles_placed: usize) -> u32 {
    if tiles_placed == MAX_TILES_PER_TURN {
        FULL_RACK_BONUS
    } else {
        0
    }
}

/// Calculate the complete score of a validated turn
pub fn calculate_score(board: &Board, words: &ResolvedWords, tiles_placed: usize) -> ScoreResult {
    let words: Vec<WordScore> = words
        .iter()
        .map(|w| WordScore {
            word: w.text(board),
            points: calculate_word_score(board, w),
        })
        .collect();
    let full_rack_bonus = full_rack_bonus(tiles_placed);
    let total = words
        .iter()
        .fold(full_rack_bonus, |acc, w| acc.saturating_add(w.points));

    ScoreResult {
        words,
        full_rack_bonus,
        total,
    }
}
