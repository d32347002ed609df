//! Dictionary provider - the immutable set of playable words
//!
//! Loaded once before play from a plain word list (one word per line).
//! Words are normalized to uppercase; blank lines and `#` comments are skipped.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::DictionaryError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build from any list of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Parse a newline-separated word list
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Read a word list from disk
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::parse(&text);
        debug!(words = dictionary.len(), "word list loaded");
        Ok(dictionary)
    }

    /// Exact membership test; `word` must already be uppercase
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() || word.starts_with('#') {
        return None;
    }
    Some(word.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_and_skips_noise() {
        let dict = Dictionary::parse("# comment\ncat\n  Dog \n\nBIRD\n");
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("CAT"));
        assert!(dict.contains("DOG"));
        assert!(dict.contains("BIRD"));
        assert!(!dict.contains("cat"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = Dictionary::load(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
