//! Word ladders: turn one word into another by changing one letter at a
//! time, with every intermediate word taken from a dictionary.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::pruning::word_ladder_unreachable;
use crate::puzzle::Puzzle;

/// Letters tried at each position
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Read-only set of allowed words, cheap to share between puzzle states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Arc<HashSet<String>>,
}

impl Dictionary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Build a dictionary from whitespace-separated words
    pub fn parse(text: &str) -> Self {
        Self::new(text.split_whitespace())
    }

    /// Load a whitespace-separated word list from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

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

/// A word ladder in progress. May be solved, unsolved, or even unsolvable.
///
/// The dictionary is context shared by every state derived from the same
/// puzzle; it does not take part in equality or the canonical key.
#[derive(Debug, Clone)]
pub struct WordLadder {
    from: String,
    to: String,
    dictionary: Dictionary,
}

impl WordLadder {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        dictionary: Dictionary,
    ) -> Result<Self> {
        let (from, to) = (from.into(), to.into());
        if from.is_empty() {
            return Err(Error::EmptyWord { which: "source" });
        }
        if to.is_empty() {
            return Err(Error::EmptyWord { which: "target" });
        }
        Ok(Self {
            from,
            to,
            dictionary,
        })
    }

    /// The current rung
    pub fn word(&self) -> &str {
        &self.from
    }

    pub fn target(&self) -> &str {
        &self.to
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn with_word(&self, word: String) -> Self {
        Self {
            from: word,
            to: self.to.clone(),
            dictionary: self.dictionary.clone(),
        }
    }
}

impl PartialEq for WordLadder {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for WordLadder {}

impl Puzzle for WordLadder {
    fn extensions(&self) -> Vec<Self> {
        if self.is_solved() {
            return Vec::new();
        }

        let letters: Vec<char> = self.from.chars().collect();
        let mut extensions = Vec::new();
        for (i, &current) in letters.iter().enumerate() {
            let mut candidate = letters.clone();
            for letter in ALPHABET.chars().filter(|&l| l != current) {
                candidate[i] = letter;
                let word: String = candidate.iter().collect();
                if self.dictionary.contains(&word) {
                    extensions.push(self.with_word(word));
                }
            }
        }
        extensions
    }

    fn is_solved(&self) -> bool {
        self.from == self.to
    }

    fn fail_fast(&self) -> bool {
        word_ladder_unreachable(&self.from, &self.to, |w| self.dictionary.contains(w))
    }

    fn canonical(&self) -> String {
        format!("{:?}->{:?}", self.from, self.to)
    }
}

impl fmt::Display for WordLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "From {} To {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(from: &str, to: &str, words: &[&str]) -> WordLadder {
        WordLadder::new(from, to, Dictionary::new(words.iter().copied())).unwrap()
    }

    #[test]
    fn test_extensions_change_one_letter() {
        let w = ladder("on", "no", &["on", "no", "oo"]);
        let words: Vec<String> = w.extensions().iter().map(|e| e.word().to_string()).collect();
        assert_eq!(words, vec!["oo"]);
    }

    #[test]
    fn test_extensions_in_position_then_letter_order() {
        let w = ladder("came", "same", &["came", "same", "lame", "cane", "cafe", "tame"]);
        let words: Vec<String> = w.extensions().iter().map(|e| e.word().to_string()).collect();
        assert_eq!(words, vec!["lame", "same", "tame", "cafe", "cane"]);

        let again: Vec<String> = w.extensions().iter().map(|e| e.word().to_string()).collect();
        assert_eq!(words, again);
    }

    #[test]
    fn test_is_solved() {
        assert!(!ladder("to", "too", &["to", "too"]).is_solved());
        assert!(ladder("to", "to", &["to", "too"]).is_solved());
        assert!(ladder("to", "to", &["to", "tt"]).extensions().is_empty());
    }

    #[test]
    fn test_equality_ignores_dictionary_identity() {
        let a = ladder("on", "no", &["on", "no", "oo"]);
        let b = ladder("on", "no", &["on", "oo", "no"]);
        let c = ladder("no", "on", &["on", "no", "oo"]);
        assert_eq!(a, b);
        assert_eq!(a.canonical(), b.canonical());
        assert_ne!(a, c);
        assert_ne!(a.canonical(), c.canonical());
    }

    #[test]
    fn test_fail_fast() {
        assert!(ladder("cat", "cats", &["cat", "cats"]).fail_fast());
        assert!(ladder("cat", "dog", &["cat", "cot"]).fail_fast());
        assert!(!ladder("cat", "dog", &["cat", "dog"]).fail_fast());
    }

    #[test]
    fn test_reject_empty_words() {
        assert!(matches!(
            WordLadder::new("", "a", Dictionary::default()),
            Err(Error::EmptyWord { which: "source" })
        ));
        assert!(matches!(
            WordLadder::new("a", "", Dictionary::default()),
            Err(Error::EmptyWord { which: "target" })
        ));
    }

    #[test]
    fn test_dictionary_parse_and_load() {
        let dict = Dictionary::parse("cat\ncot  cog\n\tdog\n");
        assert_eq!(dict.len(), 4);
        assert!(dict.contains("cog"));
        assert!(!dict.contains("cat\n"));

        let missing = Dictionary::load("/definitely/not/a/word/list");
        assert!(matches!(missing, Err(Error::Io { .. })));
    }

    #[test]
    fn test_display() {
        assert_eq!(ladder("on", "no", &["on", "no"]).to_string(), "From on To no");
    }
}
