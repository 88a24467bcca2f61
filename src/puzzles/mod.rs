//! Concrete puzzle variants.
//!
//! [`PuzzleDefinition`] is the JSON description read by the CLI; building
//! it validates the input and yields an [`AnyPuzzle`], which dispatches the
//! [`Puzzle`] contract to whichever variant it holds.

pub mod peg_solitaire;
pub mod sliding;
pub mod word_ladder;

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::puzzle::Puzzle;

pub use peg_solitaire::{GridPegSolitaire, Marker};
pub use sliding::SlidingGrid;
pub use word_ladder::{Dictionary, WordLadder};

/// Puzzle description as read from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleDefinition {
    PegSolitaire {
        rows: Vec<String>,
    },
    Sliding {
        from: Vec<Vec<String>>,
        to: Vec<Vec<String>>,
    },
    WordLadder {
        from: String,
        to: String,
        #[serde(default)]
        words: Option<Vec<String>>,
        #[serde(default)]
        dictionary: Option<PathBuf>,
    },
}

impl PuzzleDefinition {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the description and build the initial state.
    ///
    /// A word ladder takes its words from `dictionary` if given, then from
    /// the inline `words`, then from the `dictionary` file it names.
    pub fn build(self, dictionary: Option<Dictionary>) -> Result<AnyPuzzle> {
        match self {
            PuzzleDefinition::PegSolitaire { rows } => {
                Ok(AnyPuzzle::PegSolitaire(GridPegSolitaire::parse(&rows)?))
            }
            PuzzleDefinition::Sliding { from, to } => {
                Ok(AnyPuzzle::Sliding(SlidingGrid::new(from, to)?))
            }
            PuzzleDefinition::WordLadder {
                from,
                to,
                words,
                dictionary: path,
            } => {
                let dictionary = match (dictionary, words, path) {
                    (Some(dictionary), _, _) => dictionary,
                    (None, Some(words), _) => Dictionary::new(words),
                    (None, None, Some(path)) => Dictionary::load(path)?,
                    (None, None, None) => return Err(Error::MissingDictionary),
                };
                Ok(AnyPuzzle::WordLadder(WordLadder::new(from, to, dictionary)?))
            }
        }
    }
}

/// Any of the built-in puzzle variants
#[derive(Debug, Clone, PartialEq)]
pub enum AnyPuzzle {
    PegSolitaire(GridPegSolitaire),
    Sliding(SlidingGrid),
    WordLadder(WordLadder),
}

impl AnyPuzzle {
    pub fn kind(&self) -> &'static str {
        match self {
            AnyPuzzle::PegSolitaire(_) => "peg_solitaire",
            AnyPuzzle::Sliding(_) => "sliding",
            AnyPuzzle::WordLadder(_) => "word_ladder",
        }
    }
}

impl Puzzle for AnyPuzzle {
    fn extensions(&self) -> Vec<Self> {
        match self {
            AnyPuzzle::PegSolitaire(p) => {
                p.extensions().into_iter().map(AnyPuzzle::PegSolitaire).collect()
            }
            AnyPuzzle::Sliding(p) => p.extensions().into_iter().map(AnyPuzzle::Sliding).collect(),
            AnyPuzzle::WordLadder(p) => {
                p.extensions().into_iter().map(AnyPuzzle::WordLadder).collect()
            }
        }
    }

    fn is_solved(&self) -> bool {
        match self {
            AnyPuzzle::PegSolitaire(p) => p.is_solved(),
            AnyPuzzle::Sliding(p) => p.is_solved(),
            AnyPuzzle::WordLadder(p) => p.is_solved(),
        }
    }

    fn fail_fast(&self) -> bool {
        match self {
            AnyPuzzle::PegSolitaire(p) => p.fail_fast(),
            AnyPuzzle::Sliding(p) => p.fail_fast(),
            AnyPuzzle::WordLadder(p) => p.fail_fast(),
        }
    }

    fn canonical(&self) -> String {
        // Prefix keeps keys of different variants apart
        let key = match self {
            AnyPuzzle::PegSolitaire(p) => p.canonical(),
            AnyPuzzle::Sliding(p) => p.canonical(),
            AnyPuzzle::WordLadder(p) => p.canonical(),
        };
        format!("{}:{}", self.kind(), key)
    }
}

impl fmt::Display for AnyPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyPuzzle::PegSolitaire(p) => fmt::Display::fmt(p, f),
            AnyPuzzle::Sliding(p) => fmt::Display::fmt(p, f),
            AnyPuzzle::WordLadder(p) => fmt::Display::fmt(p, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_peg_definition() {
        let def = PuzzleDefinition::from_json(r#"{"kind": "peg_solitaire", "rows": ["**."]}"#)
            .unwrap();
        let puzzle = def.build(None).unwrap();
        assert_eq!(puzzle.kind(), "peg_solitaire");
        assert_eq!(puzzle.canonical(), "peg_solitaire:**.");
        assert_eq!(puzzle.extensions().len(), 1);
    }

    #[test]
    fn test_parse_sliding_definition() {
        let json = r#"{
            "kind": "sliding",
            "from": [["*", "2", "3"], ["1", "4", "5"]],
            "to": [["1", "2", "3"], ["4", "5", "*"]]
        }"#;
        let puzzle = PuzzleDefinition::from_json(json).unwrap().build(None).unwrap();
        assert!(matches!(puzzle, AnyPuzzle::Sliding(_)));
        assert_eq!(puzzle.extensions().len(), 2);
    }

    #[test]
    fn test_word_ladder_dictionary_sources() {
        let json = r#"{"kind": "word_ladder", "from": "on", "to": "no", "words": ["on", "oo", "no"]}"#;
        let puzzle = PuzzleDefinition::from_json(json).unwrap().build(None).unwrap();
        assert_eq!(puzzle.extensions().len(), 1);

        // An explicit dictionary wins over inline words
        let override_dict = Dictionary::new(["on", "no"]);
        let puzzle = PuzzleDefinition::from_json(json)
            .unwrap()
            .build(Some(override_dict))
            .unwrap();
        assert!(puzzle.extensions().is_empty());

        let bare = r#"{"kind": "word_ladder", "from": "on", "to": "no"}"#;
        let err = PuzzleDefinition::from_json(bare).unwrap().build(None).unwrap_err();
        assert!(matches!(err, Error::MissingDictionary));
    }

    #[test]
    fn test_invalid_definitions() {
        assert!(matches!(
            PuzzleDefinition::from_json(r#"{"kind": "chess"}"#),
            Err(Error::Json(_))
        ));
        let ragged = PuzzleDefinition::from_json(r#"{"kind": "peg_solitaire", "rows": ["**", "*"]}"#)
            .unwrap()
            .build(None);
        assert!(matches!(ragged, Err(Error::RaggedGrid { .. })));
    }

    #[test]
    fn test_extensions_keep_variant() {
        let puzzle = AnyPuzzle::PegSolitaire(GridPegSolitaire::parse(&["**."]).unwrap());
        for child in puzzle.extensions() {
            assert!(matches!(child, AnyPuzzle::PegSolitaire(_)));
            assert!(child.is_solved());
        }
    }
}
