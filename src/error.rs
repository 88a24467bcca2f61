//! Error types for puzzle construction and configuration.
//!
//! Search itself never fails: an unsolvable puzzle is reported through
//! [`crate::solver::SearchResult`], not through this type.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("{grid} grid has no cells")]
    EmptyGrid { grid: &'static str },

    #[error("{grid} grid row {row} has {got} cells, expected {expected}")]
    RaggedGrid {
        grid: &'static str,
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid marker '{marker}' at row {row}, column {column} (expected '*', '.' or '#')")]
    InvalidMarker {
        marker: char,
        row: usize,
        column: usize,
    },

    #[error("grid dimensions differ: source is {from_rows}x{from_cols}, target is {to_rows}x{to_cols}")]
    DimensionMismatch {
        from_rows: usize,
        from_cols: usize,
        to_rows: usize,
        to_cols: usize,
    },

    #[error("{grid} grid must contain exactly one blank '{blank}', found {count}")]
    BlankCount {
        grid: &'static str,
        blank: &'static str,
        count: usize,
    },

    #[error("symbol '{symbol}' appears more than once in the {grid} grid")]
    DuplicateSymbol { grid: &'static str, symbol: String },

    #[error("symbol '{symbol}' of the source grid does not appear in the target grid")]
    SymbolMismatch { symbol: String },

    #[error("word ladder {which} word is empty")]
    EmptyWord { which: &'static str },

    #[error("word ladder puzzle needs a dictionary (inline \"words\" or a dictionary file)")]
    MissingDictionary,

    #[error("unknown search strategy '{input}'. Expected one of: {expected}")]
    UnknownStrategy { input: String, expected: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("puzzle definition error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
