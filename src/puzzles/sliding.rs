//! The n x m sliding tile puzzle (the 15-puzzle and friends).

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::pruning::sliding_parity_violated;
use crate::puzzle::{Direction, Puzzle};

/// Symbol marking the empty space
pub const BLANK: &str = "*";

/// An n x m sliding puzzle in some configuration, working towards a fixed
/// target configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlidingGrid {
    rows: usize,
    cols: usize,
    /// Current configuration, row-major
    cells: Vec<String>,
    /// Solved configuration, shared read-only by every derived state
    target: Arc<Vec<String>>,
    /// Index of [`BLANK`] in `cells`
    blank: usize,
}

/// Flatten a grid, checking it is rectangular, has exactly one blank and
/// no repeated symbols.
fn flatten<S: Into<String>>(
    grid: Vec<Vec<S>>,
    name: &'static str,
) -> Result<(usize, usize, Vec<String>)> {
    let cols = grid.first().map_or(0, Vec::len);
    if cols == 0 {
        return Err(Error::EmptyGrid { grid: name });
    }
    let rows = grid.len();

    let mut cells = Vec::with_capacity(rows * cols);
    for (row, symbols) in grid.into_iter().enumerate() {
        if symbols.len() != cols {
            return Err(Error::RaggedGrid {
                grid: name,
                row,
                expected: cols,
                got: symbols.len(),
            });
        }
        cells.extend(symbols.into_iter().map(Into::into));
    }

    let blanks = cells.iter().filter(|s| *s == BLANK).count();
    if blanks != 1 {
        return Err(Error::BlankCount {
            grid: name,
            blank: BLANK,
            count: blanks,
        });
    }

    let mut seen = HashSet::with_capacity(cells.len());
    for symbol in &cells {
        if !seen.insert(symbol.as_str()) {
            return Err(Error::DuplicateSymbol {
                grid: name,
                symbol: symbol.clone(),
            });
        }
    }

    Ok((rows, cols, cells))
}

impl SlidingGrid {
    /// Create a puzzle in configuration `from` working towards `to`.
    ///
    /// Both grids must be rectangular with the same dimensions, contain
    /// exactly one [`BLANK`], and hold the same set of distinct symbols.
    pub fn new<S: Into<String>>(from: Vec<Vec<S>>, to: Vec<Vec<S>>) -> Result<Self> {
        let (rows, cols, cells) = flatten(from, "source")?;
        let (to_rows, to_cols, target) = flatten(to, "target")?;

        if (rows, cols) != (to_rows, to_cols) {
            return Err(Error::DimensionMismatch {
                from_rows: rows,
                from_cols: cols,
                to_rows,
                to_cols,
            });
        }

        let target_symbols: HashSet<&str> = target.iter().map(String::as_str).collect();
        if let Some(symbol) = cells.iter().find(|s| !target_symbols.contains(s.as_str())) {
            return Err(Error::SymbolMismatch {
                symbol: symbol.clone(),
            });
        }

        let blank = cells.iter().position(|s| s == BLANK).unwrap_or_default();
        Ok(Self {
            rows,
            cols,
            cells,
            target: Arc::new(target),
            blank,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Symbol at a position of the current configuration (bounds-checked)
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(&self.cells[row * self.cols + col])
    }

    /// (row, column) of the blank
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.cols, self.blank % self.cols)
    }

    /// Current configuration as rows
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.cells.chunks(self.cols).map(<[String]>::to_vec).collect()
    }

    /// Cells the blank can swap with, in [`Direction::ALL`] order
    fn blank_neighbours(&self) -> SmallVec<[usize; 4]> {
        let position = self.blank_position();
        Direction::ALL
            .iter()
            .filter_map(|dir| dir.step(position, 1, self.rows, self.cols))
            .map(|(r, c)| r * self.cols + c)
            .collect()
    }

    /// Swap the blank with the tile at `index`, on a fresh copy of the grid.
    fn slide(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.cells.swap(self.blank, index);
        next.blank = index;
        next
    }
}

impl Puzzle for SlidingGrid {
    fn extensions(&self) -> Vec<Self> {
        if self.is_solved() {
            return Vec::new();
        }
        self.blank_neighbours()
            .into_iter()
            .map(|index| self.slide(index))
            .collect()
    }

    fn is_solved(&self) -> bool {
        self.cells == *self.target
    }

    fn fail_fast(&self) -> bool {
        sliding_parity_violated(&self.cells, &self.target, self.cols, BLANK)
    }

    fn canonical(&self) -> String {
        // Debug quoting escapes separators inside symbols
        format!(
            "{}x{}:{:?}->{:?}",
            self.rows, self.cols, self.cells, self.target
        )
    }
}

impl fmt::Display for SlidingGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.cells.iter().map(|s| s.chars().count()).max().unwrap_or(1);
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|s| format!("{s:<width$}")).collect();
            write!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}
