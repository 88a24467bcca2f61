//! Peg solitaire on a rectangular grid.
//!
//! Cross and plus shaped boards are described by marking the cells outside
//! the board as [`Marker::Unused`].

use std::fmt;

use crate::error::{Error, Result};
use crate::pruning::peg_board_empty;
use crate::puzzle::{Direction, Puzzle};

/// Content of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Peg,
    Empty,
    Unused,
}

impl Marker {
    pub fn from_char(c: char) -> Option<Marker> {
        match c {
            '*' => Some(Marker::Peg),
            '.' => Some(Marker::Empty),
            '#' => Some(Marker::Unused),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Marker::Peg => '*',
            Marker::Empty => '.',
            Marker::Unused => '#',
        }
    }
}

/// Snapshot of a peg solitaire board. May be solved, unsolved, or even
/// unsolvable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridPegSolitaire {
    rows: usize,
    cols: usize,
    cells: Vec<Marker>,
}

impl GridPegSolitaire {
    /// Build a board from rows of markers. All rows must have the same
    /// non-zero length.
    pub fn new(grid: Vec<Vec<Marker>>) -> Result<Self> {
        let cols = grid.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(Error::EmptyGrid { grid: "peg" });
        }

        let rows = grid.len();
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, markers) in grid.into_iter().enumerate() {
            if markers.len() != cols {
                return Err(Error::RaggedGrid {
                    grid: "peg",
                    row,
                    expected: cols,
                    got: markers.len(),
                });
            }
            cells.extend(markers);
        }

        Ok(Self { rows, cols, cells })
    }

    /// Parse a board from text rows using `*` for pegs, `.` for empty
    /// holes and `#` for unused cells. Any other character, whitespace
    /// included, is rejected.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let mut grid = Vec::with_capacity(rows.len());
        for (row, line) in rows.iter().enumerate() {
            let markers = line
                .as_ref()
                .chars()
                .enumerate()
                .map(|(column, c)| {
                    Marker::from_char(c).ok_or(Error::InvalidMarker {
                        marker: c,
                        row,
                        column,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            grid.push(markers);
        }
        Self::new(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Marker at a position (bounds-checked)
    pub fn get(&self, row: usize, col: usize) -> Option<Marker> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    pub fn peg_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m == Marker::Peg).count()
    }

    /// Jump the peg at `from` over `over` into `to`, on a fresh copy of the
    /// board.
    fn jump(&self, from: (usize, usize), over: (usize, usize), to: (usize, usize)) -> Self {
        let mut next = self.clone();
        next.cells[from.0 * self.cols + from.1] = Marker::Empty;
        next.cells[over.0 * self.cols + over.1] = Marker::Empty;
        next.cells[to.0 * self.cols + to.1] = Marker::Peg;
        next
    }
}

impl Puzzle for GridPegSolitaire {
    fn extensions(&self) -> Vec<Self> {
        if self.is_solved() {
            return Vec::new();
        }

        let mut extensions = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.get(row, col) != Some(Marker::Peg) {
                    continue;
                }
                for dir in Direction::ALL {
                    let (Some(over), Some(to)) = (
                        dir.step((row, col), 1, self.rows, self.cols),
                        dir.step((row, col), 2, self.rows, self.cols),
                    ) else {
                        continue;
                    };
                    if self.get(over.0, over.1) == Some(Marker::Peg)
                        && self.get(to.0, to.1) == Some(Marker::Empty)
                    {
                        extensions.push(self.jump((row, col), over, to));
                    }
                }
            }
        }
        extensions
    }

    fn is_solved(&self) -> bool {
        self.peg_count() == 1
    }

    fn fail_fast(&self) -> bool {
        peg_board_empty(self.peg_count())
    }

    fn canonical(&self) -> String {
        let mut key = String::with_capacity(self.cells.len() + self.rows);
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                key.push('/');
            }
            key.extend(row.iter().map(|m| m.to_char()));
        }
        key
    }
}

impl fmt::Display for GridPegSolitaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|m| m.to_char().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
