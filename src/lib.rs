//! Generic search over combinatorial puzzles.
//!
//! A puzzle implements the [`Puzzle`] contract (one-move extensions, a
//! solved test, an optional dead-end test and a canonical key). The
//! [`solver`] explores the state graph that contract induces and returns a
//! [`SolutionTree`] when a solution is reachable. Three variants ship with
//! the crate: grid peg solitaire, the n x m sliding puzzle and word ladders.

pub mod error;
pub mod pruning;
pub mod puzzle;
pub mod puzzles;
pub mod solver;
pub mod tree;

// Re-export main types
pub use error::{Error, Result};
pub use puzzle::{Direction, Puzzle};
pub use puzzles::{
    AnyPuzzle, Dictionary, GridPegSolitaire, Marker, PuzzleDefinition, SlidingGrid, WordLadder,
};
pub use solver::{
    breadth_first_search, breadth_first_solve, depth_first_search, depth_first_solve, solve,
    SearchResult, SolverConfig, Strategy,
};
pub use tree::{NodeId, SolutionTree};
