//! CLI entry point for the puzzle search engine.
//!
//! Usage:
//!   puzzle-search solve <puzzle.json> [options]
//!   puzzle-search solve --stdin [options]
//!
//! Options:
//!   --strategy <dfs|bfs>    Traversal order (default: dfs)
//!   --timeout <seconds>     Maximum search time (default: unlimited)
//!   --max-states <n>        Maximum distinct states to visit (default: unlimited)
//!   --first                 Stop depth-first search at the first solution
//!   --dictionary <path>     Word list for word ladder puzzles
//!
//! Set `RUST_LOG=debug` for progress on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::error;
use serde::{Deserialize, Serialize};

use puzzle_search::{
    solve, AnyPuzzle, Dictionary, Error, PuzzleDefinition, SearchResult, SolverConfig, Strategy,
};

#[derive(Parser)]
#[command(name = "puzzle-search")]
#[command(about = "Depth-first and breadth-first search over combinatorial puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a solution to a puzzle
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(
            value_name = "FILE",
            required_unless_present = "stdin",
            conflicts_with = "stdin"
        )]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Traversal order
        #[arg(long, value_enum, default_value_t = Strategy::DepthFirst)]
        strategy: Strategy,

        /// Maximum search time in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Maximum number of distinct states to visit
        #[arg(long)]
        max_states: Option<usize>,

        /// Stop depth-first search at the first solution found
        #[arg(long)]
        first: bool,

        /// Whitespace-separated word list for word ladder puzzles
        #[arg(long, value_name = "PATH")]
        dictionary: Option<PathBuf>,
    },
}

/// Output format for a search
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    kind: String,
    strategy: Strategy,
    solved: bool,
    search_exhausted: bool,
    states_explored: usize,
    time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    steps: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            timeout,
            max_states,
            first,
            dictionary,
        } => {
            let puzzle = match load_puzzle(file.filter(|_| !stdin), dictionary) {
                Ok(puzzle) => puzzle,
                Err(e) => {
                    error!("{e}");
                    eprintln!("Error: {e}");
                    return ExitCode::from(2);
                }
            };

            let config = SolverConfig {
                timeout: timeout.map(Duration::from_secs),
                max_states,
                stop_at_first: first,
            };

            let kind = puzzle.kind().to_string();
            let result = solve(puzzle, strategy, &config);
            let output = format_result(kind, strategy, &result);

            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error: failed to format result: {e}");
                    return ExitCode::from(2);
                }
            }

            if result.is_solved() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Read the puzzle from `file`, or from stdin when no file was given.
fn load_puzzle(file: Option<PathBuf>, dictionary: Option<PathBuf>) -> Result<AnyPuzzle, Error> {
    let json = match file {
        Some(path) => fs::read_to_string(&path).map_err(|source| Error::Io { path, source })?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| Error::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            buffer
        }
    };

    let dictionary = dictionary.map(Dictionary::load).transpose()?;
    PuzzleDefinition::from_json(&json)?.build(dictionary)
}

fn format_result(kind: String, strategy: Strategy, result: &SearchResult<AnyPuzzle>) -> SolveOutput {
    let steps: Vec<String> = result
        .solution()
        .unwrap_or_default()
        .into_iter()
        .map(|state| state.to_string())
        .collect();

    SolveOutput {
        kind,
        strategy,
        solved: result.is_solved(),
        search_exhausted: result.search_exhausted,
        states_explored: result.states_explored,
        time_elapsed_ms: result.time_elapsed_ms,
        moves: result.tree.as_ref().map(|tree| tree.solution_len()),
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_solve_needs_a_source() {
        let err = Cli::try_parse_from(["puzzle-search", "solve"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["puzzle-search", "solve", "board.json", "--stdin"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_solve_sources() {
        let cli = Cli::try_parse_from(["puzzle-search", "solve", "--stdin"]).unwrap();
        let Commands::Solve { file, stdin, .. } = cli.command;
        assert!(stdin);
        assert!(file.is_none());

        let cli = Cli::try_parse_from(["puzzle-search", "solve", "board.json", "--strategy", "bfs"])
            .unwrap();
        let Commands::Solve { file, strategy, .. } = cli.command;
        assert_eq!(file, Some(PathBuf::from("board.json")));
        assert_eq!(strategy, Strategy::BreadthFirst);
    }
}
