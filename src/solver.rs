//! Search engine over the [`Puzzle`] contract.
//!
//! Both traversals run on an explicit work list instead of the call stack,
//! check the configured limits between steps, and key their visited memo on
//! [`Puzzle::canonical`]. The memo lives for exactly one search call.
//!
//! Depth-first search expands every reachable state once and keeps every
//! branch that reaches a solution, so the returned tree can hold many
//! solutions; the first child at each level gives the first one found.
//! Breadth-first search stops at the first solved state it generates and
//! returns that shortest path as a single-branch tree.

use std::collections::{HashSet, VecDeque};
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::puzzle::Puzzle;
use crate::tree::{NodeId, SolutionTree, TreeBuilder};

/// Traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    #[value(alias = "dfs")]
    DepthFirst,
    #[value(alias = "bfs")]
    BreadthFirst,
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depth_first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" | "breadth_first" => Ok(Strategy::BreadthFirst),
            _ => Err(Error::UnknownStrategy {
                input: s.to_string(),
                expected: "dfs, depth-first, bfs, breadth-first".to_string(),
            }),
        }
    }
}

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Maximum time to search
    pub timeout: Option<Duration>,
    /// Maximum number of distinct states to visit
    pub max_states: Option<usize>,
    /// Depth-first only: stop at the first solved state instead of
    /// exploring the rest of the state graph
    pub stop_at_first: bool,
}

/// Result of a search
#[derive(Debug, Clone)]
pub struct SearchResult<P> {
    /// Explored states leading to solutions; `None` if none was found
    pub tree: Option<SolutionTree<P>>,
    /// Whether every reachable, unpruned state was expanded
    pub search_exhausted: bool,
    /// Number of distinct states visited
    pub states_explored: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

impl<P> SearchResult<P> {
    pub fn is_solved(&self) -> bool {
        self.tree.is_some()
    }

    /// States along the first solution found, starting at the initial state
    pub fn solution(&self) -> Option<Vec<&P>> {
        self.tree.as_ref().map(SolutionTree::solution_path)
    }
}

/// Wall-clock and state-count budget of one search
struct Budget {
    start: Instant,
    deadline: Option<Instant>,
    max_states: Option<usize>,
}

impl Budget {
    fn new(config: &SolverConfig) -> Self {
        let start = Instant::now();
        Self {
            start,
            deadline: config.timeout.map(|timeout| start + timeout),
            max_states: config.max_states,
        }
    }

    /// Name of the exhausted limit, if any
    fn exceeded(&self, states: usize) -> Option<&'static str> {
        if self.max_states.is_some_and(|max| states >= max) {
            return Some("state limit");
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Some("timeout");
        }
        None
    }

    fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// What the engine decided about a newly reached state
enum Visit<P> {
    /// `fail_fast` proved it a dead end; not recorded in the memo
    Pruned,
    /// Already visited in this search
    Seen,
    Solved(P),
    Expand(P),
}

fn visit<P: Puzzle>(state: P, memo: &mut HashSet<String>) -> Visit<P> {
    if state.fail_fast() {
        trace!("pruned {}", state.canonical());
        return Visit::Pruned;
    }
    let key = state.canonical();
    if memo.contains(&key) {
        trace!("already visited {key}");
        return Visit::Seen;
    }
    memo.insert(key);
    if state.is_solved() {
        Visit::Solved(state)
    } else {
        Visit::Expand(state)
    }
}

/// A state being expanded by depth-first search
struct Frame<P> {
    state: P,
    pending: std::vec::IntoIter<P>,
    /// Subtrees of extensions that reached a solution
    children: Vec<NodeId>,
}

impl<P: Puzzle> Frame<P> {
    fn new(state: P) -> Self {
        let pending = state.extensions().into_iter();
        Self {
            state,
            pending,
            children: Vec::new(),
        }
    }
}

/// Pop the top frame, turning it into a tree node if any of its extensions
/// reached a solution and handing that node to the frame below (or making
/// it the root).
fn close_frame<P>(
    stack: &mut Vec<Frame<P>>,
    builder: &mut TreeBuilder<P>,
    root: &mut Option<NodeId>,
) {
    let Some(frame) = stack.pop() else {
        return;
    };
    if frame.children.is_empty() {
        return;
    }
    let id = builder.branch(frame.state, frame.children);
    match stack.last_mut() {
        Some(parent) => parent.children.push(id),
        None => *root = Some(id),
    }
}

/// Depth-first search from `puzzle`.
///
/// If a limit stops the search early, solutions found so far are still
/// returned.
pub fn depth_first_search<P: Puzzle>(puzzle: P, config: &SolverConfig) -> SearchResult<P> {
    let budget = Budget::new(config);
    debug!("depth-first search from {}", puzzle.canonical());

    let mut memo = HashSet::new();
    let mut builder = TreeBuilder::new();
    let mut stack: Vec<Frame<P>> = Vec::new();
    let mut root = None;
    let mut exhausted = true;

    match visit(puzzle, &mut memo) {
        Visit::Pruned | Visit::Seen => {}
        Visit::Solved(state) => root = Some(builder.leaf(state)),
        Visit::Expand(state) => stack.push(Frame::new(state)),
    }

    while !stack.is_empty() {
        if let Some(limit) = budget.exceeded(memo.len()) {
            warn!(
                "depth-first search stopped by {limit} after {} states",
                memo.len()
            );
            exhausted = false;
            break;
        }

        let next = stack.last_mut().and_then(|frame| frame.pending.next());
        let Some(child) = next else {
            close_frame(&mut stack, &mut builder, &mut root);
            continue;
        };

        match visit(child, &mut memo) {
            Visit::Pruned | Visit::Seen => {}
            Visit::Solved(state) => {
                let id = builder.leaf(state);
                if let Some(frame) = stack.last_mut() {
                    frame.children.push(id);
                }
                if config.stop_at_first {
                    exhausted = false;
                    break;
                }
            }
            Visit::Expand(state) => stack.push(Frame::new(state)),
        }
    }

    // Keep whatever branches already reached a solution
    while !stack.is_empty() {
        close_frame(&mut stack, &mut builder, &mut root);
    }

    let tree = root.map(|root| builder.finish(root));
    match &tree {
        Some(tree) => info!(
            "depth-first search found a {}-move solution ({} states visited)",
            tree.solution_len(),
            memo.len()
        ),
        None if exhausted => info!("depth-first search exhausted after {} states", memo.len()),
        None => {}
    }

    SearchResult {
        tree,
        search_exhausted: exhausted,
        states_explored: memo.len(),
        time_elapsed_ms: budget.elapsed_ms(),
    }
}

/// Breadth-first search from `puzzle`, returning a shortest solution.
pub fn breadth_first_search<P: Puzzle>(puzzle: P, config: &SolverConfig) -> SearchResult<P> {
    let budget = Budget::new(config);
    debug!("breadth-first search from {}", puzzle.canonical());

    let mut memo = HashSet::new();
    let finish = |tree: Option<SolutionTree<P>>, exhausted: bool, states: usize| SearchResult {
        tree,
        search_exhausted: exhausted,
        states_explored: states,
        time_elapsed_ms: budget.elapsed_ms(),
    };

    let root = match visit(puzzle, &mut memo) {
        Visit::Pruned | Visit::Seen => return finish(None, true, memo.len()),
        Visit::Solved(state) => return finish(Some(SolutionTree::single(state)), true, memo.len()),
        Visit::Expand(state) => state,
    };

    // Every expanded state with the index of the state it was reached from
    let mut discovered: Vec<(P, Option<usize>)> = vec![(root, None)];
    let mut queue = VecDeque::from([0]);

    while let Some(index) = queue.pop_front() {
        if let Some(limit) = budget.exceeded(memo.len()) {
            warn!(
                "breadth-first search stopped by {limit} after {} states",
                memo.len()
            );
            return finish(None, false, memo.len());
        }

        for child in discovered[index].0.extensions() {
            match visit(child, &mut memo) {
                Visit::Pruned | Visit::Seen => {}
                Visit::Solved(goal) => {
                    let path = trace_back(discovered, index, goal);
                    info!(
                        "breadth-first search found a {}-move solution ({} states visited)",
                        path.len() - 1,
                        memo.len()
                    );
                    return finish(SolutionTree::chain(path), false, memo.len());
                }
                Visit::Expand(state) => {
                    discovered.push((state, Some(index)));
                    queue.push_back(discovered.len() - 1);
                }
            }
        }
    }

    info!("breadth-first search exhausted after {} states", memo.len());
    finish(None, true, memo.len())
}

/// States from the initial state to `goal`, where `goal` was reached from
/// `discovered[last]`.
fn trace_back<P>(discovered: Vec<(P, Option<usize>)>, last: usize, goal: P) -> Vec<P> {
    let mut indices = Vec::new();
    let mut current = Some(last);
    while let Some(index) = current {
        indices.push(index);
        current = discovered[index].1;
    }

    let mut slots: Vec<Option<P>> = discovered.into_iter().map(|(state, _)| Some(state)).collect();
    let mut path: Vec<P> = indices
        .iter()
        .rev()
        .filter_map(|&index| slots[index].take())
        .collect();
    path.push(goal);
    path
}

/// Run a search with the given strategy
pub fn solve<P: Puzzle>(puzzle: P, strategy: Strategy, config: &SolverConfig) -> SearchResult<P> {
    match strategy {
        Strategy::DepthFirst => depth_first_search(puzzle, config),
        Strategy::BreadthFirst => breadth_first_search(puzzle, config),
    }
}

/// Depth-first search without limits.
///
/// Returns `None` when no solution is reachable. A puzzle that is already
/// solved yields a one-node tree.
pub fn depth_first_solve<P: Puzzle>(puzzle: P) -> Option<SolutionTree<P>> {
    depth_first_search(puzzle, &SolverConfig::default()).tree
}

/// Breadth-first search without limits; see [`depth_first_solve`].
pub fn breadth_first_solve<P: Puzzle>(puzzle: P) -> Option<SolutionTree<P>> {
    breadth_first_search(puzzle, &SolverConfig::default()).tree
}
