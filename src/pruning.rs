//! Dead-end detection for the puzzle variants.
//!
//! These checks prove that no solution is reachable from a state without
//! expanding it, allowing the engine to skip whole subtrees. Each one is a
//! necessary condition for solvability; none of them ever rejects a
//! solvable state.

use std::collections::HashMap;

/// Parity of a permutation given as `perm[i] = image of i`.
///
/// Returns `true` for odd permutations. `perm` must be a permutation of
/// `0..perm.len()`.
pub fn is_odd_permutation(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    let mut transpositions = 0;

    for start in 0..perm.len() {
        if seen[start] {
            continue;
        }
        let mut len = 0;
        let mut i = start;
        while !seen[i] {
            seen[i] = true;
            i = perm[i];
            len += 1;
        }
        // A cycle of length k is k - 1 transpositions
        transpositions += len - 1;
    }

    transpositions % 2 == 1
}

/// Check the sliding-puzzle parity invariant.
///
/// Every move swaps the blank with a neighbour: one transposition, and the
/// blank travels one cell. So the parity of the permutation taking `from`
/// to `to` always equals the parity of the blank's Manhattan distance to
/// its target cell. Returns `true` when that invariant fails, meaning the
/// target is unreachable.
///
/// Both grids are row-major with `cols` columns and hold the same set of
/// distinct symbols.
pub fn sliding_parity_violated(from: &[String], to: &[String], cols: usize, blank: &str) -> bool {
    let target_index: HashMap<&str, usize> = to
        .iter()
        .enumerate()
        .map(|(i, symbol)| (symbol.as_str(), i))
        .collect();

    let mut perm = Vec::with_capacity(from.len());
    for symbol in from {
        match target_index.get(symbol.as_str()) {
            Some(&i) => perm.push(i),
            // Symbol sets differ: no sequence of swaps can help
            None => return true,
        }
    }

    let Some(from_blank) = from.iter().position(|s| s == blank) else {
        return true;
    };
    let to_blank = perm[from_blank];
    let distance = (from_blank / cols).abs_diff(to_blank / cols)
        + (from_blank % cols).abs_diff(to_blank % cols);

    is_odd_permutation(&perm) != (distance % 2 == 1)
}

/// A peg board with nothing on it can never get back to one peg.
pub fn peg_board_empty(pegs: usize) -> bool {
    pegs == 0
}

/// Check the preconditions for a word ladder to be climbable.
///
/// Substitutions keep the word length, and the last rung must be a
/// dictionary word, so a length mismatch or a target outside the
/// dictionary means the ladder is unreachable. `contains` tests
/// dictionary membership.
pub fn word_ladder_unreachable(from: &str, to: &str, contains: impl Fn(&str) -> bool) -> bool {
    if from == to {
        return false;
    }
    from.chars().count() != to.chars().count() || !contains(to)
}
