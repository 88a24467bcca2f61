use std::collections::HashSet;

use proptest::prelude::*;
use proptest::{collection::vec, sample::subsequence};

use puzzle_search::{
    breadth_first_solve, depth_first_solve, Dictionary, GridPegSolitaire, Puzzle, SlidingGrid,
    SolutionTree, WordLadder,
};

fn peg_board() -> impl Strategy<Value = GridPegSolitaire> {
    (1usize..4, 1usize..4)
        .prop_flat_map(|(rows, cols)| {
            vec(vec(prop_oneof![Just('*'), Just('.'), Just('#')], cols), rows)
        })
        .prop_map(|grid| {
            let rows: Vec<String> = grid.into_iter().map(|row| row.into_iter().collect()).collect();
            GridPegSolitaire::parse(&rows).unwrap()
        })
}

fn sliding_grid() -> impl Strategy<Value = SlidingGrid> {
    let symbols: Vec<String> = ["*", "1", "2", "3", "4", "5"].map(String::from).to_vec();
    (
        Just(symbols.clone()).prop_shuffle(),
        Just(symbols).prop_shuffle(),
        prop_oneof![Just(2usize), Just(3usize)],
    )
        .prop_map(|(from, to, cols)| {
            let rows = |cells: Vec<String>| -> Vec<Vec<String>> {
                cells.chunks(cols).map(<[String]>::to_vec).collect()
            };
            SlidingGrid::new(rows(from), rows(to)).unwrap()
        })
}

const WORDS: [&str; 12] = [
    "aa", "ab", "ba", "bb", "ac", "ca", "cc", "bc", "cb", "aaa", "aab", "abb",
];

fn word_ladder() -> impl Strategy<Value = WordLadder> {
    (
        subsequence(WORDS.to_vec(), 0..WORDS.len()),
        prop::sample::select(WORDS.to_vec()),
        prop::sample::select(WORDS.to_vec()),
    )
        .prop_map(|(words, from, to)| WordLadder::new(from, to, Dictionary::new(words)).unwrap())
}

fn check_contract<P: Puzzle + Clone + std::fmt::Debug>(state: &P) {
    let before = state.clone();

    // Pure predicates and a stable key
    assert_eq!(state.is_solved(), state.is_solved());
    assert_eq!(state.fail_fast(), state.fail_fast());
    assert_eq!(state.canonical(), state.canonical());
    assert_eq!(state.canonical(), before.canonical());
    if state.is_solved() {
        assert!(!state.fail_fast());
        assert!(state.extensions().is_empty());
    }

    // Deterministic extensions that leave the parent alone
    let first = state.extensions();
    let second = state.extensions();
    assert_eq!(first, second);
    assert_eq!(*state, before);

    let keys: HashSet<String> = first.iter().map(Puzzle::canonical).collect();
    assert_eq!(keys.len(), first.len(), "duplicate extensions");
    assert!(!keys.contains(&state.canonical()), "no-op extension");
}

fn check_injective<P: Puzzle>(a: &P, b: &P) {
    assert_eq!(a == b, a.canonical() == b.canonical());
}

fn check_tree<P: Puzzle>(tree: &SolutionTree<P>) {
    let mut keys = HashSet::new();
    for (id, state) in tree.iter() {
        assert!(keys.insert(state.canonical()), "state expanded twice");
        if tree.is_leaf(id) {
            assert!(state.is_solved());
        } else {
            assert!(!state.is_solved());
        }
        for &child in tree.children(id) {
            assert_eq!(tree.parent(child), Some(id));
            assert!(state.extensions().contains(tree.state(child)));
        }
    }
}

proptest! {
    #[test]
    fn peg_contract(board in peg_board()) {
        check_contract(&board);
        for child in board.extensions() {
            prop_assert_eq!(child.peg_count() + 1, board.peg_count());
        }
    }

    #[test]
    fn peg_canonical_injective(a in peg_board(), b in peg_board()) {
        check_injective(&a, &b);
        check_injective(&a, &a.clone());
    }

    #[test]
    fn peg_search_tree(board in peg_board()) {
        if let Some(tree) = depth_first_solve(board.clone()) {
            check_tree(&tree);
            prop_assert_eq!(tree.state(tree.root()), &board);
        }
        let dfs = depth_first_solve(board.clone()).is_some();
        let bfs = breadth_first_solve(board).is_some();
        prop_assert_eq!(dfs, bfs);
    }

    #[test]
    fn sliding_contract(grid in sliding_grid()) {
        check_contract(&grid);
        if !grid.is_solved() {
            prop_assert!(grid.extensions().len() >= 2);
        }
    }

    #[test]
    fn sliding_canonical_injective(a in sliding_grid(), b in sliding_grid()) {
        check_injective(&a, &b);
    }

    #[test]
    fn sliding_parity_decides_solvability(grid in sliding_grid()) {
        let pruned = grid.fail_fast();
        let bfs = breadth_first_solve(grid);
        prop_assert_eq!(pruned, bfs.is_none());
        if let Some(tree) = bfs {
            check_tree(&tree);
        }
    }

    #[test]
    fn word_ladder_contract(ladder in word_ladder()) {
        check_contract(&ladder);
        for child in ladder.extensions() {
            prop_assert!(ladder.dictionary().contains(child.word()));
            let changed = ladder
                .word()
                .chars()
                .zip(child.word().chars())
                .filter(|(a, b)| a != b)
                .count();
            prop_assert_eq!(changed, 1);
        }
    }

    #[test]
    fn word_ladder_search(ladder in word_ladder()) {
        let dfs = depth_first_solve(ladder.clone());
        let bfs = breadth_first_solve(ladder);
        prop_assert_eq!(dfs.is_some(), bfs.is_some());
        if let (Some(dfs), Some(bfs)) = (dfs, bfs) {
            check_tree(&dfs);
            check_tree(&bfs);
            prop_assert!(bfs.solution_len() <= dfs.solution_len());
        }
    }
}
