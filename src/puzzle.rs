//! The puzzle contract the search engine is written against.
//!
//! A puzzle value is one configuration. The engine never mutates it: it
//! asks for the configurations one move away, tests them, and keys its
//! visited memo on [`Puzzle::canonical`].

/// One configuration of a puzzle.
///
/// Implementations must uphold:
/// - [`extensions`](Puzzle::extensions) is empty for solved states, and
///   every returned state owns its storage outright (no sharing of mutable
///   backing data between siblings or with the parent).
/// - [`is_solved`](Puzzle::is_solved) and [`fail_fast`](Puzzle::fail_fast)
///   are pure.
/// - `a == b` if and only if `a.canonical() == b.canonical()`.
pub trait Puzzle: PartialEq + Sized {
    /// States reachable from this one by exactly one legal move, in a
    /// deterministic order.
    fn extensions(&self) -> Vec<Self>;

    /// Whether this state satisfies the variant's goal condition.
    fn is_solved(&self) -> bool;

    /// Cheap proof that no solution is reachable from this state.
    ///
    /// Must return `false` for solved states.
    fn fail_fast(&self) -> bool {
        false
    }

    /// Key used for cycle avoidance.
    fn canonical(&self) -> String;
}

/// Axis direction on a rectangular grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Move generation order for every grid variant.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, column) offset of one step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Walk `steps` cells from `(row, col)`, or `None` if that leaves a
    /// `rows` x `cols` grid.
    pub fn step(
        self,
        (row, col): (usize, usize),
        steps: usize,
        rows: usize,
        cols: usize,
    ) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let r = row.checked_add_signed(dr * steps as isize)?;
        let c = col.checked_add_signed(dc * steps as isize)?;
        (r < rows && c < cols).then_some((r, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
    }

    #[test]
    fn test_step_stays_in_bounds() {
        assert_eq!(Direction::Up.step((0, 0), 1, 3, 3), None);
        assert_eq!(Direction::Left.step((1, 0), 1, 3, 3), None);
        assert_eq!(Direction::Down.step((1, 1), 1, 3, 3), Some((2, 1)));
        assert_eq!(Direction::Down.step((1, 1), 2, 3, 3), None);
        assert_eq!(Direction::Right.step((0, 0), 2, 3, 3), Some((0, 2)));
    }
}
