//! Test utilities for solver development.
//!
//! These helpers back the solver's own tests and benchmarks: a terse board
//! fixture constructor and a brute-force breadth-first search used to certify
//! that A* paths are minimal.

use std::collections::{HashSet, VecDeque};

use taquin_core::{Board, Move};

/// Builds a board fixture from row-major values.
///
/// # Panics
///
/// Panics if `values` is not a permutation of 0-8; fixtures are hard-coded,
/// so a malformed one is a bug in the test itself.
///
/// # Examples
///
/// ```
/// use taquin_core::Board;
/// use taquin_solver::testing;
///
/// let board = testing::board([1, 2, 3, 8, 0, 4, 7, 6, 5]);
/// assert_eq!(board, Board::GOAL);
/// ```
#[must_use]
pub fn board(values: [u8; 9]) -> Board {
    Board::from_values(&values).expect("test fixture must be a valid board")
}

/// Returns the true minimal move count from `start` to `goal` by exhaustive
/// breadth-first search, or `None` if `goal` is unreachable.
///
/// Explores at most one parity class (9!/2 = 181 440 states), so this always
/// terminates; it is the oracle the optimality tests compare A* against.
///
/// # Examples
///
/// ```
/// use taquin_core::Board;
/// use taquin_solver::testing;
///
/// let start = testing::board([2, 8, 3, 1, 6, 4, 7, 0, 5]);
/// assert_eq!(testing::bfs_optimal_length(&start, &Board::GOAL), Some(5));
/// ```
#[must_use]
pub fn bfs_optimal_length(start: &Board, goal: &Board) -> Option<u32> {
    let mut queue = VecDeque::new();
    let mut seen = HashSet::new();

    queue.push_back((*start, 0));
    seen.insert(start.signature());

    while let Some((board, depth)) = queue.pop_front() {
        if board == *goal {
            return Some(depth);
        }
        for direction in Move::ALL {
            let Ok(next) = board.apply_move(direction) else {
                continue;
            };
            if seen.insert(next.signature()) {
                queue.push_back((next, depth + 1));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use taquin_core::Position;

    use super::*;

    #[test]
    fn test_bfs_trivial_cases() {
        assert_eq!(bfs_optimal_length(&Board::GOAL, &Board::GOAL), Some(0));

        let one_away = board([1, 2, 3, 8, 4, 0, 7, 6, 5]);
        assert_eq!(bfs_optimal_length(&one_away, &Board::GOAL), Some(1));
    }

    #[test]
    fn test_bfs_detects_unreachable_goal() {
        // Parity-incompatible pair: BFS exhausts the class and reports None
        let sorted = board([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(bfs_optimal_length(&sorted, &Board::GOAL), None);
    }

    #[test]
    fn test_board_fixture_round_trips() {
        let fixture = board([2, 8, 3, 1, 6, 4, 7, 0, 5]);
        assert_eq!(fixture.blank(), Position::new(1, 2));
    }

    #[test]
    #[should_panic(expected = "test fixture must be a valid board")]
    fn test_board_fixture_rejects_garbage() {
        let _ = board([2, 8, 3, 1, 6, 4, 7, 0, 0]);
    }
}
