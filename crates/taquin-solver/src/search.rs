//! A* search over board states.

use std::collections::{BinaryHeap, HashSet};

use taquin_core::{Board, Move, parity};

use crate::{Manhattan, MovePath, SearchError, node::SearchNode};

/// Default cap on frontier pops per search call.
pub const DEFAULT_MAX_ITERATIONS: usize = 200_000;

/// Statistics collected during one search call.
///
/// # Examples
///
/// ```
/// use taquin_core::Board;
/// use taquin_solver::AStarSolver;
///
/// let solver = AStarSolver::new();
/// let solution = solver.solve(&Board::GOAL, &Board::GOAL)?;
///
/// // The start is the goal: one pop, nothing expanded
/// assert_eq!(solution.stats().iterations(), 1);
/// assert_eq!(solution.stats().expanded(), 0);
/// # Ok::<(), taquin_solver::SearchError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    iterations: usize,
    expanded: usize,
    enqueued: usize,
}

impl SearchStats {
    /// Returns the number of frontier pops performed.
    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the number of distinct boards expanded.
    ///
    /// Always at most [`iterations`](Self::iterations): stale duplicate
    /// frontier entries are popped but discarded unexpanded.
    #[must_use]
    pub const fn expanded(&self) -> usize {
        self.expanded
    }

    /// Returns the number of nodes pushed onto the frontier, excluding the
    /// start node.
    #[must_use]
    pub const fn enqueued(&self) -> usize {
        self.enqueued
    }
}

/// A solved instance: the optimal move sequence plus search statistics.
#[derive(Debug, Clone)]
pub struct Solution {
    moves: Vec<Move>,
    stats: SearchStats,
}

impl Solution {
    /// Returns the moves from start to goal, in order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the number of moves. This is minimal for the instance.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if the start already equaled the goal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the search statistics.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Consumes the solution, returning the move sequence.
    #[must_use]
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }
}

/// An A* solver for the 8-puzzle.
///
/// Each [`solve`](Self::solve) call runs exactly one search: it gates on the
/// parity check, then repeatedly pops the lowest-`f` frontier entry, tests
/// goal equality, and expands unvisited neighbors scored with the Manhattan
/// heuristic. The frontier and visited set live only for the duration of the
/// call.
///
/// Duplicate states are handled lazily: a board's signature is checked
/// against the visited set when the node is *popped*, not when it is pushed,
/// so a cheaper path to an already-pushed state simply wins at pop time and
/// the stale entry is discarded later. This trades a bounded number of extra
/// pops for not needing a decrease-key operation.
///
/// # Examples
///
/// ```
/// use taquin_core::Board;
/// use taquin_solver::AStarSolver;
///
/// let start = Board::from_values(&[2, 8, 3, 1, 6, 4, 7, 0, 5])?;
/// let solution = AStarSolver::new().solve(&start, &Board::GOAL)?;
/// assert_eq!(solution.len(), 5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct AStarSolver {
    max_iterations: usize,
}

impl Default for AStarSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AStarSolver {
    /// Creates a solver with the default iteration cap of
    /// [`DEFAULT_MAX_ITERATIONS`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Creates a solver with a custom cap on frontier pops.
    #[must_use]
    pub const fn with_max_iterations(max_iterations: usize) -> Self {
        Self { max_iterations }
    }

    /// Returns the iteration cap.
    #[must_use]
    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Finds a minimal-length move sequence from `start` to `goal`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Unsolvable`] if the inversion parities differ; the
    ///   search itself is never started in that case.
    /// - [`SearchError::BudgetExhausted`] if the iteration cap is hit first.
    /// - [`SearchError::FrontierExhausted`] if the frontier drains without
    ///   reaching the goal.
    pub fn solve(&self, start: &Board, goal: &Board) -> Result<Solution, SearchError> {
        let start_inversions = parity::inversion_count(start);
        let goal_inversions = parity::inversion_count(goal);
        if start_inversions % 2 != goal_inversions % 2 {
            log::debug!(
                "parity gate rejected search: {start_inversions} vs {goal_inversions} inversions"
            );
            return Err(SearchError::Unsolvable {
                start_inversions,
                goal_inversions,
            });
        }

        let heuristic = Manhattan::new(goal);
        let mut frontier = BinaryHeap::new();
        let mut visited: HashSet<u64> = HashSet::new();
        let mut stats = SearchStats::default();

        let h_start = heuristic.estimate(start);
        frontier.push(SearchNode {
            board: *start,
            g: 0,
            h: h_start,
            path: MovePath::new(),
        });
        log::debug!(
            "starting search, h(start) = {h_start}, cap = {}",
            self.max_iterations
        );

        while let Some(node) = frontier.pop() {
            if stats.iterations >= self.max_iterations {
                log::warn!(
                    "budget exhausted after {} iterations ({} boards expanded)",
                    stats.iterations,
                    stats.expanded
                );
                return Err(SearchError::BudgetExhausted {
                    iterations: stats.iterations,
                });
            }
            stats.iterations += 1;

            if node.board == *goal {
                log::debug!(
                    "solved in {} moves, {} iterations, {} boards expanded",
                    node.g,
                    stats.iterations,
                    stats.expanded
                );
                return Ok(Solution {
                    moves: node.path.to_vec(),
                    stats,
                });
            }

            // Stale duplicate: a cheaper path to this board was expanded
            // earlier, so this entry carries nothing new.
            if !visited.insert(node.board.signature()) {
                continue;
            }
            stats.expanded += 1;

            for direction in Move::ALL {
                let Ok(next) = node.board.apply_move(direction) else {
                    continue;
                };
                if visited.contains(&next.signature()) {
                    continue;
                }
                frontier.push(SearchNode {
                    board: next,
                    g: node.g + 1,
                    h: heuristic.estimate(&next),
                    path: node.path.push(direction),
                });
                stats.enqueued += 1;
            }
        }

        log::debug!(
            "frontier exhausted after {} iterations without reaching the goal",
            stats.iterations
        );
        Err(SearchError::FrontierExhausted)
    }
}

#[cfg(test)]
mod tests {
    use taquin_core::parity;

    use super::*;
    use crate::testing;

    fn replay(start: &Board, moves: &[Move]) -> Board {
        moves.iter().fold(*start, |board, &mv| {
            board.apply_move(mv).expect("replayed move must be legal")
        })
    }

    #[test]
    fn test_start_equals_goal_yields_empty_path() {
        let solution = AStarSolver::new()
            .solve(&Board::GOAL, &Board::GOAL)
            .unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.stats().iterations(), 1);
        assert_eq!(solution.stats().expanded(), 0);
    }

    #[test]
    fn test_one_move_instance() {
        // {1,2,3},{8,4,0},{7,6,5} is one RIGHT blank move from the goal;
        // solving it takes the single move LEFT.
        let start = testing::board([1, 2, 3, 8, 4, 0, 7, 6, 5]);
        let solution = AStarSolver::new().solve(&start, &Board::GOAL).unwrap();
        assert_eq!(solution.moves(), [Move::Left]);
        assert_eq!(replay(&start, solution.moves()), Board::GOAL);
    }

    #[test]
    fn test_classic_instance_solved_optimally() {
        // The classic 5-move instance from the puzzle literature.
        let start = testing::board([2, 8, 3, 1, 6, 4, 7, 0, 5]);
        let solution = AStarSolver::new().solve(&start, &Board::GOAL).unwrap();
        assert_eq!(solution.len(), 5);
        assert_eq!(replay(&start, solution.moves()), Board::GOAL);
    }

    #[test]
    fn test_parity_mismatch_short_circuits() {
        // Row-sorted board: 0 inversions (even) vs the goal's 7 (odd).
        let start = testing::board([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert!(!parity::is_reachable(&start, &Board::GOAL));

        // Even a zero-iteration solver reports Unsolvable: the gate runs
        // before the frontier is seeded.
        let err = AStarSolver::with_max_iterations(0)
            .solve(&start, &Board::GOAL)
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::Unsolvable {
                start_inversions: 0,
                goal_inversions: 7,
            }
        );
    }

    #[test]
    fn test_budget_exhaustion_is_distinct_from_unsolvable() {
        let start = testing::board([2, 8, 3, 1, 6, 4, 7, 0, 5]);
        let err = AStarSolver::with_max_iterations(1)
            .solve(&start, &Board::GOAL)
            .unwrap_err();
        assert!(err.is_budget_exhausted());
        assert!(!err.is_unsolvable());
    }

    #[test]
    fn test_paths_match_bfs_optimum() {
        // Spot-check optimality against brute-force BFS on instances of
        // growing depth.
        let solver = AStarSolver::new();
        for values in [
            [1, 2, 3, 8, 0, 4, 7, 6, 5],
            [1, 2, 3, 8, 4, 0, 7, 6, 5],
            [2, 8, 3, 1, 6, 4, 7, 0, 5],
            [5, 6, 7, 4, 0, 8, 3, 2, 1],
            [2, 6, 3, 8, 0, 4, 1, 7, 5],
        ] {
            let start = testing::board(values);
            if !parity::is_reachable(&start, &Board::GOAL) {
                continue;
            }
            let expected = testing::bfs_optimal_length(&start, &Board::GOAL)
                .expect("parity-compatible instance must be solvable");
            let solution = solver.solve(&start, &Board::GOAL).unwrap();
            assert_eq!(u32::try_from(solution.len()).unwrap(), expected);
            assert_eq!(replay(&start, solution.moves()), Board::GOAL);
        }
    }

    #[test]
    fn test_no_board_expanded_twice() {
        // expanded counts visited-set insertions, which cannot repeat, so
        // it must never exceed the number of distinct 8-puzzle states in
        // one parity class (9!/2).
        let start = testing::board([5, 6, 7, 4, 0, 8, 3, 2, 1]);
        let solution = AStarSolver::new().solve(&start, &Board::GOAL).unwrap();
        assert!(solution.stats().expanded() <= 181_440);
        assert!(solution.stats().expanded() <= solution.stats().iterations());
    }
}
