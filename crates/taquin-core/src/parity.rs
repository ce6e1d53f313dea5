//! Solvability analysis via permutation parity.
//!
//! The 8-puzzle state space splits into two halves that no sequence of blank
//! moves can bridge: sliding a tile horizontally does not reorder the
//! row-major sequence of non-blank values, and sliding vertically permutes it
//! by a 3-cycle, which changes the inversion count by an even amount. The
//! parity of the inversion count is therefore invariant, and two boards are
//! mutually reachable iff their parities coincide.
//!
//! [`is_reachable`] must gate every search: a parity-incompatible pair can
//! never meet at the goal, so searching it would only burn the iteration
//! budget.

use crate::Board;

/// Counts the inversions of `board`.
///
/// An inversion is a pair of non-blank values, taken in row-major order,
/// where the earlier value is larger than the later one. The blank is
/// skipped.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, parity};
///
/// // 1 2 3 / 8 _ 4 / 7 6 5 → sequence 1 2 3 8 4 7 6 5, 7 inversions
/// assert_eq!(parity::inversion_count(&Board::GOAL), 7);
///
/// let sorted = Board::from_values(&[1, 2, 3, 4, 5, 6, 7, 8, 0])?;
/// assert_eq!(parity::inversion_count(&sorted), 0);
/// # Ok::<(), taquin_core::InvalidBoard>(())
/// ```
#[must_use]
pub fn inversion_count(board: &Board) -> u32 {
    let values: Vec<u8> = board
        .values()
        .into_iter()
        .filter(|&value| value != 0)
        .collect();

    let mut inversions = 0;
    for (i, &earlier) in values.iter().enumerate() {
        inversions += values[i + 1..]
            .iter()
            .filter(|&&later| earlier > later)
            .count();
    }
    u32::try_from(inversions).unwrap_or(u32::MAX)
}

/// Returns `true` if `start` and `goal` lie in the same half of the state
/// space, i.e. their inversion counts have equal parity.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, parity};
///
/// // Any board one move away from the goal is reachable from it
/// let near = Board::GOAL.apply_move(taquin_core::Move::Left)?;
/// assert!(parity::is_reachable(&near, &Board::GOAL));
///
/// // The row-sorted board has 0 inversions (even); the goal has 7 (odd)
/// let sorted = Board::from_values(&[1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
/// assert!(!parity::is_reachable(&sorted, &Board::GOAL));
/// # Ok::<(), taquin_core::InvalidMove>(())
/// ```
#[must_use]
pub fn is_reachable(start: &Board, goal: &Board) -> bool {
    inversion_count(start) % 2 == inversion_count(goal) % 2
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Move;

    #[test]
    fn test_known_inversion_counts() {
        // Goal sequence without blank: 1 2 3 8 4 7 6 5
        // Inverted pairs: (8,4) (8,7) (8,6) (8,5) (7,6) (7,5) (6,5)
        assert_eq!(inversion_count(&Board::GOAL), 7);

        let sorted = Board::from_values(&[1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert_eq!(inversion_count(&sorted), 0);

        let reversed = Board::from_values(&[8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        assert_eq!(inversion_count(&reversed), 28);
    }

    #[test]
    fn test_reachability_is_reflexive_and_symmetric() {
        let a = Board::GOAL;
        let b = Board::from_values(&[1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert!(is_reachable(&a, &a));
        assert_eq!(is_reachable(&a, &b), is_reachable(&b, &a));
    }

    #[test]
    fn test_single_swap_flips_parity() {
        // Swapping two adjacent non-blank tiles flips the parity, making the
        // pair provably unreachable.
        let goal = Board::GOAL;
        let swapped = Board::from_values(&[2, 1, 3, 8, 0, 4, 7, 6, 5]).unwrap();
        assert!(!is_reachable(&swapped, &goal));
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        Just((0..=8u8).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(|values| Board::from_values(&values).unwrap())
    }

    proptest! {
        /// The parity law: reachability is exactly parity equality.
        #[test]
        fn parity_law(a in arb_board(), b in arb_board()) {
            let lhs = is_reachable(&a, &b);
            let rhs = inversion_count(&a) % 2 == inversion_count(&b) % 2;
            prop_assert_eq!(lhs, rhs);
        }

        /// No sequence of legal moves ever changes inversion parity.
        #[test]
        fn moves_preserve_parity(start in arb_board(), dirs in prop::collection::vec(0usize..4, 0..40)) {
            let mut board = start;
            for dir in dirs {
                if let Ok(next) = board.apply_move(Move::ALL[dir]) {
                    board = next;
                }
            }
            prop_assert_eq!(
                inversion_count(&start) % 2,
                inversion_count(&board) % 2
            );
            prop_assert!(is_reachable(&start, &board));
        }
    }
}
