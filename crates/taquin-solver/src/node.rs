//! Frontier entries for the A* search.

use std::cmp::Ordering;

use taquin_core::Board;

use crate::MovePath;

/// A frontier entry: a board plus the cost bookkeeping A* orders it by.
///
/// `g` is the number of moves taken from the start, `h` the heuristic
/// estimate to the goal, and the priority is `f = g + h`. The ordering is
/// reversed so that `BinaryHeap`, a max-heap, pops the lowest `f` first;
/// ties break toward lower `g`.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) board: Board,
    pub(crate) g: u32,
    pub(crate) h: u32,
    pub(crate) path: MovePath,
}

impl SearchNode {
    /// Estimated total cost through this node.
    pub(crate) const fn f(&self) -> u32 {
        self.g + self.h
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.f() == other.f() && self.g == other.g
    }
}

impl Eq for SearchNode {}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for a min-heap (lower f = higher priority)
        other
            .f()
            .cmp(&self.f())
            .then_with(|| other.g.cmp(&self.g))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    fn node(g: u32, h: u32) -> SearchNode {
        SearchNode {
            board: Board::GOAL,
            g,
            h,
            path: MovePath::new(),
        }
    }

    #[test]
    fn test_heap_pops_lowest_f_first() {
        let mut heap = BinaryHeap::new();
        heap.push(node(3, 4)); // f = 7
        heap.push(node(1, 1)); // f = 2
        heap.push(node(2, 3)); // f = 5

        let fs: Vec<u32> = std::iter::from_fn(|| heap.pop()).map(|n| n.f()).collect();
        assert_eq!(fs, [2, 5, 7]);
    }

    #[test]
    fn test_equal_f_breaks_toward_lower_g() {
        let mut heap = BinaryHeap::new();
        heap.push(node(4, 2)); // f = 6, deeper
        heap.push(node(1, 5)); // f = 6, shallower

        assert_eq!(heap.pop().map(|n| n.g), Some(1));
        assert_eq!(heap.pop().map(|n| n.g), Some(4));
    }
}
