//! Admissible lower bound on remaining moves.

use taquin_core::{Board, Position, Tile};

/// The Manhattan-distance heuristic for a fixed goal board.
///
/// Precomputes where each tile sits in the goal, so that
/// [`estimate`](Self::estimate) is a single pass over the board rather than
/// a nested position search.
///
/// The estimate is *admissible* (every move changes one tile's Manhattan
/// distance by at most 1, so the true remaining move count can never be
/// smaller) and *consistent*, which together make the first goal pop of an
/// A* search optimal.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, Move};
/// use taquin_solver::Manhattan;
///
/// let heuristic = Manhattan::new(&Board::GOAL);
/// assert_eq!(heuristic.estimate(&Board::GOAL), 0);
///
/// // One move away: exactly one tile is one step off
/// let near = Board::GOAL.apply_move(Move::Up)?;
/// assert_eq!(heuristic.estimate(&near), 1);
/// # Ok::<(), taquin_core::InvalidMove>(())
/// ```
#[derive(Debug, Clone)]
pub struct Manhattan {
    /// Goal position of each tile, indexed by tile value. The blank's slot
    /// is stored but never read.
    targets: [Position; 9],
}

impl Manhattan {
    /// Creates a heuristic for `goal`.
    #[must_use]
    pub fn new(goal: &Board) -> Self {
        let mut targets = [Position::new(0, 0); 9];
        for tile in Tile::ALL {
            targets[usize::from(tile.value())] = goal.position_of(tile);
        }
        Self { targets }
    }

    /// Returns the sum of per-tile Manhattan distances from `board` to the
    /// goal, ignoring the blank.
    #[must_use]
    pub fn estimate(&self, board: &Board) -> u32 {
        Position::ALL
            .into_iter()
            .map(|pos| {
                let tile = board.tile_at(pos);
                if tile.is_blank() {
                    0
                } else {
                    pos.manhattan_distance(self.targets[usize::from(tile.value())])
                }
            })
            .sum()
    }

    /// Returns the goal position of `tile`.
    #[must_use]
    pub fn target(&self, tile: Tile) -> Position {
        self.targets[usize::from(tile.value())]
    }
}
