//! The 8-puzzle board.

use std::fmt::{self, Display};

use crate::{Move, Position, Tile};

/// An immutable 3×3 sliding-tile board.
///
/// A board always holds each [`Tile`] exactly once and caches the position of
/// the blank. Boards are small `Copy` values; applying a move produces a new
/// board and never mutates the original.
///
/// Equality and hashing are derived from the cell contents, so two boards
/// compare equal iff every cell matches.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, Move};
///
/// let board = Board::from_values(&[1, 2, 3, 8, 0, 4, 7, 6, 5])?;
/// assert_eq!(board, Board::GOAL);
///
/// // Moves are copy-on-transition
/// let moved = board.apply_move(Move::Up)?;
/// assert_ne!(moved, board);
/// assert_eq!(moved.apply_move(Move::Down)?, board);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Tile; 9],
    blank: Position,
}

/// Error returned when constructing a board from malformed input.
///
/// A well-formed board is a permutation of the values 0-8; anything else is
/// rejected up front rather than silently producing an unsearchable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidBoard {
    /// The input did not contain exactly 9 values.
    #[display("expected 9 cell values, got {len}")]
    WrongCount {
        /// Number of values supplied.
        len: usize,
    },
    /// A value was outside the range 0-8.
    #[display("cell value out of range 0-8: {value}")]
    OutOfRange {
        /// The offending value.
        value: u8,
    },
    /// A value appeared more than once.
    #[display("duplicate cell value: {value}")]
    Duplicate {
        /// The repeated value.
        value: u8,
    },
}

/// Error returned when a move would push the blank off the board.
///
/// During neighbor expansion this is filtered silently; it is never a search
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("the blank cannot move {direction} from {position}")]
pub struct InvalidMove {
    /// The rejected direction.
    pub direction: Move,
    /// The blank's position at the time of the attempt.
    pub position: Position,
}

impl Board {
    /// The fixed goal configuration:
    ///
    /// ```text
    /// 1 2 3
    /// 8   4
    /// 7 6 5
    /// ```
    pub const GOAL: Self = Self {
        cells: [
            Tile::T1,
            Tile::T2,
            Tile::T3,
            Tile::T8,
            Tile::Blank,
            Tile::T4,
            Tile::T7,
            Tile::T6,
            Tile::T5,
        ],
        blank: Position::new(1, 1),
    };

    /// Creates a board from row-major cell values (0 = blank).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoard`] unless `values` is exactly 9 values forming a
    /// permutation of 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{Board, InvalidBoard};
    ///
    /// let board = Board::from_values(&[2, 8, 3, 1, 6, 4, 7, 0, 5])?;
    /// assert_eq!(board.blank(), taquin_core::Position::new(1, 2));
    ///
    /// let err = Board::from_values(&[2, 8, 3, 1, 6, 4, 7, 0, 0]).unwrap_err();
    /// assert_eq!(err, InvalidBoard::Duplicate { value: 0 });
    /// # Ok::<(), InvalidBoard>(())
    /// ```
    pub fn from_values(values: &[u8]) -> Result<Self, InvalidBoard> {
        if values.len() != 9 {
            return Err(InvalidBoard::WrongCount { len: values.len() });
        }

        let mut cells = [Tile::Blank; 9];
        let mut seen = [false; 9];
        let mut blank = None;
        for (i, &value) in values.iter().enumerate() {
            let tile = Tile::try_from_value(value)
                .ok_or(InvalidBoard::OutOfRange { value })?;
            if seen[usize::from(value)] {
                return Err(InvalidBoard::Duplicate { value });
            }
            seen[usize::from(value)] = true;
            cells[i] = tile;
            if tile.is_blank() {
                blank = Some(Position::from_cell_index(i));
            }
        }

        // All 9 values distinct and in range implies exactly one blank.
        let blank = blank.unwrap_or_else(|| unreachable!());
        Ok(Self { cells, blank })
    }

    /// Returns the tile at `pos`.
    #[must_use]
    pub const fn tile_at(&self, pos: Position) -> Tile {
        self.cells[pos.cell_index()]
    }

    /// Returns the position of the blank cell.
    #[must_use]
    pub const fn blank(&self) -> Position {
        self.blank
    }

    /// Returns the position of `tile` on this board.
    #[must_use]
    pub fn position_of(&self, tile: Tile) -> Position {
        // The permutation invariant guarantees a match.
        Position::ALL
            .into_iter()
            .find(|pos| self.tile_at(*pos) == tile)
            .unwrap_or_else(|| unreachable!())
    }

    /// Applies a blank move, returning the resulting board.
    ///
    /// The blank swaps places with the adjacent tile in the requested
    /// direction. `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the blank would leave the 3×3 bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{Board, Move, Position, Tile};
    ///
    /// let board = Board::GOAL.apply_move(Move::Right)?;
    /// assert_eq!(board.blank(), Position::new(2, 1));
    /// assert_eq!(board.tile_at(Position::new(1, 1)), Tile::T4);
    ///
    /// // Blank at the right edge now; another RIGHT is rejected
    /// assert!(board.apply_move(Move::Right).is_err());
    /// # Ok::<(), taquin_core::InvalidMove>(())
    /// ```
    pub fn apply_move(&self, direction: Move) -> Result<Self, InvalidMove> {
        let (dx, dy) = direction.delta();
        let target = self.blank.offset(dx, dy).ok_or(InvalidMove {
            direction,
            position: self.blank,
        })?;

        let mut next = *self;
        next.cells.swap(self.blank.cell_index(), target.cell_index());
        next.blank = target;
        Ok(next)
    }

    /// Returns the canonical signature of this board.
    ///
    /// The 9 cell values are packed row-major, 4 bits per cell, so two boards
    /// have equal signatures iff they are equal. Used as the visited-set key
    /// during search.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{Board, Move};
    ///
    /// let a = Board::GOAL;
    /// let b = a.apply_move(Move::Up)?.apply_move(Move::Down)?;
    /// assert_eq!(a.signature(), b.signature());
    /// # Ok::<(), taquin_core::InvalidMove>(())
    /// ```
    #[must_use]
    pub fn signature(&self) -> u64 {
        self.cells
            .iter()
            .fold(0, |acc, tile| (acc << 4) | u64::from(tile.value()))
    }

    /// Returns the cell values in row-major order (0 = blank).
    #[must_use]
    pub fn values(&self) -> [u8; 9] {
        self.cells.map(Tile::value)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------")?;
        for y in 0..3 {
            write!(f, "|")?;
            for x in 0..3 {
                let tile = self.tile_at(Position::new(x, y));
                if tile.is_blank() {
                    write!(f, "   |")?;
                } else {
                    write!(f, " {tile} |")?;
                }
            }
            writeln!(f)?;
            writeln!(f, "-------------")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_goal() {
        let board = Board::from_values(&[1, 2, 3, 8, 0, 4, 7, 6, 5]).unwrap();
        assert_eq!(board, Board::GOAL);
        assert_eq!(board.blank(), Position::new(1, 1));
        assert_eq!(board.values(), [1, 2, 3, 8, 0, 4, 7, 6, 5]);
    }

    #[test]
    fn test_from_values_rejects_malformed_input() {
        assert_eq!(
            Board::from_values(&[1, 2, 3]),
            Err(InvalidBoard::WrongCount { len: 3 })
        );
        assert_eq!(
            Board::from_values(&[1, 2, 3, 8, 0, 4, 7, 6, 9]),
            Err(InvalidBoard::OutOfRange { value: 9 })
        );
        assert_eq!(
            Board::from_values(&[1, 2, 3, 8, 0, 4, 7, 6, 4]),
            Err(InvalidBoard::Duplicate { value: 4 })
        );
    }

    #[test]
    fn test_apply_move_swaps_blank() {
        // Blank at center: all four moves are legal
        for mv in Move::ALL {
            let moved = Board::GOAL.apply_move(mv).unwrap();
            let (dx, dy) = mv.delta();
            assert_eq!(moved.blank(), Position::new(1, 1).offset(dx, dy).unwrap());
            // The displaced tile landed on the old blank position
            assert_eq!(
                moved.tile_at(Position::new(1, 1)),
                Board::GOAL.tile_at(moved.blank())
            );
            // Undo restores the original
            assert_eq!(moved.apply_move(mv.opposite()).unwrap(), Board::GOAL);
        }
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        // Blank in the top-left corner
        let board = Board::from_values(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let err = board.apply_move(Move::Up).unwrap_err();
        assert_eq!(err.direction, Move::Up);
        assert_eq!(err.position, Position::new(0, 0));
        assert!(board.apply_move(Move::Left).is_err());
        assert!(board.apply_move(Move::Down).is_ok());
        assert!(board.apply_move(Move::Right).is_ok());
    }

    #[test]
    fn test_signature_distinguishes_boards() {
        let a = Board::GOAL;
        let b = a.apply_move(Move::Up).unwrap();
        assert_ne!(a.signature(), b.signature());
        assert_eq!(a.signature(), Board::GOAL.signature());
    }

    #[test]
    fn test_position_of_every_tile() {
        let board = Board::from_values(&[2, 8, 3, 1, 6, 4, 7, 0, 5]).unwrap();
        for tile in Tile::ALL {
            assert_eq!(board.tile_at(board.position_of(tile)), tile);
        }
    }

    #[test]
    fn test_display_renders_grid() {
        let rendered = Board::GOAL.to_string();
        assert_eq!(
            rendered,
            "-------------\n\
             | 1 | 2 | 3 |\n\
             -------------\n\
             | 8 |   | 4 |\n\
             -------------\n\
             | 7 | 6 | 5 |\n\
             -------------\n"
        );
    }
}
