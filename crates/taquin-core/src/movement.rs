//! The catalog of blank-tile moves.

use std::fmt::{self, Display};

/// A move of the blank cell in one of the four grid directions.
///
/// Directions describe where the **blank** goes, not the tile that slides
/// into its place. `Up` decreases the row, `Left` decreases the column.
///
/// # Examples
///
/// ```
/// use taquin_core::Move;
///
/// assert_eq!(Move::Up.delta(), (0, -1));
/// assert_eq!(Move::Up.opposite(), Move::Down);
/// assert_eq!(Move::Left.to_string(), "LEFT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Move the blank one row up.
    Up,
    /// Move the blank one row down.
    Down,
    /// Move the blank one column left.
    Left,
    /// Move the blank one column right.
    Right,
}

impl Move {
    /// Array containing the four moves, in expansion order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(dx, dy)` displacement of the blank for this move.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the transcript label for this move.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_are_unit_steps() {
        for mv in Move::ALL {
            let (dx, dy) = mv.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn test_opposite_is_an_involution() {
        for mv in Move::ALL {
            assert_eq!(mv.opposite().opposite(), mv);
            let (dx, dy) = mv.delta();
            let (ox, oy) = mv.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = Move::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, ["UP", "DOWN", "LEFT", "RIGHT"]);
    }
}
