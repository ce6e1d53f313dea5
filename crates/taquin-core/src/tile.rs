//! Sliding-tile cell values.

use std::fmt::{self, Display};

/// A cell value on the 8-puzzle board: one of the numbered tiles 1-8, or the
/// blank.
///
/// This enum provides type-safe representation of cell values, preventing
/// invalid values at compile time. A well-formed board contains each variant
/// exactly once.
///
/// # Examples
///
/// ```
/// use taquin_core::Tile;
///
/// let tile = Tile::T5;
/// assert_eq!(tile.value(), 5);
/// assert!(!tile.is_blank());
///
/// // Create from a u8 value
/// let tile = Tile::from_value(7);
/// assert_eq!(tile, Tile::T7);
///
/// // 0 is the blank
/// assert!(Tile::from_value(0).is_blank());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tile {
    /// The blank (empty) cell, written as 0 in board input.
    Blank = 0,
    /// The tile numbered 1.
    T1 = 1,
    /// The tile numbered 2.
    T2 = 2,
    /// The tile numbered 3.
    T3 = 3,
    /// The tile numbered 4.
    T4 = 4,
    /// The tile numbered 5.
    T5 = 5,
    /// The tile numbered 6.
    T6 = 6,
    /// The tile numbered 7.
    T7 = 7,
    /// The tile numbered 8.
    T8 = 8,
}

impl Tile {
    /// Array containing every cell value, blank first, in numeric order.
    pub const ALL: [Self; 9] = [
        Self::Blank,
        Self::T1,
        Self::T2,
        Self::T3,
        Self::T4,
        Self::T5,
        Self::T6,
        Self::T7,
        Self::T8,
    ];

    /// Array containing the eight numbered tiles, in numeric order.
    ///
    /// Useful for iterating over the tiles that contribute to heuristics and
    /// inversion counts (the blank never does).
    pub const NUMBERED: [Self; 8] = [
        Self::T1,
        Self::T2,
        Self::T3,
        Self::T4,
        Self::T5,
        Self::T6,
        Self::T7,
        Self::T8,
    ];

    /// Creates a cell value from a u8 in the range 0-8 (0 = blank).
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 0-8. Use [`Tile::try_from_value`]
    /// for untrusted input.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Tile;
    ///
    /// assert_eq!(Tile::from_value(0), Tile::Blank);
    /// assert_eq!(Tile::from_value(8), Tile::T8);
    /// ```
    ///
    /// ```should_panic
    /// use taquin_core::Tile;
    ///
    /// // This will panic
    /// let _ = Tile::from_value(9);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value)
            .unwrap_or_else(|| panic!("Invalid cell value: {value}"))
    }

    /// Creates a cell value from a u8, returning `None` outside the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Tile;
    ///
    /// assert_eq!(Tile::try_from_value(3), Some(Tile::T3));
    /// assert_eq!(Tile::try_from_value(9), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Blank),
            1 => Some(Self::T1),
            2 => Some(Self::T2),
            3 => Some(Self::T3),
            4 => Some(Self::T4),
            5 => Some(Self::T5),
            6 => Some(Self::T6),
            7 => Some(Self::T7),
            8 => Some(Self::T8),
            _ => None,
        }
    }

    /// Returns the numeric value of this cell (0-8, 0 = blank).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns `true` if this is the blank cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Tile;
    ///
    /// assert!(Tile::Blank.is_blank());
    /// assert!(!Tile::T1.is_blank());
    /// ```
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.value()
    }
}
