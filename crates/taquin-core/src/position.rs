//! Board position (x, y) coordinate type.

use std::fmt::{self, Display};

/// A position on the 3×3 board.
///
/// `x` is the column (0-2, left to right) and `y` is the row (0-2, top to
/// bottom).
///
/// # Examples
///
/// ```
/// use taquin_core::Position;
///
/// let pos = Position::new(1, 2);
/// assert_eq!(pos.x(), 1);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.cell_index(), 7); // row-major
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 9 positions in row-major order.
    pub const ALL: [Self; 9] = {
        let mut all = [Self { x: 0, y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self {
                x: (i % 3) as u8,
                y: (i / 3) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column and row coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-2.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 3 && y < 3);
        Self { x, y }
    }

    /// Returns the column coordinate (0-2).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-2).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (`y * 3 + x`, 0-8).
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.y as usize * 3 + self.x as usize
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_cell_index(index: usize) -> Self {
        assert!(index < 9);
        Self {
            x: (index % 3) as u8,
            y: (index / 3) as u8,
        }
    }

    /// Returns the position displaced by `(dx, dy)`, or `None` if it would
    /// leave the 3×3 board.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Position;
    ///
    /// let center = Position::new(1, 1);
    /// assert_eq!(center.offset(0, -1), Some(Position::new(1, 0)));
    ///
    /// let corner = Position::new(0, 0);
    /// assert_eq!(corner.offset(-1, 0), None);
    /// ```
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < 3 && y < 3).then_some(Self { x, y })
    }

    /// Returns the Manhattan (grid) distance to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Position;
    ///
    /// let a = Position::new(0, 0);
    /// let b = Position::new(2, 1);
    /// assert_eq!(a.manhattan_distance(b), 3);
    /// ```
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) as u32 + self.y.abs_diff(other.y) as u32
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
