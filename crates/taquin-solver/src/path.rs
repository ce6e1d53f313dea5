//! Persistent move paths with structural sharing.

use std::rc::Rc;

use taquin_core::Move;

/// An immutable sequence of moves from the start board to some search node.
///
/// Each child node's path shares its parent's prefix through an [`Rc`] spine,
/// so [`push`](Self::push) is O(1) and cloning a path never copies moves.
/// The naive alternative, copying the whole prefix into every child, costs
/// O(n²) over a search branch.
///
/// # Examples
///
/// ```
/// use taquin_core::Move;
/// use taquin_solver::MovePath;
///
/// let root = MovePath::new();
/// assert!(root.is_empty());
///
/// let a = root.push(Move::Up);
/// let b = a.push(Move::Left);
///
/// // `a` is untouched by the push that produced `b`
/// assert_eq!(a.to_vec(), [Move::Up]);
/// assert_eq!(b.to_vec(), [Move::Up, Move::Left]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MovePath {
    head: Option<Rc<Link>>,
}

#[derive(Debug)]
struct Link {
    mv: Move,
    len: u32,
    prev: Option<Rc<Link>>,
}

impl MovePath {
    /// Creates an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns a new path extending `self` by one move.
    #[must_use]
    pub fn push(&self, mv: Move) -> Self {
        let len = self.len() + 1;
        Self {
            head: Some(Rc::new(Link {
                mv,
                len,
                prev: self.head.clone(),
            })),
        }
    }

    /// Returns the number of moves in the path.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.head.as_ref().map_or(0, |link| link.len)
    }

    /// Returns `true` if the path contains no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Materializes the path as a vector in start-to-goal order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(usize::try_from(self.len()).unwrap_or(0));
        let mut cursor = self.head.as_deref();
        while let Some(link) = cursor {
            moves.push(link.mv);
            cursor = link.prev.as_deref();
        }
        moves.reverse();
        moves
    }
}
