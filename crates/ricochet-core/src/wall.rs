//! The symmetric wall relation between cells.

use crate::position::Position;

/// A wall between two adjacent positions.
///
/// The relation is unordered: a wall between `a` and `b` equals a wall
/// between `b` and `a`. The constructor stores the lexicographically smaller
/// endpoint first, so equality and hashing are plain structural comparisons
/// on the canonical form.
///
/// One endpoint may lie one step outside the grid; such walls model the
/// board boundary (see [`Board::seed_boundary_walls`]).
///
/// [`Board::seed_boundary_walls`]: crate::Board::seed_boundary_walls
///
/// # Examples
///
/// ```
/// use ricochet_core::{Position, Wall};
///
/// let a = Position::new(1, 1);
/// let b = Position::new(1, 2);
/// assert_eq!(Wall::new(a, b), Wall::new(b, a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    lo: Position,
    hi: Position,
}

impl Wall {
    /// Creates a wall between two positions, in either order.
    #[must_use]
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Returns the endpoints in canonical (smaller, larger) order.
    #[must_use]
    pub const fn endpoints(self) -> (Position, Position) {
        (self.lo, self.hi)
    }
}
