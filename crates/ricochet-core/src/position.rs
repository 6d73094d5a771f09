//! Cell coordinates and slide directions.

use std::{
    fmt::{self, Display},
    ops::Add,
};

/// A (row, column) cell coordinate.
///
/// Coordinates are signed so that positions one step outside the grid can be
/// represented; boundary walls use such off-grid endpoints to model the board
/// edge. Ordering and hashing are lexicographic by `(row, col)`.
///
/// # Examples
///
/// ```
/// use ricochet_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos + Direction::North, Position::new(1, 3));
/// assert!(Position::new(0, 4) < Position::new(1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, increasing southward.
    pub row: i32,
    /// Column index, increasing eastward.
    pub col: i32,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the adjacent position one step in the given direction.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }
}

impl Add<Direction> for Position {
    type Output = Self;

    fn add(self, direction: Direction) -> Self {
        self.step(direction)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A cardinal slide direction.
///
/// This is a closed enumeration: there are exactly four directions and no
/// diagonals, so matches over it are checked exhaustively at compile time.
///
/// # Examples
///
/// ```
/// use ricochet_core::Direction;
///
/// assert_eq!(Direction::South.delta(), (1, 0));
/// assert_eq!(Direction::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0.
    North,
    /// Toward the last row.
    South,
    /// Toward the last column.
    East,
    /// Toward column 0.
    West,
}

impl Direction {
    /// All directions, in the fixed order used by the solvability search.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Returns the unit `(row, col)` delta for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::East => (0, 1),
            Self::West => (0, -1),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        };
        f.write_str(name)
    }
}
