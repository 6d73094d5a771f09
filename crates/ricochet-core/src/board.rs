//! The board grid, its wall set, and the slide engine.

use std::collections::HashSet;

use crate::{
    position::{Direction, Position},
    wall::Wall,
};

/// Errors that can occur when constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The requested grid dimension is not positive.
    #[display("invalid grid size: {size}")]
    InvalidSize {
        /// The rejected dimension.
        size: i32,
    },
}

/// An `N`×`N` board together with its wall set.
///
/// The wall set is the sole authority for whether the token can cross from a
/// cell to an adjacent cell. The outer perimeter is represented by boundary
/// walls to off-grid cells; [`Board::with_boundary`] seeds them so that no
/// slide can ever escape the grid.
///
/// # Examples
///
/// ```
/// use ricochet_core::{Board, Position};
///
/// let board = Board::with_boundary(5).unwrap();
/// assert!(board.is_inside(Position::new(4, 4)));
/// assert!(!board.is_inside(Position::new(5, 0)));
/// assert!(board.has_wall(Position::new(0, 0), Position::new(-1, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: i32,
    walls: HashSet<Wall>,
}

impl Board {
    /// Creates a board with an empty wall set.
    ///
    /// Boundary walls are *not* seeded; call [`Board::seed_boundary_walls`]
    /// (or use [`Board::with_boundary`]) before any slide query, or slides
    /// will not be stopped at the board edge.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is not positive.
    pub fn new(size: i32) -> Result<Self, BoardError> {
        if size <= 0 {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self {
            size,
            walls: HashSet::new(),
        })
    }

    /// Creates a board with all boundary walls seeded.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is not positive.
    pub fn with_boundary(size: i32) -> Result<Self, BoardError> {
        let mut board = Self::new(size)?;
        board.seed_boundary_walls();
        Ok(board)
    }

    /// Populates all 4·N boundary wall segments.
    ///
    /// Each segment connects a perimeter cell to the off-grid cell one step
    /// beyond it, so the edge of the board is just another wall as far as
    /// the slide engine is concerned. Already-present walls are unaffected.
    pub fn seed_boundary_walls(&mut self) {
        for i in 0..self.size {
            let north = Position::new(0, i);
            let south = Position::new(self.size - 1, i);
            let west = Position::new(i, 0);
            let east = Position::new(i, self.size - 1);
            self.walls.insert(Wall::new(north, north + Direction::North));
            self.walls.insert(Wall::new(south, south + Direction::South));
            self.walls.insert(Wall::new(west, west + Direction::West));
            self.walls.insert(Wall::new(east, east + Direction::East));
        }
    }

    /// Returns the grid dimension N.
    #[must_use]
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// Returns `true` if both coordinates are within `[0, N)`.
    #[must_use]
    pub const fn is_inside(&self, pos: Position) -> bool {
        0 <= pos.row && pos.row < self.size && 0 <= pos.col && pos.col < self.size
    }

    /// Adds a wall, returning `true` if it was not already present.
    pub fn add_wall(&mut self, wall: Wall) -> bool {
        self.walls.insert(wall)
    }

    /// Returns `true` if a wall exists between the two positions.
    ///
    /// The check is symmetric in its arguments and includes boundary walls.
    #[must_use]
    pub fn has_wall(&self, a: Position, b: Position) -> bool {
        self.walls.contains(&Wall::new(a, b))
    }

    /// Returns the wall set.
    #[must_use]
    pub const fn walls(&self) -> &HashSet<Wall> {
        &self.walls
    }

    /// Slides from `start` in `direction` until a wall or the board edge
    /// stops the token.
    ///
    /// The returned path starts at `start` and ends at the terminal cell; a
    /// single-element path means the token was blocked immediately, which
    /// callers treat as a rejected move. The loop always terminates because
    /// each step strictly advances along one axis within a finite grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ricochet_core::{Board, Direction, Position};
    ///
    /// let board = Board::with_boundary(5).unwrap();
    /// let slide = board.slide(Position::new(2, 2), Direction::West);
    /// assert_eq!(slide.terminal, Position::new(2, 0));
    /// assert!(slide.moved());
    /// ```
    #[must_use]
    pub fn slide(&self, start: Position, direction: Direction) -> Slide {
        let mut current = start;
        let mut path = vec![start];
        loop {
            let next = current + direction;
            if !self.is_inside(next) || self.has_wall(current, next) {
                return Slide {
                    terminal: current,
                    path,
                };
            }
            current = next;
            path.push(current);
        }
    }
}

/// The result of a single slide: the terminal cell and the full path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// The cell where the slide stopped.
    pub terminal: Position,
    /// Every cell visited, starting with the start cell and ending with the
    /// terminal cell.
    pub path: Vec<Position>,
}

impl Slide {
    /// Returns `true` if the slide covered at least one cell.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.path.len() > 1
    }
}
