//! Core data structures for the ricochet puzzle.
//!
//! This crate provides the board model and the movement rules shared by the
//! solver, the generator, and the interactive game:
//!
//! - [`position`]: Cell coordinates and the four slide [`Direction`]s
//! - [`wall`]: The symmetric wall relation between adjacent cells
//! - [`board`]: Grid dimensions, the wall set, and the slide engine
//! - [`marker`]: The two collectible markers and the collected-marker set
//! - [`placement`]: Entity placement and the move-trace rule kernel
//!
//! # Overview
//!
//! A token slides in a cardinal direction until a wall or the board edge
//! stops it; it cannot halt mid-slide. The board's outer edge is modeled as
//! boundary walls to off-grid cells, so a single wall lookup answers "can I
//! cross from here to the adjacent cell".
//!
//! # Examples
//!
//! ```
//! use ricochet_core::{Board, Direction, Position};
//!
//! let board = Board::with_boundary(5).unwrap();
//! let slide = board.slide(Position::new(0, 0), Direction::East);
//!
//! // Nothing stops the token until the far edge
//! assert_eq!(slide.terminal, Position::new(0, 4));
//! assert_eq!(slide.path.len(), 5);
//! ```

pub mod board;
pub mod marker;
pub mod placement;
pub mod position;
pub mod wall;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardError, Slide},
    marker::{Marker, MarkerSet},
    placement::{Entity, MoveTrace, Placement, PlacementError},
    position::{Direction, Position},
    wall::Wall,
};
