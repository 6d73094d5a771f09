//! Entity placement and the move-trace rule kernel.

use crate::{
    board::Board,
    marker::{Marker, MarkerSet},
    position::{Direction, Position},
};

/// Errors that can occur when constructing or validating a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// Two entities share the same cell.
    #[display("duplicate entity cell: {cell}")]
    DuplicateCell {
        /// The shared cell.
        cell: Position,
    },
    /// An entity cell lies outside the grid.
    #[display("entity cell outside the grid: {cell}")]
    OutsideGrid {
        /// The offending cell.
        cell: Position,
    },
}

/// The entity occupying a cell, for rendering accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// The token's starting cell.
    Start,
    /// The goal cell.
    Goal,
    /// One of the two collectible markers.
    Marker(Marker),
}

/// The four entity cells of a puzzle: start, goal, and both markers.
///
/// The constructor only guarantees distinctness; reachability is established
/// by the solvability search after placement, never a priori.
///
/// # Examples
///
/// ```
/// use ricochet_core::{Placement, Position};
///
/// let placement = Placement::new(
///     Position::new(0, 0),
///     Position::new(4, 4),
///     Position::new(0, 4),
///     Position::new(4, 0),
/// )
/// .unwrap();
/// assert_eq!(placement.start(), Position::new(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    start: Position,
    goal: Position,
    marker_a: Position,
    marker_b: Position,
}

impl Placement {
    /// Creates a placement from four distinct cells.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::DuplicateCell`] if any two cells coincide.
    pub fn new(
        start: Position,
        goal: Position,
        marker_a: Position,
        marker_b: Position,
    ) -> Result<Self, PlacementError> {
        let cells = [start, goal, marker_a, marker_b];
        for (i, &cell) in cells.iter().enumerate() {
            if cells[..i].contains(&cell) {
                return Err(PlacementError::DuplicateCell { cell });
            }
        }
        Ok(Self {
            start,
            goal,
            marker_a,
            marker_b,
        })
    }

    /// Checks that every entity cell lies inside the given board.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::OutsideGrid`] for the first off-grid cell.
    pub fn validate(&self, board: &Board) -> Result<(), PlacementError> {
        for cell in [self.start, self.goal, self.marker_a, self.marker_b] {
            if !board.is_inside(cell) {
                return Err(PlacementError::OutsideGrid { cell });
            }
        }
        Ok(())
    }

    /// Returns the token's starting cell.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the goal cell.
    #[must_use]
    pub const fn goal(&self) -> Position {
        self.goal
    }

    /// Returns the cell of the given marker.
    #[must_use]
    pub const fn marker_cell(&self, marker: Marker) -> Position {
        match marker {
            Marker::A => self.marker_a,
            Marker::B => self.marker_b,
        }
    }

    /// Returns the entity occupying `pos`, if any.
    ///
    /// The start cell is reported even when the token has since moved away;
    /// it is a property of the puzzle, not of the session.
    #[must_use]
    pub fn entity_at(&self, pos: Position) -> Option<Entity> {
        if pos == self.start {
            Some(Entity::Start)
        } else if pos == self.goal {
            Some(Entity::Goal)
        } else if pos == self.marker_a {
            Some(Entity::Marker(Marker::A))
        } else if pos == self.marker_b {
            Some(Entity::Marker(Marker::B))
        } else {
            None
        }
    }

    /// Computes what a single slide does to session state.
    ///
    /// This is the rule kernel shared by the game state machine and the
    /// solvability search, so the two cannot diverge:
    ///
    /// 1. The token slides from `from` until stopped (see [`Board::slide`]).
    /// 2. Every uncollected marker on the path after the start cell is
    ///    collected. Collection happens for transit, not only for stopping;
    ///    the start cell itself never collects.
    /// 3. The slide wins if the goal lies on the path after the start cell
    ///    and both markers are collected, counting markers collected in
    ///    step 2 of this same slide. The whole collection pass runs before
    ///    the win check, so a slide sweeping over both markers and the goal
    ///    in one line wins regardless of their order along the path.
    ///
    /// A trace with [`MoveTrace::moved`]` == false` is the caller's signal
    /// for a rejected move; such a trace never collects and never wins.
    #[must_use]
    pub fn trace_move(
        &self,
        board: &Board,
        from: Position,
        collected: MarkerSet,
        direction: Direction,
    ) -> MoveTrace {
        let slide = board.slide(from, direction);
        let transit = &slide.path[1..];

        let mut collected = collected;
        let mut newly_collected = MarkerSet::EMPTY;
        for &cell in transit {
            for marker in Marker::ALL {
                if cell == self.marker_cell(marker) && collected.insert(marker) {
                    newly_collected.insert(marker);
                }
            }
        }

        let wins = collected.is_full() && transit.contains(&self.goal);

        MoveTrace {
            terminal: slide.terminal,
            path: slide.path,
            collected,
            newly_collected,
            wins,
        }
    }
}

/// The effect of one slide on session state, as computed by
/// [`Placement::trace_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTrace {
    /// The cell where the slide stopped.
    pub terminal: Position,
    /// Every cell visited, start cell first.
    pub path: Vec<Position>,
    /// The collected-marker set after this slide.
    pub collected: MarkerSet,
    /// The markers newly collected by this slide.
    pub newly_collected: MarkerSet,
    /// Whether this slide satisfies the win condition.
    pub wins: bool,
}

impl MoveTrace {
    /// Returns `true` if the slide covered at least one cell.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.path.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wall::Wall;

    fn open_board() -> Board {
        Board::with_boundary(5).unwrap()
    }

    fn corner_placement() -> Placement {
        Placement::new(
            Position::new(0, 0),
            Position::new(4, 4),
            Position::new(0, 4),
            Position::new(4, 0),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_duplicate_cells() {
        let dup = Position::new(1, 1);
        let result = Placement::new(dup, dup, Position::new(0, 0), Position::new(2, 2));
        assert_eq!(result, Err(PlacementError::DuplicateCell { cell: dup }));

        let result = Placement::new(
            Position::new(0, 0),
            Position::new(1, 1),
            Position::new(2, 2),
            Position::new(2, 2),
        );
        assert_eq!(
            result,
            Err(PlacementError::DuplicateCell {
                cell: Position::new(2, 2)
            })
        );
    }

    #[test]
    fn test_validate_rejects_off_grid_cells() {
        let board = open_board();
        let placement = Placement::new(
            Position::new(0, 0),
            Position::new(4, 4),
            Position::new(0, 4),
            Position::new(5, 0),
        )
        .unwrap();
        assert_eq!(
            placement.validate(&board),
            Err(PlacementError::OutsideGrid {
                cell: Position::new(5, 0)
            })
        );
        assert_eq!(corner_placement().validate(&board), Ok(()));
    }

    #[test]
    fn test_entity_at() {
        let placement = corner_placement();
        assert_eq!(placement.entity_at(Position::new(0, 0)), Some(Entity::Start));
        assert_eq!(placement.entity_at(Position::new(4, 4)), Some(Entity::Goal));
        assert_eq!(
            placement.entity_at(Position::new(0, 4)),
            Some(Entity::Marker(Marker::A))
        );
        assert_eq!(
            placement.entity_at(Position::new(4, 0)),
            Some(Entity::Marker(Marker::B))
        );
        assert_eq!(placement.entity_at(Position::new(2, 2)), None);
    }

    #[test]
    fn test_transit_collects_markers() {
        let board = open_board();
        let placement = corner_placement();

        let trace = placement.trace_move(
            &board,
            Position::new(0, 0),
            MarkerSet::EMPTY,
            Direction::East,
        );
        assert_eq!(trace.terminal, Position::new(0, 4));
        assert!(trace.collected.contains(Marker::A));
        assert!(trace.newly_collected.contains(Marker::A));
        assert!(!trace.wins);
    }

    #[test]
    fn test_goal_transit_without_markers_does_not_win() {
        let board = open_board();
        let placement = corner_placement();

        // South from (0, 4) sweeps straight over the goal at (4, 4)
        let trace = placement.trace_move(
            &board,
            Position::new(0, 4),
            MarkerSet::from_iter([Marker::A]),
            Direction::South,
        );
        assert_eq!(trace.terminal, Position::new(4, 4));
        assert!(!trace.wins);
    }

    #[test]
    fn test_start_cell_never_collects() {
        let board = open_board();
        let placement = corner_placement();

        // Token standing on marker A, sliding away: A stays uncollected
        let trace = placement.trace_move(
            &board,
            Position::new(0, 4),
            MarkerSet::EMPTY,
            Direction::South,
        );
        assert!(trace.collected.is_empty());
        assert!(trace.newly_collected.is_empty());
    }

    #[test]
    fn test_goal_before_marker_on_same_path_still_wins() {
        // Marker B sits past the goal on the same line; the collection pass
        // runs over the whole path before the win check, so crossing the
        // goal first must still win.
        let board = open_board();
        let placement = Placement::new(
            Position::new(2, 0),
            Position::new(2, 2),
            Position::new(0, 0),
            Position::new(2, 4),
        )
        .unwrap();

        let trace = placement.trace_move(
            &board,
            Position::new(2, 0),
            MarkerSet::from_iter([Marker::A]),
            Direction::East,
        );
        assert_eq!(trace.terminal, Position::new(2, 4));
        assert!(trace.collected.is_full());
        assert!(trace.wins);
    }

    #[test]
    fn test_blocked_trace_never_collects_or_wins() {
        let mut board = open_board();
        board.add_wall(Wall::new(Position::new(0, 0), Position::new(0, 1)));
        let placement = corner_placement();

        let trace = placement.trace_move(
            &board,
            Position::new(0, 0),
            MarkerSet::FULL,
            Direction::East,
        );
        assert!(!trace.moved());
        assert!(trace.newly_collected.is_empty());
        assert!(!trace.wins);
    }
}
