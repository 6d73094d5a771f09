//! Hand-authored puzzle layouts.
//!
//! Each entry was authored and verified solvable on a 5×5 board; selection
//! re-verifies anyway, recomputing the optimal move count and skipping any
//! entry that fails, which is cheap at this board size.

use ricochet_core::{Board, Placement, Position, Wall};

/// A hand-authored layout: entity cells plus interior walls.
///
/// Boundary walls are implicit and seeded when the layout is built.
pub(crate) struct CatalogEntry {
    pub(crate) name: &'static str,
    start: (i32, i32),
    goal: (i32, i32),
    marker_a: (i32, i32),
    marker_b: (i32, i32),
    walls: &'static [((i32, i32), (i32, i32))],
}

pub(crate) const GRID_SIZE: i32 = 5;

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    // Corner navigation behind internal barriers
    CatalogEntry {
        name: "The Crossroads",
        start: (1, 1),
        goal: (3, 3),
        marker_a: (0, 3),
        marker_b: (3, 0),
        walls: &[
            ((1, 2), (2, 2)),
            ((2, 1), (2, 2)),
            ((2, 3), (3, 3)),
            ((0, 1), (0, 2)),
            ((1, 0), (2, 0)),
            ((4, 3), (4, 4)),
            ((2, 4), (3, 4)),
        ],
    },
    // Central cross pattern with edge walls
    CatalogEntry {
        name: "Crystal Maze",
        start: (0, 2),
        goal: (4, 2),
        marker_a: (2, 0),
        marker_b: (2, 4),
        walls: &[
            ((1, 1), (2, 1)),
            ((2, 1), (2, 2)),
            ((2, 3), (3, 3)),
            ((0, 0), (0, 1)),
            ((3, 0), (4, 0)),
            ((1, 4), (2, 4)),
            ((4, 3), (4, 4)),
        ],
    },
];

impl CatalogEntry {
    /// Builds the board and placement for this entry.
    ///
    /// # Panics
    ///
    /// Panics if the authored layout is malformed; entries are covered by
    /// tests, so this cannot fire for the shipped catalog.
    pub(crate) fn build(&self) -> (Board, Placement) {
        let mut board =
            Board::with_boundary(GRID_SIZE).expect("catalog grid size is positive");
        for &((ar, ac), (br, bc)) in self.walls {
            board.add_wall(Wall::new(Position::new(ar, ac), Position::new(br, bc)));
        }
        let placement = Placement::new(
            Position::new(self.start.0, self.start.1),
            Position::new(self.goal.0, self.goal.1),
            Position::new(self.marker_a.0, self.marker_a.1),
            Position::new(self.marker_b.0, self.marker_b.1),
        )
        .expect("catalog entity cells are distinct");
        placement
            .validate(&board)
            .expect("catalog entity cells are on the grid");
        (board, placement)
    }
}

#[cfg(test)]
mod tests {
    use ricochet_core::{Direction, MarkerSet};
    use ricochet_solver::{DEFAULT_BOUND, min_moves};

    use super::*;

    #[test]
    fn test_every_entry_builds_and_is_solvable() {
        for entry in ENTRIES {
            let (board, placement) = entry.build();
            let moves = min_moves(&board, &placement, DEFAULT_BOUND);
            assert!(moves.is_some(), "{} is unsolvable", entry.name);
        }
    }

    #[test]
    fn test_crossroads_goal_is_reachable_from_the_bottom_edge() {
        // Hand-traced winning line; the last two slides stop at (4, 3)
        // against the bottom-edge wall and park on the goal from below.
        use Direction::{East as E, North as N, South as S, West as W};
        let line = [E, N, W, S, E, S, W, S, W, N, S, E, N];

        let (board, placement) = ENTRIES[0].build();
        let mut position = placement.start();
        let mut collected = MarkerSet::EMPTY;
        let mut won = false;
        for direction in line {
            let trace = placement.trace_move(&board, position, collected, direction);
            assert!(trace.moved(), "blocked at {position} going {direction}");
            position = trace.terminal;
            collected = trace.collected;
            won = trace.wins;
        }
        assert!(won);
        assert_eq!(position, Position::new(3, 3));
    }

    #[test]
    fn test_entry_wall_counts() {
        for entry in ENTRIES {
            let (board, _) = entry.build();
            // 20 boundary segments plus the authored interior walls
            assert_eq!(
                board.walls().len(),
                20 + entry.walls.len(),
                "{} has overlapping walls",
                entry.name
            );
        }
    }
}
