//! Procedural wall layout and entity placement.
//!
//! A layout is built from three ingredients, after seeding boundary walls:
//! one L-shaped two-wall configuration near each of the four corners (one of
//! four orientations, picked independently per corner), plus one wall
//! centered on each board edge. Entities are then four distinct cells drawn
//! uniformly at random. Difficulty is an emergent property of the random
//! placement, filtered afterwards by the caller.

use rand::{RngExt as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;
use ricochet_core::{Board, Placement, Position, Wall};
use ricochet_solver::min_moves;

use crate::MoveBand;

/// Smallest grid the corner/edge obstructions fit on.
pub(crate) const MIN_GRID_SIZE: i32 = 4;

/// Builds a random wall layout for an `size`×`size` board.
pub(crate) fn build_walls(rng: &mut Pcg64Mcg, size: i32) -> Board {
    debug_assert!(size >= MIN_GRID_SIZE);
    let mut board = Board::with_boundary(size).expect("grid size is positive");

    // One L-shaped obstruction per 2x2 corner island
    for base in [
        Position::new(0, 0),
        Position::new(0, size - 2),
        Position::new(size - 2, 0),
        Position::new(size - 2, size - 2),
    ] {
        for wall in l_shape(rng.random_range(0..4), base) {
            board.add_wall(wall);
        }
    }

    // One wall centered on each board edge
    let mid = size / 2;
    for (a, b) in [
        ((0, mid - 1), (0, mid)),
        ((size - 1, mid - 1), (size - 1, mid)),
        ((mid - 1, 0), (mid, 0)),
        ((mid - 1, size - 1), (mid, size - 1)),
    ] {
        board.add_wall(Wall::new(
            Position::new(a.0, a.1),
            Position::new(b.0, b.1),
        ));
    }

    board
}

/// The two walls of an L-shaped corner obstruction.
///
/// `orientation` selects which cell of the 2×2 island anchors the L; the two
/// walls separate that cell from its two island neighbors.
fn l_shape(orientation: usize, base: Position) -> [Wall; 2] {
    let cell = |dr: i32, dc: i32| Position::new(base.row + dr, base.col + dc);
    match orientation {
        0 => [
            Wall::new(cell(0, 0), cell(0, 1)),
            Wall::new(cell(0, 0), cell(1, 0)),
        ],
        1 => [
            Wall::new(cell(0, 1), cell(0, 0)),
            Wall::new(cell(0, 1), cell(1, 1)),
        ],
        2 => [
            Wall::new(cell(1, 0), cell(0, 0)),
            Wall::new(cell(1, 0), cell(1, 1)),
        ],
        3 => [
            Wall::new(cell(1, 1), cell(1, 0)),
            Wall::new(cell(1, 1), cell(0, 1)),
        ],
        _ => unreachable!("orientation is drawn from 0..4"),
    }
}

/// Draws four distinct entity cells uniformly at random.
pub(crate) fn random_placement(rng: &mut Pcg64Mcg, size: i32) -> Placement {
    let mut cells: Vec<Position> = (0..size)
        .flat_map(|row| (0..size).map(move |col| Position::new(row, col)))
        .collect();
    cells.shuffle(rng);
    Placement::new(cells[0], cells[1], cells[2], cells[3])
        .expect("shuffled cells are distinct")
}

/// Generates one candidate layout and accepts it if its optimal move count
/// falls within `band`.
///
/// The search bound is the band maximum plus a small margin; anything deeper
/// would be rejected anyway.
pub(crate) fn candidate(
    rng: &mut Pcg64Mcg,
    size: i32,
    band: MoveBand,
) -> Option<(Board, Placement, usize)> {
    let board = build_walls(rng, size);
    let placement = random_placement(rng, size);
    let moves = min_moves(&board, &placement, band.max + 5)?;
    band.contains(moves).then_some((board, placement, moves))
}
