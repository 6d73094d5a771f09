//! Breadth-first solvability search for ricochet puzzles.
//!
//! The search runs over the compound state (token position, collected-marker
//! set): the same cell reached with different collected sets is a genuinely
//! different state. Every edge is one slide, so BFS yields the minimum move
//! count the first time a winning slide is discovered.
//!
//! Exploration is capped by a move bound. Exceeding the bound means
//! "unsolvable within the bound", not "provably unsolvable"; callers needing
//! a hard verdict must pick a bound exceeding the state-space diameter
//! (N² × 4 states). [`DEFAULT_BOUND`] does so for the default 5×5 board.
//!
//! # Examples
//!
//! ```
//! use ricochet_core::{Board, Placement, Position};
//! use ricochet_solver::{DEFAULT_BOUND, min_moves};
//!
//! let board = Board::with_boundary(5).unwrap();
//! let placement = Placement::new(
//!     Position::new(0, 0),
//!     Position::new(4, 4),
//!     Position::new(0, 4),
//!     Position::new(4, 0),
//! )
//! .unwrap();
//!
//! assert_eq!(min_moves(&board, &placement, DEFAULT_BOUND), Some(4));
//! ```

use std::collections::{HashMap, VecDeque};

use ricochet_core::{Board, Direction, MarkerSet, Placement, Position};

/// Default move bound, exceeding the 5×5 state-space diameter of 100.
pub const DEFAULT_BOUND: usize = 128;

/// A node in the search graph: where the token is and what it has collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SearchState {
    position: Position,
    collected: MarkerSet,
}

/// Runs the BFS from an arbitrary session state.
///
/// Returns the ordered directions of a minimal winning move sequence, or
/// `None` if no win is reachable within `bound` moves. Each enqueued state
/// records the state and direction that produced it, so the sequence is
/// reconstructed by back-tracking from the first winning slide found.
fn search(
    board: &Board,
    placement: &Placement,
    from: Position,
    collected: MarkerSet,
    bound: usize,
) -> Option<Vec<Direction>> {
    let start = SearchState {
        position: from,
        collected,
    };
    let mut parents: HashMap<SearchState, (SearchState, Direction)> = HashMap::new();
    let mut queue = VecDeque::new();
    queue.push_back((start, 0));

    while let Some((state, depth)) = queue.pop_front() {
        if depth >= bound {
            continue;
        }
        for direction in Direction::ALL {
            let trace = placement.trace_move(board, state.position, state.collected, direction);
            if !trace.moved() {
                // Zero-displacement edges are pruned
                continue;
            }
            if trace.wins {
                let mut directions = vec![direction];
                let mut cursor = state;
                while let Some(&(prev, dir)) = parents.get(&cursor) {
                    directions.push(dir);
                    cursor = prev;
                }
                directions.reverse();
                return Some(directions);
            }
            let next = SearchState {
                position: trace.terminal,
                collected: trace.collected,
            };
            if next != start && !parents.contains_key(&next) {
                parents.insert(next, (state, direction));
                queue.push_back((next, depth + 1));
            }
        }
    }
    None
}

/// Computes the minimum number of slides needed to win from the puzzle's
/// initial placement.
///
/// Returns `None` if no solution exists within `bound` moves; see the crate
/// docs for what that does and does not prove.
#[must_use]
pub fn min_moves(board: &Board, placement: &Placement, bound: usize) -> Option<usize> {
    search(board, placement, placement.start(), MarkerSet::EMPTY, bound).map(|path| path.len())
}

/// Returns `true` if the puzzle is solvable within [`DEFAULT_BOUND`] moves.
#[must_use]
pub fn is_solvable(board: &Board, placement: &Placement) -> bool {
    min_moves(board, placement, DEFAULT_BOUND).is_some()
}

/// Returns a minimal winning direction sequence from the puzzle's initial
/// placement, or `None` if unsolvable within [`DEFAULT_BOUND`] moves.
#[must_use]
pub fn solution(board: &Board, placement: &Placement) -> Option<Vec<Direction>> {
    solution_path(
        board,
        placement,
        placement.start(),
        MarkerSet::EMPTY,
        DEFAULT_BOUND,
    )
}

/// Returns a minimal winning direction sequence from an arbitrary session
/// state, for "remaining solution" queries.
///
/// `from` and `collected` describe the state to solve from; pass the
/// original start cell and the empty set for a full solution. Returns `None`
/// if no win is reachable within `bound` moves.
#[must_use]
pub fn solution_path(
    board: &Board,
    placement: &Placement,
    from: Position,
    collected: MarkerSet,
    bound: usize,
) -> Option<Vec<Direction>> {
    search(board, placement, from, collected, bound)
}
