use ricochet_core::{Board, Direction, Entity, MarkerSet, Placement, Position};
use ricochet_generator::GeneratedPuzzle;
use ricochet_solver::{DEFAULT_BOUND, solution_path};

use crate::{GameError, MoveOutcome};

/// A ricochet puzzle session.
///
/// Owns the puzzle (board, placement, cached optimal move count) and the
/// mutable session state. There are no ambient globals: whoever drives play
/// owns the `Game` value and passes it into these operations.
///
/// # Example
///
/// ```
/// use ricochet_game::Game;
/// use ricochet_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
/// let game = Game::new(puzzle);
///
/// assert_eq!(game.position(), game.placement().start());
/// assert_eq!(game.move_count(), 0);
/// assert!(!game.is_won());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    placement: Placement,
    optimal_moves: usize,
    position: Position,
    collected: MarkerSet,
    move_count: usize,
    won: bool,
}

impl Game {
    /// Creates a new session from a generated puzzle.
    ///
    /// The token starts on the placement's start cell with nothing
    /// collected and a zero move counter.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            board,
            placement,
            optimal_moves,
            seed: _,
            origin: _,
        } = puzzle;
        let position = placement.start();
        Self {
            board,
            placement,
            optimal_moves,
            position,
            collected: MarkerSet::EMPTY,
            move_count: 0,
            won: false,
        }
    }

    /// Applies one slide in the given direction.
    ///
    /// The move is rejected, with no state change, when the session is
    /// already won or the slide is blocked immediately. Otherwise the move
    /// counter increments by one, markers on the slide path are collected
    /// (transit collects; the start cell does not), the win flag is set if
    /// the path crosses the goal with both markers collected after this
    /// slide's collections, and the token moves to the terminal cell.
    ///
    /// # Example
    ///
    /// ```
    /// use ricochet_core::Direction;
    /// use ricochet_game::{Game, MoveOutcome};
    /// use ricochet_generator::{Difficulty, PuzzleGenerator};
    ///
    /// let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
    /// let mut game = Game::new(puzzle);
    ///
    /// match game.apply_move(Direction::North) {
    ///     MoveOutcome::Moved { from, to, .. } => println!("slid {from} -> {to}"),
    ///     MoveOutcome::Rejected => println!("blocked"),
    /// }
    /// ```
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.won {
            return MoveOutcome::Rejected;
        }
        let trace =
            self.placement
                .trace_move(&self.board, self.position, self.collected, direction);
        if !trace.moved() {
            return MoveOutcome::Rejected;
        }

        let from = self.position;
        self.move_count += 1;
        self.collected = trace.collected;
        if trace.wins {
            self.won = true;
        }
        self.position = trace.terminal;

        MoveOutcome::Moved {
            from,
            to: trace.terminal,
            collected: trace.newly_collected,
        }
    }

    /// Returns the token to the start cell and clears all session progress.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyWon`] when the session is won; a finished
    /// session must start a new puzzle, not reset in place.
    pub fn reset_to_start(&mut self) -> Result<(), GameError> {
        if self.won {
            return Err(GameError::AlreadyWon);
        }
        self.position = self.placement.start();
        self.collected = MarkerSet::EMPTY;
        self.move_count = 0;
        Ok(())
    }

    /// Replaces the whole session with a freshly generated puzzle.
    ///
    /// Usable in any state, including after a win.
    pub fn regenerate(&mut self, puzzle: GeneratedPuzzle) {
        *self = Self::new(puzzle);
    }

    /// Returns a minimal direction sequence that wins from the current
    /// session state, or `None` if the session is won or no solution exists
    /// within the default search bound.
    #[must_use]
    pub fn remaining_solution(&self) -> Option<Vec<Direction>> {
        if self.won {
            return None;
        }
        solution_path(
            &self.board,
            &self.placement,
            self.position,
            self.collected,
            DEFAULT_BOUND,
        )
    }

    /// Returns the current token cell.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the collected-marker set.
    #[must_use]
    pub const fn collected(&self) -> MarkerSet {
        self.collected
    }

    /// Returns the number of accepted moves so far.
    #[must_use]
    pub const fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns `true` once the win condition has fired.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Returns the cached optimal move count for this puzzle.
    #[must_use]
    pub const fn optimal_moves(&self) -> usize {
        self.optimal_moves
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the entity placement.
    #[must_use]
    pub const fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Returns the entity occupying `pos`, if any, for rendering.
    #[must_use]
    pub fn entity_at(&self, pos: Position) -> Option<Entity> {
        self.placement.entity_at(pos)
    }
}

#[cfg(test)]
mod tests {
    use ricochet_core::Marker;
    use ricochet_generator::{Difficulty, Origin, PuzzleGenerator};
    use ricochet_solver::min_moves;

    use super::*;

    /// The boundary-only 5×5 board with start (0,0), goal (4,4),
    /// marker A (0,4), marker B (4,0).
    fn corner_puzzle() -> GeneratedPuzzle {
        let board = Board::with_boundary(5).unwrap();
        let placement = Placement::new(
            Position::new(0, 0),
            Position::new(4, 4),
            Position::new(0, 4),
            Position::new(4, 0),
        )
        .unwrap();
        let optimal_moves = min_moves(&board, &placement, 128).unwrap();
        GeneratedPuzzle {
            board,
            placement,
            optimal_moves,
            seed: 0,
            origin: Origin::Procedural,
        }
    }

    #[test]
    fn test_goal_transit_without_both_markers_does_not_win() {
        let mut game = Game::new(corner_puzzle());

        // East collects marker A in transit and stops at (0, 4)
        let outcome = game.apply_move(Direction::East);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Position::new(0, 0),
                to: Position::new(0, 4),
                collected: MarkerSet::from_iter([Marker::A]),
            }
        );

        // South stops on the goal, but marker B is missing
        let outcome = game.apply_move(Direction::South);
        assert!(outcome.is_moved());
        assert_eq!(game.position(), Position::new(4, 4));
        assert_eq!(game.collected(), MarkerSet::from_iter([Marker::A]));
        assert_eq!(game.move_count(), 2);
        assert!(!game.is_won());
    }

    /// A minimal winning sequence on [`corner_puzzle`]: East collects A,
    /// South parks on the goal, West collects B in transit along the bottom
    /// row, and the final East re-crosses the goal with both markers.
    const WINNING_MOVES: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    #[test]
    fn test_win_fires_on_goal_transit_with_both_markers() {
        let mut game = Game::new(corner_puzzle());

        // E collects A; S parks on the goal without winning
        assert!(game.apply_move(Direction::East).is_moved());
        assert!(game.apply_move(Direction::South).is_moved());

        // W sweeps the bottom row and collects B at its terminal cell
        let outcome = game.apply_move(Direction::West);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Position::new(4, 4),
                to: Position::new(4, 0),
                collected: MarkerSet::from_iter([Marker::B]),
            }
        );
        assert!(game.collected().is_full());
        assert_eq!(game.move_count(), 3);
        assert!(!game.is_won());

        // S presses into the bottom edge and must not count as a move
        assert_eq!(game.apply_move(Direction::South), MoveOutcome::Rejected);
        assert_eq!(game.move_count(), 3);

        // E re-crosses the goal with both markers collected
        assert!(game.apply_move(Direction::East).is_moved());
        assert_eq!(game.position(), Position::new(4, 4));
        assert_eq!(game.move_count(), 4);
        assert!(game.is_won());
        assert_eq!(game.move_count(), game.optimal_moves());
    }

    #[test]
    fn test_blocked_move_is_rejected_without_state_change() {
        let mut game = Game::new(corner_puzzle());
        let before = game.clone();

        assert_eq!(game.apply_move(Direction::North), MoveOutcome::Rejected);
        assert_eq!(game.apply_move(Direction::West), MoveOutcome::Rejected);
        assert_eq!(game, before);
    }

    #[test]
    fn test_moves_are_rejected_after_winning() {
        let mut game = Game::new(corner_puzzle());
        for direction in WINNING_MOVES {
            assert!(game.apply_move(direction).is_moved());
        }
        assert!(game.is_won());

        let before = game.clone();
        assert_eq!(game.apply_move(Direction::North), MoveOutcome::Rejected);
        assert_eq!(game, before);
    }

    #[test]
    fn test_reset_restores_the_initial_state() {
        let mut game = Game::new(corner_puzzle());
        let initial = game.clone();

        assert!(game.apply_move(Direction::East).is_moved());
        assert!(game.apply_move(Direction::South).is_moved());
        assert_ne!(game, initial);

        game.reset_to_start().unwrap();
        assert_eq!(game, initial);
    }

    #[test]
    fn test_reset_is_refused_after_winning() {
        let mut game = Game::new(corner_puzzle());
        for direction in WINNING_MOVES {
            assert!(game.apply_move(direction).is_moved());
        }
        assert_eq!(game.reset_to_start(), Err(GameError::AlreadyWon));

        // A full regenerate is the way out of a won session
        game.regenerate(corner_puzzle());
        assert!(!game.is_won());
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_move_counter_increments_only_on_accepted_moves() {
        let mut game = Game::new(corner_puzzle());
        assert_eq!(game.move_count(), 0);
        assert!(game.apply_move(Direction::North).is_rejected());
        assert_eq!(game.move_count(), 0);
        assert!(game.apply_move(Direction::East).is_moved());
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_remaining_solution_replays_to_a_win() {
        let mut game = Game::new(corner_puzzle());
        assert!(game.apply_move(Direction::East).is_moved());

        let remaining = game.remaining_solution().unwrap();
        for direction in remaining {
            assert!(game.apply_move(direction).is_moved());
        }
        assert!(game.is_won());
        assert_eq!(game.move_count(), game.optimal_moves());
        assert!(game.remaining_solution().is_none());
    }

    #[test]
    fn test_optimal_moves_matches_an_independent_search() {
        let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
        let game = Game::new(puzzle);
        assert_eq!(
            min_moves(game.board(), game.placement(), 128),
            Some(game.optimal_moves())
        );
    }

    #[test]
    fn test_entity_accessor_reflects_the_placement() {
        let game = Game::new(corner_puzzle());
        assert_eq!(game.entity_at(Position::new(0, 0)), Some(Entity::Start));
        assert_eq!(game.entity_at(Position::new(4, 4)), Some(Entity::Goal));
        assert_eq!(
            game.entity_at(Position::new(0, 4)),
            Some(Entity::Marker(Marker::A))
        );
        assert_eq!(game.entity_at(Position::new(2, 2)), None);
    }
}
