//! Interactive session state machine for ricochet puzzles.
//!
//! A [`Game`] owns the session state for one puzzle: token position,
//! collected-marker set, move counter, and win flag. Each accepted move is
//! one slide; rejected moves (blocked immediately, or after winning) are
//! ordinary [`MoveOutcome::Rejected`] results, never errors.
//!
//! # Examples
//!
//! ```
//! use ricochet_core::Direction;
//! use ricochet_game::Game;
//! use ricochet_generator::{Difficulty, PuzzleGenerator};
//!
//! let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
//! let mut game = Game::new(puzzle);
//!
//! assert!(!game.is_won());
//! let outcome = game.apply_move(Direction::East);
//! if outcome.is_moved() {
//!     assert_eq!(game.move_count(), 1);
//! }
//! ```

mod game;

use ricochet_core::{MarkerSet, Position};

pub use self::game::Game;

/// Errors that can occur on explicit session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The session is already won; start a new puzzle instead of resetting.
    #[display("session is already won")]
    AlreadyWon,
}

/// The result of applying one move to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// Nothing happened: the slide was blocked immediately, or the session
    /// is already won.
    Rejected,
    /// The token slid from `from` to `to`.
    Moved {
        /// The cell the token left.
        from: Position,
        /// The cell the token stopped on.
        to: Position,
        /// Markers newly collected by this slide, for collection effects.
        collected: MarkerSet,
    },
}
