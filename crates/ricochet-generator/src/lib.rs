//! Puzzle generation with difficulty-band rejection sampling.
//!
//! Two strategies are supported:
//!
//! - **Procedural**: random corner obstructions, edge walls, and entity
//!   cells, rejection-sampled until the BFS-computed optimal move count
//!   falls within the requested difficulty band.
//! - **Catalog**: hand-authored layouts, selectable by index or at random,
//!   solvable but not band-constrained.
//!
//! The default entry point, [`PuzzleGenerator::generate`], runs the capped
//! procedural loop and falls back to the catalog on exhaustion, so it always
//! returns a solvable puzzle. [`PuzzleGenerator::generate_guaranteed`]
//! instead retries the procedural strategy indefinitely until the band is
//! hit; see its documentation for the stall caveat.
//!
//! Every puzzle carries the `u64` seed that produced it, so a generation run
//! can be replayed exactly.
//!
//! # Examples
//!
//! ```
//! use ricochet_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(Difficulty::Easy);
//!
//! assert!(puzzle.optimal_moves >= 1);
//! let replayed = generator.generate_with_seed(Difficulty::Easy, puzzle.seed);
//! assert_eq!(replayed, puzzle);
//! ```

mod catalog;
mod procedural;

use std::fmt::{self, Display};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use ricochet_core::{Board, Placement};
use ricochet_solver::{DEFAULT_BOUND, min_moves};

/// Errors that can occur during puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The procedural attempt cap was reached without an accepted candidate.
    #[display("no puzzle with optimal moves in {band} found in {attempts} attempts")]
    AttemptsExhausted {
        /// The requested optimal-move band.
        band: MoveBand,
        /// How many candidates were tried.
        attempts: usize,
    },
}

/// An inclusive optimal-move range used to accept or reject candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveBand {
    /// Smallest acceptable optimal move count.
    pub min: usize,
    /// Largest acceptable optimal move count.
    pub max: usize,
}

impl MoveBand {
    /// Creates a band from inclusive bounds.
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `moves` falls within the band.
    #[must_use]
    pub const fn contains(self, moves: usize) -> bool {
        self.min <= moves && moves <= self.max
    }
}

impl Display for MoveBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// A named difficulty tier mapping to an optimal-move band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 6–10 optimal moves.
    Easy,
    /// 10–14 optimal moves.
    Medium,
    /// 14–20 optimal moves.
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the inclusive optimal-move band for this tier.
    #[must_use]
    pub const fn band(self) -> MoveBand {
        match self {
            Self::Easy => MoveBand::new(6, 10),
            Self::Medium => MoveBand::new(10, 14),
            Self::Hard => MoveBand::new(14, 20),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Which strategy produced a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Origin {
    /// The procedural strategy; the difficulty band is satisfied.
    Procedural,
    /// A catalog layout; solvable, but not band-constrained.
    Catalog {
        /// The layout's authored name.
        name: &'static str,
    },
}

/// A fully populated puzzle: board, entity placement, and the precomputed
/// optimal move count.
///
/// `optimal_moves` is the accepted search run's result, cached here so the
/// game state machine never recomputes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The board with all walls populated.
    pub board: Board,
    /// The four entity cells.
    pub placement: Placement,
    /// Minimum number of slides needed to win.
    pub optimal_moves: usize,
    /// The seed that produced this puzzle.
    pub seed: u64,
    /// Which strategy produced this puzzle.
    pub origin: Origin,
}

/// Generates solvable ricochet puzzles.
///
/// # Examples
///
/// ```
/// use ricochet_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new().max_attempts(50);
/// let puzzle = generator.generate(Difficulty::Medium);
/// assert!(puzzle.optimal_moves >= 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    grid_size: i32,
    max_attempts: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Default procedural attempt cap before falling back to the catalog.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 30;

    /// Creates a generator for the default 5×5 board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid_size: catalog::GRID_SIZE,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the grid dimension for the procedural strategy.
    ///
    /// # Panics
    ///
    /// Panics if `size` is smaller than 4; the corner and edge obstructions
    /// do not fit on smaller boards.
    #[must_use]
    pub const fn grid_size(mut self, size: i32) -> Self {
        assert!(size >= procedural::MIN_GRID_SIZE);
        self.grid_size = size;
        self
    }

    /// Sets the procedural attempt cap.
    #[must_use]
    pub const fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Generates a puzzle for the given difficulty.
    ///
    /// Runs the capped procedural loop; on exhaustion, falls back to a
    /// random catalog layout. The result is always solvable, but a catalog
    /// fallback (visible via [`GeneratedPuzzle::origin`]) is not constrained
    /// to the difficulty band.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, rand::rng().random())
    }

    /// Deterministic form of [`PuzzleGenerator::generate`]: the same seed
    /// always yields the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: u64) -> GeneratedPuzzle {
        match self.generate_procedural_with_seed(difficulty, seed) {
            Ok(puzzle) => puzzle,
            Err(err) => {
                log::debug!("{err}; falling back to the catalog");
                let mut rng = Pcg64Mcg::seed_from_u64(seed);
                let index = rng.random_range(0..catalog::ENTRIES.len());
                catalog_puzzle(index, seed)
            }
        }
    }

    /// Generates a puzzle with the procedural strategy only.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AttemptsExhausted`] if no candidate within
    /// the difficulty band is found before the attempt cap.
    pub fn generate_procedural(
        &self,
        difficulty: Difficulty,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_procedural_with_seed(difficulty, rand::rng().random())
    }

    /// Deterministic form of [`PuzzleGenerator::generate_procedural`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AttemptsExhausted`] if no candidate within
    /// the difficulty band is found before the attempt cap.
    pub fn generate_procedural_with_seed(
        &self,
        difficulty: Difficulty,
        seed: u64,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_banded_with_seed(difficulty.band(), seed)
    }

    /// Generates a puzzle whose optimal move count falls within a
    /// caller-supplied band, with the procedural strategy only.
    ///
    /// The named tiers are shorthands for this:
    /// [`generate_procedural`](PuzzleGenerator::generate_procedural) runs the
    /// same loop against `difficulty.band()`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AttemptsExhausted`] if no candidate within
    /// `band` is found before the attempt cap.
    pub fn generate_banded(&self, band: MoveBand) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_banded_with_seed(band, rand::rng().random())
    }

    /// Deterministic form of [`PuzzleGenerator::generate_banded`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AttemptsExhausted`] if no candidate within
    /// `band` is found before the attempt cap.
    pub fn generate_banded_with_seed(
        &self,
        band: MoveBand,
        seed: u64,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        for _ in 0..self.max_attempts {
            if let Some((board, placement, optimal_moves)) =
                procedural::candidate(&mut rng, self.grid_size, band)
            {
                return Ok(GeneratedPuzzle {
                    board,
                    placement,
                    optimal_moves,
                    seed,
                    origin: Origin::Procedural,
                });
            }
        }
        Err(GenerateError::AttemptsExhausted {
            band,
            attempts: self.max_attempts,
        })
    }

    /// Generates a puzzle within the difficulty band, retrying indefinitely.
    ///
    /// This loop never falls back and never fails, but it can stall if the
    /// configuration is pathological (a band unreachable on this grid size).
    /// Callers needing responsiveness must impose their own external
    /// timeout. Progress is logged every 50 attempts.
    #[must_use]
    pub fn generate_guaranteed(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        let band = difficulty.band();
        let mut attempt: usize = 0;
        loop {
            attempt += 1;
            let seed = rand::rng().random();
            let mut rng = Pcg64Mcg::seed_from_u64(seed);
            if let Some((board, placement, optimal_moves)) =
                procedural::candidate(&mut rng, self.grid_size, band)
            {
                if attempt > self.max_attempts {
                    log::debug!("found a {difficulty} puzzle after {attempt} attempts");
                }
                return GeneratedPuzzle {
                    board,
                    placement,
                    optimal_moves,
                    seed,
                    origin: Origin::Procedural,
                };
            }
            if attempt % 50 == 0 {
                log::info!("still searching for a {difficulty} puzzle (attempt {attempt})");
            }
        }
    }

    /// Returns the catalog layout at `index`, wrapping around the catalog
    /// length as layout cycling does.
    ///
    /// Selection re-verifies the layout's solvability; a layout that fails
    /// verification is skipped in favor of the next one, so the returned
    /// puzzle is always solvable.
    #[must_use]
    pub fn from_catalog(&self, index: usize) -> GeneratedPuzzle {
        catalog_puzzle(index % catalog::ENTRIES.len(), 0)
    }

    /// Number of hand-authored catalog layouts.
    #[must_use]
    pub const fn catalog_len(&self) -> usize {
        catalog::ENTRIES.len()
    }
}

/// Builds the first solvable catalog layout at or after `index`, cycling
/// through the catalog.
fn catalog_puzzle(index: usize, seed: u64) -> GeneratedPuzzle {
    let len = catalog::ENTRIES.len();
    for offset in 0..len {
        let entry = &catalog::ENTRIES[(index + offset) % len];
        let (board, placement) = entry.build();
        if let Some(optimal_moves) = min_moves(&board, &placement, DEFAULT_BOUND) {
            return GeneratedPuzzle {
                board,
                placement,
                optimal_moves,
                seed,
                origin: Origin::Catalog { name: entry.name },
            };
        }
        log::warn!("catalog layout {} failed verification, skipping", entry.name);
    }
    unreachable!("the catalog holds at least one solvable layout")
}
