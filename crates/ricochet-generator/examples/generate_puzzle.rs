//! Example demonstrating ricochet puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` and generate a puzzle for a difficulty tier
//! - Display the board, entity placement, optimal move count, and seed
//! - Sample many seeds in parallel to gauge a band's acceptance rate
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty tier:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Replay a specific seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 12345
//! ```
//!
//! Measure how often the procedural strategy hits the band (default: 1000
//! samples):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty medium --acceptance-rate
//! ```

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use ricochet_core::{Entity, Marker, Position};
use ricochet_generator::{Difficulty, GeneratedPuzzle, Origin, PuzzleGenerator};
use ricochet_solver::solution;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Tier {
    Easy,
    Medium,
    Hard,
}

impl From<Tier> for Difficulty {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Easy => Difficulty::Easy,
            Tier::Medium => Difficulty::Medium,
            Tier::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier to generate for.
    #[arg(long, value_name = "TIER", default_value = "medium")]
    difficulty: Tier,

    /// Seed to replay instead of drawing fresh entropy.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Measure the band's acceptance rate instead of printing one puzzle.
    #[arg(long)]
    acceptance_rate: bool,

    /// Seeds to sample when measuring the acceptance rate.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    samples: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let difficulty = Difficulty::from(args.difficulty);
    let generator = PuzzleGenerator::new();

    if args.acceptance_rate {
        let accepted = (0..args.samples)
            .into_par_iter()
            .filter(|&seed| {
                generator
                    .generate_procedural_with_seed(difficulty, seed)
                    .is_ok()
            })
            .count();
        println!(
            "{accepted}/{} capped runs produced a {difficulty} puzzle",
            args.samples
        );
        return;
    }

    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(difficulty, seed),
        None => generator.generate(difficulty),
    };
    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Origin:");
    match puzzle.origin {
        Origin::Procedural => println!("  procedural"),
        Origin::Catalog { name } => println!("  catalog ({name})"),
    }
    println!();

    println!("Board:");
    for row in 0..puzzle.board.size() {
        print!("  ");
        for col in 0..puzzle.board.size() {
            let symbol = match puzzle.placement.entity_at(Position::new(row, col)) {
                Some(Entity::Start) => 'S',
                Some(Entity::Goal) => 'G',
                Some(Entity::Marker(Marker::A)) => 'a',
                Some(Entity::Marker(Marker::B)) => 'b',
                None => '.',
            };
            print!("{symbol} ");
        }
        println!();
    }
    println!();

    println!("Optimal moves:");
    println!("  {}", puzzle.optimal_moves);
    println!();

    if let Some(directions) = solution(&puzzle.board, &puzzle.placement) {
        let rendered: Vec<String> = directions.iter().map(ToString::to_string).collect();
        println!("Solution:");
        println!("  {}", rendered.join(", "));
    }
}
