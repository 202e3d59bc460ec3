#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates one maze and prints it.
//!
//! This stands in for the browser game loop: it asks the generation
//! pipeline for a layout and renders the result as ASCII. Player movement,
//! timers, and the mini-games live outside the engine.

use anyhow::Context;
use clap::Parser;
use escape_trials_core::{CellCoord, CellState};
use escape_trials_generation::{generate, grid_size_for_level};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generates a random Escape Trials maze and prints it.
#[derive(Debug, Parser)]
#[command(name = "escape-trials", version)]
struct Cli {
    /// Grid size in cells; at least 3.
    #[arg(long, conflicts_with = "level")]
    size: Option<u32>,

    /// Zero-based level; the grid grows by one cell per level.
    #[arg(long)]
    level: Option<u32>,

    /// Seed for reproducible generation; omitted means entropy-seeded.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let size = cli
        .size
        .unwrap_or_else(|| grid_size_for_level(cli.level.unwrap_or(0)));
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let layout = generate(size, &mut rng)
        .with_context(|| format!("failed to generate a size-{size} maze"))?;

    let maze = layout.maze();
    for row in 0..maze.size() {
        let mut line = String::with_capacity(maze.size() as usize);
        for column in 0..maze.size() {
            let state = maze
                .get(CellCoord::new(column, row))
                .context("rendering walked outside the grid")?;
            line.push(glyph(state));
        }
        println!("{line}");
    }
    println!(
        "goal: ({}, {})  challenges: {}",
        layout.goal().column(),
        layout.goal().row(),
        layout.challenges().len(),
    );

    Ok(())
}

fn glyph(state: CellState) -> char {
    match state {
        CellState::Wall => '#',
        CellState::Path => '.',
        CellState::Start => 'S',
        CellState::Goal => 'G',
        CellState::Challenge => '!',
    }
}
