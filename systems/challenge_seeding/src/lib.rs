#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Challenge tile seeder.
//!
//! Picks a bounded number of carved corridor cells and flags them as
//! challenge tiles. Candidates are drawn without replacement from the set
//! of cells that still hold [`CellState::Path`], so the start and goal
//! cells are never touched and the pass finishes in one sweep of the grid
//! even when fewer eligible cells exist than were requested.

use escape_trials_core::{CellCoord, CellState, MazeError};
use escape_trials_grid::Maze;
use rand::seq::SliceRandom;
use rand::Rng;

/// Marks up to `count` path cells as challenge tiles.
///
/// Returns the coordinates that were marked, in the order they were drawn.
/// When the maze holds fewer than `count` eligible path cells every one of
/// them is marked and the shorter list is returned; exhaustion is not an
/// error.
///
/// # Errors
///
/// Propagates [`MazeError::OutOfBounds`] from grid access; coordinates
/// gathered from the maze itself can never trigger it.
pub fn seed_challenges<R: Rng>(
    maze: &mut Maze,
    count: usize,
    rng: &mut R,
) -> Result<Vec<CellCoord>, MazeError> {
    let mut eligible: Vec<CellCoord> = Vec::new();
    for cell in maze.coords() {
        if maze.get(cell)? == CellState::Path {
            eligible.push(cell);
        }
    }

    let amount = count.min(eligible.len());
    let (chosen, _) = eligible.partial_shuffle(rng, amount);

    let chosen = chosen.to_vec();
    for cell in &chosen {
        maze.set(*cell, CellState::Challenge)?;
    }
    Ok(chosen)
}
