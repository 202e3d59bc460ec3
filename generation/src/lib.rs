#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Maze generation pipeline.
//!
//! [`generate`] is the single entry point the game loop calls once per
//! level: it allocates a fresh all-wall grid, carves the corridor tree,
//! marks the start, places the goal at the farthest carved cell, seeds the
//! challenge tiles, and hands the finished layout back by value. Every
//! call owns its own grid and random walk state, so independent calls may
//! run concurrently (for instance pre-generating the next level).

use escape_trials_core::{CellCoord, CellState, MazeError, DEFAULT_CHALLENGE_COUNT, START_CELL};
use escape_trials_grid::Maze;
use escape_trials_system_carving::carve;
use escape_trials_system_challenge_seeding::seed_challenges;
use escape_trials_system_goal_placement::place_goal;
use rand::Rng;

pub use escape_trials_core::grid_size_for_level;

/// Finished maze layout handed to the game loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeLayout {
    maze: Maze,
    goal: CellCoord,
    challenges: Vec<CellCoord>,
}

impl MazeLayout {
    /// The generated grid.
    #[must_use]
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Coordinate of the goal cell.
    ///
    /// Equals [`START_CELL`] only in degenerate tiny mazes whose single
    /// carved cell is the start; callers treat that as an instantly won
    /// level.
    #[must_use]
    pub const fn goal(&self) -> CellCoord {
        self.goal
    }

    /// Coordinates of the seeded challenge tiles.
    #[must_use]
    pub fn challenges(&self) -> &[CellCoord] {
        &self.challenges
    }

    /// Consumes the layout, yielding its parts.
    #[must_use]
    pub fn into_parts(self) -> (Maze, CellCoord, Vec<CellCoord>) {
        (self.maze, self.goal, self.challenges)
    }
}

/// Generates a complete `size x size` maze.
///
/// The player always starts at [`START_CELL`]; the caller resets its own
/// player position there on every call. Once returned, the layout is never
/// mutated by the engine — a caller clearing a solved challenge tile
/// clones the grid and flips the one cell on the copy.
///
/// # Errors
///
/// Returns [`MazeError::InvalidSize`] when `size` is below the minimum.
/// A failed call produces no partial layout.
pub fn generate<R: Rng>(size: u32, rng: &mut R) -> Result<MazeLayout, MazeError> {
    let mut maze = Maze::new(size)?;
    carve(&mut maze, rng)?;
    maze.set(START_CELL, CellState::Start)?;
    let goal = place_goal(&mut maze)?;
    let challenges = seed_challenges(&mut maze, DEFAULT_CHALLENGE_COUNT, rng)?;
    Ok(MazeLayout {
        maze,
        goal,
        challenges,
    })
}

/// Generates the maze for a zero-based level, growing the grid by one cell
/// per level advance.
///
/// # Errors
///
/// Returns [`MazeError::InvalidSize`] only if the base size constant were
/// ever lowered below the minimum; all levels are valid today.
pub fn generate_level<R: Rng>(level: u32, rng: &mut R) -> Result<MazeLayout, MazeError> {
    generate(grid_size_for_level(level), rng)
}
