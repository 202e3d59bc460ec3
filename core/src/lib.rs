#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Escape Trials maze engine.
//!
//! This crate defines the vocabulary that connects the grid container, the
//! generation systems, and adapters: cell states, coordinates, cardinal
//! directions, the error taxonomy, and the level-progression constants.
//! Systems receive exclusive access to a maze for the duration of one
//! generation phase and communicate exclusively through these types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest grid size that leaves room for a bordered one-cell maze.
pub const MIN_GRID_SIZE: u32 = 3;

/// Grid size of the first level; each level advance grows it by one.
pub const BASE_GRID_SIZE: u32 = 10;

/// Number of challenge tiles the seeder attempts to place per maze.
pub const DEFAULT_CHALLENGE_COUNT: usize = 8;

/// Cell every maze is carved from and every player starts on.
pub const START_CELL: CellCoord = CellCoord::new(1, 1);

/// Computes the grid size used for the provided zero-based level.
#[must_use]
pub const fn grid_size_for_level(level: u32) -> u32 {
    BASE_GRID_SIZE.saturating_add(level)
}

/// State held by a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Solid cell that blocks movement.
    Wall,
    /// Carved corridor cell.
    Path,
    /// The unique cell the player begins on.
    Start,
    /// The unique cell that completes the level when reached.
    Goal,
    /// Carved cell that triggers a mini-game when stepped onto.
    Challenge,
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }

    /// Steps one cell in the provided direction, if the result stays in
    /// the non-negative coordinate quadrant.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<CellCoord> {
        self.step_by(direction, 1)
    }

    /// Steps `distance` cells in the provided direction.
    ///
    /// Returns `None` when the move would underflow a coordinate; callers
    /// apply their own upper-bound checks against the grid size.
    #[must_use]
    pub fn step_by(self, direction: Direction, distance: u32) -> Option<CellCoord> {
        match direction {
            Direction::North => self
                .row
                .checked_sub(distance)
                .map(|row| CellCoord::new(self.column, row)),
            Direction::East => self
                .column
                .checked_add(distance)
                .map(|column| CellCoord::new(column, self.row)),
            Direction::South => self
                .row
                .checked_add(distance)
                .map(|row| CellCoord::new(self.column, row)),
            Direction::West => self
                .column
                .checked_sub(distance)
                .map(|column| CellCoord::new(column, self.row)),
        }
    }
}

/// Cardinal directions used for carving steps and breadth-first expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// All four directions in the canonical expansion order.
    ///
    /// Breadth-first traversals enqueue neighbors in this order, which is
    /// what fixes the farthest-point tie-break to the earliest dequeued
    /// candidate.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
}

/// Errors surfaced by maze construction and generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum MazeError {
    /// The requested grid is too small to carve a bordered maze.
    #[error("grid size {size} is below the minimum of {minimum}")]
    InvalidSize {
        /// Size that was requested.
        size: u32,
        /// Smallest size the engine accepts.
        minimum: u32,
    },
    /// A coordinate fell outside the grid; always a programming error.
    #[error("cell ({column}, {row}) lies outside a {size}x{size} grid")]
    OutOfBounds {
        /// Column index of the offending access.
        column: u32,
        /// Row index of the offending access.
        row: u32,
        /// Size of the grid that rejected the access.
        size: u32,
    },
    /// A generation phase ran before the phase it depends on.
    #[error("goal placement requires a carved maze with a marked start cell")]
    Precondition,
}
