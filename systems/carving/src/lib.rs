#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Recursive-backtracker corridor carver.
//!
//! Carving operates on a step size of two: odd coordinates hold corridor
//! centers and the even coordinates between them hold the walls that get
//! knocked through. This keeps every corridor and every dividing wall
//! exactly one cell wide, and it means the border ring is never touched.
//!
//! The classic recursive formulation is replaced with an explicit frame
//! stack so large grids cannot exhaust the call stack; the carve order is
//! identical to the recursive form.

use escape_trials_core::{CellCoord, CellState, Direction, MazeError, START_CELL};
use escape_trials_grid::Maze;
use rand::seq::SliceRandom;
use rand::Rng;

/// Distance between two corridor centers.
const CARVE_STEP: u32 = 2;

/// One backtracking frame: a carved cell plus its unexplored directions.
///
/// Directions are shuffled once when the frame is created, never reused,
/// so every frame scans its candidates in an independent random order.
struct Frame {
    cell: CellCoord,
    directions: [Direction; 4],
    cursor: usize,
}

impl Frame {
    fn new<R: Rng>(cell: CellCoord, rng: &mut R) -> Self {
        let mut directions = Direction::CARDINALS;
        directions.shuffle(rng);
        Self {
            cell,
            directions,
            cursor: 0,
        }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let direction = self.directions.get(self.cursor).copied();
        self.cursor += 1;
        direction
    }
}

/// Carves a perfect maze into an all-wall grid, starting from `(1, 1)`.
///
/// Every odd-coordinate cell strictly inside the border becomes part of a
/// single connected, cycle-free corridor tree; all remaining cells stay
/// walls. Each carve step strictly grows the path count, so the walk
/// terminates after at most one frame per interior cell.
///
/// # Errors
///
/// Propagates [`MazeError::OutOfBounds`] from grid access; a grid built by
/// [`Maze::new`] can never trigger it.
pub fn carve<R: Rng>(maze: &mut Maze, rng: &mut R) -> Result<(), MazeError> {
    maze.set(START_CELL, CellState::Path)?;

    let mut stack = vec![Frame::new(START_CELL, rng)];
    loop {
        let (current, next) = match stack.last_mut() {
            Some(frame) => (frame.cell, frame.next_direction()),
            None => break,
        };
        let Some(direction) = next else {
            let _ = stack.pop();
            continue;
        };

        let Some(target) = current.step_by(direction, CARVE_STEP) else {
            continue;
        };
        if !is_interior(target, maze.size()) || maze.get(target)? != CellState::Wall {
            continue;
        }

        let Some(between) = current.step(direction) else {
            continue;
        };
        maze.set(between, CellState::Path)?;
        maze.set(target, CellState::Path)?;
        stack.push(Frame::new(target, rng));
    }

    Ok(())
}

/// Reports whether the cell lies strictly inside the border ring.
#[must_use]
pub const fn is_interior(cell: CellCoord, size: u32) -> bool {
    cell.column() > 0 && cell.row() > 0 && cell.column() + 1 < size && cell.row() + 1 < size
}
