#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Dense cell-state container backing one generated maze.
//!
//! A [`Maze`] is owned by exactly one component at a time: the orchestrator
//! creates it, lends it mutably to each generation phase in turn, and moves
//! the finished value to the caller. Callers that need to flip a single cell
//! afterwards (clearing a solved challenge tile back to a plain path) clone
//! the maze and mutate the copy, leaving the original intact.

use escape_trials_core::{CellCoord, CellState, MazeError, MIN_GRID_SIZE};

/// Square grid of cell states stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    size: u32,
    cells: Vec<CellState>,
}

impl Maze {
    /// Allocates a `size x size` grid with every cell set to [`CellState::Wall`].
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidSize`] when `size` is below
    /// [`MIN_GRID_SIZE`]; sizes are rejected, never clamped.
    pub fn new(size: u32) -> Result<Self, MazeError> {
        if size < MIN_GRID_SIZE {
            return Err(MazeError::InvalidSize {
                size,
                minimum: MIN_GRID_SIZE,
            });
        }

        let capacity_u64 = u64::from(size) * u64::from(size);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Ok(Self {
            size,
            cells: vec![CellState::Wall; capacity],
        })
    }

    /// Side length of the grid in cells.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Reads the state of the provided cell.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] when either coordinate is `>= size`.
    pub fn get(&self, cell: CellCoord) -> Result<CellState, MazeError> {
        let index = self.index(cell).ok_or(self.out_of_bounds(cell))?;
        Ok(self.cells[index])
    }

    /// Writes the state of the provided cell.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] when either coordinate is `>= size`.
    pub fn set(&mut self, cell: CellCoord, state: CellState) -> Result<(), MazeError> {
        let index = self.index(cell).ok_or(self.out_of_bounds(cell))?;
        self.cells[index] = state;
        Ok(())
    }

    /// Reports whether the coordinate lies within the grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.size && cell.row() < self.size
    }

    /// Dense row-major view of every cell state.
    #[must_use]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterates every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |column| CellCoord::new(column, row)))
    }

    /// Counts the cells currently holding the provided state.
    #[must_use]
    pub fn count_of(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let row = usize::try_from(cell.row()).ok()?;
        let column = usize::try_from(cell.column()).ok()?;
        let width = usize::try_from(self.size).ok()?;
        row.checked_mul(width)?.checked_add(column)
    }

    const fn out_of_bounds(&self, cell: CellCoord) -> MazeError {
        MazeError::OutOfBounds {
            column: cell.column(),
            row: cell.row(),
            size: self.size,
        }
    }
}
