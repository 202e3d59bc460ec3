#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Farthest-point locator that places the goal cell.
//!
//! A breadth-first search walks the carved corridor in unit orthogonal
//! steps from the start cell and keeps the first node dequeued at the
//! maximum distance. Distance is measured in single-cell moves, not in the
//! step-2 metric the carver uses, so long winding dead ends beat short
//! straight ones.

use std::collections::VecDeque;

use escape_trials_core::{CellCoord, CellState, Direction, MazeError, START_CELL};
use escape_trials_grid::Maze;

/// Locates the cell farthest from the start and marks it as the goal.
///
/// Neighbors are expanded in [`Direction::CARDINALS`] order and the
/// tracked maximum only moves on a strictly greater distance, so ties
/// resolve to the earliest dequeued candidate and the result is fully
/// determined by the carved structure.
///
/// In degenerate tiny mazes the start cell is the only carved cell; its
/// coordinate is returned as the goal but the cell keeps its `Start` state
/// rather than being overwritten. Callers treat goal == start as an
/// instantly won level.
///
/// # Errors
///
/// Returns [`MazeError::Precondition`] unless the start cell already holds
/// [`CellState::Start`], which the orchestrator marks after carving.
pub fn place_goal(maze: &mut Maze) -> Result<CellCoord, MazeError> {
    if maze.get(START_CELL)? != CellState::Start {
        return Err(MazeError::Precondition);
    }

    let mut visited = vec![false; maze.cells().len()];
    visited[flat_index(maze, START_CELL)] = true;

    let mut frontier = VecDeque::new();
    frontier.push_back((START_CELL, 0u32));

    let mut farthest = START_CELL;
    let mut farthest_distance = 0u32;

    while let Some((cell, distance)) = frontier.pop_front() {
        if distance > farthest_distance {
            farthest = cell;
            farthest_distance = distance;
        }
        for direction in Direction::CARDINALS {
            let Some(neighbor) = cell.step(direction) else {
                continue;
            };
            if !maze.contains(neighbor) {
                continue;
            }
            let index = flat_index(maze, neighbor);
            if visited[index] || maze.get(neighbor)? != CellState::Path {
                continue;
            }
            visited[index] = true;
            frontier.push_back((neighbor, distance + 1));
        }
    }

    if farthest != START_CELL {
        maze.set(farthest, CellState::Goal)?;
    }
    Ok(farthest)
}

fn flat_index(maze: &Maze, cell: CellCoord) -> usize {
    (cell.row() as usize) * (maze.size() as usize) + cell.column() as usize
}

#[cfg(test)]
mod tests {
    use super::place_goal;
    use escape_trials_core::{CellCoord, CellState, MazeError, START_CELL};
    use escape_trials_grid::Maze;

    #[test]
    fn rejects_a_maze_without_a_marked_start() {
        let mut maze = Maze::new(5).expect("valid size");
        assert_eq!(place_goal(&mut maze), Err(MazeError::Precondition));
    }

    #[test]
    fn single_cell_maze_keeps_its_start_state() {
        let mut maze = Maze::new(3).expect("valid size");
        maze.set(START_CELL, CellState::Start).expect("in bounds");

        let goal = place_goal(&mut maze).expect("marked start");

        assert_eq!(goal, START_CELL);
        assert_eq!(maze.get(START_CELL), Ok(CellState::Start));
        assert_eq!(maze.count_of(CellState::Goal), 0);
    }

    #[test]
    fn straight_corridor_places_the_goal_at_the_far_end() {
        let mut maze = Maze::new(7).expect("valid size");
        maze.set(START_CELL, CellState::Start).expect("in bounds");
        for column in 2..=5 {
            maze.set(CellCoord::new(column, 1), CellState::Path)
                .expect("in bounds");
        }

        let goal = place_goal(&mut maze).expect("marked start");

        assert_eq!(goal, CellCoord::new(5, 1));
        assert_eq!(maze.get(goal), Ok(CellState::Goal));
    }

    #[test]
    fn equal_arms_resolve_to_the_earliest_dequeued_end() {
        // Two arms of equal length: east along row 1 and south along
        // column 1. The east neighbor of the start is enqueued before the
        // south one, so the east tip dequeues first and wins the tie.
        let mut maze = Maze::new(5).expect("valid size");
        maze.set(START_CELL, CellState::Start).expect("in bounds");
        for column in [2, 3] {
            maze.set(CellCoord::new(column, 1), CellState::Path)
                .expect("in bounds");
        }
        for row in [2, 3] {
            maze.set(CellCoord::new(1, row), CellState::Path)
                .expect("in bounds");
        }

        let goal = place_goal(&mut maze).expect("marked start");

        assert_eq!(goal, CellCoord::new(3, 1));
    }
}
