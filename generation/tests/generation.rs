use std::collections::VecDeque;

use escape_trials_core::{CellCoord, CellState, Direction, MazeError, START_CELL};
use escape_trials_generation::{generate, generate_level, MazeLayout};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn layout(size: u32, seed: u64) -> MazeLayout {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(size, &mut rng).expect("generation succeeds")
}

/// Walks every non-wall cell reachable from the start.
fn reachable_count(layout: &MazeLayout) -> usize {
    let maze = layout.maze();
    let mut visited = vec![false; maze.cells().len()];
    let index =
        |cell: CellCoord| (cell.row() as usize) * (maze.size() as usize) + cell.column() as usize;
    visited[index(START_CELL)] = true;

    let mut count = 1;
    let mut frontier = VecDeque::from([START_CELL]);
    while let Some(cell) = frontier.pop_front() {
        for direction in Direction::CARDINALS {
            let Some(neighbor) = cell.step(direction) else {
                continue;
            };
            if !maze.contains(neighbor)
                || visited[index(neighbor)]
                || maze.get(neighbor) == Ok(CellState::Wall)
            {
                continue;
            }
            visited[index(neighbor)] = true;
            count += 1;
            frontier.push_back(neighbor);
        }
    }
    count
}

#[test]
fn ten_by_ten_layout_matches_the_contract() {
    let layout = layout(10, 1);
    let maze = layout.maze();

    assert_eq!(maze.size(), 10);
    assert_eq!(maze.cells().len(), 100);
    assert_eq!(maze.get(START_CELL), Ok(CellState::Start));
    for index in 0..10 {
        for cell in [
            CellCoord::new(index, 0),
            CellCoord::new(index, 9),
            CellCoord::new(0, index),
            CellCoord::new(9, index),
        ] {
            assert_eq!(maze.get(cell), Ok(CellState::Wall), "border cell {cell:?}");
        }
    }
}

#[test]
fn every_carved_cell_is_reachable_from_the_start() {
    for seed in [2, 9, 31] {
        let layout = layout(12, seed);
        let maze = layout.maze();
        let carved = maze.cells().len() - maze.count_of(CellState::Wall);
        assert_eq!(reachable_count(&layout), carved, "seed {seed}");
    }
}

#[test]
fn exactly_one_start_and_one_distinct_goal() {
    let layout = layout(10, 5);
    let maze = layout.maze();

    assert_eq!(maze.count_of(CellState::Start), 1);
    assert_eq!(maze.count_of(CellState::Goal), 1);
    assert_ne!(layout.goal(), START_CELL);
    assert_eq!(maze.get(layout.goal()), Ok(CellState::Goal));
}

#[test]
fn challenge_count_is_bounded_and_disjoint_from_start_and_goal() {
    for seed in 0..10 {
        let layout = layout(10, seed);
        let maze = layout.maze();
        let challenges = maze.count_of(CellState::Challenge);

        assert_eq!(challenges, layout.challenges().len(), "seed {seed}");
        assert!(challenges <= 8, "seed {seed}");
        // With plenty of corridor cells the full quota is always placed.
        assert_eq!(challenges, 8, "seed {seed}");
        assert!(!layout.challenges().contains(&START_CELL));
        assert!(!layout.challenges().contains(&layout.goal()));
    }
}

#[test]
fn minimum_size_degenerates_to_an_instant_win() {
    let layout = layout(3, 8);
    let maze = layout.maze();

    assert_eq!(layout.goal(), START_CELL);
    assert_eq!(maze.get(START_CELL), Ok(CellState::Start));
    assert_eq!(maze.count_of(CellState::Goal), 0);
    assert!(layout.challenges().is_empty());
}

#[test]
fn sizes_below_the_minimum_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        generate(2, &mut rng),
        Err(MazeError::InvalidSize {
            size: 2,
            minimum: 3,
        })
    );
}

#[test]
fn identical_seeds_generate_identical_layouts() {
    assert_eq!(layout(10, 1234), layout(10, 1234));
}

#[test]
fn independent_generations_never_repeat_a_carve_pattern() {
    let mut rng = StdRng::seed_from_u64(0xfeed);
    let mut walls: Vec<Vec<CellState>> = Vec::new();
    for _ in 0..100 {
        let seed = rng.gen();
        let layout = layout(10, seed);
        let carve_pattern: Vec<CellState> = layout
            .maze()
            .cells()
            .iter()
            .map(|state| match state {
                CellState::Wall => CellState::Wall,
                _ => CellState::Path,
            })
            .collect();
        assert!(
            !walls.contains(&carve_pattern),
            "two of 100 mazes shared a carve pattern",
        );
        walls.push(carve_pattern);
    }
}

#[test]
fn level_progression_grows_the_grid_by_one() {
    let mut rng = StdRng::seed_from_u64(42);
    let first = generate_level(0, &mut rng).expect("generation succeeds");
    let second = generate_level(3, &mut rng).expect("generation succeeds");
    assert_eq!(first.maze().size(), 10);
    assert_eq!(second.maze().size(), 13);
}

#[test]
fn solved_challenges_are_cleared_on_a_clone() {
    let layout = layout(10, 6);
    let solved_cell = layout.challenges()[0];

    let mut after_solve = layout.maze().clone();
    after_solve
        .set(solved_cell, CellState::Path)
        .expect("in bounds");

    assert_eq!(after_solve.get(solved_cell), Ok(CellState::Path));
    assert_eq!(
        layout.maze().get(solved_cell),
        Ok(CellState::Challenge),
        "the generated layout is never mutated in place",
    );
}
