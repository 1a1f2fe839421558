//! BFS solving and reachability over the maze wall graph.

use pathfinding::prelude::{bfs, bfs_reach};

use crate::maze::{Coord, MazeGrid};

/// Shortest start-to-goal path through the maze, including both
/// endpoints. Returns `None` if the goal is unreachable (never the case
/// for a carved maze).
///
/// # Examples
///
/// ```
/// use neurogrid::{DepthFirstCarver, GenerationConfig, Generator};
/// use neurogrid::generation::utils;
/// use neurogrid::maze::solver;
///
/// let config = GenerationConfig::new(7, 6).unwrap();
/// let mut rng = utils::create_rng(&config);
/// let grid = DepthFirstCarver::new().generate(&config, &mut rng).unwrap();
///
/// let path = solver::solve(&grid).unwrap();
/// assert_eq!(path.first(), Some(&grid.start()));
/// assert_eq!(path.last(), Some(&grid.goal()));
/// ```
pub fn solve(grid: &MazeGrid) -> Option<Vec<Coord>> {
    let goal = grid.goal();
    bfs(
        &grid.start(),
        |&coord| grid.open_neighbors(coord),
        |&coord| coord == goal,
    )
}

/// Number of cells reachable from the start through open walls.
pub fn reachable_cell_count(grid: &MazeGrid) -> usize {
    bfs_reach(grid.start(), |&coord| grid.open_neighbors(coord)).count()
}
