//! Randomized iterative depth-first maze carving.
//!
//! The carver walks the grid with an explicit stack: from the cell on top
//! of the stack it picks a random unvisited neighbor, knocks down the
//! shared wall, and pushes the neighbor; with no unvisited neighbors left
//! it backtracks by popping. The walk visits every cell exactly once, so
//! the carved passages form a spanning tree over the grid — a perfect
//! maze with exactly N² − 1 passages and a unique path between any two
//! cells.

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use crate::generation::{GenerationConfig, Generator};
use crate::maze::{Coord, MazeGrid};
use crate::{EngineError, EngineResult};

/// Maze generator using randomized iterative depth-first carving.
#[derive(Debug, Clone, Default)]
pub struct DepthFirstCarver;

impl DepthFirstCarver {
    /// Creates a new carver.
    pub fn new() -> Self {
        Self
    }

    /// Carves a perfect maze of edge length `size` using `rng`.
    ///
    /// This is the level-advance entry point: [`crate::MazeGame`] threads
    /// one session RNG through successive carves.
    pub fn carve(&self, size: usize, rng: &mut StdRng) -> EngineResult<MazeGrid> {
        let mut grid = MazeGrid::new(size)?;

        let start = Coord::origin();
        let mut stack = vec![start];
        grid.mark_visited(start);

        while let Some(&current) = stack.last() {
            let neighbors = grid.unvisited_neighbors(current);
            if neighbors.is_empty() {
                stack.pop();
                continue;
            }

            let (neighbor, direction) = neighbors[rng.gen_range(0..neighbors.len())];
            grid.remove_wall(current, direction)?;
            grid.mark_visited(neighbor);
            stack.push(neighbor);
        }

        debug!(
            "carved {}x{} maze with {} passages",
            size,
            size,
            grid.open_passage_count()
        );

        Ok(grid)
    }

    /// Checks the spanning-tree invariant: exactly N² − 1 passages and
    /// every cell reachable from the start.
    fn check_perfectness(&self, grid: &MazeGrid) -> EngineResult<()> {
        let size = grid.size();
        let expected = size * size - 1;
        let passages = grid.open_passage_count();
        if passages != expected {
            return Err(EngineError::GenerationFailed(format!(
                "{}x{} maze has {} passages, expected {}",
                size, size, passages, expected
            )));
        }

        let reachable = crate::maze::solver::reachable_cell_count(grid);
        if reachable != size * size {
            return Err(EngineError::GenerationFailed(format!(
                "only {} of {} cells reachable from start",
                reachable,
                size * size
            )));
        }

        Ok(())
    }
}

impl Generator<MazeGrid> for DepthFirstCarver {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> EngineResult<MazeGrid> {
        let grid = self.carve(config.size, rng)?;
        self.check_perfectness(&grid)?;
        Ok(grid)
    }

    fn validate(&self, grid: &MazeGrid, _config: &GenerationConfig) -> EngineResult<()> {
        self.check_perfectness(grid)
    }

    fn generator_type(&self) -> &'static str {
        "DepthFirstCarver"
    }
}
