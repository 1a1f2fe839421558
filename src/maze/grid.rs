//! Wall-graph grid underlying every maze level.
//!
//! A fresh grid starts with every wall closed; the carver knocks walls
//! down in matched pairs, so a cell's open side is always mirrored by the
//! neighbor on the other side of that wall.

use serde::{Deserialize, Serialize};

use crate::maze::{Coord, Direction};
use crate::{EngineError, EngineResult};

/// The four wall flags of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    /// All four walls closed.
    pub fn closed() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    /// Whether the wall facing `direction` is closed.
    pub fn is_closed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn open(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.top = false,
            Direction::Down => self.bottom = false,
            Direction::Left => self.left = false,
            Direction::Right => self.right = false,
        }
    }
}

/// One grid position with its wall flags and carving mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coord: Coord,
    pub walls: Walls,
    pub visited: bool,
}

impl Cell {
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            walls: Walls::closed(),
            visited: false,
        }
    }
}

/// An N×N grid of cells forming the maze wall graph.
///
/// # Examples
///
/// ```
/// use neurogrid::MazeGrid;
///
/// let grid = MazeGrid::new(5).unwrap();
/// assert_eq!(grid.size(), 5);
/// assert_eq!(grid.open_passage_count(), 0); // nothing carved yet
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MazeGrid {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl MazeGrid {
    /// Creates a fully-walled grid of edge length `size`.
    ///
    /// Fails fast on a non-positive size, since that indicates a caller
    /// bug rather than a runtime condition.
    pub fn new(size: usize) -> EngineResult<Self> {
        if size == 0 {
            return Err(EngineError::InvalidConfig(
                "maze size must be positive".to_string(),
            ));
        }

        let cells = (0..size)
            .map(|row| (0..size).map(|col| Cell::new(Coord::new(row, col))).collect())
            .collect();

        Ok(Self { size, cells })
    }

    /// Edge length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// The cell at `coord`, if in bounds.
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(coord.row)?.get(coord.col)
    }

    /// The start cell, always the top-left corner.
    pub fn start(&self) -> Coord {
        Coord::origin()
    }

    /// The goal corner opposite the start cell.
    pub fn goal(&self) -> Coord {
        Coord::new(self.size - 1, self.size - 1)
    }

    /// Whether the wall of `coord` facing `direction` has been carved
    /// open. Out-of-bounds coordinates report closed.
    pub fn is_open(&self, coord: Coord, direction: Direction) -> bool {
        self.cell(coord)
            .map(|cell| !cell.walls.is_closed(direction))
            .unwrap_or(false)
    }

    pub(crate) fn is_visited(&self, coord: Coord) -> bool {
        self.cell(coord).map(|cell| cell.visited).unwrap_or(true)
    }

    pub(crate) fn mark_visited(&mut self, coord: Coord) {
        if self.contains(coord) {
            self.cells[coord.row][coord.col].visited = true;
        }
    }

    /// Knocks down the wall between `coord` and its neighbor in
    /// `direction`, on both sides.
    pub(crate) fn remove_wall(&mut self, coord: Coord, direction: Direction) -> EngineResult<()> {
        let neighbor = coord.step(direction, self.size).ok_or_else(|| {
            EngineError::InvalidState(format!(
                "no neighbor of ({}, {}) in {:?}",
                coord.row, coord.col, direction
            ))
        })?;

        self.cells[coord.row][coord.col].walls.open(direction);
        self.cells[neighbor.row][neighbor.col]
            .walls
            .open(direction.opposite());
        Ok(())
    }

    /// Neighbors of `coord` not yet marked visited by the carver.
    pub(crate) fn unvisited_neighbors(&self, coord: Coord) -> Vec<(Coord, Direction)> {
        Direction::all()
            .into_iter()
            .filter_map(|direction| {
                let neighbor = coord.step(direction, self.size)?;
                (!self.is_visited(neighbor)).then_some((neighbor, direction))
            })
            .collect()
    }

    /// Neighbors reachable from `coord` through open walls.
    pub fn open_neighbors(&self, coord: Coord) -> Vec<Coord> {
        Direction::all()
            .into_iter()
            .filter_map(|direction| {
                let neighbor = coord.step(direction, self.size)?;
                self.is_open(coord, direction).then_some(neighbor)
            })
            .collect()
    }

    /// Number of carved passages, counting each knocked-down wall pair
    /// once. A perfect maze of edge length N has exactly N² − 1.
    pub fn open_passage_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.size {
            for col in 0..self.size {
                let coord = Coord::new(row, col);
                // Count only right/down openings so each passage is seen once.
                if self.is_open(coord, Direction::Right) {
                    count += 1;
                }
                if self.is_open(coord, Direction::Down) {
                    count += 1;
                }
            }
        }
        count
    }
}
