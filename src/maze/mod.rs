//! # Maze Module
//!
//! Grid representation, player state machine, and solver for the maze
//! engine.
//!
//! A maze is an N×N grid of [`Cell`]s whose walls, once carved by
//! [`crate::generation::DepthFirstCarver`], form a spanning tree over the
//! grid: every cell is reachable from every other cell by exactly one
//! simple path. [`MazeGame`] drives a player token through that wall graph
//! and handles goal detection and progressive difficulty scaling.

pub mod game;
pub mod grid;
pub mod solver;

pub use game::*;
pub use grid::*;

use serde::{Deserialize, Serialize};

/// A row/column coordinate within a maze grid.
///
/// # Examples
///
/// ```
/// use neurogrid::Coord;
///
/// let coord = Coord::new(2, 3);
/// assert_eq!(coord.row, 2);
/// assert_eq!(coord.col, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the origin coordinate (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// The neighbor one step in `direction`, if it stays inside a
    /// `size` × `size` grid.
    pub fn step(self, direction: Direction, size: usize) -> Option<Coord> {
        match direction {
            Direction::Up if self.row > 0 => Some(Coord::new(self.row - 1, self.col)),
            Direction::Down if self.row + 1 < size => Some(Coord::new(self.row + 1, self.col)),
            Direction::Left if self.col > 0 => Some(Coord::new(self.row, self.col - 1)),
            Direction::Right if self.col + 1 < size => Some(Coord::new(self.row, self.col + 1)),
            _ => None,
        }
    }
}

/// Cardinal movement directions through the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all four directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// The direction pointing back the way we came.
    ///
    /// # Examples
    ///
    /// ```
    /// use neurogrid::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
