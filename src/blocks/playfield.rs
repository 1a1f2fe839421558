//! The locked-cell matrix and its collision / merge / line-clear
//! primitives.

use serde::{Deserialize, Serialize};

use crate::blocks::{PiecePosition, Shape};
use crate::{config, EngineError, EngineResult};

/// Fixed-size playfield of locked cells: `0` is empty, `1..=9` identifies
/// the piece kind that locked there.
///
/// Cells only mutate at lock time (merge) and at line-clear time; the
/// falling piece is never written into the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<u8>>,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}

impl Playfield {
    /// Creates the canonical empty 20×10 playfield.
    pub fn new() -> Self {
        Self {
            rows: config::PLAYFIELD_ROWS,
            cols: config::PLAYFIELD_COLS,
            cells: vec![vec![0; config::PLAYFIELD_COLS]; config::PLAYFIELD_ROWS],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The locked value at `(row, col)`, or `None` out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row)?.get(col).copied()
    }

    /// One full row of locked cells.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        self.cells.get(row).map(|r| r.as_slice())
    }

    /// Writes a locked value directly. Intended for scenario setup
    /// (tests, demos); gameplay mutation goes through the engine.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u8) -> EngineResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(EngineError::InvalidState(format!(
                "cell ({}, {}) outside {}x{} playfield",
                row, col, self.rows, self.cols
            )));
        }
        self.cells[row][col] = value;
        Ok(())
    }

    /// Shared collision primitive.
    ///
    /// True iff any occupied cell of `shape` anchored at `pos` maps to a
    /// coordinate past the left, right, or bottom edge, or onto a locked
    /// cell. Cells above the top row are not collisions; a freshly
    /// spawned piece may still be partially above the field.
    pub fn collides(&self, shape: &Shape, pos: PiecePosition) -> bool {
        for (sy, row) in shape.iter().enumerate() {
            for (sx, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let y = pos.y + sy as i32;
                let x = pos.x + sx as i32;
                if y >= self.rows as i32 || x < 0 || x >= self.cols as i32 {
                    return true;
                }
                if y >= 0 && self.cells[y as usize][x as usize] != 0 {
                    return true;
                }
            }
        }
        false
    }

    /// Merges a locking piece into the matrix. Cells still above the top
    /// row are skipped.
    pub fn merge(&mut self, shape: &Shape, pos: PiecePosition) {
        for (sy, row) in shape.iter().enumerate() {
            for (sx, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let y = pos.y + sy as i32;
                let x = pos.x + sx as i32;
                if y >= 0 && y < self.rows as i32 && x >= 0 && x < self.cols as i32 {
                    self.cells[y as usize][x as usize] = value;
                }
            }
        }
    }

    /// Removes every fully-occupied row, prepending that many empty rows
    /// at the top. Surviving rows keep their contents and relative order.
    ///
    /// Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> usize {
        let cols = self.cols;
        let mut kept: Vec<Vec<u8>> = Vec::with_capacity(self.rows);
        let mut cleared = 0;

        for row in self.cells.drain(..) {
            if row.iter().all(|&cell| cell != 0) {
                cleared += 1;
            } else {
                kept.push(row);
            }
        }

        let mut rebuilt = vec![vec![0; cols]; cleared];
        rebuilt.append(&mut kept);
        self.cells = rebuilt;

        cleared
    }

    /// Whether any cell in the matrix is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell == 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{Piece, PieceKind};

    fn fill_row(field: &mut Playfield, row: usize, value: u8) {
        for col in 0..field.cols() {
            field.set_cell(row, col, value).unwrap();
        }
    }

    #[test]
    fn test_new_playfield_dimensions() {
        let field = Playfield::new();
        assert_eq!(field.rows(), 20);
        assert_eq!(field.cols(), 10);
        assert!(field.is_empty());
    }

    #[test]
    fn test_set_cell_bounds_checked() {
        let mut field = Playfield::new();
        assert!(field.set_cell(0, 0, 1).is_ok());
        assert!(field.set_cell(20, 0, 1).is_err());
        assert!(field.set_cell(0, 10, 1).is_err());
    }

    #[test]
    fn test_collision_with_side_walls() {
        let field = Playfield::new();
        let piece = Piece::new(PieceKind::O);

        assert!(!field.collides(piece.shape(), PiecePosition::new(0, 0)));
        assert!(field.collides(piece.shape(), PiecePosition::new(-1, 0)));
        assert!(field.collides(piece.shape(), PiecePosition::new(9, 0)));
        assert!(!field.collides(piece.shape(), PiecePosition::new(8, 0)));
    }

    #[test]
    fn test_collision_with_floor() {
        let field = Playfield::new();
        let piece = Piece::new(PieceKind::O);

        assert!(!field.collides(piece.shape(), PiecePosition::new(4, 18)));
        assert!(field.collides(piece.shape(), PiecePosition::new(4, 19)));
    }

    #[test]
    fn test_collision_with_locked_cells() {
        let mut field = Playfield::new();
        field.set_cell(10, 4, 7).unwrap();
        let piece = Piece::new(PieceKind::O);

        assert!(field.collides(piece.shape(), PiecePosition::new(4, 9)));
        assert!(field.collides(piece.shape(), PiecePosition::new(4, 10)));
        assert!(!field.collides(piece.shape(), PiecePosition::new(5, 9)));
    }

    #[test]
    fn test_cells_above_top_are_free() {
        let field = Playfield::new();
        // Vertical I: anchor above the field, occupied cells at y = -1..=2.
        let mut piece = Piece::new(PieceKind::I);
        piece.rotate();
        assert!(!field.collides(piece.shape(), PiecePosition::new(0, -2)));
    }

    #[test]
    fn test_merge_writes_cell_ids() {
        let mut field = Playfield::new();
        let piece = Piece::new(PieceKind::T);
        field.merge(piece.shape(), PiecePosition::new(3, 17));

        assert_eq!(field.cell(17, 4), Some(6));
        assert_eq!(field.cell(18, 3), Some(6));
        assert_eq!(field.cell(18, 4), Some(6));
        assert_eq!(field.cell(18, 5), Some(6));
        assert_eq!(field.cell(17, 3), Some(0));
    }

    #[test]
    fn test_clear_single_full_row() {
        let mut field = Playfield::new();
        fill_row(&mut field, 19, 3);
        field.set_cell(18, 2, 5).unwrap();

        let cleared = field.clear_full_rows();

        assert_eq!(cleared, 1);
        assert_eq!(field.rows(), 20);
        assert!(field.row(0).unwrap().iter().all(|&c| c == 0));
        // The partial row shifts down into the cleared slot.
        assert_eq!(field.cell(19, 2), Some(5));
    }

    #[test]
    fn test_clear_preserves_row_order() {
        let mut field = Playfield::new();
        field.set_cell(16, 0, 1).unwrap();
        fill_row(&mut field, 17, 2);
        field.set_cell(18, 0, 3).unwrap();
        fill_row(&mut field, 19, 4);

        let cleared = field.clear_full_rows();

        assert_eq!(cleared, 2);
        assert_eq!(field.cell(18, 0), Some(1));
        assert_eq!(field.cell(19, 0), Some(3));
        assert!(field.row(17).unwrap().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_no_clear_on_partial_rows() {
        let mut field = Playfield::new();
        for col in 0..9 {
            field.set_cell(19, col, 1).unwrap();
        }
        assert_eq!(field.clear_full_rows(), 0);
        assert_eq!(field.cell(19, 0), Some(1));
    }
}
