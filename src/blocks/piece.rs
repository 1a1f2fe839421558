//! Polyomino piece kinds and their rotation states.
//!
//! Shapes follow the classic tetromino matrices; Master difficulty adds
//! two pentominoes to the spawn pool. A [`Piece`] precomputes all four 90°
//! rotation states at construction, so rotating is an index bump rather
//! than a matrix recomputation.

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A shape matrix: `0` for empty, the piece's cell id otherwise.
pub type Shape = Vec<Vec<u8>>;

/// The canonical piece kinds.
///
/// `P` and `Y` are pentominoes that only spawn on Master difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
    P,
    Y,
}

impl PieceKind {
    /// The seven classic tetrominoes.
    pub fn standard_pool() -> &'static [PieceKind] {
        &[
            PieceKind::I,
            PieceKind::J,
            PieceKind::L,
            PieceKind::O,
            PieceKind::S,
            PieceKind::T,
            PieceKind::Z,
        ]
    }

    /// The Master-difficulty pool including the pentominoes.
    pub fn extended_pool() -> &'static [PieceKind] {
        &[
            PieceKind::I,
            PieceKind::J,
            PieceKind::L,
            PieceKind::O,
            PieceKind::S,
            PieceKind::T,
            PieceKind::Z,
            PieceKind::P,
            PieceKind::Y,
        ]
    }

    /// Draws a kind uniformly at random from the appropriate pool.
    pub fn random(rng: &mut StdRng, extended: bool) -> PieceKind {
        let pool = if extended {
            Self::extended_pool()
        } else {
            Self::standard_pool()
        };
        pool[rng.gen_range(0..pool.len())]
    }

    /// Numeric id written into locked playfield cells.
    pub fn cell_id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
            PieceKind::P => 8,
            PieceKind::Y => 9,
        }
    }

    /// The unrotated shape matrix for this kind.
    pub fn base_shape(self) -> Shape {
        let id = self.cell_id();
        let rows: &[&[u8]] = match self {
            PieceKind::I => &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
            PieceKind::J => &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]],
            PieceKind::L => &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]],
            PieceKind::O => &[&[1, 1], &[1, 1]],
            PieceKind::S => &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
            PieceKind::T => &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
            PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
            PieceKind::P => &[&[1, 1], &[1, 1], &[1, 0]],
            PieceKind::Y => &[&[1, 1, 1], &[0, 1, 0], &[0, 1, 0]],
        };
        rows.iter()
            .map(|row| row.iter().map(|&v| v * id).collect())
            .collect()
    }
}

/// Rotates a shape matrix 90° clockwise.
fn rotate_cw(shape: &Shape) -> Shape {
    let rows = shape.len();
    let cols = shape.first().map(|row| row.len()).unwrap_or(0);
    (0..cols)
        .map(|col| (0..rows).rev().map(|row| shape[row][col]).collect())
        .collect()
}

/// An active piece: its kind plus the four precomputed rotation states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    rotations: [Shape; 4],
    rotation: usize,
}

impl Piece {
    /// Creates a piece in its spawn orientation.
    ///
    /// # Examples
    ///
    /// ```
    /// use neurogrid::{Piece, PieceKind};
    ///
    /// let piece = Piece::new(PieceKind::O);
    /// assert_eq!(piece.width(), 2);
    /// ```
    pub fn new(kind: PieceKind) -> Self {
        let base = kind.base_shape();
        let r1 = rotate_cw(&base);
        let r2 = rotate_cw(&r1);
        let r3 = rotate_cw(&r2);
        Self {
            kind,
            rotations: [base, r1, r2, r3],
            rotation: 0,
        }
    }

    /// This piece's kind.
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// The current shape matrix.
    pub fn shape(&self) -> &Shape {
        &self.rotations[self.rotation]
    }

    /// The shape the piece would have after one clockwise rotation.
    pub fn rotated_shape(&self) -> &Shape {
        &self.rotations[(self.rotation + 1) % 4]
    }

    /// Commits one clockwise rotation.
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % 4;
    }

    /// Width of the current shape's bounding box.
    pub fn width(&self) -> usize {
        self.shape().first().map(|row| row.len()).unwrap_or(0)
    }

    /// Height of the current shape's bounding box.
    pub fn height(&self) -> usize {
        self.shape().len()
    }
}
