//! # Block-Stack Module
//!
//! The falling-polyomino engine: playfield, pieces, and the gravity-driven
//! state machine.
//!
//! The engine is a pure state machine. It owns no timer; an external
//! scheduler calls [`BlockStackGame::tick`] with elapsed wall-clock time
//! and the engine decides when gravity applies. Rejected shifts and
//! rotations are ordinary boolean outcomes. The only terminal transition
//! is game over on spawn collision, after which the playfield is frozen.

pub mod game;
pub mod piece;
pub mod playfield;

pub use game::*;
pub use piece::*;
pub use playfield::*;

use serde::{Deserialize, Serialize};

/// Top-left anchor of the active piece's bounding box within the
/// playfield.
///
/// Signed so a shape's empty left columns may hang past the playfield
/// edge while its occupied cells stay in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiecePosition {
    pub x: i32,
    pub y: i32,
}

impl PiecePosition {
    /// Creates a new anchor position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The anchor shifted horizontally by `dx`.
    pub fn shifted(self, dx: i32) -> Self {
        Self::new(self.x + dx, self.y)
    }

    /// The anchor one row down.
    pub fn dropped(self) -> Self {
        Self::new(self.x, self.y + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_shifts() {
        let pos = PiecePosition::new(3, 0);
        assert_eq!(pos.shifted(-1), PiecePosition::new(2, 0));
        assert_eq!(pos.shifted(2), PiecePosition::new(5, 0));
        assert_eq!(pos.dropped(), PiecePosition::new(3, 1));
    }
}
