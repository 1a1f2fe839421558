//! # Neurogrid Core
//!
//! Deterministic game engines backing a casual brain-training catalog.
//!
//! ## Architecture Overview
//!
//! The crate is split into two independent state machines plus the glue
//! they share:
//!
//! - **Maze Engine**: perfect-maze generation via randomized depth-first
//!   carving, and a player token validated against the maze wall graph
//! - **Block-Stack Engine**: a falling-polyomino playfield with collision
//!   detection, rotation, gravity ticks, and line clearing
//! - **Session System**: difficulty configuration and score/event
//!   bookkeeping shared by both engines
//! - **Generation System**: seedable procedural generation behind a common
//!   `Generator` trait
//!
//! Both engines are pure compute modules: they own no timers and perform no
//! I/O. All randomness flows through an injected [`rand::rngs::StdRng`], so
//! every session is reproducible from its seed. Operations report outcomes
//! as [`GameEvent`] values which the hosting session folds into its stats;
//! rejected moves are ordinary boolean outcomes, never errors.

pub mod blocks;
pub mod generation;
pub mod maze;
pub mod session;

pub use blocks::{BlockStackGame, Phase, Piece, PieceKind, PiecePosition, Playfield};
pub use generation::{DepthFirstCarver, GenerationConfig, Generator};
pub use maze::{Cell, Coord, Direction, MazeGame, MazeGrid, MoveResult, Walls};
pub use session::{Difficulty, GameEvent, GameSession, SessionCompletionState, SessionConfig};

/// Core error type for the Neurogrid engines.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Caller supplied a malformed configuration (e.g. zero-sized maze)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Engine state is invalid for the requested operation
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Generation failed to produce valid content
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Neurogrid codebase.
pub type EngineResult<T> = Result<T, EngineError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Playfield height in cells
    pub const PLAYFIELD_ROWS: usize = 20;

    /// Playfield width in cells
    pub const PLAYFIELD_COLS: usize = 10;

    /// Maze size never grows beyond this edge length
    pub const MAZE_SIZE_CAP: usize = 22;

    /// Points per maze cell of edge length on level completion
    pub const MAZE_POINTS_PER_CELL: u64 = 15;

    /// Lines required per daily-challenge round
    pub const DAILY_CHALLENGE_LINES_PER_ROUND: u32 = 5;

    /// Bonus awarded for finishing a daily challenge
    pub const DAILY_CHALLENGE_BONUS: u64 = 1000;

    /// Gravity interval never drops below this many milliseconds
    pub const MIN_DROP_INTERVAL_MS: u64 = 100;
}
