//! # Session Module
//!
//! Difficulty configuration, engine events, and score bookkeeping.
//!
//! The engines themselves never talk to storage or UI. Every operation on
//! [`crate::MazeGame`] or [`crate::BlockStackGame`] returns a vector of
//! [`GameEvent`] values, and the hosting play session feeds those into a
//! [`GameSession`] to keep cumulative score, cleared lines, and completion
//! state. A session owns exactly one engine instance at a time; when a
//! round ends the session is discarded along with the engine.

use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;

/// Difficulty tiers offered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Master,
}

impl Difficulty {
    /// Starting maze edge length for this tier.
    ///
    /// # Examples
    ///
    /// ```
    /// use neurogrid::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.maze_start_size(), 6);
    /// assert_eq!(Difficulty::Master.maze_start_size(), 15);
    /// ```
    pub fn maze_start_size(self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 8,
            Difficulty::Hard => 10,
            Difficulty::Master => 15,
        }
    }

    /// Multiplier applied to maze level-completion points.
    pub fn maze_score_multiplier(self) -> u64 {
        match self {
            Difficulty::Easy | Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::Master => 3,
        }
    }

    /// Base gravity interval for the block-stack engine, before level
    /// scaling and the senior-mode override.
    pub fn gravity_base_ms(self) -> u64 {
        match self {
            Difficulty::Easy | Difficulty::Medium => 800,
            Difficulty::Hard => 500,
            Difficulty::Master => 350,
        }
    }

    /// Whether the block-stack spawn pool includes the pentomino pieces.
    pub fn extended_piece_pool(self) -> bool {
        matches!(self, Difficulty::Master)
    }

    /// Multiplier applied to block-stack line-clear scores.
    pub fn clear_score_multiplier(self) -> u64 {
        match self {
            Difficulty::Master => 3,
            _ => 1,
        }
    }
}

/// Configuration the hosting application hands to either engine.
///
/// # Examples
///
/// ```
/// use neurogrid::{Difficulty, SessionConfig};
///
/// let config = SessionConfig::new(Difficulty::Hard).with_daily_challenge(2);
/// assert_eq!(config.daily_target_lines(), Some(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Selected difficulty tier
    pub difficulty: Difficulty,
    /// Senior mode slows gravity and maze growth
    pub senior_mode: bool,
    /// Daily-challenge round, if this session is part of one
    pub daily_challenge_round: Option<u32>,
}

impl SessionConfig {
    /// Creates a configuration for a free-play session.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            senior_mode: false,
            daily_challenge_round: None,
        }
    }

    /// Creates a small, fast configuration for tests.
    pub fn for_testing() -> Self {
        Self::new(Difficulty::Easy)
    }

    /// Enables senior mode.
    pub fn with_senior_mode(mut self) -> Self {
        self.senior_mode = true;
        self
    }

    /// Marks this session as round `round` of a daily challenge.
    pub fn with_daily_challenge(mut self, round: u32) -> Self {
        self.daily_challenge_round = Some(round);
        self
    }

    /// Line target for the block-stack engine, if this is a daily
    /// challenge session.
    pub fn daily_target_lines(&self) -> Option<u32> {
        self.daily_challenge_round
            .map(|round| round * config::DAILY_CHALLENGE_LINES_PER_ROUND)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Difficulty::Medium)
    }
}

/// Events emitted by engine operations.
///
/// Events carry the score *delta* they represent; cumulative totals live in
/// [`GameSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A maze level was completed (goal cell reached)
    LevelComplete {
        level: u32,
        score_delta: u64,
        maze_size: usize,
    },
    /// One or more playfield rows were cleared simultaneously
    LinesCleared {
        count: u32,
        score_delta: u64,
        total_lines: u32,
    },
    /// A daily-challenge line target was reached
    TargetReached { score: u64 },
    /// The session ended (block-stack spawn collision, or caller-imposed
    /// time/attempt exhaustion)
    GameOver { score: u64 },
    /// Human-readable diagnostic, surfaced by the demo binary
    Message { text: String },
}

/// Terminal status of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionCompletionState {
    /// The session is still running
    InProgress,
    /// A daily-challenge target was hit
    TargetReached,
    /// The engine reported game over
    GameOver,
}

/// Score and completion bookkeeping for one play session.
///
/// The stats collaborator in the hosting application persists the final
/// score; this type only tracks the live session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Unique identifier for this session
    pub id: Uuid,
    /// Configuration the session was started with
    pub config: SessionConfig,
    /// Cumulative score
    pub score: u64,
    /// Total lines cleared (block-stack sessions)
    pub lines_cleared: u32,
    /// Maze levels completed (maze sessions)
    pub levels_completed: u32,
    /// Whether the session has reached a terminal state
    pub completion_state: SessionCompletionState,
}

impl GameSession {
    /// Creates a fresh session for the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            score: 0,
            lines_cleared: 0,
            levels_completed: 0,
            completion_state: SessionCompletionState::InProgress,
        }
    }

    /// True while the session has not reached a terminal state.
    pub fn is_active(&self) -> bool {
        self.completion_state == SessionCompletionState::InProgress
    }

    /// Folds an engine event into the session stats.
    ///
    /// Returns follow-up events (currently user-facing messages) for the
    /// caller to surface.
    pub fn process_event(&mut self, event: &GameEvent) -> Vec<GameEvent> {
        let mut responses = Vec::new();

        match event {
            GameEvent::LevelComplete {
                level,
                score_delta,
                maze_size,
            } => {
                self.score += score_delta;
                self.levels_completed += 1;
                debug!(
                    "session {}: level {} complete (+{} pts, next maze {}x{})",
                    self.id, level, score_delta, maze_size, maze_size
                );
                responses.push(GameEvent::Message {
                    text: format!("Level {} complete! +{} points", level, score_delta),
                });
            }
            GameEvent::LinesCleared {
                count,
                score_delta,
                total_lines,
            } => {
                self.score += score_delta;
                self.lines_cleared = *total_lines;
                debug!(
                    "session {}: cleared {} line(s) (+{} pts)",
                    self.id, count, score_delta
                );
            }
            GameEvent::TargetReached { score } => {
                self.score = (*score).max(self.score);
                self.completion_state = SessionCompletionState::TargetReached;
                responses.push(GameEvent::Message {
                    text: format!("Challenge complete! Final score {}", score),
                });
            }
            GameEvent::GameOver { score } => {
                self.score = (*score).max(self.score);
                self.completion_state = SessionCompletionState::GameOver;
                responses.push(GameEvent::Message {
                    text: format!("Game over. Final score {}", score),
                });
            }
            GameEvent::Message { .. } => {}
        }

        responses
    }
}
