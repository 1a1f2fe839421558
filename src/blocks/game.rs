//! Gravity-driven state machine for the falling-block engine.
//!
//! The active piece cycles spawn → fall → lock → line-clear → spawn. The
//! single terminal transition is game over when a freshly spawned piece
//! already overlaps locked cells; from then on every operation is a no-op
//! and the playfield never mutates again.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::blocks::{Piece, PieceKind, PiecePosition, Playfield};
use crate::session::{GameEvent, SessionConfig};
use crate::{config, EngineResult};

/// Score credit per simultaneous line clear, indexed by clear count.
const CLEAR_SCORES: [u64; 6] = [0, 100, 300, 500, 800, 1200];

/// Gravity interval shrinks by this much per level.
const LEVEL_SPEEDUP_MS: u64 = 50;

/// Senior-mode gravity base, overriding the difficulty curve.
const SENIOR_GRAVITY_BASE_MS: u64 = 1500;

/// Lines per level advance.
const LINES_PER_LEVEL: u32 = 10;

/// Persistent phase of the engine.
///
/// Spawning, locking, and line-clear checks are transient steps inside a
/// single operation; between operations the engine is either falling or
/// finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A piece is in play
    Falling,
    /// Terminal: a spawned piece collided, or a challenge target ended
    /// the session
    GameOver,
}

/// The falling-block engine.
///
/// # Examples
///
/// ```
/// use neurogrid::{BlockStackGame, Difficulty, Phase, SessionConfig};
///
/// let mut game = BlockStackGame::new(SessionConfig::new(Difficulty::Medium), 42).unwrap();
/// assert_eq!(game.phase(), Phase::Falling);
///
/// // One gravity tick's worth of time; the piece soft-drops once.
/// let events = game.tick(800);
/// assert!(events.is_empty());
/// ```
#[derive(Debug)]
pub struct BlockStackGame {
    session: SessionConfig,
    rng: StdRng,
    playfield: Playfield,
    piece: Piece,
    pos: PiecePosition,
    next: PieceKind,
    phase: Phase,
    score: u64,
    lines: u32,
    level: u32,
    drop_accum_ms: u64,
}

impl BlockStackGame {
    /// Creates a game with an empty playfield and spawns the first piece.
    pub fn new(session: SessionConfig, seed: u64) -> EngineResult<Self> {
        Self::with_playfield(session, seed, Playfield::new())
    }

    /// Creates a game over a prepared playfield.
    ///
    /// Used by scenario tests; spawning happens immediately, so a blocked
    /// spawn region puts the game straight into [`Phase::GameOver`].
    pub fn with_playfield(
        session: SessionConfig,
        seed: u64,
        playfield: Playfield,
    ) -> EngineResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let extended = session.difficulty.extended_piece_pool();
        let first = PieceKind::random(&mut rng, extended);
        let next = PieceKind::random(&mut rng, extended);

        let mut game = Self {
            session,
            rng,
            playfield,
            piece: Piece::new(first),
            pos: PiecePosition::new(0, 0),
            next,
            phase: Phase::Falling,
            score: 0,
            lines: 0,
            level: 1,
            drop_accum_ms: 0,
        };

        // A blocked spawn region at construction is a legal scenario: the
        // game begins already in GameOver, visible through `phase()`.
        let _ = game.spawn(first);
        Ok(game)
    }

    /// The locked-cell matrix.
    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// The active piece.
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Anchor position of the active piece.
    pub fn position(&self) -> PiecePosition {
        self.pos
    }

    /// Kind of the piece that spawns after the current one locks.
    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cumulative score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Total lines cleared.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current level (advances every ten cleared lines).
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Milliseconds between gravity steps at the current level.
    ///
    /// `max(100, base − (level−1)·50)`; senior mode pins the base at
    /// 1500 ms regardless of difficulty.
    pub fn drop_interval_ms(&self) -> u64 {
        let base = if self.session.senior_mode {
            SENIOR_GRAVITY_BASE_MS
        } else {
            self.session.difficulty.gravity_base_ms()
        };
        let reduction = u64::from(self.level.saturating_sub(1)) * LEVEL_SPEEDUP_MS;
        base.saturating_sub(reduction)
            .max(config::MIN_DROP_INTERVAL_MS)
    }

    /// Advances the gravity accumulator by `delta_ms` of wall-clock time.
    ///
    /// When the accumulator passes the drop interval the piece soft-drops
    /// once, locking if it cannot descend. The caller owns the schedule;
    /// stopping the ticks pauses the game with no further state change.
    pub fn tick(&mut self, delta_ms: u64) -> Vec<GameEvent> {
        if self.phase == Phase::GameOver {
            return Vec::new();
        }

        self.drop_accum_ms += delta_ms;
        if self.drop_accum_ms < self.drop_interval_ms() {
            return Vec::new();
        }
        self.drop_accum_ms = 0;
        self.soft_drop()
    }

    /// Attempts to shift the active piece horizontally.
    ///
    /// Returns whether the piece moved; a rejected shift changes nothing.
    pub fn try_shift(&mut self, dx: i32) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        let candidate = self.pos.shifted(dx);
        if self.playfield.collides(self.piece.shape(), candidate) {
            return false;
        }
        self.pos = candidate;
        true
    }

    /// Attempts to rotate the active piece clockwise.
    ///
    /// If the rotation collides in place, one wall-kick retry is made with
    /// a ±1 horizontal offset away from the nearer wall before giving up.
    pub fn try_rotate(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }

        let rotated = self.piece.rotated_shape();
        if !self.playfield.collides(rotated, self.pos) {
            self.piece.rotate();
            return true;
        }

        let kick = if self.pos.x > self.playfield.cols() as i32 / 2 {
            -1
        } else {
            1
        };
        let kicked = self.pos.shifted(kick);
        if self.playfield.collides(rotated, kicked) {
            return false;
        }
        self.pos = kicked;
        self.piece.rotate();
        true
    }

    /// Moves the piece one row down, locking it if the step collides.
    pub fn soft_drop(&mut self) -> Vec<GameEvent> {
        if self.phase == Phase::GameOver {
            return Vec::new();
        }
        let candidate = self.pos.dropped();
        if self.playfield.collides(self.piece.shape(), candidate) {
            return self.lock();
        }
        self.pos = candidate;
        Vec::new()
    }

    /// Drops the piece until the next step would collide, then locks.
    pub fn hard_drop(&mut self) -> Vec<GameEvent> {
        if self.phase == Phase::GameOver {
            return Vec::new();
        }
        while !self.playfield.collides(self.piece.shape(), self.pos.dropped()) {
            self.pos = self.pos.dropped();
        }
        self.lock()
    }

    /// Merges the active piece, clears lines, scores, and spawns the next
    /// piece.
    fn lock(&mut self) -> Vec<GameEvent> {
        self.playfield.merge(self.piece.shape(), self.pos);
        let cleared = self.playfield.clear_full_rows();
        let mut events = Vec::new();

        if cleared > 0 {
            let clear_index = cleared.min(CLEAR_SCORES.len() - 1);
            let score_delta = CLEAR_SCORES[clear_index]
                * u64::from(self.level)
                * self.session.difficulty.clear_score_multiplier();
            self.score += score_delta;

            let previous_lines = self.lines;
            self.lines += cleared as u32;
            if self.lines / LINES_PER_LEVEL > previous_lines / LINES_PER_LEVEL {
                self.level += 1;
                debug!("block-stack level up to {}", self.level);
            }

            events.push(GameEvent::LinesCleared {
                count: cleared as u32,
                score_delta,
                total_lines: self.lines,
            });

            if let Some(target) = self.session.daily_target_lines() {
                if self.lines >= target {
                    self.score += config::DAILY_CHALLENGE_BONUS;
                    self.phase = Phase::GameOver;
                    events.push(GameEvent::TargetReached { score: self.score });
                    return events;
                }
            }
        }

        let next = self.next;
        self.next = PieceKind::random(&mut self.rng, self.session.difficulty.extended_piece_pool());
        events.extend(self.spawn(next));
        events
    }

    /// Places a fresh piece at the spawn anchor: horizontally centered on
    /// the top row. A collision here is the terminal game-over
    /// transition.
    fn spawn(&mut self, kind: PieceKind) -> Vec<GameEvent> {
        let piece = Piece::new(kind);
        let pos = PiecePosition::new(
            self.playfield.cols() as i32 / 2 - piece.width() as i32 / 2,
            0,
        );

        if self.playfield.collides(piece.shape(), pos) {
            self.phase = Phase::GameOver;
            debug!("spawn collision, game over at {} points", self.score);
            return vec![GameEvent::GameOver { score: self.score }];
        }

        self.piece = piece;
        self.pos = pos;
        Vec::new()
    }
}
