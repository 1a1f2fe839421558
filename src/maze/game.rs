//! Player-token state machine driving the maze engine.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::generation::{DepthFirstCarver, GenerationConfig, Generator};
use crate::maze::{Coord, Direction, MazeGrid};
use crate::session::{GameEvent, SessionConfig};
use crate::{config, EngineResult};

/// Outcome of a single move attempt.
///
/// A blocked move is an expected, frequent outcome — `moved` lets the UI
/// layer distinguish bump feedback from real movement without treating the
/// rejection as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Whether the player token actually relocated
    pub moved: bool,
    /// Events produced by the move (level completion)
    pub events: Vec<GameEvent>,
}

impl MoveResult {
    fn blocked() -> Self {
        Self {
            moved: false,
            events: Vec::new(),
        }
    }
}

/// The maze engine: a carved grid, a player token, and progressive
/// difficulty scaling.
///
/// Each level is a freshly carved perfect maze. Reaching the goal corner
/// emits a [`GameEvent::LevelComplete`], advances the level, and replaces
/// the grid wholesale; the player resets to the origin.
///
/// # Examples
///
/// ```
/// use neurogrid::{Difficulty, MazeGame, SessionConfig};
///
/// let mut game = MazeGame::new(SessionConfig::new(Difficulty::Easy), 42).unwrap();
/// assert_eq!(game.grid().size(), 6);
/// assert_eq!(game.player(), game.grid().start());
/// ```
#[derive(Debug)]
pub struct MazeGame {
    session: SessionConfig,
    carver: DepthFirstCarver,
    rng: StdRng,
    seed: u64,
    grid: MazeGrid,
    player: Coord,
    level: u32,
    size: usize,
}

impl MazeGame {
    /// Creates a maze game at the difficulty's starting size, seeded for
    /// reproducible carving.
    pub fn new(session: SessionConfig, seed: u64) -> EngineResult<Self> {
        let size = session.difficulty.maze_start_size();
        let carver = DepthFirstCarver::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let gen_config = GenerationConfig::new(seed, size)?;
        let grid = carver.generate(&gen_config, &mut rng)?;

        Ok(Self {
            session,
            carver,
            rng,
            seed,
            grid,
            player: Coord::origin(),
            level: 1,
            size,
        })
    }

    /// The current maze grid.
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Current player position.
    pub fn player(&self) -> Coord {
        self.player
    }

    /// Goal position of the current level.
    pub fn goal(&self) -> Coord {
        self.grid.goal()
    }

    /// Current level, starting at 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Attempts to move the player one cell.
    ///
    /// A closed wall leaves the position unchanged and produces no events.
    /// Reaching the goal completes the level: the score credit is
    /// proportional to the maze size times the difficulty multiplier, and
    /// a fresh maze replaces the current one.
    pub fn try_move(&mut self, direction: Direction) -> EngineResult<MoveResult> {
        if !self.grid.is_open(self.player, direction) {
            return Ok(MoveResult::blocked());
        }

        // An open wall always has an in-bounds neighbor behind it.
        let Some(next) = self.player.step(direction, self.size) else {
            return Ok(MoveResult::blocked());
        };
        self.player = next;

        if self.player != self.grid.goal() {
            return Ok(MoveResult {
                moved: true,
                events: Vec::new(),
            });
        }

        let completed_level = self.level;
        let score_delta = self.size as u64
            * config::MAZE_POINTS_PER_CELL
            * self.session.difficulty.maze_score_multiplier();

        self.size = self.next_size(completed_level);
        self.level += 1;
        self.regenerate()?;

        debug!(
            "maze level {} complete, +{} pts, next size {}",
            completed_level, score_delta, self.size
        );

        Ok(MoveResult {
            moved: true,
            events: vec![GameEvent::LevelComplete {
                level: completed_level,
                score_delta,
                maze_size: self.size,
            }],
        })
    }

    /// Replaces the grid with a freshly carved maze of the current size
    /// and resets the player to the origin.
    pub fn regenerate(&mut self) -> EngineResult<()> {
        let gen_config = GenerationConfig::new(self.seed, self.size)?;
        self.grid = self.carver.generate(&gen_config, &mut self.rng)?;
        self.player = Coord::origin();
        Ok(())
    }

    /// Size for the level after `completed_level`.
    ///
    /// Master regenerates at the cap every level; other tiers grow one
    /// cell per level until the cap. Senior mode grows every second level.
    fn next_size(&self, completed_level: u32) -> usize {
        if self.session.difficulty == crate::Difficulty::Master {
            return config::MAZE_SIZE_CAP;
        }
        if self.size >= config::MAZE_SIZE_CAP {
            return config::MAZE_SIZE_CAP;
        }
        if self.session.senior_mode && completed_level % 2 == 0 {
            return self.size;
        }
        self.size + 1
    }
}
