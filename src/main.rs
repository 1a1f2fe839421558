//! # Neurogrid Demo Binary
//!
//! Runs a deterministic, scripted session of either engine and prints
//! ASCII frames, exercising the same event flow the hosting application
//! uses.

use clap::{Parser, ValueEnum};
use log::info;

use neurogrid::maze::solver;
use neurogrid::{
    BlockStackGame, Coord, Difficulty, Direction, EngineResult, GameSession, MazeGame, Phase,
    SessionConfig,
};

/// Command line arguments for the neurogrid demo.
#[derive(Parser, Debug)]
#[command(name = "neurogrid")]
#[command(about = "Brain-training core engines: procedural mazes and falling blocks")]
#[command(version)]
struct Args {
    /// Which engine to demo
    #[arg(long, value_enum, default_value = "maze")]
    game: DemoGame,

    /// Random seed for generation
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Difficulty tier
    #[arg(long, value_enum, default_value = "medium")]
    difficulty: DifficultyArg,

    /// Enable senior mode (slower gravity, slower maze growth)
    #[arg(long)]
    senior: bool,

    /// Run as the given daily-challenge round
    #[arg(long)]
    daily_round: Option<u32>,

    /// Scripted steps for the block-stack demo
    #[arg(long, default_value_t = 40)]
    steps: u32,

    /// Dump the final session as JSON instead of a summary line
    #[arg(long)]
    dump_json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DemoGame {
    Maze,
    Blocks,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Master,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Master => Difficulty::Master,
        }
    }
}

fn main() -> EngineResult<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    info!("Starting neurogrid demo v{}", neurogrid::VERSION);

    let mut config = SessionConfig::new(args.difficulty.into());
    if args.senior {
        config = config.with_senior_mode();
    }
    if let Some(round) = args.daily_round {
        config = config.with_daily_challenge(round);
    }

    let session = match args.game {
        DemoGame::Maze => run_maze_demo(config, args.seed)?,
        DemoGame::Blocks => run_blocks_demo(config, args.seed, args.steps)?,
    };

    if args.dump_json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        println!(
            "session {}: score {}, lines {}, levels {}, state {:?}",
            session.id,
            session.score,
            session.lines_cleared,
            session.levels_completed,
            session.completion_state
        );
    }

    Ok(())
}

/// Generates a maze, prints it, and auto-solves it with the BFS solver.
fn run_maze_demo(config: SessionConfig, seed: u64) -> EngineResult<GameSession> {
    let mut session = GameSession::new(config);
    let mut game = MazeGame::new(config, seed)?;

    info!(
        "generated {0}x{0} maze, level {1}",
        game.grid().size(),
        game.level()
    );
    print!("{}", render_maze(&game));

    let path = solver::solve(game.grid()).ok_or_else(|| {
        neurogrid::EngineError::GenerationFailed("carved maze has no solution".to_string())
    })?;
    info!("solver path length: {}", path.len());

    for window in path.windows(2) {
        let direction = direction_between(window[0], window[1]);
        let result = game.try_move(direction)?;
        for event in &result.events {
            for response in session.process_event(event) {
                if let neurogrid::GameEvent::Message { text } = response {
                    println!("{}", text);
                }
            }
        }
    }

    Ok(session)
}

/// Runs a scripted block-stack session: shift, rotate, and tick in a
/// fixed pattern until the step budget or game over.
fn run_blocks_demo(config: SessionConfig, seed: u64, steps: u32) -> EngineResult<GameSession> {
    let mut session = GameSession::new(config);
    let mut game = BlockStackGame::new(config, seed)?;

    for step in 0..steps {
        if game.phase() == Phase::GameOver {
            break;
        }

        // Scripted inputs: wiggle, spin, and an occasional hard drop.
        match step % 4 {
            0 => {
                game.try_shift(-1);
            }
            1 => {
                game.try_rotate();
            }
            2 => {
                game.try_shift(1);
            }
            _ => {}
        }

        let events = if step % 8 == 7 {
            game.hard_drop()
        } else {
            game.tick(game.drop_interval_ms())
        };

        for event in &events {
            for response in session.process_event(event) {
                if let neurogrid::GameEvent::Message { text } = response {
                    println!("{}", text);
                }
            }
        }
    }

    print!("{}", render_playfield(&game));
    info!(
        "block demo finished: score {}, lines {}, level {}",
        game.score(),
        game.lines(),
        game.level()
    );

    Ok(session)
}

fn direction_between(from: Coord, to: Coord) -> Direction {
    if to.row < from.row {
        Direction::Up
    } else if to.row > from.row {
        Direction::Down
    } else if to.col < from.col {
        Direction::Left
    } else {
        Direction::Right
    }
}

/// Renders the maze walls with the player (`P`) and goal (`G`).
fn render_maze(game: &MazeGame) -> String {
    let grid = game.grid();
    let size = grid.size();
    let mut out = String::new();

    for row in 0..size {
        for col in 0..size {
            let coord = Coord::new(row, col);
            out.push('+');
            out.push_str(if grid.is_open(coord, Direction::Up) {
                "   "
            } else {
                "---"
            });
        }
        out.push_str("+\n");

        for col in 0..size {
            let coord = Coord::new(row, col);
            out.push(if grid.is_open(coord, Direction::Left) {
                ' '
            } else {
                '|'
            });
            let marker = if coord == game.player() {
                " P "
            } else if coord == game.goal() {
                " G "
            } else {
                "   "
            };
            out.push_str(marker);
        }
        out.push_str("|\n");
    }

    for _ in 0..size {
        out.push_str("+---");
    }
    out.push_str("+\n");
    out
}

/// Renders the playfield with locked cells as digits and the active
/// piece as `@`.
fn render_playfield(game: &BlockStackGame) -> String {
    let field = game.playfield();
    let shape = game.piece().shape();
    let pos = game.position();
    let mut out = String::new();

    for row in 0..field.rows() {
        out.push('|');
        for col in 0..field.cols() {
            let py = row as i32 - pos.y;
            let px = col as i32 - pos.x;
            let active = py >= 0
                && (py as usize) < shape.len()
                && px >= 0
                && (px as usize) < shape[py as usize].len()
                && shape[py as usize][px as usize] != 0
                && game.phase() == Phase::Falling;

            if active {
                out.push('@');
            } else {
                match field.cell(row, col) {
                    Some(0) | None => out.push('.'),
                    Some(value) => out.push(char::from(b'0' + value)),
                }
            }
        }
        out.push_str("|\n");
    }
    out.push('+');
    for _ in 0..field.cols() {
        out.push('-');
    }
    out.push_str("+\n");
    out
}
