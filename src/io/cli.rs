//! Command-line host: interactive or scripted play and random-policy batches

use crate::analysis::simulation::{BatchSummary, SimulationConfig, run_batch};
use crate::engine::{Direction, GameState, GridEngine};
use crate::io::configuration::{
    DEFAULT_GAMES, DEFAULT_HEIGHT, DEFAULT_MAX_MOVES, DEFAULT_SEED, DEFAULT_WIDTH,
    MAX_GRID_DIMENSION,
};
use crate::io::error::{EngineError, Result, file_system_error, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::render::{status_banner, write_summary};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilemerge")]
#[command(author, version, about = "Play or simulate the sliding-tile merge puzzle")]
/// Command-line arguments for the puzzle host
pub struct Cli {
    /// Action to run
    #[command(subcommand)]
    pub command: Command,
}

/// Host actions
#[derive(Subcommand)]
pub enum Command {
    /// Play a game from stdin or a move script
    Play(PlayArgs),
    /// Play many games with random moves and summarize them
    Simulate(SimulateArgs),
}

/// Arguments of the `play` action
#[derive(Args)]
pub struct PlayArgs {
    /// Random seed for reproducible tile spawns
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Board width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Board height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// File with one move per line; reads stdin when absent
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Print only the final board
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments of the `simulate` action
#[derive(Args)]
pub struct SimulateArgs {
    /// Random seed for the whole batch
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of games to play
    #[arg(short, long, default_value_t = DEFAULT_GAMES)]
    pub games: usize,

    /// Cap on move attempts per game
    #[arg(short, long, default_value_t = DEFAULT_MAX_MOVES)]
    pub max_moves: usize,

    /// Board width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Board height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl SimulateArgs {
    /// Batch parameters described by these arguments
    pub const fn config(&self) -> SimulationConfig {
        SimulationConfig {
            games: self.games,
            max_moves: self.max_moves,
            width: self.width,
            height: self.height,
        }
    }
}

/// Dispatches parsed arguments to the matching action
pub struct SessionRunner {
    cli: Cli,
}

impl SessionRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected action, writing boards and summaries to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if arguments are out of range, the move script cannot
    /// be read or contains an unknown move, or writing fails
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Command::Play(args) => {
                if let Some(path) = &args.script {
                    let file = File::open(path)
                        .map_err(|error| file_system_error(path, "open", error))?;
                    run_play(args, BufReader::new(file), true, out)?;
                } else {
                    let stdin = std::io::stdin();
                    run_play(args, stdin.lock(), false, out)?;
                }
            }
            Command::Simulate(args) => {
                run_simulation(args, out)?;
            }
        }
        Ok(())
    }
}

/// Play one game reading a move per line from `input`
///
/// Blank lines and lines starting with `#` are ignored; `q` or `quit` stops.
/// With `strict` an unknown move is an error, otherwise it is reported on
/// stderr and skipped. Returns the state when play stopped.
///
/// # Errors
///
/// Returns an error if the board size is out of range, reading `input`
/// fails, a move is unknown in strict mode, or writing fails
pub fn run_play<B: BufRead, W: Write>(
    args: &PlayArgs,
    input: B,
    strict: bool,
    out: &mut W,
) -> Result<GameState> {
    validate_dimension("width", args.width)?;
    validate_dimension("height", args.height)?;

    let mut engine = GridEngine::with_seed(args.width, args.height, args.seed)?;
    if !args.quiet {
        write!(out, "{}", engine.state())?;
    }

    for line in input.lines() {
        let line = line.map_err(|error| file_system_error("<input>", "read", error))?;
        let command = line.trim();
        if command.is_empty() || command.starts_with('#') {
            continue;
        }
        if matches!(command, "q" | "quit") {
            break;
        }

        let direction = match command.parse::<Direction>() {
            Ok(direction) => direction,
            Err(error) if strict => return Err(error),
            Err(error) => {
                report_skipped(&error);
                continue;
            }
        };

        let outcome = engine.step(direction)?;
        if !args.quiet {
            if outcome.moved {
                writeln!(out, "> {direction}")?;
            } else {
                writeln!(out, "> {direction} (blocked)")?;
            }
            write!(out, "{}", engine.state())?;
        }
        if outcome.state.is_terminal() {
            break;
        }
    }

    let state = engine.current_game_state();
    if args.quiet {
        write!(out, "{}", engine.state())?;
    }
    if let Some(banner) = status_banner(state) {
        writeln!(out, "{banner}")?;
    }
    Ok(state)
}

/// Run a random-policy batch and write its summary
///
/// # Errors
///
/// Returns an error if the parameters are out of range or writing fails
pub fn run_simulation<W: Write>(args: &SimulateArgs, out: &mut W) -> Result<BatchSummary> {
    validate_dimension("width", args.width)?;
    validate_dimension("height", args.height)?;

    let mut progress = (!args.quiet).then(ProgressManager::default);
    if let Some(ref mut pm) = progress {
        pm.initialize(args.games);
    }

    let summary = run_batch(&args.config(), args.seed, |_, record| {
        if let Some(ref mut pm) = progress {
            pm.complete_game(record);
        }
    })?;

    if let Some(ref pm) = progress {
        pm.finish();
    }

    write_summary(&summary, out)?;
    Ok(summary)
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 || value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

// Allow print for user feedback on skipped interactive input
#[allow(clippy::print_stderr)]
fn report_skipped(error: &EngineError) {
    eprintln!("Skipping: {error}");
}
