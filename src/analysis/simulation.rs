//! Batch play with a uniformly random move policy
//!
//! A batch is driven by one seeded `StdRng`, shared across its games, so the
//! same seed and configuration always reproduce the same summary.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::{Direction, GameState, GridEngine};
use crate::io::error::{Result, invalid_parameter};

/// Parameters of a simulation batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of games to play
    pub games: usize,
    /// Cap on move attempts per game, blocked moves included
    pub max_moves: usize,
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
}

/// Outcome of one simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    /// Moves that changed the board
    pub moves: usize,
    /// Moves attempted, blocked ones included
    pub attempts: usize,
    /// Largest tile on the final board
    pub max_tile: u32,
    /// State when play stopped
    pub final_state: GameState,
}

/// Aggregate of a batch of games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Games recorded
    pub games: usize,
    /// Games that reached the winning tile
    pub wins: usize,
    /// Games that ran out of moves
    pub losses: usize,
    /// Games stopped by the move cap
    pub unfinished: usize,
    /// Largest tile seen in any game
    pub best_tile: u32,
    /// Board-changing moves across all games
    pub total_moves: usize,
    /// Number of games per final largest tile
    pub tile_histogram: BTreeMap<u32, usize>,
}

impl BatchSummary {
    /// Fold one game into the summary
    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        match game.final_state {
            GameState::Win => self.wins += 1,
            GameState::Lose => self.losses += 1,
            GameState::Playing => self.unfinished += 1,
        }
        self.best_tile = self.best_tile.max(game.max_tile);
        self.total_moves += game.moves;
        *self.tile_histogram.entry(game.max_tile).or_insert(0) += 1;
    }

    /// Mean board-changing moves per game, `0.0` for an empty batch
    pub const fn mean_moves(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games as f64
    }
}

/// Play one game choosing every move uniformly at random
///
/// # Errors
///
/// Returns an error if the board dimensions are invalid
pub fn play_random_game<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<GameRecord> {
    let mut engine = GridEngine::new(config.width, config.height, rng)?;
    let mut moves = 0;
    let mut attempts = 0;

    while attempts < config.max_moves && !engine.current_game_state().is_terminal() {
        let direction = Direction::random(engine.rng_mut());
        attempts += 1;
        if engine.step(direction)?.moved {
            moves += 1;
        }
    }

    Ok(GameRecord {
        moves,
        attempts,
        max_tile: engine.state().max_tile(),
        final_state: engine.current_game_state(),
    })
}

/// Play a batch of random games from `seed`
///
/// `on_game` is called after each game with its index and record.
///
/// # Errors
///
/// Returns an error if `games` or `max_moves` is zero, or the board
/// dimensions are invalid
pub fn run_batch<F>(config: &SimulationConfig, seed: u64, mut on_game: F) -> Result<BatchSummary>
where
    F: FnMut(usize, &GameRecord),
{
    if config.games == 0 {
        return Err(invalid_parameter("games", &config.games, &"must be positive"));
    }
    if config.max_moves == 0 {
        return Err(invalid_parameter(
            "max_moves",
            &config.max_moves,
            &"must be positive",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut summary = BatchSummary::default();
    for index in 0..config.games {
        let game = play_random_game(config, &mut rng)?;
        summary.record(&game);
        on_game(index, &game);
    }
    Ok(summary)
}
