//! Progress display for simulation batches

use crate::analysis::simulation::GameRecord;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static GAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Games: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed games of a batch on a single progress bar
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    best_tile: u32,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar shown yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            best_tile: 0,
        }
    }

    /// Show a bar sized for `game_count` games
    pub fn initialize(&mut self, game_count: usize) {
        let bar = ProgressBar::new(game_count as u64);
        bar.set_style(GAME_STYLE.clone());
        self.bar = Some(bar);
        self.best_tile = 0;
    }

    /// Record a finished game
    pub fn complete_game(&mut self, record: &GameRecord) {
        self.best_tile = self.best_tile.max(record.max_tile);
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("best {}", self.best_tile));
            bar.inc(1);
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
