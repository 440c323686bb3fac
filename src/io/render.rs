//! Plain-text rendering of boards, terminal banners and batch summaries

use std::fmt;
use std::io::Write;

use crate::analysis::simulation::BatchSummary;
use crate::engine::GameState;
use crate::io::configuration::MIN_CELL_WIDTH;
use crate::io::error::Result;
use crate::spatial::Grid;

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().to_string().len().max(MIN_CELL_WIDTH);
        for row in self.view().rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|&value| {
                    if value == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{value:>width$}")
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Message shown when a game reaches `state`, `None` while still playing
pub const fn status_banner(state: GameState) -> Option<&'static str> {
    match state {
        GameState::Playing => None,
        GameState::Win => Some("You reached the winning tile!"),
        GameState::Lose => Some("No moves left. Game over."),
    }
}

/// Write a human-readable batch summary
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_summary<W: Write + ?Sized>(summary: &BatchSummary, out: &mut W) -> Result<()> {
    writeln!(out, "games:      {}", summary.games)?;
    writeln!(out, "wins:       {}", summary.wins)?;
    writeln!(out, "losses:     {}", summary.losses)?;
    writeln!(out, "unfinished: {}", summary.unfinished)?;
    writeln!(out, "best tile:  {}", summary.best_tile)?;
    writeln!(out, "mean moves: {:.1}", summary.mean_moves())?;
    writeln!(out, "highest tile per game:")?;
    for (tile, count) in &summary.tile_histogram {
        writeln!(out, "  {tile:>6}: {count}")?;
    }
    Ok(())
}
