//! CLI entry point for playing and simulating the sliding-tile merge puzzle

use clap::Parser;
use tilemerge::io::cli::{Cli, SessionRunner};

fn main() -> tilemerge::Result<()> {
    let cli = Cli::parse();
    let runner = SessionRunner::new(cli);
    let stdout = std::io::stdout();
    runner.run(&mut stdout.lock())
}
