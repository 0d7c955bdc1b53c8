//! Tic-tac-toe with time travel - terminal entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_history::{Cli, run_tui};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve()?;
    run_tui(config)
}
