mod cli;
mod config;
mod display;
mod error;
mod input;
mod metrics;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(&cli.log_level);
    cli::statusline::run(cli.statusline)
}
