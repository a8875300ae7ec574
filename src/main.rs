//! CLI entry point for room-and-corridor level generation

use clap::Parser;
use gridcrawl::io::cli::{Cli, LevelProcessor};

fn main() -> gridcrawl::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let mut processor = LevelProcessor::new(cli);
    processor.process().map(|_| ())
}
