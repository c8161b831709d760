//! combine: Combine source files into a single annotated text file

use clap::Parser;
use combine_cli::commands::collect;
use combine_cli::{Cli, logging};
use combine_core::CollectConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    collect::run(&CollectConfig::default())?;
    Ok(())
}
