//! Command-line arguments

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "combine")]
#[command(
    author,
    version,
    about = "Combine all Dart files into a single annotated text file",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
