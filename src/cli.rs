use clap::{Parser, Subcommand};

use crate::config::DEFAULT_ARCHIVE_NAME;

/// Reads a grid of '*' and '-' from stdin and prints the largest
/// non-overlapping bounding box of its '*' groups.
#[derive(Parser)]
#[command(name = "bounding-box", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print every box instead of the largest (empty if any two overlap)
    #[arg(long)]
    pub all: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the shell launcher that runs the packaged archive
    Launcher {
        /// Path of the script to create (parent directory must exist)
        output: String,

        /// Archive file name the script execs from its own directory
        #[arg(long, default_value = DEFAULT_ARCHIVE_NAME)]
        archive_name: String,
    },
}
