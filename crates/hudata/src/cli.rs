use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Converts every topic in the built-in table and writes the index.
    Topics {
        /// The path to the source base directory containing `en_topics/` and `ru_topics/`.
        #[arg(short, long)]
        source: PathBuf,
        /// The path to the output directory, created if missing.
        #[arg(short, long)]
        output: PathBuf,
    },
}
