//! Creates the per-topic JSON files and the `topics.json` index.

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use hudata::{
    convert::{self, Config},
    topics,
};

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Topics { source, output } => {
            let config = Config {
                source_base_dir: source,
                output_dir: output,
                topics: topics::TOPICS,
            };
            convert::run(&config)?;
        }
    }

    Ok(())
}
