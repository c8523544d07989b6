use clap::Parser;

mod cli;
mod commands;
mod error;

use cli::Cli;
use commands::Commands;
pub use error::AppError;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();

    match &args.command {
        Commands::Stat(stat) => stat.run()?,
        Commands::Split(split) => split.run()?,
    };

    Ok(())
}
