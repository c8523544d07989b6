use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "chunk-cli")]
#[clap(about = "Split files into fixed-size chunks", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
