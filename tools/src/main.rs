mod build_dataset;
mod encode;

use build_dataset::{build_dataset, BuildDatasetCommand};
use clap::{Parser, Subcommand};
use encode::{encode, EncodeCommand};
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Samples one position per decisive game of a PGN file and writes features/labels as .npy
    BuildDataset(BuildDatasetCommand),
    /// Prints the occupancy planes of a FEN position
    Encode(EncodeCommand),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    match args.command {
        Commands::BuildDataset(cmd) => build_dataset(cmd),
        Commands::Encode(cmd) => encode(cmd),
    }
}
