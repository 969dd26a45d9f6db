use clap::Args;
use indicatif::{HumanCount, ProgressBar, ProgressStyle};
use pgn_dataset::npy_format::write_dataset;
use pgn_dataset::{open_games, DatasetBuilder, DatasetConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct BuildDatasetCommand {
    /// Path of a .pgn or .pgn.zst file to read games.
    /// Games must be separated by a blank line after the headers and after the movetext
    #[arg(long, value_name = "input")]
    input: PathBuf,

    /// Directory to write features.npy and labels.npy
    #[arg(long, value_name = "output-dir")]
    output_dir: PathBuf,

    /// Stop after this many games have been retained
    #[arg(long, value_name = "max-games")]
    max_games: Option<usize>,

    /// Seed for the half-move sampler, random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Skip games that fail to parse, replay or encode instead of aborting
    #[arg(long, default_value = "false")]
    skip_invalid: bool,
}

pub fn build_dataset(cmd: BuildDatasetCommand) -> Result<(), Box<dyn Error>> {
    info!(
        input = %cmd.input.display(),
        output = %cmd.output_dir.display(),
        max_games = ?cmd.max_games,
        seed = ?cmd.seed,
        "building dataset"
    );

    let mut rng = match cmd.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let games = open_games(&cmd.input)?;
    let mut builder = DatasetBuilder::new(DatasetConfig {
        max_games: cmd.max_games,
        skip_invalid: cmd.skip_invalid,
    });

    let bar = ProgressBar::new_spinner().with_style(ProgressStyle::default_spinner().template(
        "{spinner:.green} [Elapsed {elapsed_precise}] [Games {human_pos} @ {per_sec}] {msg}",
    )?);

    builder.add_games(games, &mut rng, |summary| {
        bar.inc(1);
        bar.set_message(format!("[Samples {}]", HumanCount(summary.retained as u64)));
    })?;
    bar.finish();

    let (dataset, summary) = builder.finish();
    write_dataset(&dataset, &cmd.output_dir)?;

    info!(
        visited = summary.visited,
        retained = summary.retained,
        filtered = summary.filtered,
        too_short = summary.too_short,
        incomplete = summary.incomplete,
        skipped = summary.skipped,
        "done"
    );

    Ok(())
}
