use crate::error::DatasetError;
use crate::extract::extract_games;
use crate::record::Replay;
use crate::sampler::sample_random_state;
use nn::{encode_outcome, encode_position, PositionTensor};
use rand::Rng;
use std::io::BufRead;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct DatasetConfig {
    /// Stop once this many games have been retained (not merely visited)
    pub max_games: Option<usize>,
    /// Log and skip games that fail to parse, replay or encode instead of aborting
    pub skip_invalid: bool,
}

/// Index-aligned features and labels, one pair per retained game
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub features: Vec<PositionTensor>,
    pub labels: Vec<i8>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub visited: usize,
    pub retained: usize,
    /// Draws and undecided games
    pub filtered: usize,
    /// Games with fewer than 2 half-moves
    pub too_short: usize,
    /// Games numbered past their recorded moves, usually set up from a FEN tag
    pub incomplete: usize,
    /// Invalid games skipped when `skip_invalid` is set
    pub skipped: usize,
}

/// Turns games into samples one at a time
pub struct DatasetBuilder {
    config: DatasetConfig,
    dataset: Dataset,
    summary: DatasetSummary,
}

impl DatasetBuilder {
    pub fn new(config: DatasetConfig) -> Self {
        DatasetBuilder {
            config,
            dataset: Dataset::default(),
            summary: DatasetSummary::default(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.config
            .max_games
            .is_some_and(|max| self.dataset.len() >= max)
    }

    pub fn summary(&self) -> &DatasetSummary {
        &self.summary
    }

    /// Samples one random state of the game and keeps it if the game was decisive
    pub fn add_game<G, R>(
        &mut self,
        game: Result<G, DatasetError>,
        rng: &mut R,
    ) -> Result<(), DatasetError>
    where
        G: Replay,
        R: Rng + ?Sized,
    {
        self.summary.visited += 1;

        match game.and_then(|game| Self::sample(&game, rng)) {
            Ok(Some((features, label))) => {
                self.dataset.features.push(features);
                self.dataset.labels.push(label);
                self.summary.retained += 1;
            }
            Ok(None) => self.summary.filtered += 1,
            Err(DatasetError::GameTooShort { plies }) => {
                debug!(game = self.summary.visited, plies, "game too short to sample");
                self.summary.too_short += 1;
            }
            Err(DatasetError::IncompleteGame { plies, recorded }) => {
                debug!(
                    game = self.summary.visited,
                    plies, recorded, "game does not record all of its moves"
                );
                self.summary.incomplete += 1;
            }
            // read failures are never skipped, the rest of the stream is gone
            Err(
                err @ (DatasetError::InvalidHalfMove { .. }
                | DatasetError::MalformedRecord(_)
                | DatasetError::Encode(_)),
            ) if self.config.skip_invalid => {
                warn!(game = self.summary.visited, error = %err, "skipping game");
                self.summary.skipped += 1;
            }
            Err(err) => return Err(err),
        }

        Ok(())
    }

    /// Feeds games until the stream ends or the builder is full.
    /// `on_game` sees the running summary after every visited game
    pub fn add_games<I, G, R, F>(
        &mut self,
        games: I,
        rng: &mut R,
        mut on_game: F,
    ) -> Result<(), DatasetError>
    where
        I: IntoIterator<Item = Result<G, DatasetError>>,
        G: Replay,
        R: Rng + ?Sized,
        F: FnMut(&DatasetSummary),
    {
        let mut games = games.into_iter();

        while !self.is_full() {
            let Some(game) = games.next() else {
                break;
            };
            self.add_game(game, rng)?;
            on_game(&self.summary);
        }

        Ok(())
    }

    fn sample<G, R>(game: &G, rng: &mut R) -> Result<Option<(PositionTensor, i8)>, DatasetError>
    where
        G: Replay,
        R: Rng + ?Sized,
    {
        let state = sample_random_state(game, rng)?;

        // keep only decisive games
        if !state.result.is_decisive() {
            return Ok(None);
        }

        let features = encode_position(&state.fen)?;
        let label = encode_outcome(state.result.as_str())?;

        Ok(Some((features, label)))
    }

    pub fn finish(self) -> (Dataset, DatasetSummary) {
        (self.dataset, self.summary)
    }
}

/// Extracts every game of the stream, samples one state per game and encodes
/// the decisive ones, stopping early once `max_games` samples are retained
pub fn build_dataset<B, R>(
    reader: B,
    config: &DatasetConfig,
    rng: &mut R,
) -> Result<(Dataset, DatasetSummary), DatasetError>
where
    B: BufRead,
    R: Rng + ?Sized,
{
    let mut builder = DatasetBuilder::new(config.clone());
    builder.add_games(extract_games(reader), rng, |_| {})?;

    Ok(builder.finish())
}
