pub mod dataset;
pub mod error;
pub mod extract;
pub mod game_visitor;
pub mod npy_format;
pub mod record;
pub mod sampler;

pub use dataset::{build_dataset, Dataset, DatasetBuilder, DatasetConfig, DatasetSummary};
pub use error::DatasetError;
pub use extract::{extract_games, open_games, parse_record, GameExtractor};
pub use record::{GameRecord, MoveNumber, Replay};
pub use sampler::{last_halfmove_number, sample_random_state, state_at, GameState};
