use nn::EncodeError;
use std::io;

/// Errors that can occur while extracting, sampling or encoding games
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("half-move {index} is outside the valid range 0..={last}")]
    InvalidHalfMove { index: isize, last: usize },

    #[error("game has {plies} half-moves, at least 2 are needed to sample a state")]
    GameTooShort { plies: usize },

    #[error("game numbers {plies} half-moves but only {recorded} are recorded")]
    IncompleteGame { plies: usize, recorded: usize },

    #[error("malformed game record: {0}")]
    MalformedRecord(String),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
