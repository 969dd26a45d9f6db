/// Errors that can occur while encoding positions or outcomes
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("invalid position {fen:?}: {reason}")]
    InvalidPosition { fen: String, reason: String },

    #[error("no label for result token {0:?}")]
    UnmappedOutcome(String),
}
