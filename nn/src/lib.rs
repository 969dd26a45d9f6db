pub mod error;
pub mod feature_set;
pub mod outcome;
pub mod tensor;

pub use error::EncodeError;
pub use outcome::{encode_outcome, GameResult};
pub use tensor::{encode_position, PositionTensor};
