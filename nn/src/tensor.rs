use crate::error::EncodeError;
use crate::feature_set::planes::{Planes, CHANNELS};
use crate::feature_set::FeatureSet;
use shakmaty::{fen::Fen, Board, CastlingMode, Chess, Position};
use std::fmt::{self, Debug, Display, Formatter};

/// Shape of an encoded position: channels, rows, columns
pub const SHAPE: [usize; 3] = [12, 8, 8];

const LEN: usize = 12 * 8 * 8;

/// One-hot occupancy tensor of shape [12, 8, 8], stored row-major.
/// See [`CHANNELS`] for the channel order and [`Planes`] for the cell layout.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PositionTensor {
    data: [i8; LEN],
}

impl PositionTensor {
    pub fn zeros() -> Self {
        Self { data: [0; LEN] }
    }

    /// Builds a tensor from a row-major [12, 8, 8] buffer, None if the length is wrong
    pub fn from_slice(from: &[i8]) -> Option<Self> {
        let data: [i8; LEN] = from.try_into().ok()?;
        Some(Self { data })
    }

    pub fn from_board(board: &Board) -> Self {
        let mut features = Vec::with_capacity(32);
        Planes::new().active_features(board, &mut features);

        let mut tensor = Self::zeros();
        for feature in features {
            tensor.data[feature as usize] = 1;
        }
        tensor
    }

    pub fn get(&self, channel: usize, row: usize, col: usize) -> i8 {
        self.data[channel * 64 + row * 8 + col]
    }

    /// The 8x8 grid of a single channel
    pub fn plane(&self, channel: usize) -> [[i8; 8]; 8] {
        let mut plane = [[0; 8]; 8];
        for (row, cells) in plane.iter_mut().enumerate() {
            let start = channel * 64 + row * 8;
            cells.copy_from_slice(&self.data[start..start + 8]);
        }
        plane
    }

    pub fn as_slice(&self) -> &[i8] {
        &self.data
    }

    /// Number of occupied cells across all channels (pieces on the board)
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&x| x == 1).count()
    }
}

/// Parses a FEN and encodes its piece placement
pub fn encode_position(fen: &str) -> Result<PositionTensor, EncodeError> {
    let invalid = |reason: String| EncodeError::InvalidPosition {
        fen: fen.to_string(),
        reason,
    };

    let setup: Fen = fen.parse().map_err(|err| invalid(format!("{}", err)))?;
    let position: Chess = setup
        .into_position(CastlingMode::Standard)
        .map_err(|err| invalid(format!("{}", err)))?;

    Ok(PositionTensor::from_board(position.board()))
}

impl Debug for PositionTensor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PositionTensor({} pieces)", self.count_ones())
    }
}

impl Display for PositionTensor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (channel, piece) in CHANNELS.iter().enumerate() {
            writeln!(f, "{} ({:?} {:?})", piece.char(), piece.color, piece.role)?;
            for row in self.plane(channel) {
                let cells: Vec<String> = row.iter().map(|x| x.to_string()).collect();
                writeln!(f, "{}", cells.join(" "))?;
            }
        }
        Ok(())
    }
}
