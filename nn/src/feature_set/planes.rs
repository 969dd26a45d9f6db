use crate::feature_set::FeatureSet;
use shakmaty::{Board, Color, Piece, Role, Square};

/// Pieces in channel order: white first, then black, kings to pawns
pub const CHANNELS: [Piece; 12] = [
    Piece { color: Color::White, role: Role::King },
    Piece { color: Color::White, role: Role::Queen },
    Piece { color: Color::White, role: Role::Rook },
    Piece { color: Color::White, role: Role::Bishop },
    Piece { color: Color::White, role: Role::Knight },
    Piece { color: Color::White, role: Role::Pawn },
    Piece { color: Color::Black, role: Role::King },
    Piece { color: Color::Black, role: Role::Queen },
    Piece { color: Color::Black, role: Role::Rook },
    Piece { color: Color::Black, role: Role::Bishop },
    Piece { color: Color::Black, role: Role::Knight },
    Piece { color: Color::Black, role: Role::Pawn },
];

/// Occupancy planes, one 8x8 grid per piece kind and color.
/// Always from white's point of view: row 0 is rank 8, column 0 is file a.
/// Tuple: <channel, row, col>
pub struct Planes;

impl Planes {
    pub fn new() -> Self {
        Planes
    }

    /// Row and column of a square inside a plane
    pub fn cell(square: Square) -> (usize, usize) {
        let index = square as usize; // 0 = a1, 7 = h1, 63 = h8
        (7 - index / 8, index % 8)
    }

    pub fn make_index(channel: usize, square: Square) -> u16 {
        let (row, col) = Self::cell(square);

        (channel * 64 + row * 8 + col) as u16
    }
}

impl FeatureSet for Planes {
    fn num_features(&self) -> usize {
        CHANNELS.len() * 64 // 768
    }

    fn active_features(&self, board: &Board, features: &mut Vec<u16>) {
        assert!(features.is_empty());

        for (channel, piece) in CHANNELS.iter().enumerate() {
            for square in board.by_piece(*piece) {
                features.push(Self::make_index(channel, square));
            }
        }
    }
}
