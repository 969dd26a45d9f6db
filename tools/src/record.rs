use nn::GameResult;
use shakmaty::{fen::Fen, Chess, Color, EnPassantMode, Move, Position};

/// Ability to replay a recorded game half-move by half-move
pub trait Replay {
    type State;

    /// Position before any half-move has been played
    fn initial_state(&self) -> Self::State;

    /// Total half-moves played in the game, derived from the last recorded move
    fn total_plies(&self) -> usize;

    /// Half-moves actually present in the record. Lower than [`Replay::total_plies`]
    /// when the game starts from a set-up position
    fn recorded_plies(&self) -> usize;

    /// Plays the half-move with the given zero-based index.
    /// None if the game has no such half-move recorded
    fn apply_ply(&self, state: Self::State, ply: usize) -> Option<Self::State>;

    /// Recorded result of the game, independent of any replayed state
    fn result(&self) -> GameResult;

    fn to_fen(&self, state: &Self::State) -> String;
}

/// Move counter and side of a recorded move, as printed in movetext:
/// "46. Ke4" is (46, White), "28... Rxd2" is (28, Black)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveNumber {
    pub number: u32,
    pub turn: Color,
}

impl MoveNumber {
    /// Half-moves played once this move is on the board
    pub fn halfmoves(self) -> usize {
        let number = self.number as usize;
        match self.turn {
            Color::White => 2 * number - 1,
            Color::Black => 2 * number,
        }
    }
}

/// A parsed game: starting position, validated mainline moves and result
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub(crate) initial: Chess,
    pub(crate) moves: Vec<Move>,
    pub(crate) last_move: Option<MoveNumber>,
    pub(crate) result: GameResult,
}

impl GameRecord {
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Move number of the final recorded move, None if the game has no moves
    pub fn last_move(&self) -> Option<MoveNumber> {
        self.last_move
    }
}

impl Replay for GameRecord {
    type State = Chess;

    fn initial_state(&self) -> Chess {
        self.initial.clone()
    }

    fn total_plies(&self) -> usize {
        self.last_move.map_or(0, MoveNumber::halfmoves)
    }

    fn recorded_plies(&self) -> usize {
        self.moves.len()
    }

    fn apply_ply(&self, mut state: Chess, ply: usize) -> Option<Chess> {
        // moves were validated when the record was parsed
        let m = self.moves.get(ply)?;
        state.play_unchecked(m);
        Some(state)
    }

    fn result(&self) -> GameResult {
        self.result
    }

    fn to_fen(&self, state: &Chess) -> String {
        Fen(state.clone().into_setup(EnPassantMode::Legal)).to_string()
    }
}
