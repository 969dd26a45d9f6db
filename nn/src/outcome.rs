use crate::error::EncodeError;
use shakmaty::{Color, Outcome};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Result of a game as recorded in PGN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// "1-0"
    WhiteWins,
    /// "0-1"
    BlackWins,
    /// "1/2-1/2"
    Draw,
    /// "*", game in progress or unknown
    Undecided,
}

impl GameResult {
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Undecided => "*",
        }
    }

    /// Training label from white's point of view. Undecided games have none
    pub const fn label(self) -> Option<i8> {
        match self {
            GameResult::WhiteWins => Some(1),
            GameResult::BlackWins => Some(-1),
            GameResult::Draw => Some(0),
            GameResult::Undecided => None,
        }
    }

    pub const fn is_decisive(self) -> bool {
        matches!(self, GameResult::WhiteWins | GameResult::BlackWins)
    }
}

impl FromStr for GameResult {
    type Err = EncodeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "1-0" => Ok(GameResult::WhiteWins),
            "0-1" => Ok(GameResult::BlackWins),
            "1/2-1/2" => Ok(GameResult::Draw),
            "*" => Ok(GameResult::Undecided),
            _ => Err(EncodeError::UnmappedOutcome(token.to_string())),
        }
    }
}

impl From<Outcome> for GameResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Decisive {
                winner: Color::White,
            } => GameResult::WhiteWins,
            Outcome::Decisive {
                winner: Color::Black,
            } => GameResult::BlackWins,
            Outcome::Draw => GameResult::Draw,
        }
    }
}

impl Display for GameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a result token to its label: 1 white wins, 0 draw, -1 black wins.
/// Undecided ("*") and unknown tokens have no label and must be filtered out beforehand.
pub fn encode_outcome(token: &str) -> Result<i8, EncodeError> {
    token
        .parse::<GameResult>()?
        .label()
        .ok_or_else(|| EncodeError::UnmappedOutcome(token.to_string()))
}
