use crate::error::DatasetError;
use crate::record::{GameRecord, MoveNumber};
use nn::GameResult;
use pgn_reader::{RawHeader, SanPlus, Skip, Visitor};
use shakmaty::{fen::Fen, CastlingMode, Chess, Move, Outcome, Position};
use std::mem;

/// Collects the mainline of a single PGN game into a [`GameRecord`]
pub struct GameVisitor {
    /// Result tag from the headers
    result: Option<GameResult>,
    /// Termination marker at the end of the movetext
    outcome: Option<GameResult>,
    /// FEN tag, when the game does not start from the standard position
    start_fen: Option<String>,

    initial: Chess,
    position: Chess,
    moves: Vec<Move>,
    last_move: Option<MoveNumber>,

    /// First problem found while visiting, the game is rejected when set
    error: Option<String>,
}

impl GameVisitor {
    pub fn new() -> Self {
        GameVisitor {
            result: None,
            outcome: None,
            start_fen: None,

            initial: Chess::default(),
            position: Chess::default(),
            moves: vec![],
            last_move: None,

            error: None,
        }
    }

    fn reject(&mut self, reason: String) {
        if self.error.is_none() {
            self.error = Some(reason);
        }
    }
}

impl Default for GameVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for GameVisitor {
    type Result = Result<GameRecord, DatasetError>;

    fn begin_game(&mut self) {
        self.result = None;
        self.outcome = None;
        self.start_fen = None;
        self.initial = Chess::default();
        self.position = Chess::default();
        self.moves.clear();
        self.last_move = None;
        self.error = None;
    }

    fn header(&mut self, key: &[u8], value: RawHeader<'_>) {
        let value = String::from_utf8_lossy(value.as_bytes()).to_string();

        match key {
            b"FEN" => self.start_fen = Some(value),
            b"Result" => match value.parse() {
                Ok(result) => self.result = Some(result),
                Err(_) => self.reject(format!("unknown result tag {:?}", value)),
            },
            _ => {}
        }
    }

    fn end_headers(&mut self) -> Skip {
        if let Some(fen) = self.start_fen.take() {
            let start = fen
                .parse::<Fen>()
                .map_err(|err| err.to_string())
                .and_then(|setup| {
                    setup
                        .into_position::<Chess>(CastlingMode::Standard)
                        .map_err(|err| err.to_string())
                });

            match start {
                Ok(position) => {
                    self.initial = position.clone();
                    self.position = position;
                }
                Err(reason) => self.reject(format!("invalid FEN tag {:?}: {}", fen, reason)),
            }
        }

        // no point in reading moves of a game we will not accept
        Skip(self.error.is_some())
    }

    fn begin_variation(&mut self) -> Skip {
        Skip(true) // mainline only
    }

    fn san(&mut self, san_plus: SanPlus) {
        if self.error.is_some() {
            return;
        }

        match san_plus.san.to_move(&self.position) {
            Ok(m) => {
                self.last_move = Some(MoveNumber {
                    number: self.position.fullmoves().get(),
                    turn: self.position.turn(),
                });
                self.position.play_unchecked(&m);
                self.moves.push(m);
            }
            Err(err) => self.reject(format!(
                "illegal move {} after {} half-moves: {}",
                san_plus,
                self.moves.len(),
                err
            )),
        }
    }

    fn outcome(&mut self, outcome: Option<Outcome>) {
        self.outcome = Some(outcome.map_or(GameResult::Undecided, GameResult::from));
    }

    fn end_game(&mut self) -> Self::Result {
        if let Some(reason) = self.error.take() {
            return Err(DatasetError::MalformedRecord(reason));
        }

        Ok(GameRecord {
            initial: mem::take(&mut self.initial),
            moves: mem::take(&mut self.moves),
            last_move: self.last_move,
            // the header is authoritative, the movetext marker is a fallback
            result: self
                .result
                .or(self.outcome)
                .unwrap_or(GameResult::Undecided),
        })
    }
}
