use crate::error::DatasetError;
use crate::record::Replay;
use nn::GameResult;
use rand::Rng;

/// A position of a game together with the game's result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub fen: String,
    pub result: GameResult,
    /// Half-moves played to reach the position
    pub halfmove: usize,
}

/// Total half-moves played: `2n` when black made the last move `n`, `2n - 1` when white did
pub fn last_halfmove_number<G: Replay>(game: &G) -> usize {
    game.total_plies()
}

/// Replays the game `halfmove` half-moves from its initial position.
/// Index 0 is the initial position itself.
pub fn state_at<G: Replay>(game: &G, halfmove: isize) -> Result<GameState, DatasetError> {
    let last = last_halfmove_number(game);
    let invalid = || DatasetError::InvalidHalfMove {
        index: halfmove,
        last,
    };

    let target = usize::try_from(halfmove).map_err(|_| invalid())?;
    if target > last {
        return Err(invalid());
    }

    let mut state = game.initial_state();
    for ply in 0..target {
        state = game.apply_ply(state, ply).ok_or_else(invalid)?;
    }

    Ok(GameState {
        fen: game.to_fen(&state),
        result: game.result(),
        halfmove: target,
    })
}

/// Picks a half-move uniformly in `1..last` (never the initial nor the final position)
/// and returns the state at that point.
///
/// Games whose move numbers run past the recorded moves, such as games set up
/// from a FEN tag, are rejected before drawing.
pub fn sample_random_state<G, R>(game: &G, rng: &mut R) -> Result<GameState, DatasetError>
where
    G: Replay,
    R: Rng + ?Sized,
{
    let last = last_halfmove_number(game);
    if last < 2 {
        return Err(DatasetError::GameTooShort { plies: last });
    }

    let recorded = game.recorded_plies();
    if recorded < last {
        return Err(DatasetError::IncompleteGame {
            plies: last,
            recorded,
        });
    }

    let halfmove = rng.gen_range(1..last);
    state_at(game, halfmove as isize)
}
