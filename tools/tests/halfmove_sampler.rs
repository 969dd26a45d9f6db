mod common;

use common::{read_game, INITIAL_FEN};
use nn::GameResult;
use pgn_dataset::{last_halfmove_number, sample_random_state, state_at, DatasetError};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn last_halfmove_number_odd() {
    // ends with "46. Ng1"
    let game = read_game("knight_shuffle_white_last.pgn");

    assert_eq!(last_halfmove_number(&game), 91);
}

#[test]
fn last_halfmove_number_even() {
    // ends with "28... Ng8"
    let game = read_game("knight_shuffle_black_last.pgn");

    assert_eq!(last_halfmove_number(&game), 56);
}

#[test]
fn state_at_start() {
    let game = read_game("knight_shuffle_white_last.pgn");
    let state = state_at(&game, 0).unwrap();

    assert_eq!(state.fen, INITIAL_FEN);
    assert_eq!(state.result, GameResult::Draw);
}

#[test]
fn state_at_start_ignores_game_content() {
    for name in ["scholars_mate.pgn", "single_game.pgn"] {
        assert_eq!(state_at(&read_game(name), 0).unwrap().fen, INITIAL_FEN);
    }
}

#[test]
fn state_at_even() {
    let game = read_game("knight_shuffle_white_last.pgn");
    let state = state_at(&game, 8).unwrap();

    assert_eq!(
        state.fen,
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 8 5"
    );
    assert_eq!(state.result, GameResult::Draw);
}

#[test]
fn state_at_odd() {
    let game = read_game("knight_shuffle_white_last.pgn");
    let state = state_at(&game, 81).unwrap();

    assert_eq!(
        state.fen,
        "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 81 41"
    );
}

#[test]
fn state_at_end() {
    let game = read_game("knight_shuffle_white_last.pgn");
    let state = state_at(&game, 91).unwrap();

    assert_eq!(
        state.fen,
        "rnbqkb1r/pppppppp/5n2/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 91 46"
    );
    assert_eq!(state.result, GameResult::Draw);
}

#[test]
fn state_at_scholars_mate() {
    let game = read_game("scholars_mate.pgn");

    assert_eq!(
        state_at(&game, 1).unwrap().fen,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
    );
    assert_eq!(
        state_at(&game, 2).unwrap().fen,
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2"
    );
    assert_eq!(
        state_at(&game, 7).unwrap().fen,
        "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4"
    );
    assert_eq!(state_at(&game, 7).unwrap().result, GameResult::WhiteWins);
}

#[test]
fn state_at_out_of_range() {
    let game = read_game("knight_shuffle_white_last.pgn");

    assert!(matches!(
        state_at(&game, -1),
        Err(DatasetError::InvalidHalfMove { index: -1, last: 91 })
    ));
    assert!(matches!(
        state_at(&game, 92),
        Err(DatasetError::InvalidHalfMove { index: 92, last: 91 })
    ));
}

#[test]
fn random_state_is_inside_the_game() {
    let game = read_game("knight_shuffle_black_last.pgn");
    let mut rng = StdRng::seed_from_u64(2018);

    for _ in 0..200 {
        let state = sample_random_state(&game, &mut rng).unwrap();

        assert!((1..56).contains(&state.halfmove));
        assert_eq!(state.fen, state_at(&game, state.halfmove as isize).unwrap().fen);
        assert_eq!(state.result, GameResult::BlackWins);
    }
}

#[test]
fn random_state_never_initial_nor_final() {
    let game = read_game("single_game.pgn");
    let mut rng = StdRng::seed_from_u64(1);

    let initial = state_at(&game, 0).unwrap().fen;
    let last = state_at(&game, 4).unwrap().fen;

    for _ in 0..100 {
        let fen = sample_random_state(&game, &mut rng).unwrap().fen;
        assert_ne!(fen, initial);
        assert_ne!(fen, last);
    }
}
