use pgn_dataset::{open_games, GameRecord};
use std::path::PathBuf;

#[allow(dead_code)]
pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[allow(dead_code)]
pub fn resource(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("resources")
        .join(name)
}

#[allow(dead_code)]
pub fn read_games(name: &str) -> Vec<GameRecord> {
    open_games(resource(name))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[allow(dead_code)]
pub fn read_game(name: &str) -> GameRecord {
    let mut games = read_games(name);
    assert_eq!(games.len(), 1);
    games.remove(0)
}
