use super::FeatureSet;
use shakmaty::{fen::Fen, Board, Chess, Position};

pub(super) fn sanity_checks(feature_set: &dyn FeatureSet) {
    const FENS: [&str; 3] = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "4nrk1/3q1pp1/2n1p1p1/8/1P2Q3/7P/PB1N1PP1/2R3K1 w - - 5 26",
        "5r2/1p2ppkp/p2p1nP1/qn6/4P3/2r2B2/1PPQ1PP1/2KR3R w - - 0 21",
    ];

    for fen in FENS {
        let fen: Fen = fen.parse().unwrap();
        let pos: Chess = fen.into_position(shakmaty::CastlingMode::Standard).unwrap();

        check_one_per_piece(pos.board(), feature_set);
        check_flipped(pos.board(), feature_set);

        for m in pos.legal_moves() {
            let mut pos_moved = pos.clone();
            pos_moved.play_unchecked(&m);

            check_one_per_piece(pos_moved.board(), feature_set);
        }
    }
}

/// Every piece produces exactly one feature, all in range and distinct
fn check_one_per_piece(board: &Board, feature_set: &dyn FeatureSet) {
    let mut features = vec![];
    feature_set.active_features(board, &mut features);

    assert_eq!(features.len(), board.occupied().count());
    assert!(features
        .iter()
        .all(|&x| (x as usize) < feature_set.num_features()));

    features.sort();
    features.dedup();
    assert_eq!(features.len(), board.occupied().count(), "duplicated feature");
}

/// Flipping the board and swapping colors must move every white plane onto
/// its black counterpart (and back), mirrored vertically
fn check_flipped(board: &Board, feature_set: &dyn FeatureSet) {
    let mut board_flip = board.clone();
    board_flip.flip_vertical();
    board_flip.swap_colors();

    let mut feat_orig = vec![];
    let mut feat_flip = vec![];
    feature_set.active_features(board, &mut feat_orig);
    feature_set.active_features(&board_flip, &mut feat_flip);

    let mut mirrored: Vec<u16> = feat_orig
        .iter()
        .map(|&x| {
            let channel = x / 64;
            let row = (x % 64) / 8;
            let col = x % 8;

            ((channel + 6) % 12) * 64 + (7 - row) * 8 + col
        })
        .collect();

    mirrored.sort();
    feat_flip.sort();

    assert_eq!(mirrored, feat_flip);
}
