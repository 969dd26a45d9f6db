#[cfg(test)]
mod checks;
pub mod planes;

use shakmaty::Board;

/// A set of features for a neural network
pub trait FeatureSet {
    /// Number of features in the set
    fn num_features(&self) -> usize;

    /// Computes the active features for the given board
    fn active_features(&self, board: &Board, features: &mut Vec<u16>);
}
