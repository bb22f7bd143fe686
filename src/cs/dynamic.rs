pub mod alphabet;
pub mod batch;
pub mod damerau_levenshtein;
pub mod sequence;

// Re-export the distance engine and its adapters with descriptive names
pub use batch::{distance_matrix, pairwise_scores, score_matrix};
pub use damerau_levenshtein::{
    damerau_levenshtein, distance, partial_distance, partial_similarity, similarity, str_distance,
    str_similarity, DamerauLevenshtein, DistanceConfig, Mode, Score,
};
pub use sequence::{CharSequence, Sequence};
