//! True (unrestricted) Damerau-Levenshtein edit distance and similarity.
//!
//! Strings are compared character by character through [`CharSequence`];
//! slices, vectors and arrays of any `Eq + Hash` token type are compared
//! element by element. Elements with only `PartialEq` (such as floats) go
//! through [`partial_distance`] and [`partial_similarity`].
//!
//! ```
//! use damerau::{str_distance, str_similarity};
//!
//! assert_eq!(str_distance("ca", "abc"), 2);
//! assert_eq!(str_similarity("car", "cars"), 0.75);
//! assert_eq!(str_similarity("", ""), 1.0);
//! ```

pub mod cs;
pub mod error;

pub use cs::dynamic;
pub use cs::dynamic::{
    damerau_levenshtein, distance, distance_matrix, pairwise_scores, partial_distance,
    partial_similarity, score_matrix, similarity, str_distance, str_similarity, CharSequence,
    DamerauLevenshtein, DistanceConfig, Mode, Score, Sequence,
};
pub use error::{Error, Operand, Result};
