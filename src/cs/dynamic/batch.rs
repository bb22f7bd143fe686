//! Scoring many independent pairs at once.
//!
//! Each pair is an independent computation, so the work is spread over the
//! rayon thread pool with one [`DamerauLevenshtein`] engine per worker. Output
//! order always follows input order.

use std::hash::Hash;

use log::debug;
use rayon::prelude::*;

use crate::cs::dynamic::damerau_levenshtein::{DamerauLevenshtein, DistanceConfig, Score};
use crate::cs::dynamic::sequence::Sequence;
use crate::error::Result;

/// Scores every `(a, b)` pair in the mode set by `config`.
///
/// # Examples
///
/// ```
/// use damerau::{pairwise_scores, CharSequence, DistanceConfig, Mode, Score};
///
/// let pairs = vec![
///     (CharSequence::from("ca"), CharSequence::from("abc")),
///     (CharSequence::from("car"), CharSequence::from("cars")),
/// ];
/// let config = DistanceConfig::new().mode(Mode::Distance);
/// let scores = pairwise_scores(&pairs, &config).unwrap();
/// assert_eq!(scores, vec![Score::Distance(2), Score::Distance(1)]);
/// ```
pub fn pairwise_scores<T, A, B>(pairs: &[(A, B)], config: &DistanceConfig) -> Result<Vec<Score>>
where
    T: Eq + Hash,
    A: Sequence<Element = T> + Sync,
    B: Sequence<Element = T> + Sync,
{
    debug!("scoring {} pairs in {:?} mode", pairs.len(), config.mode);
    pairs
        .par_iter()
        .map_init(
            || DamerauLevenshtein::with_config(config.clone()),
            |engine, (a, b)| engine.compute(a, b),
        )
        .collect()
}

/// Scores every query against every choice; row `i` holds the scores of
/// `queries[i]`.
pub fn score_matrix<T, Q, C>(
    queries: &[Q],
    choices: &[C],
    config: &DistanceConfig,
) -> Result<Vec<Vec<Score>>>
where
    T: Eq + Hash,
    Q: Sequence<Element = T> + Sync,
    C: Sequence<Element = T> + Sync,
{
    debug!(
        "scoring {}x{} matrix in {:?} mode",
        queries.len(),
        choices.len(),
        config.mode
    );
    queries
        .par_iter()
        .map_init(
            || DamerauLevenshtein::with_config(config.clone()),
            |engine, query| {
                choices
                    .iter()
                    .map(|choice| engine.compute(query, choice))
                    .collect::<Result<Vec<_>>>()
            },
        )
        .collect()
}

/// Raw distances of every query against every choice.
pub fn distance_matrix<T, Q, C>(queries: &[Q], choices: &[C]) -> Result<Vec<Vec<usize>>>
where
    T: Eq + Hash,
    Q: Sequence<Element = T> + Sync,
    C: Sequence<Element = T> + Sync,
{
    queries
        .par_iter()
        .map_init(DamerauLevenshtein::new, |engine, query| {
            choices
                .iter()
                .map(|choice| engine.distance(query, choice))
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}
