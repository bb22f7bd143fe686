//! True (unrestricted) Damerau-Levenshtein distance.
//!
//! The distance between two sequences is the minimum number of insertions,
//! deletions, substitutions and transpositions of two adjacent elements needed
//! to turn one into the other, each costing 1. Unlike optimal string
//! alignment, a transposed pair may be edited again afterwards, so
//! `"ca" -> "abc"` costs 2 (swap, then insert) instead of 3.
//!
//! The implementation follows Lowrance and Wagner: a full cost table with a
//! guard row and column, a per-symbol table of the last row each symbol of the
//! first sequence was seen in, and a per-row record of the last matching
//! column. Together they locate the only transposition worth considering for
//! each cell.
//!
//! # Examples
//!
//! ```
//! use damerau::{distance, similarity, str_distance, CharSequence};
//!
//! assert_eq!(str_distance("ca", "abc"), 2);
//! assert_eq!(distance(&["ab", "cd"], &["ab"]), 1);
//!
//! let car = CharSequence::from("car");
//! let cars = CharSequence::from("cars");
//! assert_eq!(similarity(&car, &cars), 0.75);
//! ```

use std::hash::Hash;

use log::{debug, trace};
use ndarray::ArrayViewMut2;

use crate::cs::dynamic::alphabet;
use crate::cs::dynamic::sequence::{CharSequence, Sequence};
use crate::error::{Error, Result};

/// Which number a computation reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Raw edit distance.
    Distance,
    /// `1 - distance / max(len_a, len_b)`, with two empty sequences scoring 1.0.
    #[default]
    Similarity,
}

/// Outcome of [`damerau_levenshtein`] or [`DamerauLevenshtein::compute`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    Distance(usize),
    Similarity(f64),
}

impl Score {
    /// The score as a float, whichever mode produced it.
    pub fn value(self) -> f64 {
        match self {
            Score::Distance(distance) => distance as f64,
            Score::Similarity(similarity) => similarity,
        }
    }

    pub fn distance(self) -> Option<usize> {
        match self {
            Score::Distance(distance) => Some(distance),
            Score::Similarity(_) => None,
        }
    }

    pub fn similarity(self) -> Option<f64> {
        match self {
            Score::Distance(_) => None,
            Score::Similarity(similarity) => Some(similarity),
        }
    }
}

/// Configuration for a [`DamerauLevenshtein`] engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceConfig {
    /// Upper bound on the number of cost table cells, `(n + 2) * (m + 2)`.
    /// `None` leaves the limit to the allocator.
    pub max_table_cells: Option<usize>,
    /// Mode used by [`DamerauLevenshtein::compute`].
    pub mode: Mode,
}

impl DistanceConfig {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the cost table cell limit.
    pub fn max_table_cells(mut self, limit: usize) -> Self {
        self.max_table_cells = Some(limit);
        self
    }

    /// Sets the default mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// A reusable distance engine.
///
/// The engine keeps its cost table, last-row table and symbol buffers between
/// calls so that scoring many pairs does not reallocate for each one. Every
/// call fully reinitialises the buffers, so results never depend on earlier
/// calls. An engine is not meant to be shared between threads; give each
/// worker its own.
///
/// # Examples
///
/// ```
/// use damerau::{CharSequence, DamerauLevenshtein, DistanceConfig};
///
/// let mut engine = DamerauLevenshtein::with_config(DistanceConfig::new().max_table_cells(1 << 20));
/// let a = CharSequence::from("a cat");
/// let b = CharSequence::from("a abct");
/// assert_eq!(engine.distance(&a, &b).unwrap(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DamerauLevenshtein {
    config: DistanceConfig,
    table: Vec<usize>,
    last_row: Vec<usize>,
    left: Vec<usize>,
    right: Vec<usize>,
}

impl DamerauLevenshtein {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(config: DistanceConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &DistanceConfig {
        &self.config
    }

    /// Edit distance between `a` and `b`.
    pub fn distance<T, A, B>(&mut self, a: &A, b: &B) -> Result<usize>
    where
        T: Eq + Hash,
        A: Sequence<Element = T> + ?Sized,
        B: Sequence<Element = T> + ?Sized,
    {
        let symbols = alphabet::intern_hashed(a, b, &mut self.left, &mut self.right);
        self.run(symbols)
    }

    /// Normalised similarity between `a` and `b`, in `[0, 1]`.
    pub fn similarity<T, A, B>(&mut self, a: &A, b: &B) -> Result<f64>
    where
        T: Eq + Hash,
        A: Sequence<Element = T> + ?Sized,
        B: Sequence<Element = T> + ?Sized,
    {
        let distance = self.distance(a, b)?;
        Ok(normalize(distance, a.len(), b.len()))
    }

    /// Edit distance for elements that only implement `PartialEq`.
    ///
    /// Fails with [`Error::InvalidElement`] if any element is not equal to
    /// itself.
    pub fn partial_distance<T, A, B>(&mut self, a: &A, b: &B) -> Result<usize>
    where
        T: PartialEq,
        A: Sequence<Element = T> + ?Sized,
        B: Sequence<Element = T> + ?Sized,
    {
        let symbols = alphabet::intern_scanned(a, b, &mut self.left, &mut self.right)?;
        self.run(symbols)
    }

    /// Similarity for elements that only implement `PartialEq`.
    pub fn partial_similarity<T, A, B>(&mut self, a: &A, b: &B) -> Result<f64>
    where
        T: PartialEq,
        A: Sequence<Element = T> + ?Sized,
        B: Sequence<Element = T> + ?Sized,
    {
        let distance = self.partial_distance(a, b)?;
        Ok(normalize(distance, a.len(), b.len()))
    }

    /// Scores `a` against `b` in the configured mode.
    pub fn compute<T, A, B>(&mut self, a: &A, b: &B) -> Result<Score>
    where
        T: Eq + Hash,
        A: Sequence<Element = T> + ?Sized,
        B: Sequence<Element = T> + ?Sized,
    {
        let mode = self.config.mode;
        self.compute_with(a, b, mode)
    }

    /// Scores `a` against `b` in an explicit mode.
    pub fn compute_with<T, A, B>(&mut self, a: &A, b: &B, mode: Mode) -> Result<Score>
    where
        T: Eq + Hash,
        A: Sequence<Element = T> + ?Sized,
        B: Sequence<Element = T> + ?Sized,
    {
        Ok(match mode {
            Mode::Distance => Score::Distance(self.distance(a, b)?),
            Mode::Similarity => Score::Similarity(self.similarity(a, b)?),
        })
    }

    /// Fills the cost table for the symbol ids currently in `left` and `right`.
    fn run(&mut self, symbols: usize) -> Result<usize> {
        let n = self.left.len();
        let m = self.right.len();
        if n == 0 || m == 0 {
            return Ok(n.max(m));
        }

        let rows = n + 2;
        let cols = m + 2;
        let cells = rows
            .checked_mul(cols)
            .ok_or(Error::TableOverflow { rows, cols })?;
        if let Some(limit) = self.config.max_table_cells {
            if cells > limit {
                debug!("rejecting {rows}x{cols} cost table, limit is {limit} cells");
                return Err(Error::TableTooLarge { rows, cols, limit });
            }
        }

        // Larger than any reachable distance, so lookbacks into the guard
        // row or column never win.
        let inf = n + m;
        reset(&mut self.table, cells, inf)?;
        reset(&mut self.last_row, symbols, 0)?;

        let Self {
            table,
            last_row,
            left,
            right,
            ..
        } = self;
        let mut cost = ArrayViewMut2::from_shape((rows, cols), &mut table[..])?;

        // cost[[i + 1, j + 1]] is the distance between a[..i] and b[..j].
        for i in 0..=n {
            cost[[i + 1, 1]] = i;
        }
        for j in 0..=m {
            cost[[1, j + 1]] = j;
        }

        for i in 1..=n {
            let a_sym = left[i - 1];
            let mut last_match_col = 0;
            for j in 1..=m {
                let b_sym = right[j - 1];
                let k = last_row[b_sym];
                let l = last_match_col;
                let substitution = if a_sym == b_sym {
                    last_match_col = j;
                    0
                } else {
                    1
                };

                let deletion = cost[[i, j + 1]] + 1;
                let insertion = cost[[i + 1, j]] + 1;
                let replacement = cost[[i, j]] + substitution;
                // k < i and l < j always hold, so both gaps are non-negative.
                let transposition = cost[[k, l]] + (i - k - 1) + 1 + (j - l - 1);

                cost[[i + 1, j + 1]] = deletion
                    .min(insertion)
                    .min(replacement)
                    .min(transposition);
            }
            last_row[a_sym] = i;
        }

        let distance = cost[[n + 1, m + 1]];
        trace!("{n}x{m} table over {symbols} symbols, distance {distance}");
        Ok(distance)
    }
}

/// Clears `buffer` and refills it with `len` copies of `value`, reporting
/// allocation failure instead of aborting.
fn reset(buffer: &mut Vec<usize>, len: usize, value: usize) -> Result<()> {
    buffer.clear();
    buffer
        .try_reserve_exact(len)
        .map_err(|source| Error::Allocation { cells: len, source })?;
    buffer.resize(len, value);
    Ok(())
}

/// Converts a distance into a similarity for sequences of length `n` and `m`.
///
/// # Panics
/// Panics if the result falls outside `[0, 1]`, which means `distance` exceeds
/// the longer length and the table is inconsistent.
fn normalize(distance: usize, n: usize, m: usize) -> f64 {
    let longest = n.max(m);
    if longest == 0 {
        return 1.0;
    }
    let similarity = 1.0 - distance as f64 / longest as f64;
    assert!(
        (0.0..=1.0).contains(&similarity),
        "similarity {} out of range for distance {} over length {}",
        similarity,
        distance,
        longest
    );
    similarity
}

/// Edit distance between two sequences of hashable elements.
///
/// # Panics
/// Panics if the cost table cannot be allocated.
///
/// # Examples
///
/// ```
/// use damerau::distance;
///
/// let empty: [&str; 0] = [];
/// assert_eq!(distance(&empty, &["x", "y"]), 2);
/// assert_eq!(distance(&[1, 2, 3], &[2, 1, 3]), 1);
/// ```
pub fn distance<T, A, B>(a: &A, b: &B) -> usize
where
    T: Eq + Hash,
    A: Sequence<Element = T> + ?Sized,
    B: Sequence<Element = T> + ?Sized,
{
    DamerauLevenshtein::new()
        .distance(a, b)
        .unwrap_or_else(|err| panic!("{}", err))
}

/// Similarity between two sequences of hashable elements, in `[0, 1]`.
///
/// Two empty sequences have similarity 1.0.
///
/// # Panics
/// Panics if the cost table cannot be allocated.
pub fn similarity<T, A, B>(a: &A, b: &B) -> f64
where
    T: Eq + Hash,
    A: Sequence<Element = T> + ?Sized,
    B: Sequence<Element = T> + ?Sized,
{
    DamerauLevenshtein::new()
        .similarity(a, b)
        .unwrap_or_else(|err| panic!("{}", err))
}

/// Edit distance for elements that only implement `PartialEq`, such as floats.
///
/// # Examples
///
/// ```
/// use damerau::{partial_distance, Error};
///
/// assert_eq!(partial_distance(&[0.5, 1.5], &[1.5, 0.5]).unwrap(), 1);
/// assert!(matches!(
///     partial_distance(&[f64::NAN], &[0.5]),
///     Err(Error::InvalidElement { .. })
/// ));
/// ```
pub fn partial_distance<T, A, B>(a: &A, b: &B) -> Result<usize>
where
    T: PartialEq,
    A: Sequence<Element = T> + ?Sized,
    B: Sequence<Element = T> + ?Sized,
{
    DamerauLevenshtein::new().partial_distance(a, b)
}

/// Similarity for elements that only implement `PartialEq`.
pub fn partial_similarity<T, A, B>(a: &A, b: &B) -> Result<f64>
where
    T: PartialEq,
    A: Sequence<Element = T> + ?Sized,
    B: Sequence<Element = T> + ?Sized,
{
    DamerauLevenshtein::new().partial_similarity(a, b)
}

/// Character-level edit distance between two strings.
pub fn str_distance(a: &str, b: &str) -> usize {
    distance(&CharSequence::from(a), &CharSequence::from(b))
}

/// Character-level similarity between two strings.
pub fn str_similarity(a: &str, b: &str) -> f64 {
    similarity(&CharSequence::from(a), &CharSequence::from(b))
}

/// Distance or similarity, selected by `mode`.
///
/// # Panics
/// Panics if the cost table cannot be allocated.
///
/// # Examples
///
/// ```
/// use damerau::{damerau_levenshtein, CharSequence, Mode, Score};
///
/// let empty = CharSequence::default();
/// assert_eq!(damerau_levenshtein(&empty, &empty, Mode::Distance), Score::Distance(0));
/// assert_eq!(damerau_levenshtein(&empty, &empty, Mode::default()), Score::Similarity(1.0));
/// ```
pub fn damerau_levenshtein<T, A, B>(a: &A, b: &B, mode: Mode) -> Score
where
    T: Eq + Hash,
    A: Sequence<Element = T> + ?Sized,
    B: Sequence<Element = T> + ?Sized,
{
    DamerauLevenshtein::new()
        .compute_with(a, b, mode)
        .unwrap_or_else(|err| panic!("{}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty() {
        assert_eq!(str_distance("", ""), 0);
        assert_eq!(str_similarity("", ""), 1.0);
        assert_eq!(str_distance("", "abc"), 3);
        assert_eq!(str_distance("abc", ""), 3);

        let empty: [&str; 0] = [];
        assert_eq!(distance(&empty, &empty), 0);
        assert_eq!(similarity(&empty, &empty), 1.0);
        assert_eq!(distance(&empty, &["x", "y"]), 2);
        assert_eq!(similarity(&empty, &["x", "y"]), 0.0);
    }

    #[test]
    fn test_transposition_can_be_edited_again() {
        // Optimal string alignment would give 3 here.
        assert_eq!(str_distance("ca", "abc"), 2);
        assert_eq!(str_distance("a cat", "a abct"), 2);
    }

    #[test]
    fn test_basic_cases() {
        assert_eq!(str_distance("car", "cars"), 1);
        assert_eq!(str_distance("kitten", "sitting"), 3);
        assert_eq!(str_distance("ab", "ba"), 1);
        assert_eq!(str_distance("abcdef", "abcdfe"), 1);
        assert_eq!(str_distance("abc", "abc"), 0);
        assert_eq!(str_distance("abc", "xyz"), 3);
        assert_eq!(str_distance("abcd", "badc"), 2);
    }

    #[test]
    fn test_similarity() {
        assert_relative_eq!(str_similarity("car", "cars"), 0.75);
        assert_relative_eq!(str_similarity("abc", "abc"), 1.0);
        assert_relative_eq!(str_similarity("abc", "xyz"), 0.0);
        assert_relative_eq!(str_similarity("ab", "ba"), 0.5);
    }

    #[test]
    fn test_tokens() {
        assert_eq!(distance(&["ab", "cd"], &["ab"]), 1);
        let a: Vec<&str> = "the quick brown fox".split_whitespace().collect();
        let b: Vec<&str> = "the brown quick fox".split_whitespace().collect();
        assert_eq!(distance(&a, &b), 1);
        assert_relative_eq!(similarity(&a, &b), 0.75);
    }

    #[test]
    fn test_unicode() {
        assert_eq!(str_distance("café", "cafe"), 1);
        assert_eq!(str_distance("éa", "aé"), 1);
    }

    #[test]
    fn test_modes() {
        let car = CharSequence::from("car");
        let cars = CharSequence::from("cars");
        assert_eq!(damerau_levenshtein(&car, &cars, Mode::Distance), Score::Distance(1));
        assert_eq!(damerau_levenshtein(&car, &cars, Mode::default()), Score::Similarity(0.75));
        assert_eq!(Score::Distance(2).value(), 2.0);
        assert_eq!(Score::Distance(2).similarity(), None);
        assert_eq!(Score::Similarity(0.5).similarity(), Some(0.5));
        assert_eq!(Score::Similarity(0.5).distance(), None);
    }

    #[test]
    fn test_engine_reuse_matches_fresh_engine() {
        let pairs = [
            ("ca", "abc"),
            ("", "abc"),
            ("kitten", "sitting"),
            ("abcdefghij", "ba"),
            ("ab", "ba"),
            ("", ""),
            ("a cat", "a abct"),
        ];
        let mut engine = DamerauLevenshtein::new();
        for (a, b) in pairs {
            let a = CharSequence::from(a);
            let b = CharSequence::from(b);
            assert_eq!(engine.distance(&a, &b).unwrap(), distance(&a, &b));
            assert_eq!(engine.similarity(&a, &b).unwrap(), similarity(&a, &b));
        }
    }

    #[test]
    fn test_configured_mode() {
        let mut engine = DamerauLevenshtein::with_config(DistanceConfig::new().mode(Mode::Distance));
        assert_eq!(engine.config().mode, Mode::Distance);
        let score = engine
            .compute(&CharSequence::from("ca"), &CharSequence::from("abc"))
            .unwrap();
        assert_eq!(score, Score::Distance(2));
    }

    #[test]
    fn test_table_limit() {
        let config = DistanceConfig::new().max_table_cells(25);
        let mut engine = DamerauLevenshtein::with_config(config);

        // 3 + 2 by 3 + 2 cells fits exactly.
        assert_eq!(engine.distance(&[1, 2, 3], &[3, 2, 1]).unwrap(), 2);

        let err = engine.distance(&[1, 2, 3, 4], &[4, 3, 2, 1]).unwrap_err();
        assert!(matches!(
            err,
            Error::TableTooLarge {
                rows: 6,
                cols: 6,
                limit: 25
            }
        ));

        // Empty operands never build a table.
        let empty: [i32; 0] = [];
        assert_eq!(engine.distance(&empty, &[1, 2, 3, 4, 5, 6, 7]).unwrap(), 7);
    }

    #[test]
    fn test_partial_elements() {
        assert_eq!(partial_distance(&[1.0, 2.0, 3.0], &[2.0, 1.0, 3.0]).unwrap(), 1);
        assert_relative_eq!(partial_similarity(&[1.0, 2.0], &[1.0, 2.0]).unwrap(), 1.0);

        let err = partial_distance(&[1.0, f64::NAN], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidElement {
                operand: crate::error::Operand::First,
                index: 1
            }
        ));
        assert_eq!(
            err.to_string(),
            "element 1 of the first sequence is not equal to itself"
        );
    }

    #[test]
    fn test_partial_matches_hashed() {
        let a = ['x', 'y', 'z', 'x', 'q'];
        let b = ['y', 'x', 'q', 'z'];
        assert_eq!(partial_distance(&a, &b).unwrap(), distance(&a, &b));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_normalize_rejects_inconsistent_distance() {
        normalize(5, 2, 3);
    }
}
