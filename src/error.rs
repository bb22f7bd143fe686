//! Error type shared by every fallible entry point of the crate.

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

/// Which of the two compared sequences an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The left-hand (source) sequence.
    First,
    /// The right-hand (target) sequence.
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => write!(f, "first"),
            Operand::Second => write!(f, "second"),
        }
    }
}

/// Errors reported by the distance engine.
///
/// None of these are retryable: the computation either yields a value or
/// reports one of the conditions below without a partial result.
#[derive(Debug, Error)]
pub enum Error {
    /// An element has no usable equality relation (it is not equal to itself,
    /// e.g. a floating-point NaN).
    #[error("element {index} of the {operand} sequence is not equal to itself")]
    InvalidElement { operand: Operand, index: usize },

    /// The cost table would exceed the limit set in the engine configuration.
    #[error("cost table of {rows}x{cols} cells exceeds the configured limit of {limit} cells")]
    TableTooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },

    /// The cost table dimensions overflow `usize`.
    #[error("cost table of {rows}x{cols} cells does not fit in the address space")]
    TableOverflow { rows: usize, cols: usize },

    /// The allocator refused the cost table buffer.
    #[error("failed to allocate {cells} cost table cells")]
    Allocation {
        cells: usize,
        #[source]
        source: TryReserveError,
    },

    /// The scratch buffer could not be viewed as a two-dimensional table.
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
