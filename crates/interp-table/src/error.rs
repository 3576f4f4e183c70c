//! Table Error Types

use thiserror::Error;

/// Errors while building table entries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// Knot abscissae and ordinates differ in length
    #[error("Knot length mismatch: {xs} abscissae, {ys} ordinates")]
    KnotLengthMismatch { xs: usize, ys: usize },

    /// Not enough knots to interpolate between
    #[error("At least 2 knots required, got {0}")]
    TooFewKnots(usize),

    /// Abscissae must be strictly increasing
    #[error("Knots not strictly increasing at index {index}: {prev} >= {next}")]
    NonIncreasingKnots { index: usize, prev: f64, next: f64 },

    /// NaN or infinite knot
    #[error("Non-finite knot at index {0}")]
    NonFiniteKnot(usize),
}
