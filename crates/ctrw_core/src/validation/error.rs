//! Error types for the validation harness.

use thiserror::Error;

/// Validation harness errors.
///
/// # Variants
/// - `EmptySample`: No samples to compute moments from
/// - `InvalidSampleCount`: Requested sample count outside [1, MAX_SAMPLES]
/// - `InvalidHistogram`: Histogram range empty or not finite, or zero bins
/// - `InvalidRange`: Curve range empty or not finite
/// - `InvalidStep`: Curve step non-positive, or too fine for the range
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// The sample is empty.
    #[error("Empty sample: at least one value is required")]
    EmptySample,

    /// Sample count outside the supported range.
    #[error("Invalid sample count {0}: must be in range [1, 100_000_000]")]
    InvalidSampleCount(usize),

    /// Histogram layout is unusable.
    #[error("Invalid histogram: range [{from}, {to}) with {bins} bins")]
    InvalidHistogram {
        /// Lower bound of the range
        from: f64,
        /// Upper bound of the range
        to: f64,
        /// Requested bin count
        bins: usize,
    },

    /// Curve range is empty or not finite.
    #[error("Invalid curve range: [{from}, {to})")]
    InvalidRange {
        /// Lower bound of the range
        from: f64,
        /// Upper bound of the range
        to: f64,
    },

    /// Curve step is not finite and strictly positive, or would sample
    /// more than 100_000_000 points.
    #[error("Invalid curve step {0}: must be positive and give at most 100_000_000 points")]
    InvalidStep(f64),
}
