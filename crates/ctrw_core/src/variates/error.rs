//! Error types for random-variate generation.

use thiserror::Error;

/// Invalid distribution parameters supplied to a generator.
///
/// # Examples
/// ```
/// use ctrw_core::variates::VariateError;
///
/// let err = VariateError::InvalidStdDev { stddev: -1.0 };
/// assert!(format!("{}", err).contains("standard deviation"));
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum VariateError {
    /// Mean is not finite, or not positive where positivity is required.
    #[error("Invalid mean: μ = {mean}")]
    InvalidMean {
        /// The rejected mean
        mean: f64,
    },

    /// Standard deviation is not finite and strictly positive.
    #[error("Invalid standard deviation: σ = {stddev}")]
    InvalidStdDev {
        /// The rejected standard deviation
        stddev: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mean_display() {
        let err = VariateError::InvalidMean { mean: -3.0 };
        assert_eq!(format!("{}", err), "Invalid mean: μ = -3");
    }

    #[test]
    fn test_invalid_stddev_display() {
        let err = VariateError::InvalidStdDev { stddev: 0.0 };
        assert_eq!(format!("{}", err), "Invalid standard deviation: σ = 0");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = VariateError::InvalidMean { mean: f64::NAN };
        let _: &dyn std::error::Error = &err;
    }
}
