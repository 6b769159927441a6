//! Empirical validation of random-variate generators.
//!
//! A [`ValidationHarness`] draws a fixed number of samples from any
//! generator closure and compares them with theory through:
//! - raw and central moments of arbitrary order
//! - a density-normalised [`Histogram`]
//! - an optional expected density curve and its deviation from the histogram

mod error;
mod harness;
mod histogram;

pub use error::ValidationError;
pub use harness::{
    HarnessConfig, HarnessConfigBuilder, ValidationHarness, DEFAULT_SAMPLES, MAX_SAMPLES,
};
pub use histogram::Histogram;
