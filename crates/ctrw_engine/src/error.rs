//! Error types for the walk engine.
//!
//! This module provides:
//! - `ConfigError`: Invalid engine configuration
//! - `WalkError`: Failures while advancing walks or aggregating ensembles
//!
//! Position queries never fail. Out-of-range times resolve to the origin or
//! the last known position instead.

use ctrw_core::variates::VariateError;
use thiserror::Error;

/// Configuration error for the walk engine.
///
/// These errors occur at build time when invalid parameters are provided.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Step limit outside valid range [1, 1_000_000_000].
    #[error("Invalid step limit {0}: must be in range [1, 1_000_000_000]")]
    InvalidStepLimit(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Runtime error while simulating walks.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WalkError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A variate generator rejected its parameters.
    #[error("Variate generation failed: {0}")]
    Variate(#[from] VariateError),

    /// Target horizon is NaN or infinite.
    #[error("Invalid horizon: T = {horizon}")]
    InvalidHorizon {
        /// The rejected horizon
        horizon: f64,
    },

    /// The per-call step limit ran out before the horizon was reached.
    ///
    /// The trajectory keeps every step taken; calling `advance_to` again
    /// continues from where this call stopped.
    #[error("Horizon not reached: target T = {target}, reached T = {reached} after {steps} steps")]
    HorizonNotReached {
        /// Requested horizon
        target: f64,
        /// Arrival time of the last recorded event
        reached: f64,
        /// Steps taken by the failing call
        steps: usize,
    },

    /// Time grid for a resumable sweep decreases (or is NaN) at `index`.
    #[error("Time grid is not non-decreasing at index {index}")]
    UnsortedTimeGrid {
        /// First offending grid index
        index: usize,
    },

    /// An ensemble needs at least one walk.
    #[error("Ensemble must contain at least one walk")]
    EmptyEnsemble,
}
