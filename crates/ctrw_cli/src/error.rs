//! CLI error types

use ctrw_core::validation::ValidationError;
use ctrw_core::variates::VariateError;
use ctrw_engine::{ConfigError, WalkError};
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid walk configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Walk simulation failure
    #[error("Simulation error: {0}")]
    Walk(#[from] WalkError),

    /// Generator rejected its parameters
    #[error("Variate error: {0}")]
    Variate(#[from] VariateError),

    /// Validation harness failure
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}
