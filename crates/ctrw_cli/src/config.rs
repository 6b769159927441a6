//! CLI configuration loading
//!
//! Loads defaults for every command from an optional TOML file:
//!
//! ```toml
//! [walk]
//! seed = 42
//! waiting_time_mean = 1.0
//! jump_length = { kind = "gaussian_squared", mean = 10.0, stddev = 1.0 }
//!
//! [simulate]
//! horizon = 100.0
//! format = "json"
//!
//! [msd]
//! walks = 1000
//!
//! [validate]
//! samples = 100000
//! bins = 100
//! ```
//!
//! Command-line flags take precedence over file values.

use ctrw_engine::{JumpLengthDistribution, WalkConfig};
use serde::Deserialize;
use std::path::Path;

use crate::{CliError, Result};

/// CLI configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Walk parameters shared by `simulate` and `msd`
    #[serde(default)]
    pub walk: WalkSection,

    /// `simulate` defaults
    #[serde(default)]
    pub simulate: SimulateSection,

    /// `msd` defaults
    #[serde(default)]
    pub msd: MsdSection,

    /// `validate` defaults
    #[serde(default)]
    pub validate: ValidateSection,
}

/// Walk engine parameters; unset fields use the engine defaults
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkSection {
    /// Master seed
    pub seed: Option<u64>,

    /// Mean waiting time between jumps
    pub waiting_time_mean: Option<f64>,

    /// Jump-length law
    pub jump_length: Option<JumpLengthDistribution>,

    /// Step limit for one `advance_to` call
    pub max_steps_per_advance: Option<usize>,
}

/// Single-walk settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulateSection {
    /// Simulated time horizon
    #[serde(default = "default_horizon")]
    pub horizon: f64,

    /// Output format (table, json, csv)
    #[serde(default = "default_format")]
    pub format: String,
}

/// Ensemble MSD settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MsdSection {
    /// Number of walks
    #[serde(default = "default_walks")]
    pub walks: usize,

    /// Simulated time horizon
    #[serde(default = "default_horizon")]
    pub horizon: f64,

    /// Grid points from 0 to the horizon; unset means an integer grid
    #[serde(default)]
    pub points: Option<usize>,

    /// Output format (table, json, csv)
    #[serde(default = "default_format")]
    pub format: String,
}

/// RNG validation settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidateSection {
    /// Number of draws
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Histogram bins
    #[serde(default = "default_bins")]
    pub bins: usize,

    /// Generator seed
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_horizon() -> f64 {
    100.0
}

fn default_format() -> String {
    "table".to_string()
}

fn default_walks() -> usize {
    1000
}

fn default_samples() -> usize {
    ctrw_core::validation::DEFAULT_SAMPLES
}

fn default_bins() -> usize {
    100
}

impl Default for SimulateSection {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
            format: default_format(),
        }
    }
}

impl Default for MsdSection {
    fn default() -> Self {
        Self {
            walks: default_walks(),
            horizon: default_horizon(),
            points: None,
            format: default_format(),
        }
    }
}

impl Default for ValidateSection {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            bins: default_bins(),
            seed: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing file yields the default configuration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::Parse(format!("Failed to parse config: {}", e)))
    }
}

impl WalkSection {
    /// Builds the engine configuration, with `seed` overriding the file.
    pub fn to_walk_config(&self, seed: Option<u64>) -> Result<WalkConfig> {
        let mut builder = WalkConfig::builder();
        if let Some(seed) = seed.or(self.seed) {
            builder = builder.seed(seed);
        }
        if let Some(mean) = self.waiting_time_mean {
            builder = builder.waiting_time_mean(mean);
        }
        if let Some(jump_length) = self.jump_length {
            builder = builder.jump_length(jump_length);
        }
        if let Some(limit) = self.max_steps_per_advance {
            builder = builder.max_steps_per_advance(limit);
        }
        Ok(builder.build()?)
    }
}
