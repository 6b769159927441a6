//! Walk engine configuration.
//!
//! This module provides the immutable [`WalkConfig`] and its validating
//! builder.

use crate::error::ConfigError;
use crate::jump::JumpLengthDistribution;

/// Maximum value accepted for the per-call step limit.
pub const MAX_STEP_LIMIT: usize = 1_000_000_000;

/// Default per-call step limit for `advance_to`.
pub const DEFAULT_STEP_LIMIT: usize = 10_000_000;

/// Default mean waiting time between jumps.
pub const DEFAULT_WAITING_TIME_MEAN: f64 = 1.0;

/// Walk simulation configuration.
///
/// Immutable configuration specifying how a walk draws its steps.
/// Use [`WalkConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use ctrw_engine::{JumpLengthDistribution, WalkConfig};
///
/// let config = WalkConfig::builder()
///     .seed(42)
///     .waiting_time_mean(1.0)
///     .jump_length(JumpLengthDistribution::ArcSine)
///     .max_steps_per_advance(1_000_000)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkConfig {
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Mean of the exponential waiting time.
    waiting_time_mean: f64,
    /// Jump-length law.
    jump_length: JumpLengthDistribution,
    /// Step limit for a single `advance_to` call.
    max_steps_per_advance: usize,
}

impl WalkConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> WalkConfigBuilder {
        WalkConfigBuilder::default()
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the mean waiting time between jumps.
    #[inline]
    pub fn waiting_time_mean(&self) -> f64 {
        self.waiting_time_mean
    }

    /// Returns the jump-length law.
    #[inline]
    pub fn jump_length(&self) -> JumpLengthDistribution {
        self.jump_length
    }

    /// Returns the step limit for a single `advance_to` call.
    #[inline]
    pub fn max_steps_per_advance(&self) -> usize {
        self.max_steps_per_advance
    }

    /// Copy of this configuration with a different seed.
    #[inline]
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..*self
        }
    }

    /// Theoretical mean squared displacement at time `t`.
    ///
    /// Jumps arrive as a Poisson process with rate 1/τ and directions are
    /// uniform, so MSD(t) = (t / τ) · E[R²].
    pub fn expected_msd(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        t / self.waiting_time_mean * self.jump_length.second_moment()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `waiting_time_mean` is not finite and positive
    /// - `max_steps_per_advance` is 0 or greater than 1,000,000,000
    /// - the jump-length parameters are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.waiting_time_mean.is_finite() && self.waiting_time_mean > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "waiting_time_mean",
                value: format!("{} must be finite and positive", self.waiting_time_mean),
            });
        }
        if self.max_steps_per_advance == 0 || self.max_steps_per_advance > MAX_STEP_LIMIT {
            return Err(ConfigError::InvalidStepLimit(self.max_steps_per_advance));
        }
        self.jump_length.validate()
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            seed: None,
            waiting_time_mean: DEFAULT_WAITING_TIME_MEAN,
            jump_length: JumpLengthDistribution::default(),
            max_steps_per_advance: DEFAULT_STEP_LIMIT,
        }
    }
}

/// Builder for [`WalkConfig`].
///
/// Every field has a default; `build()` only fails on invalid values.
#[derive(Clone, Debug, Default)]
pub struct WalkConfigBuilder {
    seed: Option<u64>,
    waiting_time_mean: Option<f64>,
    jump_length: Option<JumpLengthDistribution>,
    max_steps_per_advance: Option<usize>,
}

impl WalkConfigBuilder {
    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the mean waiting time between jumps (default 1.0).
    #[inline]
    pub fn waiting_time_mean(mut self, mean: f64) -> Self {
        self.waiting_time_mean = Some(mean);
        self
    }

    /// Sets the jump-length law (default arcsine).
    #[inline]
    pub fn jump_length(mut self, distribution: JumpLengthDistribution) -> Self {
        self.jump_length = Some(distribution);
        self
    }

    /// Sets the step limit for a single `advance_to` call.
    #[inline]
    pub fn max_steps_per_advance(mut self, limit: usize) -> Self {
        self.max_steps_per_advance = Some(limit);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// See [`WalkConfig::validate`].
    pub fn build(self) -> Result<WalkConfig, ConfigError> {
        let defaults = WalkConfig::default();
        let config = WalkConfig {
            seed: self.seed,
            waiting_time_mean: self.waiting_time_mean.unwrap_or(defaults.waiting_time_mean),
            jump_length: self.jump_length.unwrap_or(defaults.jump_length),
            max_steps_per_advance: self
                .max_steps_per_advance
                .unwrap_or(defaults.max_steps_per_advance),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_config_builder_defaults() {
        let config = WalkConfig::builder().build().unwrap();

        assert_eq!(config.seed(), None);
        assert_eq!(config.waiting_time_mean(), 1.0);
        assert_eq!(config.jump_length(), JumpLengthDistribution::ArcSine);
        assert_eq!(config.max_steps_per_advance(), DEFAULT_STEP_LIMIT);
        assert_eq!(config, WalkConfig::default());
    }

    #[test]
    fn test_config_builder_with_values() {
        let config = WalkConfig::builder()
            .seed(7)
            .waiting_time_mean(2.5)
            .jump_length(JumpLengthDistribution::DOCUMENTED_GAUSSIAN)
            .max_steps_per_advance(500)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.waiting_time_mean(), 2.5);
        assert_eq!(config.jump_length(), JumpLengthDistribution::DOCUMENTED_GAUSSIAN);
        assert_eq!(config.max_steps_per_advance(), 500);
    }

    #[test]
    fn test_config_invalid_waiting_time_mean() {
        for mean in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = WalkConfig::builder().waiting_time_mean(mean).build();
            assert!(
                matches!(
                    result,
                    Err(ConfigError::InvalidParameter {
                        name: "waiting_time_mean",
                        ..
                    })
                ),
                "mean {} accepted",
                mean
            );
        }
    }

    #[test]
    fn test_config_invalid_step_limits() {
        let result = WalkConfig::builder().max_steps_per_advance(0).build();
        assert_eq!(result, Err(ConfigError::InvalidStepLimit(0)));

        let result = WalkConfig::builder()
            .max_steps_per_advance(MAX_STEP_LIMIT + 1)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidStepLimit(_))));
    }

    #[test]
    fn test_config_invalid_jump_length() {
        let result = WalkConfig::builder()
            .jump_length(JumpLengthDistribution::gaussian_squared(1.0, 0.0))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_with_seed_keeps_other_fields() {
        let config = WalkConfig::builder()
            .waiting_time_mean(3.0)
            .build()
            .unwrap();
        let seeded = config.with_seed(11);

        assert_eq!(seeded.seed(), Some(11));
        assert_eq!(seeded.waiting_time_mean(), 3.0);
    }

    #[test]
    fn test_expected_msd() {
        let config = WalkConfig::builder().waiting_time_mean(2.0).build().unwrap();
        assert_eq!(config.expected_msd(-1.0), 0.0);
        assert_relative_eq!(config.expected_msd(100.0), 50.0 * 0.375);
    }
}
