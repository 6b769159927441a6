//! Jump-length distributions and per-step jump records.
//!
//! The walk supports two jump-length laws:
//!
//! | Variant | Law | E[R] | E[R²] |
//! |---------|-----|------|-------|
//! | `ArcSine` | Beta(½, ½) on [0, 1] | 1/2 | 3/8 |
//! | `GaussianSquared` | X², X ~ N(μ, σ²) | μ² + σ² | μ⁴ + 6μ²σ² + 3σ⁴ |
//!
//! `ArcSine` is the default. `GaussianSquared` draws X through the engine's
//! own [`GaussianVariate`], so consecutive jumps reuse its cached spare.

use ctrw_core::rng::WalkRng;
use ctrw_core::variates::GaussianVariate;
use rand_distr::Beta;

use crate::error::{ConfigError, WalkError};

/// Law of the distance covered by a single jump.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum JumpLengthDistribution {
    /// Beta(0.5, 0.5), the arcsine law on [0, 1].
    #[default]
    ArcSine,

    /// Square of a normal variate N(mean, stddev²).
    GaussianSquared {
        /// Mean of the underlying normal.
        mean: f64,
        /// Standard deviation of the underlying normal.
        stddev: f64,
    },
}

impl JumpLengthDistribution {
    /// Squared N(10, 1) jump lengths.
    pub const DOCUMENTED_GAUSSIAN: JumpLengthDistribution =
        JumpLengthDistribution::GaussianSquared {
            mean: 10.0,
            stddev: 1.0,
        };

    /// Creates a squared-Gaussian jump law.
    #[inline]
    pub fn gaussian_squared(mean: f64, stddev: f64) -> Self {
        Self::GaussianSquared { mean, stddev }
    }

    /// Validates the distribution parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if the Gaussian mean is not
    /// finite or the standard deviation is not finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::ArcSine => Ok(()),
            Self::GaussianSquared { mean, stddev } => {
                if !mean.is_finite() {
                    return Err(ConfigError::InvalidParameter {
                        name: "jump_length.mean",
                        value: format!("{} is not finite", mean),
                    });
                }
                if !(stddev.is_finite() && stddev > 0.0) {
                    return Err(ConfigError::InvalidParameter {
                        name: "jump_length.stddev",
                        value: format!("{} must be finite and positive", stddev),
                    });
                }
                Ok(())
            }
        }
    }

    /// Theoretical mean jump length E[R].
    pub fn mean_length(&self) -> f64 {
        match *self {
            Self::ArcSine => 0.5,
            Self::GaussianSquared { mean, stddev } => mean * mean + stddev * stddev,
        }
    }

    /// Theoretical second moment E[R²].
    ///
    /// With uniformly random directions the cross terms of the displacement
    /// cancel, so this is the mean squared displacement added per jump.
    pub fn second_moment(&self) -> f64 {
        match *self {
            Self::ArcSine => 0.375,
            Self::GaussianSquared { mean, stddev } => {
                let (m2, s2) = (mean * mean, stddev * stddev);
                m2 * m2 + 6.0 * m2 * s2 + 3.0 * s2 * s2
            }
        }
    }
}

/// Draws jump lengths for one walk.
#[derive(Clone, Debug)]
pub(crate) struct JumpSampler {
    distribution: JumpLengthDistribution,
    arcsine: Beta<f64>,
    rng: WalkRng,
    gaussian: GaussianVariate,
}

impl JumpSampler {
    pub(crate) fn new(
        distribution: JumpLengthDistribution,
        rng: WalkRng,
        gaussian: GaussianVariate,
    ) -> Result<Self, ConfigError> {
        distribution.validate()?;
        let arcsine = Beta::new(0.5, 0.5).map_err(|e| ConfigError::InvalidParameter {
            name: "jump_length",
            value: e.to_string(),
        })?;
        Ok(Self {
            distribution,
            arcsine,
            rng,
            gaussian,
        })
    }

    #[inline]
    pub(crate) fn sample(&mut self) -> Result<f64, WalkError> {
        match self.distribution {
            JumpLengthDistribution::ArcSine => Ok(self.rng.sample(&self.arcsine)),
            JumpLengthDistribution::GaussianSquared { mean, stddev } => {
                let x = self.gaussian.next(mean, stddev)?;
                Ok(x * x)
            }
        }
    }
}

/// Per-jump draws, aligned by index.
///
/// Record `i` produced trajectory event `i + 1`; the initial position has
/// no preceding jump.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JumpRecords {
    lengths: Vec<f64>,
    angles: Vec<f64>,
    waiting_times: Vec<f64>,
}

impl JumpRecords {
    /// Number of recorded jumps.
    #[inline]
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Returns `true` before the first jump.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Jump lengths (≥ 0).
    #[inline]
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Jump directions in radians, in [0, 2π).
    #[inline]
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Waiting times preceding each jump (> 0).
    #[inline]
    pub fn waiting_times(&self) -> &[f64] {
        &self.waiting_times
    }

    pub(crate) fn push(&mut self, length: f64, angle: f64, waiting_time: f64) {
        self.lengths.push(length);
        self.angles.push(angle);
        self.waiting_times.push(waiting_time);
    }
}
