//! Validate command implementation
//!
//! Draws a sample from one of the variate generators and compares its mean,
//! variance and histogram with the theoretical law.

use ctrw_core::rng::WalkRng;
use ctrw_core::validation::{HarnessConfig, ValidationHarness};
use ctrw_core::variates::{ExponentialVariate, GaussianVariate};
use tracing::info;

use crate::{CliError, Result};

const GAUSSIAN_MEAN: f64 = 0.0;
const GAUSSIAN_VARIANCE: f64 = 2.0;
const EXPONENTIAL_MEAN: f64 = 3.0;

/// Generator under test
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Distribution {
    /// N(0, 2) through the polar method
    Gaussian,
    /// Exp with mean 3 through the inverse CDF
    Exponential,
}

/// Empirical and theoretical figures for one validation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidationSummary {
    /// Sample mean
    pub mean: f64,
    /// Sample variance
    pub variance: f64,
    /// Theoretical mean
    pub expected_mean: f64,
    /// Theoretical variance
    pub expected_variance: f64,
    /// Largest gap between histogram heights and the density
    pub deviation: f64,
}

impl Distribution {
    /// Parse a distribution name
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "gaussian" | "normal" => Ok(Self::Gaussian),
            "exponential" | "exp" => Ok(Self::Exponential),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown distribution: {}. Supported: gaussian, exponential",
                other
            ))),
        }
    }

    /// Histogram range
    fn range(self) -> (f64, f64) {
        match self {
            Self::Gaussian => (-10.0, 10.0),
            Self::Exponential => (-1.0, 10.0),
        }
    }

    /// Theoretical (mean, variance)
    fn moments(self) -> (f64, f64) {
        match self {
            Self::Gaussian => (GAUSSIAN_MEAN, GAUSSIAN_VARIANCE),
            Self::Exponential => (EXPONENTIAL_MEAN, EXPONENTIAL_MEAN * EXPONENTIAL_MEAN),
        }
    }

    /// Draws `config.samples()` values with their expected density attached.
    ///
    /// A rejected draw enters the sample as NaN and surfaces as NaN moments.
    fn harness(self, config: &HarnessConfig, rng: WalkRng) -> ValidationHarness {
        match self {
            Self::Gaussian => {
                let stddev = GAUSSIAN_VARIANCE.sqrt();
                let mut generator = GaussianVariate::new(rng);
                ValidationHarness::run(config, || {
                    generator
                        .next(GAUSSIAN_MEAN, stddev)
                        .unwrap_or(f64::NAN)
                })
                .with_expected_density(move |x| {
                    GaussianVariate::expected_pdf(x, GAUSSIAN_MEAN, stddev)
                })
            }
            Self::Exponential => {
                let mut generator = ExponentialVariate::new(rng);
                ValidationHarness::run(config, || {
                    generator.next(EXPONENTIAL_MEAN).unwrap_or(f64::NAN)
                })
                .with_expected_density(|x| ExponentialVariate::expected_pdf(x, EXPONENTIAL_MEAN))
            }
        }
    }
}

/// Draw and summarise a sample
pub fn summarise(
    distribution: Distribution,
    samples: usize,
    bins: usize,
    seed: Option<u64>,
) -> Result<ValidationSummary> {
    let config = HarnessConfig::builder()
        .samples(samples)
        .raw_moments(&[1])
        .central_moments(&[2])
        .build()?;
    let rng = seed.map_or_else(WalkRng::from_entropy, WalkRng::from_seed);
    info!(seed = rng.seed(), samples, "drawing sample");

    let harness = distribution.harness(&config, rng);
    let (from, to) = distribution.range();
    let (expected_mean, expected_variance) = distribution.moments();

    let mean = harness
        .computed_raw_moments()
        .get(&1)
        .copied()
        .unwrap_or(f64::NAN);
    let variance = harness
        .computed_central_moments()
        .get(&2)
        .copied()
        .unwrap_or(f64::NAN);

    Ok(ValidationSummary {
        mean,
        variance,
        expected_mean,
        expected_variance,
        deviation: harness
            .density_deviation(from, to, bins)?
            .unwrap_or(f64::NAN),
    })
}

/// Run the validate command
pub fn run(
    distribution: Distribution,
    samples: usize,
    bins: usize,
    seed: Option<u64>,
) -> Result<()> {
    info!("Starting validation of {:?} generator...", distribution);

    let summary = summarise(distribution, samples, bins, seed)?;

    println!(
        "E = {:.3} (expected {:.3}), D = {:.3} (expected {:.3})",
        summary.mean, summary.expected_mean, summary.variance, summary.expected_variance
    );
    println!("max |histogram - density| = {:.4}", summary.deviation);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_parse_distribution() {
        assert_eq!(Distribution::parse("gaussian").unwrap(), Distribution::Gaussian);
        assert_eq!(
            Distribution::parse("exponential").unwrap(),
            Distribution::Exponential
        );
        assert!(Distribution::parse("cauchy").is_err());
    }

    #[test]
    fn test_gaussian_summary() {
        let s = summarise(Distribution::Gaussian, 100_000, 100, Some(3)).unwrap();
        assert_abs_diff_eq!(s.mean, 0.0, epsilon = 0.05);
        assert_abs_diff_eq!(s.variance, 2.0, epsilon = 0.1);
        assert!(s.deviation < 0.03);
    }

    #[test]
    fn test_exponential_summary() {
        let s = summarise(Distribution::Exponential, 100_000, 100, Some(4)).unwrap();
        assert_abs_diff_eq!(s.mean, 3.0, epsilon = 0.1);
        assert_abs_diff_eq!(s.variance, 9.0, epsilon = 0.5);
        assert!(s.deviation < 0.06);
    }

    #[test]
    fn test_harness_moments_come_from_configured_orders() {
        let config = HarnessConfig::builder()
            .samples(1_000)
            .raw_moments(&[1, 2])
            .central_moments(&[2])
            .build()
            .unwrap();
        let harness = Distribution::Exponential.harness(&config, WalkRng::from_seed(8));

        assert_eq!(harness.sample_count(), 1_000);
        assert_eq!(
            harness.computed_raw_moments().keys().copied().collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(harness.computed_central_moments().contains_key(&2));
        assert!(harness.has_expected_density());
    }

    #[test]
    fn test_rejected_draws_become_nan_moments() {
        let config = HarnessConfig::builder().samples(100).build().unwrap();
        let mut generator = ExponentialVariate::new(WalkRng::from_seed(2));
        let mut harness =
            ValidationHarness::run(&config, || generator.next(-1.0).unwrap_or(f64::NAN));

        assert!(harness.raw_moment(1).is_nan());
        assert!(harness.central_moment(2).is_nan());
    }

    #[test]
    fn test_zero_samples_rejected() {
        assert!(matches!(
            summarise(Distribution::Gaussian, 0, 10, Some(1)),
            Err(CliError::Validation(_))
        ));
    }
}
