//! Empirical moment harness for random-variate generators.

use std::collections::BTreeMap;
use std::fmt;

use super::error::ValidationError;
use super::histogram::Histogram;

/// Maximum number of samples a harness will draw.
pub const MAX_SAMPLES: usize = 100_000_000;

/// Default number of samples.
pub const DEFAULT_SAMPLES: usize = 100_000;

/// Harness configuration.
///
/// Use [`HarnessConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use ctrw_core::validation::HarnessConfig;
///
/// let config = HarnessConfig::builder()
///     .samples(10_000)
///     .raw_moments(&[1, 2])
///     .central_moments(&[2, 3])
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.samples(), 10_000);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarnessConfig {
    samples: usize,
    raw_moments: Vec<u32>,
    central_moments: Vec<u32>,
}

impl HarnessConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> HarnessConfigBuilder {
        HarnessConfigBuilder::default()
    }

    /// Number of samples drawn eagerly by [`ValidationHarness::run`].
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Raw moment orders computed up front.
    #[inline]
    pub fn raw_moments(&self) -> &[u32] {
        &self.raw_moments
    }

    /// Central moment orders computed up front.
    #[inline]
    pub fn central_moments(&self) -> &[u32] {
        &self.central_moments
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSampleCount`] if `samples` is 0 or
    /// greater than [`MAX_SAMPLES`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.samples == 0 || self.samples > MAX_SAMPLES {
            return Err(ValidationError::InvalidSampleCount(self.samples));
        }
        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            raw_moments: vec![1],
            central_moments: vec![2],
        }
    }
}

/// Builder for [`HarnessConfig`].
#[derive(Clone, Debug, Default)]
pub struct HarnessConfigBuilder {
    samples: Option<usize>,
    raw_moments: Option<Vec<u32>>,
    central_moments: Option<Vec<u32>>,
}

impl HarnessConfigBuilder {
    /// Sets the number of samples (default 100,000).
    #[inline]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Sets the raw moment orders computed up front (default `[1]`).
    #[inline]
    pub fn raw_moments(mut self, orders: &[u32]) -> Self {
        self.raw_moments = Some(orders.to_vec());
        self
    }

    /// Sets the central moment orders computed up front (default `[2]`).
    #[inline]
    pub fn central_moments(mut self, orders: &[u32]) -> Self {
        self.central_moments = Some(orders.to_vec());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSampleCount`] for an out-of-range
    /// sample count.
    pub fn build(self) -> Result<HarnessConfig, ValidationError> {
        let defaults = HarnessConfig::default();
        let config = HarnessConfig {
            samples: self.samples.unwrap_or(defaults.samples),
            raw_moments: self.raw_moments.unwrap_or(defaults.raw_moments),
            central_moments: self.central_moments.unwrap_or(defaults.central_moments),
        };
        config.validate()?;
        Ok(config)
    }
}

type DensityFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Sample of generator output with memoised empirical moments.
///
/// Samples are drawn once, eagerly. Raw moment k is `mean(x^k)`, central
/// moment k is `mean((x − x̄)^k)`. Each order is computed at most once.
/// Generator failures are not retried; a NaN sample simply yields NaN
/// moments.
///
/// # Examples
///
/// ```rust
/// use ctrw_core::density::exponential_pdf;
/// use ctrw_core::rng::WalkRng;
/// use ctrw_core::validation::{HarnessConfig, ValidationHarness};
/// use ctrw_core::variates::ExponentialVariate;
///
/// let mut expo = ExponentialVariate::new(WalkRng::from_seed(42));
/// let config = HarnessConfig::builder().samples(50_000).build().unwrap();
///
/// let mut harness = ValidationHarness::run(&config, || expo.next(3.0).unwrap_or(f64::NAN))
///     .with_expected_density(|x| exponential_pdf(x, 3.0));
///
/// assert!((harness.raw_moment(1) - 3.0).abs() < 0.1);
/// ```
pub struct ValidationHarness {
    values: Vec<f64>,
    raw_moments: BTreeMap<u32, f64>,
    central_moments: BTreeMap<u32, f64>,
    expected_density: Option<DensityFn>,
}

impl ValidationHarness {
    /// Draws `config.samples()` values from `next` and computes the
    /// configured moment orders.
    pub fn run<F: FnMut() -> f64>(config: &HarnessConfig, mut next: F) -> Self {
        let values: Vec<f64> = (0..config.samples()).map(|_| next()).collect();
        let mut harness = Self::with_values(values);
        for &k in config.raw_moments() {
            harness.raw_moment(k);
        }
        for &k in config.central_moments() {
            harness.central_moment(k);
        }
        harness
    }

    /// Wraps an already drawn sample.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySample`] for an empty sample.
    pub fn from_samples(values: Vec<f64>) -> Result<Self, ValidationError> {
        if values.is_empty() {
            return Err(ValidationError::EmptySample);
        }
        Ok(Self::with_values(values))
    }

    fn with_values(values: Vec<f64>) -> Self {
        Self {
            values,
            raw_moments: BTreeMap::new(),
            central_moments: BTreeMap::new(),
            expected_density: None,
        }
    }

    /// Attaches the theoretical density the sample should follow.
    pub fn with_expected_density<D>(mut self, density: D) -> Self
    where
        D: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.expected_density = Some(Box::new(density));
        self
    }

    /// Returns `true` if an expected density is attached.
    #[inline]
    pub fn has_expected_density(&self) -> bool {
        self.expected_density.is_some()
    }

    /// The drawn sample, in draw order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of drawn samples.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.values.len()
    }

    /// Empirical raw moment of order `k`, memoised.
    pub fn raw_moment(&mut self, k: u32) -> f64 {
        if let Some(&m) = self.raw_moments.get(&k) {
            return m;
        }
        let m = mean_of(&self.values, |x| powk(x, k));
        self.raw_moments.insert(k, m);
        m
    }

    /// Empirical central moment of order `k`, memoised.
    pub fn central_moment(&mut self, k: u32) -> f64 {
        if let Some(&m) = self.central_moments.get(&k) {
            return m;
        }
        let mean = self.raw_moment(1);
        let m = mean_of(&self.values, |x| powk(x - mean, k));
        self.central_moments.insert(k, m);
        m
    }

    /// Raw moments computed so far, keyed by order.
    #[inline]
    pub fn computed_raw_moments(&self) -> &BTreeMap<u32, f64> {
        &self.raw_moments
    }

    /// Central moments computed so far, keyed by order.
    #[inline]
    pub fn computed_central_moments(&self) -> &BTreeMap<u32, f64> {
        &self.central_moments
    }

    /// Density-normalised histogram of the sample.
    ///
    /// # Errors
    ///
    /// See [`Histogram::new`].
    pub fn histogram(&self, from: f64, to: f64, bins: usize) -> Result<Histogram, ValidationError> {
        Histogram::new(&self.values, from, to, bins)
    }

    /// Expected density sampled every `step` over [from, to).
    ///
    /// Returns `Ok(None)` when no density is attached.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRange`] for an unusable range and
    /// [`ValidationError::InvalidStep`] for a non-positive step or one that
    /// would sample more than [`MAX_SAMPLES`] points.
    pub fn expected_curve(
        &self,
        from: f64,
        to: f64,
        step: f64,
    ) -> Result<Option<Vec<(f64, f64)>>, ValidationError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(ValidationError::InvalidStep(step));
        }
        if !(from.is_finite() && to.is_finite() && from < to) {
            return Err(ValidationError::InvalidRange { from, to });
        }
        let points = ((to - from) / step).ceil();
        if !(points <= MAX_SAMPLES as f64) {
            return Err(ValidationError::InvalidStep(step));
        }
        let Some(density) = &self.expected_density else {
            return Ok(None);
        };
        let points = points as usize;
        let curve = (0..points)
            .map(|i| from + i as f64 * step)
            .filter(|&x| x < to)
            .map(|x| (x, density(x)))
            .collect();
        Ok(Some(curve))
    }

    /// Largest absolute gap between histogram bar heights and the expected
    /// density evaluated at bin centres.
    ///
    /// Returns `Ok(None)` when no density is attached.
    ///
    /// # Errors
    ///
    /// See [`Histogram::new`].
    pub fn density_deviation(
        &self,
        from: f64,
        to: f64,
        bins: usize,
    ) -> Result<Option<f64>, ValidationError> {
        let hist = self.histogram(from, to, bins)?;
        let Some(density) = &self.expected_density else {
            return Ok(None);
        };
        let deviation = hist
            .centres()
            .into_iter()
            .zip(hist.densities())
            .map(|(x, h)| (h - density(x)).abs())
            .fold(0.0, f64::max);
        Ok(Some(deviation))
    }
}

impl fmt::Debug for ValidationHarness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationHarness")
            .field("samples", &self.values.len())
            .field("raw_moments", &self.raw_moments)
            .field("central_moments", &self.central_moments)
            .field("has_expected_density", &self.expected_density.is_some())
            .finish()
    }
}

#[inline]
fn powk(x: f64, k: u32) -> f64 {
    match i32::try_from(k) {
        Ok(k) => x.powi(k),
        Err(_) => x.powf(k as f64),
    }
}

fn mean_of<F: Fn(f64) -> f64>(values: &[f64], f: F) -> f64 {
    values.iter().map(|&x| f(x)).sum::<f64>() / values.len() as f64
}
