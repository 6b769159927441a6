//! Normal variates via polar rejection sampling.
//!
//! Each accepted candidate pair (u, v) yields two independent standard
//! normal values. The first is returned immediately; the second is held in
//! the generator and handed out by the next call, scaled by *that* call's
//! mean and standard deviation.

use super::error::VariateError;
use crate::density;
use crate::rng::WalkRng;

/// Gaussian generator with paired-value caching.
///
/// # Algorithm
///
/// 1. Draw u, v uniformly in (−1, 1) and set s = u² + v²
/// 2. Reject while s ∉ (0, 1]
/// 3. r = √(−2 ln s / s)
/// 4. Return r·v·σ + μ and keep r·u for the next call
///
/// # Caching contract
///
/// The spare value is stored unscaled. A call that finds a spare returns
/// `spare · σ + μ` with its own parameters and draws no uniforms. Two
/// consecutive calls therefore share the same radius r even when their
/// parameters differ.
///
/// # Examples
///
/// ```rust
/// use ctrw_core::rng::WalkRng;
/// use ctrw_core::variates::GaussianVariate;
///
/// let mut gauss = GaussianVariate::new(WalkRng::from_seed(42));
/// let first = gauss.next(0.0, 1.0).unwrap();
/// assert!(gauss.has_spare());
/// let second = gauss.next(10.0, 2.0).unwrap();
/// assert!(!gauss.has_spare());
/// # let _ = (first, second);
/// ```
#[derive(Clone, Debug)]
pub struct GaussianVariate {
    rng: WalkRng,
    /// Unscaled second value of the most recent accepted pair.
    spare: Option<f64>,
}

impl GaussianVariate {
    /// Creates a generator drawing from the given uniform source.
    pub fn new(rng: WalkRng) -> Self {
        Self { rng, spare: None }
    }

    /// Returns the seed of the underlying uniform source.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Returns `true` when the next call will be served from the cache.
    #[inline]
    pub fn has_spare(&self) -> bool {
        self.spare.is_some()
    }

    /// Draws a normal variate with the given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns [`VariateError::InvalidMean`] if `mean` is not finite and
    /// [`VariateError::InvalidStdDev`] unless `stddev` is finite and > 0.
    /// Parameters are checked before the cache is consumed, so a rejected
    /// call leaves the generator untouched.
    pub fn next(&mut self, mean: f64, stddev: f64) -> Result<f64, VariateError> {
        if !mean.is_finite() {
            return Err(VariateError::InvalidMean { mean });
        }
        if !(stddev.is_finite() && stddev > 0.0) {
            return Err(VariateError::InvalidStdDev { stddev });
        }
        Ok(self.next_standard() * stddev + mean)
    }

    /// Draws a standard normal variate (μ = 0, σ = 1).
    pub fn next_standard(&mut self) -> f64 {
        if let Some(spare) = self.spare.take() {
            return spare;
        }
        loop {
            let u = self.rng.gen_open01() * 2.0 - 1.0;
            let v = self.rng.gen_open01() * 2.0 - 1.0;
            let s = u * u + v * v;
            if s == 0.0 || s > 1.0 {
                continue;
            }
            let r = (-2.0 * s.ln() / s).sqrt();
            self.spare = Some(r * u);
            return r * v;
        }
    }

    /// Normal density at `x`; see [`density::gaussian_pdf`].
    #[inline]
    pub fn expected_pdf(x: f64, mean: f64, stddev: f64) -> f64 {
        density::gaussian_pdf(x, mean, stddev)
    }
}
