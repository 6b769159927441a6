//! Exponential variates via the inverse-CDF transform.

use super::error::VariateError;
use crate::density;
use crate::rng::WalkRng;

/// Exponential generator, X = −μ ln U with U ~ Uniform(0, 1).
///
/// Holds no state besides its uniform source. U is drawn from the open
/// interval, so every variate is finite and strictly positive.
///
/// # Examples
///
/// ```rust
/// use ctrw_core::rng::WalkRng;
/// use ctrw_core::variates::ExponentialVariate;
///
/// let mut expo = ExponentialVariate::new(WalkRng::from_seed(42));
/// let wait = expo.next(3.0).unwrap();
/// assert!(wait > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct ExponentialVariate {
    rng: WalkRng,
}

impl ExponentialVariate {
    /// Creates a generator drawing from the given uniform source.
    pub fn new(rng: WalkRng) -> Self {
        Self { rng }
    }

    /// Returns the seed of the underlying uniform source.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Draws an exponential variate with the given mean.
    ///
    /// # Errors
    ///
    /// Returns [`VariateError::InvalidMean`] unless `mean` is finite and > 0.
    #[inline]
    pub fn next(&mut self, mean: f64) -> Result<f64, VariateError> {
        if !(mean.is_finite() && mean > 0.0) {
            return Err(VariateError::InvalidMean { mean });
        }
        Ok(-mean * self.rng.gen_open01().ln())
    }

    /// Exponential density at `x`; see [`density::exponential_pdf`].
    #[inline]
    pub fn expected_pdf(x: f64, mean: f64) -> f64 {
        density::exponential_pdf(x, mean)
    }
}
