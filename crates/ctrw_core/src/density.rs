//! Closed-form probability densities paired with the generators.
//!
//! This module provides:
//! - `gaussian_pdf`: density of N(μ, σ²)
//! - `exponential_pdf`: density of the exponential distribution with mean μ
//! - `integrate_trapezoid`: composite trapezoid rule used to check that a
//!   density normalises to one over its support
//!
//! The densities are generic over `T: Float` so they work for `f32` and `f64`.

use num_traits::{Float, FloatConst};

/// Normal probability density function.
///
/// # Mathematical Definition
/// f(x) = 1 / (σ √(2π)) · exp(−(x − μ)² / (2σ²))
///
/// # Examples
/// ```
/// use ctrw_core::density::gaussian_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((gaussian_pdf(0.0_f64, 0.0, 1.0) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn gaussian_pdf<T: Float + FloatConst>(x: T, mean: T, stddev: T) -> T {
    let two = T::one() + T::one();
    let z = x - mean;
    let norm = T::one() / (stddev * (two * T::PI()).sqrt());
    norm * (-(z * z) / (two * stddev * stddev)).exp()
}

/// Exponential probability density function.
///
/// # Mathematical Definition
/// f(x) = (1/μ) · exp(−x/μ) for x ≥ 0, and 0 otherwise.
///
/// # Examples
/// ```
/// use ctrw_core::density::exponential_pdf;
///
/// assert_eq!(exponential_pdf(-1.0_f64, 3.0), 0.0);
/// assert!((exponential_pdf(0.0_f64, 3.0) - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn exponential_pdf<T: Float>(x: T, mean: T) -> T {
    if x >= T::zero() {
        (-x / mean).exp() / mean
    } else {
        T::zero()
    }
}

/// Integrates `f` over [a, b] with the composite trapezoid rule on `n`
/// equal intervals. Returns 0 for `n == 0`.
pub fn integrate_trapezoid<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let h = (b - a) / n as f64;
    let interior: f64 = (1..n).map(|i| f(a + i as f64 * h)).sum();
    h * (0.5 * (f(a) + f(b)) + interior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // gaussian_pdf tests
    // ==========================================================

    #[test]
    fn test_gaussian_pdf_reference_values() {
        assert_relative_eq!(gaussian_pdf(0.0_f64, 0.0, 1.0), 0.3989422804014327, epsilon = 1e-12);
        assert_relative_eq!(gaussian_pdf(1.0_f64, 0.0, 1.0), 0.24197072451914337, epsilon = 1e-12);
        // Shift and scale: N(2, 0.5²) at its mean
        assert_relative_eq!(gaussian_pdf(2.0_f64, 2.0, 0.5), 0.7978845608028654, epsilon = 1e-12);
    }

    #[test]
    fn test_gaussian_pdf_symmetry() {
        for d in [0.1, 0.5, 1.0, 2.0, 5.0] {
            assert_relative_eq!(
                gaussian_pdf(1.0 + d, 1.0, 2.0),
                gaussian_pdf(1.0 - d, 1.0, 2.0),
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_gaussian_pdf_f32() {
        let value = gaussian_pdf(0.0_f32, 0.0, 1.0);
        assert!((value - 0.398_942_3).abs() < 1e-6);
    }

    #[test]
    fn test_gaussian_pdf_integrates_to_one() {
        let sigma = 2.0_f64.sqrt();
        let total = integrate_trapezoid(|x| gaussian_pdf(x, 0.0, sigma), -10.0, 10.0, 10_000);
        assert_relative_eq!(total, 1.0, epsilon = 1e-6);
    }

    // ==========================================================
    // exponential_pdf tests
    // ==========================================================

    #[test]
    fn test_exponential_pdf_reference_values() {
        assert_relative_eq!(exponential_pdf(1.0_f64, 1.0), (-1.0_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(exponential_pdf(3.0_f64, 3.0), (-1.0_f64).exp() / 3.0, epsilon = 1e-15);
        assert_eq!(exponential_pdf(-1e-9_f64, 1.0), 0.0);
    }

    #[test]
    fn test_exponential_pdf_integrates_to_one() {
        let total = integrate_trapezoid(|x| exponential_pdf(x, 3.0), 0.0, 50.0, 50_000);
        // Tail beyond 50 is exp(-50/3) ≈ 5.8e-8
        assert_relative_eq!(total, 1.0, epsilon = 1e-6);
    }

    // ==========================================================
    // integrate_trapezoid tests
    // ==========================================================

    #[test]
    fn test_trapezoid_exact_for_linear() {
        let area = integrate_trapezoid(|x| 2.0 * x + 1.0, 0.0, 3.0, 7);
        assert_relative_eq!(area, 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_zero_intervals() {
        assert_eq!(integrate_trapezoid(|x| x, 0.0, 1.0, 0), 0.0);
    }

    mod proptests {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_densities_non_negative(
                x in -100.0f64..100.0,
                mean in -10.0f64..10.0,
                scale in 0.01f64..10.0
            ) {
                prop_assert!(gaussian_pdf(x, mean, scale) >= 0.0);
                prop_assert!(exponential_pdf(x, scale) >= 0.0);
            }

            #[test]
            fn test_gaussian_peak_is_at_mean(
                x in -50.0f64..50.0,
                mean in -10.0f64..10.0,
                stddev in 0.1f64..10.0
            ) {
                prop_assert!(gaussian_pdf(x, mean, stddev) <= gaussian_pdf(mean, mean, stddev));
            }
        }
    }
}
