//! Statistical validation of the variate generators against theory.
//!
//! Every run draws 100,000 values: N(0, 2) for the Gaussian and mean 3 for
//! the exponential.
//! Seeds are fixed so the assertions are deterministic.

use ctrw_core::density::{exponential_pdf, gaussian_pdf};
use ctrw_core::rng::WalkRng;
use ctrw_core::validation::{HarnessConfig, ValidationHarness};
use ctrw_core::variates::{ExponentialVariate, GaussianVariate};

fn config() -> HarnessConfig {
    HarnessConfig::builder()
        .samples(100_000)
        .raw_moments(&[1])
        .central_moments(&[2])
        .build()
        .unwrap()
}

#[test]
fn test_exponential_mean_and_variance() {
    let mean = 3.0;
    let mut expo = ExponentialVariate::new(WalkRng::from_seed(20_240_101));
    let mut harness = ValidationHarness::run(&config(), || expo.next(mean).unwrap_or(f64::NAN));

    let e = harness.raw_moment(1);
    let d = harness.central_moment(2);
    assert!((e - 3.0).abs() < 0.05, "E = {:.4}", e);
    assert!((d - 9.0).abs() < 0.5, "D = {:.4}", d);
}

#[test]
fn test_gaussian_mean_and_variance() {
    let sigma = 2.0_f64.sqrt();
    let mut gauss = GaussianVariate::new(WalkRng::from_seed(20_240_102));
    let mut harness =
        ValidationHarness::run(&config(), || gauss.next(0.0, sigma).unwrap_or(f64::NAN));

    let e = harness.raw_moment(1);
    let d = harness.central_moment(2);
    assert!(e.abs() < 0.05, "E = {:.4}", e);
    assert!((d - 2.0).abs() < 0.1, "D = {:.4}", d);
}

#[test]
fn test_gaussian_higher_moments() {
    // Standard normal: skewness 0, kurtosis 3
    let mut gauss = GaussianVariate::new(WalkRng::from_seed(31));
    let mut harness = ValidationHarness::run(&config(), || gauss.next_standard());

    assert!(harness.central_moment(3).abs() < 0.05);
    assert!((harness.central_moment(4) - 3.0).abs() < 0.15);
}

#[test]
fn test_gaussian_histogram_matches_density() {
    let sigma = 2.0_f64.sqrt();
    let mut gauss = GaussianVariate::new(WalkRng::from_seed(8));
    let harness = ValidationHarness::run(&config(), || gauss.next(0.0, sigma).unwrap_or(f64::NAN))
        .with_expected_density(move |x| gaussian_pdf(x, 0.0, sigma));

    let hist = harness.histogram(-10.0, 10.0, 100).unwrap();
    assert!(hist.coverage() > 0.999);

    let deviation = harness.density_deviation(-10.0, 10.0, 100).unwrap().unwrap();
    assert!(deviation < 0.02, "deviation {:.4}", deviation);

    let curve = harness.expected_curve(-10.0, 10.0, 0.2).unwrap().unwrap();
    assert!((99..=100).contains(&curve.len()));
    assert!(curve.iter().all(|&(x, y)| x < 10.0 && y >= 0.0));
}

#[test]
fn test_exponential_histogram_matches_density() {
    let mut expo = ExponentialVariate::new(WalkRng::from_seed(9));
    let harness = ValidationHarness::run(&config(), || expo.next(3.0).unwrap_or(f64::NAN))
        .with_expected_density(|x| exponential_pdf(x, 3.0));

    let deviation = harness.density_deviation(0.0, 10.0, 50).unwrap().unwrap();
    assert!(deviation < 0.02, "deviation {:.4}", deviation);
}

#[test]
fn test_invalid_parameters_surface_as_nan_moments() {
    let mut gauss = GaussianVariate::new(WalkRng::from_seed(1));
    let config = HarnessConfig::builder().samples(10).build().unwrap();
    let mut harness = ValidationHarness::run(&config, || gauss.next(0.0, -1.0).unwrap_or(f64::NAN));

    assert!(harness.raw_moment(1).is_nan());
}
