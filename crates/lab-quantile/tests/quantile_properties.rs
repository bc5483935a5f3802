//! Property and convergence tests for the linear quantile estimator

use approx::assert_relative_eq;
use lab_core::CentralTendencyEstimator;
use lab_quantile::{LinearQuantile, Median, QuantileEstimator, QuartileMidpoint};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Cauchy, Distribution, Normal};

proptest! {
    #[test]
    fn quantile_is_monotone_in_p(
        mut data in prop::collection::vec(-1e6f64..1e6, 1..200),
        p1 in 0.0f64..=1.0,
        p2 in 0.0f64..=1.0,
    ) {
        data.sort_by(f64::total_cmp);
        let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        let q_lo = LinearQuantile.quantile_sorted(&data, lo).unwrap();
        let q_hi = LinearQuantile.quantile_sorted(&data, hi).unwrap();
        prop_assert!(q_lo <= q_hi);
    }

    #[test]
    fn quantile_stays_within_sample_range(
        mut data in prop::collection::vec(-1e6f64..1e6, 1..200),
        p in 0.0f64..=1.0,
    ) {
        data.sort_by(f64::total_cmp);
        let q = LinearQuantile.quantile_sorted(&data, p).unwrap();
        prop_assert!(q >= data[0] && q <= data[data.len() - 1]);
    }

    #[test]
    fn quartile_midpoint_between_quartiles(
        mut data in prop::collection::vec(-1e3f64..1e3, 2..100),
    ) {
        data.sort_by(f64::total_cmp);
        let q1 = LinearQuantile.quantile_sorted(&data, 0.25).unwrap();
        let q3 = LinearQuantile.quantile_sorted(&data, 0.75).unwrap();
        let zq = QuartileMidpoint::new(LinearQuantile).estimate_sorted(&data).unwrap();
        prop_assert!(zq >= q1 - 1e-9 && zq <= q3 + 1e-9);
    }
}

#[test]
fn test_quartile_midpoint_converges_for_normal() {
    let mut rng = StdRng::seed_from_u64(42);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut data: Vec<f64> = (0..100_000).map(|_| normal.sample(&mut rng)).collect();

    let zq = QuartileMidpoint::new(LinearQuantile).estimate(&mut data).unwrap();
    assert!(zq.abs() < 0.02, "quartile midpoint {zq} should be near 0");
}

#[test]
fn test_quartile_midpoint_converges_for_cauchy() {
    let mut rng = StdRng::seed_from_u64(7);
    let cauchy = Cauchy::new(0.0, 1.0).unwrap();
    let mut data: Vec<f64> = (0..100_000).map(|_| cauchy.sample(&mut rng)).collect();

    let zq = QuartileMidpoint::new(LinearQuantile).estimate(&mut data).unwrap();
    let median = Median::new(LinearQuantile).estimate_sorted(&data).unwrap();
    assert!(zq.abs() < 0.05, "quartile midpoint {zq} should be near the location");
    assert!(median.abs() < 0.05, "median {median} should be near the location");
}

#[test]
fn test_normal_quartiles() {
    let mut rng = StdRng::seed_from_u64(1);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut data: Vec<f64> = (0..200_000).map(|_| normal.sample(&mut rng)).collect();

    let qs = LinearQuantile.quantiles(&mut data, &[0.25, 0.75]).unwrap();
    // Φ⁻¹(0.75) ≈ 0.6745
    assert_relative_eq!(qs[0], -0.6745, epsilon = 0.02);
    assert_relative_eq!(qs[1], 0.6745, epsilon = 0.02);
}
