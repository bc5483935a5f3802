//! Sampling behaviour of the canonical distributions

use approx::assert_relative_eq;
use lab_distributions::{canonical, DistributionKind, PlotRange};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sample_has_requested_length(n in 1usize..2000, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for dist in canonical() {
            prop_assert_eq!(dist.sample(n, &mut rng).unwrap().len(), n);
        }
    }

    #[test]
    fn uniform_samples_stay_in_support(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let uniform = DistributionKind::Uniform.canonical();
        let bound = 3f64.sqrt();
        for x in uniform.sample(500, &mut rng).unwrap() {
            prop_assert!((-bound..=bound).contains(&x));
        }
    }
}

#[test]
fn test_zero_length_sample() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for dist in canonical() {
        assert!(dist.sample(0, &mut rng).unwrap().is_empty());
    }
}

#[test]
fn test_same_seed_same_sample() {
    for dist in canonical() {
        let a = dist.sample(100, &mut ChaCha8Rng::seed_from_u64(17)).unwrap();
        let b = dist.sample(100, &mut ChaCha8Rng::seed_from_u64(17)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_sample_moments_match_theory() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    // (mean, variance) of Normal(0, 1), Poisson(10) and Uniform(±√3)
    for (kind, expected_mean, expected_var) in [
        (DistributionKind::Normal, 0.0, 1.0),
        (DistributionKind::Poisson, 10.0, 10.0),
        (DistributionKind::Uniform, 0.0, 1.0),
    ] {
        let sample = kind.canonical().sample(200_000, &mut rng).unwrap();
        let mean = lab_core::math::mean(&sample).unwrap();
        let var = lab_core::math::variance(&sample).unwrap();
        assert_relative_eq!(mean, expected_mean, epsilon = 0.05);
        assert_relative_eq!(var, expected_var, max_relative = 0.03);
    }
}

#[test]
fn test_density_integrates_over_plot_range() {
    // Trapezoid rule over the plot range; Cauchy loses ≈6% in the tails beyond ±10
    for (kind, expected, tol) in [
        (DistributionKind::Normal, 1.0, 1e-4),
        (DistributionKind::Cauchy, 0.9365, 1e-3),
        (DistributionKind::Uniform, 1.0, 1e-2),
    ] {
        let curve = kind.canonical().density_curve(&kind.canonical().plot_range()).unwrap();
        let area: f64 = curve
            .windows(2)
            .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
            .sum();
        assert_relative_eq!(area, expected, epsilon = tol);
    }
}

#[test]
fn test_poisson_mass_over_plot_range() {
    let poisson = DistributionKind::Poisson.canonical();
    let curve = poisson.density_curve(&PlotRange::arange(0, 60)).unwrap();
    let total: f64 = curve.iter().map(|(_, p)| p).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-9);
}
