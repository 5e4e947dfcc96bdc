use exclusion_lib::model::config::AppConfig;
use exclusion_lib::model::ensemble::{ensemble_density_profile, run_ensemble};
use exclusion_lib::model::moves::Event;
use exclusion_lib::model::sampler::EventSampler;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_weighted_selection_converges() {
    let events = [Event::right(0, 1, 3.0), Event::right(5, 6, 1.0)];
    let mut sampler = EventSampler::new();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let trials = 400_000;
    let first = (0..trials)
        .filter(|_| sampler.sample(&events, &mut rng).unwrap().1 == events[0])
        .count();
    let freq = first as f64 / trials as f64;
    assert!((freq - 0.75).abs() < 0.005, "empirical frequency {freq}");
}

#[test]
fn test_sep_density_profile_is_uniform() {
    let mut config = AppConfig::default();
    config.lattice.length = 20;
    config.lattice.particles = 8;
    config.rates.p = 0.5;
    config.rates.q = 0.5;
    config.run.total_steps = 4000;
    config.run.sample_every = 10;

    let summaries = run_ensemble(&config, 200, 2024).expect("ensemble failed");
    let profile = ensemble_density_profile(&summaries);
    let expected = 8.0 / 20.0;
    for (site, rho) in profile.iter().enumerate() {
        assert!(
            (rho - expected).abs() < 0.05,
            "site {site} density {rho} deviates from {expected}"
        );
    }
}

#[test]
fn test_tasep_current_matches_mean_field() {
    // On a ring, TASEP's stationary state is uniform over configurations,
    // giving J = p * N (L - N) / (L (L - 1)) exactly.
    let mut config = AppConfig::default();
    config.lattice.length = 50;
    config.lattice.particles = 25;
    config.rates.p = 1.0;
    config.rates.q = 0.0;
    config.run.total_steps = 40_000;
    config.run.sample_every = 1000;

    let summaries = run_ensemble(&config, 16, 5).expect("ensemble failed");
    let mean_current = summaries
        .iter()
        .map(|s| s.report.metrics.net_right_hops() as f64 / (50.0 * s.report.final_time))
        .sum::<f64>()
        / summaries.len() as f64;
    let exact = 25.0 * 25.0 / (50.0 * 49.0);
    assert!(
        (mean_current - exact).abs() < 0.02,
        "current {mean_current} vs {exact}"
    );
}
