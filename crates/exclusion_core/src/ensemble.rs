//! Independent replicas of one configuration.
//!
//! Each replica owns its driver and RNG stream (seeded `seed + index`), so
//! replicas can run on separate threads without changing any single chain.

use crate::config::AppConfig;
use crate::driver::{RunReport, SimulationDriver};
use crate::error::Result;
use crate::observables::density_profile;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Summary of one replica.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReplicaSummary {
    pub seed: u64,
    pub report: RunReport,
    pub density_profile: Vec<f64>,
}

fn run_replica(config: &AppConfig, seed: u64) -> Result<ReplicaSummary> {
    let mut driver = SimulationDriver::from_config(config, seed)?;
    let report = driver.run(config.run.total_steps, config.run.sample_every)?;
    Ok(ReplicaSummary {
        seed,
        report,
        density_profile: density_profile(driver.trajectory()),
    })
}

/// Runs `replicas` independent chains of `config` starting from `base_seed`.
///
/// Results are ordered by replica index regardless of scheduling.
pub fn run_ensemble(
    config: &AppConfig,
    replicas: usize,
    base_seed: u64,
) -> Result<Vec<ReplicaSummary>> {
    config.validate()?;

    #[cfg(feature = "parallel")]
    let summaries: Result<Vec<ReplicaSummary>> = (0..replicas)
        .into_par_iter()
        .map(|i| run_replica(config, base_seed.wrapping_add(i as u64)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let summaries: Result<Vec<ReplicaSummary>> = (0..replicas)
        .map(|i| run_replica(config, base_seed.wrapping_add(i as u64)))
        .collect();

    summaries
}

/// Site-wise mean of the replicas' density profiles.
pub fn ensemble_density_profile(summaries: &[ReplicaSummary]) -> Vec<f64> {
    let Some(first) = summaries.first() else {
        return Vec::new();
    };
    let mut profile = vec![0.0; first.density_profile.len()];
    for summary in summaries {
        for (acc, value) in profile.iter_mut().zip(&summary.density_profile) {
            *acc += value;
        }
    }
    let n = summaries.len() as f64;
    for value in &mut profile {
        *value /= n;
    }
    profile
}
