//! Application layer: turns a configuration into a finished run and writes
//! the requested artifacts.

use anyhow::{ensure, Context, Result};
use std::fs;

use crate::model::config::AppConfig;
use crate::model::ensemble::{ensemble_density_profile, run_ensemble, ReplicaSummary};
use crate::model::lattice::Lattice;
use crate::model::observables::{mean_density, particle_current};
use crate::model::persistence::{save_run, SavedRun};
use crate::model::state::{ModelKind, TerminationReason, Trajectory};
use crate::model::{RunReport, SimulationDriver};

/// Everything a finished run hands to the view layer.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub model: ModelKind,
    pub seed: u64,
    pub report: RunReport,
    pub trajectory: Trajectory,
    /// Live lattice at the end of the run, including a jammed one.
    pub final_lattice: Lattice,
}

pub struct App {
    pub config: AppConfig,
    pub seed: u64,
}

impl App {
    /// Validates `config` and fixes the seed (drawing one if unset).
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate().context("invalid configuration")?;
        ensure!(
            config.output.animation_fps > 0,
            "invalid configuration: animation_fps must be positive"
        );
        let seed = config.resolved_seed();
        Ok(Self { config, seed })
    }

    pub fn model(&self) -> ModelKind {
        self.config
            .rate_parameters()
            .map(|r| r.kind())
            .unwrap_or_default()
    }

    /// Runs the simulation and writes any configured output files.
    pub fn run(&self) -> Result<RunOutcome> {
        let mut driver = SimulationDriver::from_config(&self.config, self.seed)
            .context("failed to build simulation")?;
        let report = driver
            .run(self.config.run.total_steps, self.config.run.sample_every)
            .context("simulation failed")?;

        let final_lattice = driver.lattice().snapshot();
        let outcome = RunOutcome {
            model: self.model(),
            seed: self.seed,
            report,
            trajectory: driver.into_trajectory(),
            final_lattice,
        };

        if let Some(path) = &self.config.output.trajectory {
            let saved = SavedRun::new(
                &self.config,
                self.seed,
                outcome.report,
                outcome.trajectory.clone(),
            );
            save_run(&saved, path).with_context(|| format!("cannot write {path}"))?;
        }
        if let Some(path) = &self.config.output.spacetime_image {
            fs::write(path, exclusion_view::to_pgm(&outcome.trajectory))
                .with_context(|| format!("cannot write {path}"))?;
            tracing::info!(path = %path, "Space-time image written");
        }
        Ok(outcome)
    }

    /// Runs `replicas` independent copies seeded from this app's seed.
    pub fn run_ensemble(&self, replicas: usize) -> Result<Vec<ReplicaSummary>> {
        run_ensemble(&self.config, replicas, self.seed).context("ensemble failed")
    }
}

/// Human-readable summary of a run.
pub fn summary(outcome: &RunOutcome) -> String {
    let report = &outcome.report;
    let status = match report.termination {
        TerminationReason::Completed => "completed".to_string(),
        TerminationReason::Jammed { at_step } => format!("jammed at step {at_step}"),
    };
    let length = outcome.final_lattice.len();
    format!(
        "{} on L={} with N={} (seed {}): {status}\n\
         steps {}  time {:.4}  frames {}\n\
         hops right {}  left {}  current {:.4}",
        outcome.model.label(),
        length,
        outcome.final_lattice.particle_count(),
        outcome.seed,
        report.steps_executed,
        report.final_time,
        report.frames,
        report.metrics.right_hops,
        report.metrics.left_hops,
        particle_current(&report.metrics, length, report.final_time),
    )
}

/// Human-readable summary of an ensemble.
pub fn ensemble_summary(summaries: &[ReplicaSummary]) -> String {
    let profile = ensemble_density_profile(summaries);
    let jammed = summaries
        .iter()
        .filter(|s| s.report.termination.jammed_at().is_some())
        .count();
    let (min, max) = profile
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    format!(
        "{} replicas ({} jammed)\nensemble density mean {:.4}  min {:.4}  max {:.4}",
        summaries.len(),
        jammed,
        mean_density(&profile),
        if profile.is_empty() { 0.0 } else { min },
        if profile.is_empty() { 0.0 } else { max },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.lattice.length = 12;
        config.lattice.particles = 5;
        config.lattice.seed = Some(3);
        config.run.total_steps = 50;
        config.run.sample_every = 5;
        config
    }

    #[test]
    fn test_app_rejects_invalid_config() {
        let mut bad = config();
        bad.rates.p = 0.0;
        bad.rates.q = 0.0;
        assert!(App::new(bad).is_err());
    }

    #[test]
    fn test_app_rejects_zero_fps() {
        let mut bad = config();
        bad.output.animation_fps = 0;
        assert!(bad.validate().is_ok());
        assert!(App::new(bad).is_err());
    }

    #[test]
    fn test_run_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config();
        let run_path = dir.path().join("run.json.gz");
        let pgm_path = dir.path().join("spacetime.pgm");
        config.output.trajectory = Some(run_path.display().to_string());
        config.output.spacetime_image = Some(pgm_path.display().to_string());

        let app = App::new(config).unwrap();
        let outcome = app.run().unwrap();
        assert_eq!(outcome.trajectory.len(), 10);
        assert!(run_path.exists());
        assert!(fs::read_to_string(&pgm_path).unwrap().starts_with("P2"));
    }

    #[test]
    fn test_summary_mentions_model_and_status() {
        let app = App::new(config()).unwrap();
        let text = summary(&app.run().unwrap());
        assert!(text.starts_with("ASEP on L=12 with N=5 (seed 3): completed"));
    }

    #[test]
    fn test_ensemble_summary() {
        let app = App::new(config()).unwrap();
        let summaries = app.run_ensemble(3).unwrap();
        assert!(ensemble_summary(&summaries).starts_with("3 replicas (0 jammed)"));
    }
}
