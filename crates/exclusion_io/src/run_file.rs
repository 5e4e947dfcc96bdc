//! Saved runs: a trajectory together with the parameters that produced it.

use crate::error::{IoError, Result};
use crate::serialization::{read_json_file, write_json_file};
use chrono::{DateTime, Utc};
use exclusion_core::{AppConfig, RunReport};
use exclusion_data::{ModelKind, Trajectory};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Provenance of a saved run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunMetadata {
    pub model: ModelKind,
    pub length: usize,
    pub particles: usize,
    pub p: f64,
    pub q: f64,
    pub seed: u64,
    pub total_steps: u64,
    pub sample_every: u64,
    /// [`AppConfig::fingerprint`] of the producing configuration.
    pub fingerprint: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedRun {
    pub metadata: RunMetadata,
    pub report: RunReport,
    pub trajectory: Trajectory,
}

impl SavedRun {
    /// Bundles a finished run. `config` must already be validated.
    pub fn new(config: &AppConfig, seed: u64, report: RunReport, trajectory: Trajectory) -> Self {
        let metadata = RunMetadata {
            model: config
                .rate_parameters()
                .map(|r| r.kind())
                .unwrap_or_default(),
            length: config.lattice.length,
            particles: config.lattice.particles,
            p: config.rates.p,
            q: config.rates.q,
            seed,
            total_steps: config.run.total_steps,
            sample_every: config.run.sample_every,
            fingerprint: config.fingerprint(),
            created_at: Utc::now(),
        };
        Self {
            metadata,
            report,
            trajectory,
        }
    }

    /// Checks frame sizes, particle conservation and time ordering.
    pub fn validate(&self) -> Result<()> {
        let length = self.metadata.length;
        if self.trajectory.length != length {
            return Err(IoError::validation(format!(
                "trajectory length {} does not match lattice length {length}",
                self.trajectory.length
            )));
        }
        let mut previous_time = 0.0;
        for (k, frame) in self.trajectory.frames.iter().enumerate() {
            if frame.lattice.len() != length {
                return Err(IoError::validation(format!(
                    "frame {k} has {} sites, expected {length}",
                    frame.lattice.len()
                )));
            }
            let count = frame.lattice.particle_count();
            if count != self.metadata.particles {
                return Err(IoError::validation(format!(
                    "frame {k} holds {count} particles, expected {}",
                    self.metadata.particles
                )));
            }
            if frame.time < previous_time {
                return Err(IoError::validation(format!(
                    "frame {k} goes back in time ({} < {previous_time})",
                    frame.time
                )));
            }
            previous_time = frame.time;
        }
        Ok(())
    }
}

/// Writes `run` to `path` (gzip-compressed for `.gz`).
pub fn save_run<P: AsRef<Path>>(run: &SavedRun, path: P) -> Result<()> {
    let path = path.as_ref();
    write_json_file(run, path)
        .map_err(|e| e.with_context(format!("saving run to {}", path.display())))?;
    tracing::info!(
        path = %path.display(),
        frames = run.trajectory.len(),
        "Trajectory saved"
    );
    Ok(())
}

/// Reads and validates a run written by [`save_run`].
pub fn load_run<P: AsRef<Path>>(path: P) -> Result<SavedRun> {
    let path = path.as_ref();
    let run: SavedRun = read_json_file(path)
        .map_err(|e| e.with_context(format!("loading run from {}", path.display())))?;
    run.validate()?;
    Ok(run)
}
