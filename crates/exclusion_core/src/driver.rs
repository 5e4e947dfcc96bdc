//! Gillespie run loop: enumerate, sample, apply, record.

use crate::config::AppConfig;
use crate::error::{Result, SimError};
use crate::lattice::LatticeState;
use crate::metrics::RunMetrics;
use crate::moves::MoveEnumerator;
use crate::sampler::EventSampler;
use exclusion_data::{Event, RateParameters, TerminationReason, Trajectory};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Lifecycle of a [`SimulationDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverState {
    Ready,
    Running,
    Jammed,
    Completed,
}

/// Outcome of [`SimulationDriver::run`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    pub termination: TerminationReason,
    /// Number of accepted hops.
    pub steps_executed: u64,
    pub final_time: f64,
    pub frames: usize,
    pub metrics: RunMetrics,
}

/// Owns one exclusion-process chain and advances it with the exact SSA.
///
/// The RNG stream is consumed in a fixed order: lattice placement (when
/// built through [`SimulationDriver::new`]) followed by two draws per
/// accepted step. Identical seeds therefore give identical trajectories.
pub struct SimulationDriver<R = ChaCha8Rng> {
    lattice: LatticeState,
    enumerator: MoveEnumerator,
    sampler: EventSampler,
    rng: R,
    time: f64,
    state: DriverState,
    trajectory: Trajectory,
    termination: Option<TerminationReason>,
    metrics: RunMetrics,
    events: Vec<Event>,
}

impl SimulationDriver<ChaCha8Rng> {
    /// Random placement of `particles` on `length` sites from `seed`.
    pub fn new(length: usize, particles: usize, rates: RateParameters, seed: u64) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let lattice = LatticeState::initialize(length, particles, &mut rng)?;
        Ok(Self::with_lattice(lattice, rates, rng))
    }

    /// Validates `config` and builds a driver seeded with `seed`.
    pub fn from_config(config: &AppConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Self::new(
            config.lattice.length,
            config.lattice.particles,
            config.rate_parameters()?,
            seed,
        )
    }
}

impl<R: Rng> SimulationDriver<R> {
    /// Driver over a prepared lattice, drawing from `rng`.
    pub fn with_lattice(lattice: LatticeState, rates: RateParameters, rng: R) -> Self {
        let length = lattice.len();
        Self {
            lattice,
            enumerator: MoveEnumerator::new(rates),
            sampler: EventSampler::new(),
            rng,
            time: 0.0,
            state: DriverState::Ready,
            trajectory: Trajectory::new(length),
            termination: None,
            metrics: RunMetrics::new(),
            events: Vec::new(),
        }
    }

    /// Executes up to `total_steps` Gillespie steps, recording a frame
    /// before every step whose index is a multiple of `sample_every`.
    ///
    /// Stops early, without a final frame, when no hop is possible.
    pub fn run(&mut self, total_steps: u64, sample_every: u64) -> Result<RunReport> {
        if self.state != DriverState::Ready {
            return Err(SimError::InvalidState(self.state));
        }
        if total_steps == 0 {
            return Err(SimError::invalid("total_steps must be positive"));
        }
        if sample_every == 0 {
            return Err(SimError::invalid("sample_every must be positive"));
        }

        self.state = DriverState::Running;
        tracing::info!(
            length = self.lattice.len(),
            particles = self.lattice.particles(),
            p = self.enumerator.rates().p(),
            q = self.enumerator.rates().q(),
            total_steps,
            sample_every,
            "Starting run"
        );

        let mut termination = TerminationReason::Completed;
        for step in 0..total_steps {
            if step % sample_every == 0 {
                self.trajectory
                    .record(self.time, step, self.lattice.snapshot());
            }

            self.enumerator
                .enumerate_into(&self.lattice, &mut self.events);
            if self.events.is_empty() {
                tracing::warn!(step, time = self.time, "System jammed");
                termination = TerminationReason::Jammed { at_step: step };
                break;
            }

            let (dt, event) = self.sampler.sample(&self.events, &mut self.rng)?;
            self.time += dt;
            self.lattice.apply_hop(event.source, event.target);
            self.metrics.record_hop(event.direction, self.time);
        }

        self.state = match termination {
            TerminationReason::Completed => DriverState::Completed,
            TerminationReason::Jammed { .. } => DriverState::Jammed,
        };
        self.termination = Some(termination);

        let report = RunReport {
            termination,
            steps_executed: self.metrics.steps,
            final_time: self.time,
            frames: self.trajectory.len(),
            metrics: self.metrics,
        };
        tracing::info!(
            steps = report.steps_executed,
            time = report.final_time,
            frames = report.frames,
            state = ?self.state,
            "Run finished"
        );
        Ok(report)
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// `None` until a run has finished.
    pub fn termination(&self) -> Option<TerminationReason> {
        self.termination
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }

    /// Live lattice; after a jam this is the absorbing configuration.
    pub fn lattice(&self) -> &LatticeState {
        &self.lattice
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn rates(&self) -> RateParameters {
        self.enumerator.rates()
    }

    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }
}
