//! # Exclusion Core
//!
//! Exact continuous-time Monte Carlo engine for one-dimensional exclusion
//! processes (SEP, TASEP, ASEP) on a periodic lattice.
//!
//! This crate contains the deterministic simulation logic:
//! - Lattice state with a conserved particle count
//! - Enumeration of legal hops under the exclusion rule
//! - Gillespie direct-method sampling of waiting times and events
//! - The run driver with trajectory recording and jam detection
//! - Parallel ensembles of independent replicas
//!
//! ## Example
//!
//! ```
//! use exclusion_core::SimulationDriver;
//! use exclusion_data::{RateParameters, TerminationReason};
//!
//! let rates = RateParameters::new(1.0, 0.0).unwrap();
//! let mut driver = SimulationDriver::new(100, 50, rates, 42).unwrap();
//! let report = driver.run(1000, 10).unwrap();
//!
//! assert_eq!(report.termination, TerminationReason::Completed);
//! assert_eq!(driver.trajectory().len(), 100);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Run loop and lifecycle state machine
pub mod driver;
/// Parallel replicas of one configuration
pub mod ensemble;
/// Error types and result alias
pub mod error;
/// Occupancy state with the particle-count invariant
pub mod lattice;
/// Hop counters and logging setup
pub mod metrics;
/// Legal hop enumeration
pub mod moves;
/// Density profiles, currents and other trajectory measurements
pub mod observables;
/// Exact waiting-time and event sampling
pub mod sampler;

pub use config::AppConfig;
pub use driver::{DriverState, RunReport, SimulationDriver};
pub use error::{Result, SimError};
pub use lattice::LatticeState;
pub use metrics::{init_logging, RunMetrics};
pub use moves::MoveEnumerator;
pub use sampler::EventSampler;
