//! # Exclusion Data
//!
//! Plain data types shared by the simulation engine, persistence and view
//! layers. Everything here is serializable and free of simulation logic;
//! the Gillespie machinery lives in `exclusion_core`.

pub mod data;

pub use data::event::{Event, HopDirection};
pub use data::lattice::{Lattice, LatticeError};
pub use data::rates::{ModelKind, RateError, RateParameters};
pub use data::trajectory::{Frame, TerminationReason, Trajectory};
