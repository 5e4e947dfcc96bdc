//! # Exclusion View
//!
//! `ratatui` widgets and image export for recorded trajectories. Renderers
//! only read a finished [`exclusion_data::Trajectory`]; none of them touch
//! the engine.

/// Frame-by-frame particle animation
pub mod animation;
/// Time-averaged density profile chart
pub mod density;
/// Combined space-time and density view of a run
pub mod report;
/// Space-time occupancy diagrams
pub mod spacetime;

pub use animation::{frames, AnimationFrame, FRAME_HEIGHT};
pub use density::DensityProfileWidget;
pub use report::RunView;
pub use spacetime::{to_pgm, SpacetimeWidget};
