//! Measurements derived from a recorded trajectory.

use crate::metrics::RunMetrics;
use exclusion_data::{Frame, Trajectory};

/// Per-site occupancy averaged over all frames (each frame weighs the same).
///
/// Returns zeros for an empty trajectory.
pub fn density_profile(trajectory: &Trajectory) -> Vec<f64> {
    let mut profile = vec![0.0; trajectory.length];
    if trajectory.is_empty() {
        return profile;
    }
    for frame in &trajectory.frames {
        for site in frame.lattice.positions() {
            profile[site] += 1.0;
        }
    }
    let frames = trajectory.len() as f64;
    for value in &mut profile {
        *value /= frames;
    }
    profile
}

/// Mean of `profile`, the global density `N / L` for a conserved run.
pub fn mean_density(profile: &[f64]) -> f64 {
    if profile.is_empty() {
        return 0.0;
    }
    profile.iter().sum::<f64>() / profile.len() as f64
}

/// Particle positions of one frame, in increasing order.
pub fn particle_positions(frame: &Frame) -> Vec<usize> {
    frame.lattice.positions().collect()
}

/// Rows of 0/1 occupancy, one per frame, for space-time plots.
pub fn occupancy_matrix(trajectory: &Trajectory) -> Vec<Vec<u8>> {
    trajectory
        .frames
        .iter()
        .map(|f| f.lattice.to_bits())
        .collect()
}

/// Time-averaged particle current per bond, `(right - left) / (L * t)`.
///
/// Zero before any time has elapsed.
pub fn particle_current(metrics: &RunMetrics, length: usize, elapsed: f64) -> f64 {
    if length == 0 || elapsed <= 0.0 {
        return 0.0;
    }
    metrics.net_right_hops() as f64 / (length as f64 * elapsed)
}
