//! Run counters and logging setup.
//!
//! Provides structured logging and hop accounting for monitoring a run
//! while it progresses.

use exclusion_data::HopDirection;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Steps between progress log lines.
const PROGRESS_INTERVAL: u64 = 1000;

/// Hop counters of a single run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMetrics {
    pub steps: u64,
    pub right_hops: u64,
    pub left_hops: u64,
}

impl RunMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one accepted hop at simulated time `time`.
    pub fn record_hop(&mut self, direction: HopDirection, time: f64) {
        self.steps += 1;
        match direction {
            HopDirection::Right => self.right_hops += 1,
            HopDirection::Left => self.left_hops += 1,
        }

        if self.steps.is_multiple_of(PROGRESS_INTERVAL) {
            tracing::debug!(
                steps = self.steps,
                time = time,
                right_hops = self.right_hops,
                left_hops = self.left_hops,
                "Simulation progress"
            );
        }
    }

    /// Net number of hops to the right.
    #[must_use]
    pub fn net_right_hops(&self) -> i64 {
        self.right_hops as i64 - self.left_hops as i64
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honours `RUST_LOG`, defaulting to `info`. Calling it twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish(),
    )
    .ok();
}
