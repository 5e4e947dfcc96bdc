use crate::data::lattice::Lattice;
use serde::{Deserialize, Serialize};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "lowercase")]
pub enum TerminationReason {
    /// Every requested step was executed.
    Completed,
    /// No legal hop existed at step `at_step`.
    Jammed { at_step: u64 },
}

impl TerminationReason {
    pub fn jammed_at(&self) -> Option<u64> {
        match self {
            Self::Completed => None,
            Self::Jammed { at_step } => Some(*at_step),
        }
    }
}

/// Lattice snapshot taken before executing step `step`, at simulated `time`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Frame {
    pub time: f64,
    pub step: u64,
    pub lattice: Lattice,
}

/// Ordered sequence of sampled frames of one run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    pub length: usize,
    pub frames: Vec<Frame>,
}

impl Trajectory {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            frames: Vec::new(),
        }
    }

    pub fn record(&mut self, time: f64, step: u64, lattice: Lattice) {
        debug_assert_eq!(lattice.len(), self.length);
        self.frames.push(Frame {
            time,
            step,
            lattice,
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.frames.iter().map(|f| f.time)
    }
}
