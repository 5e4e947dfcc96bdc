use serde::{Deserialize, Serialize};

/// Direction of a hop around the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HopDirection {
    Right,
    Left,
}

/// A candidate hop of one particle to an adjacent empty site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub source: usize,
    pub target: usize,
    pub rate: f64,
    pub direction: HopDirection,
}

impl Event {
    pub fn right(source: usize, target: usize, rate: f64) -> Self {
        Self {
            source,
            target,
            rate,
            direction: HopDirection::Right,
        }
    }

    pub fn left(source: usize, target: usize, rate: f64) -> Self {
        Self {
            source,
            target,
            rate,
            direction: HopDirection::Left,
        }
    }
}
