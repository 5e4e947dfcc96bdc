//! Enumeration of legal hops.

use crate::lattice::LatticeState;
use exclusion_data::{Event, RateParameters};

/// Produces the set of hops currently allowed by the exclusion rule.
///
/// Occupied sites are visited in increasing order and each contributes its
/// right hop before its left hop, so the output is fully determined by the
/// lattice contents.
#[derive(Debug, Clone, Copy)]
pub struct MoveEnumerator {
    rates: RateParameters,
}

impl MoveEnumerator {
    pub fn new(rates: RateParameters) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> RateParameters {
        self.rates
    }

    /// Legal hops for `lattice`. Empty when the lattice is jammed.
    pub fn enumerate(&self, lattice: &LatticeState) -> Vec<Event> {
        let mut events = Vec::new();
        self.enumerate_into(lattice, &mut events);
        events
    }

    /// Same as [`MoveEnumerator::enumerate`], reusing `events` as the output buffer.
    pub fn enumerate_into(&self, lattice: &LatticeState, events: &mut Vec<Event>) {
        events.clear();
        let (p, q) = (self.rates.p(), self.rates.q());

        for site in lattice.positions() {
            let right = lattice.right_of(site);
            if p > 0.0 && lattice.is_vacant(right) {
                events.push(Event::right(site, right, p));
            }
            let left = lattice.left_of(site);
            if q > 0.0 && lattice.is_vacant(left) {
                events.push(Event::left(site, left, q));
            }
        }
    }
}

/// Convenience wrapper over [`MoveEnumerator::enumerate`].
pub fn enumerate(lattice: &LatticeState, rates: RateParameters) -> Vec<Event> {
    MoveEnumerator::new(rates).enumerate(lattice)
}
