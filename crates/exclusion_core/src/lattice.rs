//! Live occupancy state of the ring.

use crate::error::{Result, SimError};
use exclusion_data::Lattice;
use rand::seq::index;
use rand::Rng;

/// Owns the lattice being simulated and its particle-count invariant.
///
/// Only [`LatticeState::apply_hop`] mutates the occupancy, so the number of
/// particles fixed at construction holds for the whole run.
#[derive(Debug, Clone)]
pub struct LatticeState {
    lattice: Lattice,
    particles: usize,
}

impl LatticeState {
    /// Places `particles` particles on `length` sites, drawn uniformly
    /// without replacement from `rng`.
    pub fn initialize<R: Rng + ?Sized>(length: usize, particles: usize, rng: &mut R) -> Result<Self> {
        if length == 0 {
            return Err(SimError::invalid("lattice length must be positive"));
        }
        if particles > length {
            return Err(SimError::invalid(format!(
                "particle count {particles} exceeds lattice length {length}"
            )));
        }
        let occupied = index::sample(rng, length, particles).into_vec();
        Ok(Self {
            lattice: Lattice::with_particles_at(length, &occupied),
            particles,
        })
    }

    /// Builds a state from an explicit occupancy pattern.
    pub fn from_occupancy<I>(flags: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
    {
        Self::from_lattice(Lattice::from_flags(flags))
    }

    pub fn from_lattice(lattice: Lattice) -> Result<Self> {
        if lattice.is_empty() {
            return Err(SimError::invalid("lattice length must be positive"));
        }
        let particles = lattice.particle_count();
        Ok(Self { lattice, particles })
    }

    /// Number of sites `L`.
    #[inline]
    pub fn len(&self) -> usize {
        self.lattice.len()
    }

    /// Always false: a state is never built with zero sites.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lattice.is_empty()
    }

    /// Number of particles `N`.
    #[inline]
    pub fn particles(&self) -> usize {
        self.particles
    }

    #[inline]
    pub fn is_occupied(&self, site: usize) -> bool {
        self.lattice.is_occupied(site)
    }

    #[inline]
    pub fn is_vacant(&self, site: usize) -> bool {
        self.lattice.is_vacant(site)
    }

    #[inline]
    pub fn right_of(&self, site: usize) -> usize {
        (site + 1) % self.len()
    }

    #[inline]
    pub fn left_of(&self, site: usize) -> usize {
        (site + self.len() - 1) % self.len()
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.lattice.positions()
    }

    /// Moves the particle at `source` to the empty site `target`.
    ///
    /// # Panics
    /// If `source` is empty or `target` occupied. The enumerator only ever
    /// proposes legal hops, so this is an internal contract violation.
    pub fn apply_hop(&mut self, source: usize, target: usize) {
        self.lattice.hop(source, target);
        debug_assert_eq!(self.lattice.particle_count(), self.particles);
    }

    /// Independent copy of the current occupancy.
    pub fn snapshot(&self) -> Lattice {
        self.lattice.clone()
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }
}
