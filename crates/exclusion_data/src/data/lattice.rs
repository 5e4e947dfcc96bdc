use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    #[error("site {site} holds {value}, expected 0 or 1")]
    InvalidOccupancy { site: usize, value: u8 },
}

/// Occupancy flags of a periodic one-dimensional lattice.
///
/// Serialized as a sequence of `0`/`1` integers. Mutation is restricted to
/// [`Lattice::hop`], which conserves the particle count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Lattice {
    sites: Vec<bool>,
}

impl Lattice {
    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self {
            sites: flags.into_iter().collect(),
        }
    }

    /// Lattice of `length` sites with exactly the given sites occupied.
    /// Out-of-range indices are ignored.
    pub fn with_particles_at(length: usize, occupied: &[usize]) -> Self {
        let mut sites = vec![false; length];
        for &site in occupied {
            if let Some(slot) = sites.get_mut(site) {
                *slot = true;
            }
        }
        Self { sites }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// True for a lattice with zero sites.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    #[inline]
    pub fn is_occupied(&self, site: usize) -> bool {
        self.sites[site]
    }

    #[inline]
    pub fn is_vacant(&self, site: usize) -> bool {
        !self.sites[site]
    }

    pub fn particle_count(&self) -> usize {
        self.sites.iter().filter(|&&s| s).count()
    }

    /// Indices of occupied sites in increasing order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.sites
            .iter()
            .enumerate()
            .filter_map(|(i, &occupied)| occupied.then_some(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.sites.iter().copied()
    }

    pub fn to_bits(&self) -> Vec<u8> {
        self.sites.iter().map(|&s| u8::from(s)).collect()
    }

    /// Moves the particle at `source` to `target`.
    ///
    /// # Panics
    /// If `source` is empty or `target` is occupied.
    pub fn hop(&mut self, source: usize, target: usize) {
        assert!(
            self.sites[source] && !self.sites[target],
            "illegal hop {source} -> {target}: source must be occupied and target empty"
        );
        self.sites[source] = false;
        self.sites[target] = true;
    }
}

impl TryFrom<Vec<u8>> for Lattice {
    type Error = LatticeError;

    fn try_from(bits: Vec<u8>) -> Result<Self, Self::Error> {
        let sites = bits
            .into_iter()
            .enumerate()
            .map(|(site, value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(LatticeError::InvalidOccupancy { site, value }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { sites })
    }
}

impl From<Lattice> for Vec<u8> {
    fn from(lattice: Lattice) -> Self {
        lattice.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_particles_at() {
        let lattice = Lattice::with_particles_at(4, &[0, 1]);
        assert_eq!(lattice.to_bits(), vec![1, 1, 0, 0]);
        assert_eq!(lattice.particle_count(), 2);
        assert_eq!(lattice.positions().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_hop_conserves_particles() {
        let mut lattice = Lattice::with_particles_at(4, &[0, 1]);
        lattice.hop(1, 2);
        assert_eq!(lattice.to_bits(), vec![1, 0, 1, 0]);
        assert_eq!(lattice.particle_count(), 2);
    }

    #[test]
    #[should_panic(expected = "illegal hop")]
    fn test_hop_into_occupied_site_panics() {
        let mut lattice = Lattice::with_particles_at(4, &[0, 1]);
        lattice.hop(0, 1);
    }

    #[test]
    fn test_serializes_as_bits() {
        let lattice = Lattice::with_particles_at(3, &[2]);
        let json = serde_json::to_string(&lattice).unwrap();
        assert_eq!(json, "[0,0,1]");
        let back: Lattice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lattice);
    }

    #[test]
    fn test_rejects_non_binary_occupancy() {
        let result = serde_json::from_str::<Lattice>("[0,2,1]");
        assert!(result.is_err());
    }
}
