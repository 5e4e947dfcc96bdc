pub mod macros;

use exclusion_lib::model::lattice::LatticeState;
use exclusion_lib::model::state::RateParameters;
use exclusion_lib::model::SimulationDriver;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub struct DriverBuilder {
    length: usize,
    particles: usize,
    p: f64,
    q: f64,
    seed: u64,
    occupancy: Option<Vec<bool>>,
}

#[allow(dead_code)]
impl DriverBuilder {
    pub fn new() -> Self {
        Self {
            length: 100,
            particles: 50,
            p: 0.8,
            q: 0.2,
            seed: 42,
            occupancy: None,
        }
    }

    pub fn with_size(mut self, length: usize, particles: usize) -> Self {
        self.length = length;
        self.particles = particles;
        self
    }

    pub fn with_rates(mut self, p: f64, q: f64) -> Self {
        self.p = p;
        self.q = q;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fixed initial occupancy given as 0/1 values; overrides size.
    pub fn with_occupancy(mut self, bits: &[u8]) -> Self {
        self.occupancy = Some(bits.iter().map(|&b| b == 1).collect());
        self
    }

    pub fn build(self) -> SimulationDriver {
        let rates = RateParameters::new(self.p, self.q).expect("valid rates");
        match self.occupancy {
            Some(flags) => SimulationDriver::with_lattice(
                LatticeState::from_occupancy(flags).expect("valid occupancy"),
                rates,
                ChaCha8Rng::seed_from_u64(self.seed),
            ),
            None => SimulationDriver::new(self.length, self.particles, rates, self.seed)
                .expect("valid driver"),
        }
    }
}
