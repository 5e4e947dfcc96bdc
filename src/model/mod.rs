pub use exclusion_core::{DriverState, RunReport, SimError, SimulationDriver};
pub mod config {
    pub use exclusion_core::config::*;
}
pub mod lattice {
    pub use exclusion_core::lattice::*;
    pub use exclusion_data::Lattice;
}
pub mod moves {
    pub use exclusion_core::moves::*;
    pub use exclusion_data::{Event, HopDirection};
}
pub mod sampler {
    pub use exclusion_core::sampler::*;
}
pub mod driver {
    pub use exclusion_core::driver::*;
}
pub mod ensemble {
    pub use exclusion_core::ensemble::*;
}
pub mod observables {
    pub use exclusion_core::observables::*;
}
pub mod state {
    pub use exclusion_data::*;
}
pub mod persistence {
    pub use exclusion_io::*;
}
