/// Asserts that every recorded frame holds exactly the given number of particles.
#[macro_export]
macro_rules! assert_particle_count {
    ($trajectory:expr, $count:expr) => {
        for (k, frame) in $trajectory.frames.iter().enumerate() {
            assert_eq!(
                frame.lattice.particle_count(),
                $count,
                "Particle count mismatch in frame {}",
                k
            );
        }
    };
}

/// Asserts that frame timestamps never decrease.
#[macro_export]
macro_rules! assert_time_monotone {
    ($trajectory:expr) => {
        let times: Vec<f64> = $trajectory.times().collect();
        for pair in times.windows(2) {
            assert!(
                pair[0] <= pair[1],
                "Time went backwards: {} -> {}",
                pair[0],
                pair[1]
            );
        }
    };
}
