#[macro_use]
mod common;
use common::DriverBuilder;
use exclusion_lib::model::state::TerminationReason;
use proptest::prelude::*;

prop_compose! {
    fn arb_system()(length in 1usize..40)(
        length in Just(length),
        particles in 0..=length,
        p in prop_oneof![Just(0.0), 0.01f64..3.0],
        q in prop_oneof![Just(0.0), 0.01f64..3.0],
        seed in any::<u64>(),
        steps in 1u64..400,
        sample_every in 1u64..20
    ) -> (usize, usize, f64, f64, u64, u64, u64) {
        (length, particles, p, q, seed, steps, sample_every)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_run_invariants((length, particles, p, q, seed, steps, sample_every) in arb_system()) {
        prop_assume!(p > 0.0 || q > 0.0);
        let mut driver = DriverBuilder::new()
            .with_size(length, particles)
            .with_rates(p, q)
            .with_seed(seed)
            .build();
        let report = driver.run(steps, sample_every).unwrap();
        let trajectory = driver.trajectory();

        assert_particle_count!(trajectory, particles);
        assert_time_monotone!(trajectory);
        for frame in &trajectory.frames {
            prop_assert_eq!(frame.lattice.len(), length);
            prop_assert!(frame.lattice.to_bits().iter().all(|&b| b <= 1));
            prop_assert_eq!(frame.step % sample_every, 0);
        }
        prop_assert_eq!(driver.lattice().snapshot().particle_count(), particles);

        match report.termination {
            TerminationReason::Completed => {
                prop_assert_eq!(report.steps_executed, steps);
                let expected = steps.div_ceil(sample_every) as usize;
                prop_assert_eq!(trajectory.len(), expected);
            }
            TerminationReason::Jammed { at_step } => {
                // A ring can only be jammed from the start.
                prop_assert_eq!(at_step, 0);
                prop_assert_eq!(report.steps_executed, 0);
            }
        }
    }

    #[test]
    fn test_time_strictly_increases_between_frames(seed in any::<u64>(), sample_every in 1u64..10) {
        let mut driver = DriverBuilder::new()
            .with_size(30, 10)
            .with_rates(1.0, 0.5)
            .with_seed(seed)
            .build();
        driver.run(200, sample_every).unwrap();
        let times: Vec<f64> = driver.trajectory().times().collect();
        for pair in times.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }
}
