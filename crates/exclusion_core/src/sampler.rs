//! Exact Gillespie step: waiting time and rate-weighted event choice.

use crate::error::{Result, SimError};
use exclusion_data::Event;
use rand::distributions::Open01;
use rand::Rng;

/// Direct-method SSA sampler.
///
/// Each call consumes exactly two uniform draws from the supplied stream:
/// `U1` for the exponential waiting time, then `U2` for the event choice.
/// The cumulative-rate buffer is reused between calls.
#[derive(Debug, Default, Clone)]
pub struct EventSampler {
    cumulative: Vec<f64>,
}

impl EventSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the waiting time `dt` and the event that fires.
    pub fn sample<R: Rng + ?Sized>(&mut self, events: &[Event], rng: &mut R) -> Result<(f64, Event)> {
        let (dt, index) = self.sample_index(events, rng)?;
        Ok((dt, events[index]))
    }

    /// Like [`EventSampler::sample`] but returns the index of the chosen event.
    pub fn sample_index<R: Rng + ?Sized>(
        &mut self,
        events: &[Event],
        rng: &mut R,
    ) -> Result<(f64, usize)> {
        if events.is_empty() {
            return Err(SimError::NoEventsAvailable);
        }

        self.cumulative.clear();
        let mut total_rate = 0.0;
        for event in events {
            total_rate += event.rate;
            self.cumulative.push(total_rate);
        }
        if !total_rate.is_finite() {
            return Err(SimError::invalid(format!(
                "total rate {total_rate} of {} events is not finite",
                events.len()
            )));
        }

        // Open interval keeps ln(u1) finite and dt strictly positive.
        let u1: f64 = rng.sample(Open01);
        let dt = -u1.ln() / total_rate;

        let u2: f64 = rng.gen();
        let threshold = u2 * total_rate;
        let index = self
            .cumulative
            .partition_point(|&upper| upper <= threshold)
            .min(events.len() - 1);

        Ok((dt, index))
    }
}
