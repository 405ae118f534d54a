use log::{debug, log_enabled, trace, Level};
use std::time::{Duration, Instant};

/// Timing and counters for the most recent fixed physics step.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepProfile {
    pub integration_time: Duration,
    pub collision_time: Duration,
    pub total_step_time: Duration,

    pub actor_count: usize,
    pub pairs_tested: usize,
    pub contacts_resolved: usize,
}

impl StepProfile {
    pub fn report(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        let total_us = self.total_step_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        debug!(
            "step: {} actors, {} pairs, {} contacts, {:.3} ms (integrate {:.1}%, collide {:.1}%)",
            self.actor_count,
            self.pairs_tested,
            self.contacts_resolved,
            self.total_step_time.as_secs_f32() * 1000.0,
            (self.integration_time.as_micros() as f32 / total_us) * 100.0,
            (self.collision_time.as_micros() as f32 / total_us) * 100.0,
        );
    }
}

/// Adds the lifetime of the guard to `output` and traces start/end.
pub struct ScopedTimer<'a> {
    label: &'static str,
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'static str, output: &'a mut Duration) -> Self {
        trace!("start {label}");
        Self {
            label,
            start: Instant::now(),
            output,
        }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        *self.output += elapsed;
        trace!("end {} ({} µs)", self.label, elapsed.as_micros());
    }
}
