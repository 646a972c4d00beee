//! Frame clock for the simulation loop.

use std::time::{Duration, Instant};

/// Produces the elapsed time between ticks.
///
/// Driven either by wall time ([`FrameClock::tick`]) or by a supplied
/// duration ([`FrameClock::advance`]) for headless runs and tests.
#[derive(Debug)]
pub struct FrameClock {
    /// Wall time of the last `tick`.
    last_frame: Instant,
    /// Duration of the last frame.
    delta: Duration,
    /// Total simulated time.
    elapsed: Duration,
    frame_count: u64,
    /// Fixed step (default 60 Hz).
    fixed_timestep: Duration,
    /// Time not yet consumed by fixed steps.
    accumulator: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            fixed_timestep: Duration::from_secs_f64(1.0 / 60.0),
            accumulator: Duration::ZERO,
        }
    }

    /// Create a clock with the given fixed rate in Hz.
    pub fn with_fixed_rate(hz: f64) -> Self {
        let mut clock = Self::new();
        clock.set_fixed_rate(hz);
        clock
    }

    /// Measure wall time since the previous tick and return it in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        self.record(delta);
        self.delta_seconds()
    }

    /// Advance by a supplied duration instead of reading the wall clock.
    pub fn advance(&mut self, delta: Duration) -> f32 {
        self.last_frame = Instant::now();
        self.record(delta);
        self.delta_seconds()
    }

    fn record(&mut self, delta: Duration) {
        self.delta = delta;
        self.elapsed += delta;
        self.frame_count += 1;
        self.accumulator += delta;
    }

    /// Delta time of the last frame in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    pub fn delta(&self) -> Duration {
        self.delta
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn fixed_timestep(&self) -> Duration {
        self.fixed_timestep
    }

    pub fn fixed_timestep_seconds(&self) -> f32 {
        self.fixed_timestep.as_secs_f32()
    }

    /// Check if a fixed step is due and consume it.
    pub fn should_fixed_update(&mut self) -> bool {
        if self.accumulator >= self.fixed_timestep {
            self.accumulator -= self.fixed_timestep;
            true
        } else {
            false
        }
    }

    /// Frames per second implied by the last delta.
    pub fn fps(&self) -> f32 {
        if self.delta.as_secs_f32() > 0.0 {
            1.0 / self.delta.as_secs_f32()
        } else {
            0.0
        }
    }

    /// Set the fixed timestep rate in Hz.
    pub fn set_fixed_rate(&mut self, hz: f64) {
        self.fixed_timestep = Duration::from_secs_f64(1.0 / hz);
    }
}
