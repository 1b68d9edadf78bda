#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Largest step handed to the animation, in seconds.
///
/// A host that sleeps (hidden tab, debugger) would otherwise resume with one
/// huge step.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Wall-clock source of frame deltas for the host loop.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start_time: Instant,
    last_tick: Instant,
    /// Unclamped time since the previous tick
    pub delta: Duration,
    pub frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_tick: now,
            delta: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Advances to now and returns the clamped delta in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta = now - self.last_tick;
        self.last_tick = now;
        self.frame_count += 1;
        self.delta.as_secs_f32().min(MAX_FRAME_DELTA)
    }

    /// Seconds since the clock was created.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        (self.last_tick - self.start_time).as_secs_f32()
    }
}
