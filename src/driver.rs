//! Host-side driving helpers
//!
//! None of this is part of the deterministic core. These are the pieces a
//! host typically needs around it: a fixed-step clock, a lock-free paddle
//! input cell for input arriving on another thread, and a demo autopilot.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::{SimulationCore, Snapshot};

/// Latest paddle coordinate published by an input thread.
///
/// The value is a single `f32` stored as its bit pattern, so a reader sees
/// either the old or the new coordinate, never a mix. Clones share the cell.
#[derive(Debug, Clone)]
pub struct SharedPaddleInput {
    bits: Arc<AtomicU32>,
}

impl Default for SharedPaddleInput {
    fn default() -> Self {
        Self::new()
    }
}

// Compile-time assertion: the cell must be shareable with an input thread.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<SharedPaddleInput>();
};

impl SharedPaddleInput {
    /// Empty cell (NaN means nothing published yet)
    pub fn new() -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(f32::NAN.to_bits())),
        }
    }

    /// Publish a raw paddle left-edge coordinate (unclamped)
    pub fn publish(&self, raw_x: f32) {
        self.bits.store(raw_x.to_bits(), Ordering::Release);
    }

    /// Most recently published coordinate, if any
    pub fn latest(&self) -> Option<f32> {
        let x = f32::from_bits(self.bits.load(Ordering::Acquire));
        (!x.is_nan()).then_some(x)
    }

    /// Apply the latest coordinate to the core. Call right before a tick.
    pub fn apply_to(&self, core: &mut SimulationCore) {
        if let Some(x) = self.latest() {
            core.set_paddle_position(x);
        }
    }
}

/// Turns elapsed wall time into whole fixed ticks.
///
/// Leftover time below one tick carries over to the next frame. A frame that
/// would need more than `MAX_SUBSTEPS` ticks runs only that many and drops
/// the rest.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: Duration,
    accumulator: Duration,
    max_substeps: u32,
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_MS as u64))
    }
}

impl FixedStepClock {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            accumulator: Duration::ZERO,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add elapsed time and return how many ticks are due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.step.is_zero() {
            return 0;
        }

        self.accumulator += elapsed;

        let mut due = 0;
        while self.accumulator >= self.step && due < self.max_substeps {
            self.accumulator -= self.step;
            due += 1;
        }

        if self.accumulator >= self.step {
            log::warn!(
                "Frame fell behind by {:?}, dropping backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }
        due
    }

    /// Advance the clock and tick the core for each due tick.
    /// Returns the last snapshot, or `None` if no tick was due.
    pub fn run(&mut self, core: &mut SimulationCore, elapsed: Duration) -> Option<Snapshot> {
        let due = self.advance(elapsed);
        (0..due).map(|_| core.tick()).last()
    }

    /// Forget any carried-over time (e.g. after the host was suspended)
    pub fn clear(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

/// Idle/demo input: follows the ball with a little seeded wobble so it
/// occasionally misses.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Maximum horizontal aim error in playfield units
    jitter: f32,
}

impl Autopilot {
    pub fn new(seed: u64, jitter: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            jitter: jitter.abs(),
        }
    }

    /// Pointer x the autopilot would touch for this snapshot
    pub fn touch_x(&mut self, snapshot: &Snapshot, ball_size: f32) -> f32 {
        let aim = snapshot.ball_x + ball_size / 2.0;
        let error = if self.jitter > 0.0 {
            self.rng.random_range(-self.jitter..=self.jitter)
        } else {
            0.0
        };
        aim + error
    }

    /// Steer the core's paddle toward the ball
    pub fn steer(&mut self, core: &mut SimulationCore) {
        let snapshot = core.snapshot();
        let touch_x = self.touch_x(&snapshot, core.playfield().ball_size);
        core.set_touch_x(touch_x);
    }
}
