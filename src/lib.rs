//! Tap Pong - a single-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, scoring)
//! - `driver`: Host-side helpers (fixed-step clock, shared input, autopilot)
//! - `error`: Configuration errors
//!
//! Rendering, touch capture and app bootstrapping belong to the host. The
//! host feeds paddle coordinates and tick signals in and reads a
//! [`sim::Snapshot`] back out.

pub mod driver;
pub mod error;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use driver::{Autopilot, FixedStepClock, SharedPaddleInput};
pub use error::ConfigError;
pub use sim::{GamePhase, Playfield, SimulationCore, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Fixed tick cadence in milliseconds (~60 Hz)
    pub const TICK_MS: u32 = 16;
    /// Maximum ticks to catch up per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default screen dimensions (portrait phone)
    pub const DEFAULT_WIDTH: f32 = 320.0;
    pub const DEFAULT_HEIGHT: f32 = 640.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Initial per-tick velocity on both axes
    pub const BALL_START_SPEED: f32 = 4.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance from the floor up to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;
}
