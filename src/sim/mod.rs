//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, no clocks
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod playfield;
pub mod state;
pub mod tick;

pub use collision::{breaches_floor, hits_paddle, hits_side_wall, hits_top_wall};
pub use playfield::Playfield;
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Snapshot};
pub use tick::{SimulationCore, tick};
