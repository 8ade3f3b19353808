//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]. Geometry lives in
//! [`Playfield`] and never changes after construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::playfield::Playfield;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in flight
    Playing,
    /// Ball fell past the floor; ticks do nothing until reset
    GameOver,
}

/// The ball. `pos` is its top-left corner, `vel` is per-tick travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Ball at the centre of the playfield with the starting velocity
    pub fn centered(playfield: &Playfield) -> Self {
        Self {
            pos: playfield.center_ball_pos(),
            vel: playfield.initial_velocity(),
        }
    }

    /// Horizontal centre, used by the paddle test
    #[inline]
    pub fn center_x(&self, size: f32) -> f32 {
        self.pos.x + size / 2.0
    }
}

/// The player's paddle. Only its left edge moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
}

impl Paddle {
    /// Paddle centred horizontally
    pub fn centered(playfield: &Playfield) -> Self {
        Self {
            x: playfield.centered_paddle_x(),
        }
    }

    /// Move to `raw_x`, clamped to `[0, width - paddle_width]`.
    ///
    /// NaN is ignored so a bad input sample cannot poison the position.
    pub fn move_to(&mut self, raw_x: f32, playfield: &Playfield) {
        if raw_x.is_nan() {
            log::warn!("Ignoring NaN paddle position");
            return;
        }
        self.x = raw_x.clamp(0.0, playfield.max_paddle_x());
    }
}

/// Things that happened during a tick, for audio/haptics on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    SideWallBounce,
    TopWallBounce,
    PaddleHit { score: u64 },
    BallLost { final_score: u64 },
}

/// Read-only view handed to the renderer after every operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub paddle_x: f32,
    pub score: u64,
    pub game_over: bool,
}

/// Complete mutable game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    pub score: u64,
    pub phase: GamePhase,
    /// Ticks processed while playing since the last reset
    pub time_ticks: u64,
    /// Events not yet drained by the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh game with the paddle centred
    pub fn new(playfield: &Playfield) -> Self {
        Self {
            ball: Ball::centered(playfield),
            paddle: Paddle::centered(playfield),
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Restart the round. The paddle stays where the player left it.
    pub fn reset(&mut self, playfield: &Playfield) {
        self.ball = Ball::centered(playfield);
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.events.clear();
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_x: self.ball.pos.x,
            ball_y: self.ball.pos.y,
            paddle_x: self.paddle.x,
            score: self.score,
            game_over: self.is_game_over(),
        }
    }
}
