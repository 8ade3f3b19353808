//! Playfield geometry
//!
//! Immutable configuration fixed at construction. Loaded from JSON on native
//! hosts, passed as a JSON string from the browser.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Rectangular playfield plus the ball and paddle dimensions living in it.
///
/// Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    /// Ball is an axis-aligned square of this side length
    pub ball_size: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the floor up to the paddle's top edge
    pub paddle_bottom_offset: f32,
    /// Per-tick speed on each axis at (re)start
    pub initial_speed: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::phone()
    }
}

impl Playfield {
    /// The original portrait phone layout
    pub fn phone() -> Self {
        Self::with_screen(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Default ball/paddle sizes on a screen of the given size
    pub fn with_screen(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ball_size: BALL_SIZE,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            initial_speed: BALL_START_SPEED,
        }
    }

    /// Reject geometry the physics cannot work with.
    ///
    /// Every value must be finite and positive, and both the paddle and the
    /// ball must fit inside the playfield. Whether the paddle sits inside the
    /// floor (`paddle_bottom_offset + paddle_height <= height`) is left to
    /// the caller.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("ball_size", self.ball_size),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_bottom_offset", self.paddle_bottom_offset),
            ("initial_speed", self.initial_speed),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(field, value));
            }
        }

        if self.paddle_width > self.width {
            return Err(ConfigError::invalid("paddle_width", self.paddle_width));
        }
        if self.ball_size > self.width.min(self.height) {
            return Err(ConfigError::invalid("ball_size", self.ball_size));
        }
        Ok(())
    }

    /// Y coordinate of the paddle's top edge
    #[inline]
    pub fn paddle_top_y(&self) -> f32 {
        self.height - self.paddle_bottom_offset
    }

    /// Largest legal paddle left edge
    #[inline]
    pub fn max_paddle_x(&self) -> f32 {
        self.width - self.paddle_width
    }

    /// Paddle left edge that centres it horizontally
    #[inline]
    pub fn centered_paddle_x(&self) -> f32 {
        self.width / 2.0 - self.paddle_width / 2.0
    }

    /// Ball top-left corner that centres it in the playfield
    #[inline]
    pub fn center_ball_pos(&self) -> Vec2 {
        Vec2::new(
            self.width / 2.0 - self.ball_size / 2.0,
            self.height / 2.0 - self.ball_size / 2.0,
        )
    }

    /// Velocity the ball starts with after every reset
    #[inline]
    pub fn initial_velocity(&self) -> Vec2 {
        Vec2::splat(self.initial_speed)
    }

    /// Parse a playfield from JSON; missing fields take the phone defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let playfield: Playfield = serde_json::from_str(json)?;
        playfield.validate()?;
        Ok(playfield)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a playfield from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let playfield = Self::from_json(&json)?;
        log::info!("Loaded playfield from {}", path.display());
        Ok(playfield)
    }

    /// Save a playfield as a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Playfield saved to {}", path.display());
        Ok(())
    }
}
