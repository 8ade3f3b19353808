//! Collision predicates
//!
//! All tests run against the tentative (already moved) ball position and
//! treat the ball as an axis-aligned square of side `ball_size`.

use glam::Vec2;

use super::playfield::Playfield;

/// Ball touches or crosses the left or right wall
#[inline]
pub fn hits_side_wall(pos: Vec2, pf: &Playfield) -> bool {
    pos.x <= 0.0 || pos.x + pf.ball_size >= pf.width
}

/// Ball touches or crosses the ceiling
#[inline]
pub fn hits_top_wall(pos: Vec2) -> bool {
    pos.y <= 0.0
}

/// Ball bottom reached the paddle's top edge with its horizontal centre over
/// the paddle span (inclusive at both ends).
///
/// There is no lower bound on the vertical test: a ball already below the
/// paddle top but still above the floor counts as a hit on every tick.
#[inline]
pub fn hits_paddle(pos: Vec2, paddle_x: f32, pf: &Playfield) -> bool {
    let center_x = pos.x + pf.ball_size / 2.0;
    pos.y + pf.ball_size >= pf.paddle_top_y()
        && center_x >= paddle_x
        && center_x <= paddle_x + pf.paddle_width
}

/// Ball bottom strictly below the floor
#[inline]
pub fn breaches_floor(pos: Vec2, pf: &Playfield) -> bool {
    pos.y + pf.ball_size > pf.height
}
