//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One call is one
//! tick; the host decides the cadence.

use super::collision::{breaches_floor, hits_paddle, hits_side_wall, hits_top_wall};
use super::playfield::Playfield;
use super::state::{Ball, GameEvent, GamePhase, GameState, Snapshot};
use crate::error::ConfigError;

/// Advance the game state by one fixed tick
///
/// Every test runs against the moved position, in this order: side walls,
/// ceiling, paddle, floor. Each may flip a velocity axis independently, so a
/// corner hit flips both. Positions are never pushed back inside the walls;
/// the ball may overshoot by up to one tick of travel.
pub fn tick(state: &mut GameState, pf: &Playfield) {
    if state.is_game_over() {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;

    let pos = state.ball.pos + state.ball.vel;
    let mut vel = state.ball.vel;

    if hits_side_wall(pos, pf) {
        vel.x = -vel.x;
        state.events.push(GameEvent::SideWallBounce);
    }

    if hits_top_wall(pos) {
        vel.y = -vel.y;
        state.events.push(GameEvent::TopWallBounce);
    }

    if hits_paddle(pos, state.paddle.x, pf) {
        vel.y = -vel.y;
        state.score += 1;
        log::debug!("Paddle hit at x={:.1}, score {}", pos.x, state.score);
        state.events.push(GameEvent::PaddleHit { score: state.score });
    }

    if breaches_floor(pos, pf) {
        // Ball goes back to the centre but keeps this tick's velocity
        state.ball = Ball {
            pos: pf.center_ball_pos(),
            vel,
        };
        state.phase = GamePhase::GameOver;
        log::info!(
            "Ball lost after {} ticks, final score {}",
            state.time_ticks,
            state.score
        );
        state.events.push(GameEvent::BallLost {
            final_score: state.score,
        });
        return;
    }

    state.ball = Ball { pos, vel };
    log::trace!(
        "tick {}: ball ({:.1}, {:.1}) vel ({}, {})",
        state.time_ticks,
        pos.x,
        pos.y,
        vel.x,
        vel.y
    );
}

/// Owns the playfield and game state; the only thing a host talks to.
///
/// All methods take `&mut self`, so a paddle update and a tick can never
/// interleave. Hosts that receive input on another thread publish it through
/// [`crate::SharedPaddleInput`] and apply it between ticks.
#[derive(Debug, Clone)]
pub struct SimulationCore {
    playfield: Playfield,
    state: GameState,
}

impl SimulationCore {
    /// Start a new game with the paddle centred
    pub fn new(playfield: Playfield) -> Result<Self, ConfigError> {
        playfield.validate()?;
        let state = GameState::new(&playfield);
        log::info!(
            "Simulation ready: {}x{} playfield, ball {}, paddle {}x{}",
            playfield.width,
            playfield.height,
            playfield.ball_size,
            playfield.paddle_width,
            playfield.paddle_height
        );
        Ok(Self { playfield, state })
    }

    /// Rebuild a core from a previously saved state
    pub fn from_state(playfield: Playfield, mut state: GameState) -> Result<Self, ConfigError> {
        playfield.validate()?;
        let paddle_x = state.paddle.x;
        state.paddle.move_to(paddle_x, &playfield);
        state.events.clear();
        Ok(Self { playfield, state })
    }

    /// Advance one tick and return what the renderer should show.
    /// No-op while the game is over.
    pub fn tick(&mut self) -> Snapshot {
        tick(&mut self.state, &self.playfield);
        self.state.snapshot()
    }

    /// Apply the latest paddle input (left edge), clamped into the playfield.
    /// Allowed in every phase.
    pub fn set_paddle_position(&mut self, raw_x: f32) {
        self.state.paddle.move_to(raw_x, &self.playfield);
    }

    /// Apply a raw pointer x coordinate, centring the paddle under it
    pub fn set_touch_x(&mut self, touch_x: f32) {
        self.set_paddle_position(touch_x - self.playfield.paddle_width / 2.0);
    }

    /// Restart the round; the paddle is left where it is
    pub fn reset(&mut self) -> Snapshot {
        self.state.reset(&self.playfield);
        log::info!("Game reset");
        self.state.snapshot()
    }

    /// Reset only if the game is over. Returns whether it did.
    pub fn restart_if_over(&mut self) -> bool {
        if self.state.is_game_over() {
            self.reset();
            true
        } else {
            false
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Take the events recorded by the most recent tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn ball(&self) -> Ball {
        self.state.ball
    }

    pub fn paddle_x(&self) -> f32 {
        self.state.paddle.x
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Ticks processed since the last reset
    pub fn ticks(&self) -> u64 {
        self.state.time_ticks
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup(pos: Vec2, vel: Vec2, paddle_x: f32) -> (GameState, Playfield) {
        let pf = Playfield::default();
        let mut state = GameState::new(&pf);
        state.ball = Ball { pos, vel };
        state.paddle.x = paddle_x;
        (state, pf)
    }

    #[test]
    fn test_free_flight() {
        let (mut state, pf) = setup(Vec2::new(150.0, 310.0), Vec2::new(4.0, 4.0), 110.0);
        tick(&mut state, &pf);
        assert_eq!(state.ball.pos, Vec2::new(154.0, 314.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_left_wall_overshoot_is_kept() {
        let (mut state, pf) = setup(Vec2::new(2.0, 300.0), Vec2::new(-4.0, 4.0), 110.0);
        tick(&mut state, &pf);
        assert_eq!(state.ball.pos.x, -2.0);
        assert_eq!(state.ball.vel.x, 4.0);
        assert_eq!(state.events, vec![GameEvent::SideWallBounce]);

        // Next tick moves back inside without flipping again
        tick(&mut state, &pf);
        assert_eq!(state.ball.pos.x, 2.0);
        assert_eq!(state.ball.vel.x, 4.0);
    }

    #[test]
    fn test_right_wall() {
        let (mut state, pf) = setup(Vec2::new(297.0, 300.0), Vec2::new(4.0, 4.0), 110.0);
        tick(&mut state, &pf);
        assert_eq!(state.ball.pos.x, 301.0);
        assert_eq!(state.ball.vel.x, -4.0);
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let (mut state, pf) = setup(Vec2::new(2.0, 2.0), Vec2::new(-4.0, -4.0), 110.0);
        tick(&mut state, &pf);
        assert_eq!(state.ball.pos, Vec2::new(-2.0, -2.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
        assert_eq!(
            state.events,
            vec![GameEvent::SideWallBounce, GameEvent::TopWallBounce]
        );
    }

    #[test]
    fn test_paddle_hit_scores_and_flips() {
        // Bottom goes 588 -> 592, past the paddle top at 590
        let (mut state, pf) = setup(Vec2::new(150.0, 568.0), Vec2::new(4.0, 4.0), 110.0);
        tick(&mut state, &pf);
        assert_eq!(state.score, 1);
        assert_eq!(state.ball.vel.y, -4.0);
        assert_eq!(state.ball.pos, Vec2::new(154.0, 572.0));
        assert_eq!(state.events, vec![GameEvent::PaddleHit { score: 1 }]);

        // Moving away now, no second hit
        tick(&mut state, &pf);
        assert_eq!(state.score, 1);
        assert_eq!(state.ball.pos.y, 568.0);
    }

    #[test]
    fn test_paddle_miss_when_center_outside() {
        let (mut state, pf) = setup(Vec2::new(150.0, 568.0), Vec2::new(4.0, 4.0), 0.0);
        tick(&mut state, &pf);
        assert_eq!(state.score, 0);
        assert_eq!(state.ball.vel.y, 4.0);
    }

    #[test]
    fn test_no_paddle_below_stays_in_play() {
        let (mut state, pf) = setup(Vec2::new(150.0, 600.0), Vec2::new(4.0, 4.0), 0.0);
        tick(&mut state, &pf);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.pos.y, 604.0);
    }

    #[test]
    fn test_floor_breach_ends_game() {
        let (mut state, pf) = setup(Vec2::new(150.0, 621.0), Vec2::new(4.0, 4.0), 0.0);
        state.score = 5;
        tick(&mut state, &pf);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.ball.pos, pf.center_ball_pos());
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
        assert_eq!(state.score, 5);
        assert_eq!(state.events, vec![GameEvent::BallLost { final_score: 5 }]);
    }

    #[test]
    fn test_paddle_and_floor_in_same_tick() {
        // Paddle under the ball but the ball is already past the floor line
        let (mut state, pf) = setup(Vec2::new(150.0, 619.0), Vec2::new(4.0, 4.0), 110.0);
        tick(&mut state, &pf);
        assert_eq!(state.score, 1);
        assert_eq!(state.phase, GamePhase::GameOver);
        // Velocity keeps the flip from the paddle test
        assert_eq!(state.ball.vel, Vec2::new(4.0, -4.0));
        assert_eq!(state.ball.pos, pf.center_ball_pos());
        assert_eq!(
            state.events,
            vec![
                GameEvent::PaddleHit { score: 1 },
                GameEvent::BallLost { final_score: 1 }
            ]
        );
    }

    #[test]
    fn test_game_over_tick_is_noop() {
        let (mut state, pf) = setup(Vec2::new(150.0, 621.0), Vec2::new(4.0, 4.0), 0.0);
        tick(&mut state, &pf);
        let before = state.snapshot();
        let ticks = state.time_ticks;
        for _ in 0..10 {
            tick(&mut state, &pf);
        }
        assert_eq!(state.snapshot(), before);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_core_rejects_bad_playfield() {
        let mut pf = Playfield::default();
        pf.width = -1.0;
        assert!(matches!(
            SimulationCore::new(pf),
            Err(ConfigError::InvalidConfiguration { field: "width", .. })
        ));
    }

    #[test]
    fn test_core_touch_centres_paddle() {
        let mut core = SimulationCore::new(Playfield::default()).unwrap();
        core.set_touch_x(100.0);
        assert_eq!(core.paddle_x(), 50.0);
        core.set_touch_x(5.0);
        assert_eq!(core.paddle_x(), 0.0);
        core.set_touch_x(319.0);
        assert_eq!(core.paddle_x(), 220.0);
    }

    #[test]
    fn test_core_restart_only_when_over() {
        let pf = Playfield::default();
        let mut state = GameState::new(&pf);
        state.ball.pos = Vec2::new(150.0, 621.0);
        state.paddle.x = 0.0;
        let mut core = SimulationCore::from_state(pf, state).unwrap();

        assert!(!core.restart_if_over());
        let snap = core.tick();
        assert!(snap.game_over);
        assert_eq!(core.drain_events(), vec![GameEvent::BallLost { final_score: 0 }]);
        assert!(core.drain_events().is_empty());

        core.set_paddle_position(42.0);
        assert_eq!(core.tick().paddle_x, 42.0);

        assert!(core.restart_if_over());
        assert_eq!(core.phase(), GamePhase::Playing);
        assert_eq!(core.paddle_x(), 42.0);
        assert_eq!(core.ticks(), 0);
    }

    #[test]
    fn test_from_state_clamps_paddle() {
        let pf = Playfield::default();
        let mut state = GameState::new(&pf);
        state.paddle.x = 999.0;
        let core = SimulationCore::from_state(pf, state).unwrap();
        assert_eq!(core.paddle_x(), 220.0);
    }
}
