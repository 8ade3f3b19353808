//! Tap Pong entry point
//!
//! Native builds run a headless demo: the autopilot plays against the real
//! simulation core on a fixed-step clock and the results go to the log. The
//! browser build drives the core through `tap_pong::wasm` instead.
//!
//! Usage: `tap-pong [playfield.json] [ticks] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Tap Pong (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let playfield = match args.first().map(String::as_str) {
        Some(path) if path != "-" => match tap_pong::Playfield::load(path) {
            Ok(pf) => pf,
            Err(e) => {
                log::warn!("Could not load {path}: {e}; using default playfield");
                tap_pong::Playfield::default()
            }
        },
        _ => tap_pong::Playfield::default(),
    };
    let ticks: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(60 * 60);
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(12345);

    match demo::run(playfield, ticks, seed) {
        Ok(summary) => {
            println!(
                "{} ticks, {} games, best score {}, {} paddle hits",
                summary.ticks, summary.games, summary.best_score, summary.paddle_hits
            );
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is tap_pong::wasm, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::time::Duration;

    use tap_pong::sim::GameEvent;
    use tap_pong::{Autopilot, ConfigError, FixedStepClock, Playfield, SharedPaddleInput, SimulationCore};

    /// Aim error of the demo player, enough to lose now and then
    const AUTOPILOT_JITTER: f32 = 45.0;

    pub struct Summary {
        pub ticks: u64,
        pub games: u32,
        pub best_score: u64,
        pub paddle_hits: u64,
    }

    /// Simulated frame time, deliberately off-cadence so the clock has to
    /// carry remainders between frames
    const FRAME: Duration = Duration::from_micros(16_667);

    pub fn run(playfield: Playfield, ticks: u64, seed: u64) -> Result<Summary, ConfigError> {
        let mut core = SimulationCore::new(playfield)?;
        let mut clock = FixedStepClock::default();
        let mut pilot = Autopilot::new(seed, AUTOPILOT_JITTER);
        let input = SharedPaddleInput::new();

        let mut summary = Summary {
            ticks: 0,
            games: 1,
            best_score: 0,
            paddle_hits: 0,
        };

        while summary.ticks < ticks {
            // Input side: the autopilot publishes like a touch handler would
            let snapshot = core.snapshot();
            let touch_x = pilot.touch_x(&snapshot, playfield.ball_size);
            input.publish(touch_x - playfield.paddle_width / 2.0);

            // Tick side: apply latest input, then run whatever ticks are due
            let due = clock.advance(FRAME);
            for _ in 0..due {
                input.apply_to(&mut core);
                let snap = core.tick();
                summary.ticks += 1;

                for event in core.drain_events() {
                    match event {
                        GameEvent::PaddleHit { .. } => summary.paddle_hits += 1,
                        GameEvent::BallLost { final_score } => {
                            log::info!("Game {} over, score {}", summary.games, final_score);
                            summary.best_score = summary.best_score.max(final_score);
                        }
                        _ => {}
                    }
                }

                if snap.game_over {
                    // Tap to restart
                    core.restart_if_over();
                    summary.games += 1;
                    break;
                }
            }
        }

        summary.best_score = summary.best_score.max(core.score());
        Ok(summary)
    }
}
