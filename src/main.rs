//! Rabbit Rescue entry point
//!
//! Native builds run a headless demo: the autopilot plays a seeded run and
//! the result is logged. Usage: `rabbit-rescue [tuning.json] [seed]`

use rabbit_rescue::Tuning;
use rabbit_rescue::consts::FRAME_MS;
use rabbit_rescue::platform::{self, FrameClock, FrameInput};
use rabbit_rescue::sim::{GameEvent, GameState, Snapshot};

/// Ten minutes of simulated play at 60 Hz
const DEMO_TICKS: u64 = 10 * 60 * 60;

fn main() {
    platform::init_logging();
    log::info!("Rabbit Rescue (headless demo) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(std::path::Path::new(&path)),
        None => Tuning::default(),
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::warn!("Bad seed: {}, using 1", e);
            1
        }
        None => 1,
    };

    let mut state = GameState::new(seed, tuning);
    log::info!("Game initialized with seed: {}", seed);

    let mut input = FrameInput {
        idle_mode: true,
        ..Default::default()
    };

    // Synthetic clock: one frame per tick so every tick's events get logged
    let mut clock = FrameClock::new();
    let mut now_ms = 0.0_f64;
    clock.advance(now_ms, &mut state, &mut input);

    while state.time_ticks < DEMO_TICKS && !state.is_over() {
        now_ms += f64::from(FRAME_MS);
        clock.advance(now_ms, &mut state, &mut input);

        for event in &state.events {
            match event {
                GameEvent::LevelCleared { .. }
                | GameEvent::PlayerHit { .. }
                | GameEvent::GameOver(_) => log::info!("{:?}", event),
                _ => log::debug!("{:?}", event),
            }
        }
    }

    let hud = state.hud();
    println!(
        "Final: {:?} | level {} | score {} | lives {} | {:.1}s simulated",
        hud.phase,
        hud.level,
        hud.score,
        hud.lives,
        state.time_ms / 1000.0
    );

    match Snapshot::capture(&state).to_json() {
        Ok(json) => log::debug!("Final snapshot: {}", json),
        Err(e) => log::error!("Snapshot failed: {}", e),
    }
}
