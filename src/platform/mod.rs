//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger setup
//! - Turning display-refresh callbacks into fixed simulation ticks

use crate::consts::{FRAME_MS, MAX_FRAME_MS, MAX_SUBSTEPS};
use crate::sim::{GameState, TargetBuffer, TickInput, tick};

/// Install the logger for the current target
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    // Ignore a second init (tests, embedding hosts)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Install the logger for the current target
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Host-side controls gathered between frames
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub targets: TargetBuffer,
    /// One-shot pause toggle
    pub pause: bool,
    pub idle_mode: bool,
}

impl FrameInput {
    /// Build the next tick's input, consuming one-shot fields
    pub fn drain(&mut self) -> TickInput {
        let input = TickInput {
            target: self.targets.take(),
            pause: self.pause,
            idle_mode: self.idle_mode,
        };
        self.pause = false;
        input
    }
}

/// Fixed-step accumulator driven by the display refresh callback
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a frame timestamp (ms) and run as many fixed ticks as it covers.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, now_ms: f64, state: &mut GameState, input: &mut FrameInput) -> u32 {
        let elapsed = match self.last_time {
            Some(last) => (now_ms - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now_ms);
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_MS);

        // A pause toggle must go through even when no tick is due
        if input.pause && self.accumulator < FRAME_MS {
            let tick_input = input.drain();
            tick(state, &tick_input, 0.0);
        }

        let mut substeps = 0;
        while self.accumulator >= FRAME_MS && substeps < MAX_SUBSTEPS {
            let tick_input = input.drain();
            tick(state, &tick_input, FRAME_MS);
            self.accumulator -= FRAME_MS;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(FRAME_MS);
        }
        substeps
    }
}
