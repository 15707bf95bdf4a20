//! Rabbit Rescue - A meadow arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, level progression)
//! - `platform`: Frame clock and logger setup for browser/native hosts
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::{LevelConfig, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (simulation units)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Reference frame duration. Per-frame rates in `Tuning` are scaled by
    /// `dt_ms / FRAME_MS`, so a 16 ms tick matches the original 60 fps feel.
    pub const FRAME_MS: f32 = 16.0;

    /// Margin the input layer keeps commanded targets away from the edges
    pub const TARGET_INSET: f32 = 32.0;

    /// Largest wall-clock delta a single frame may feed the clock
    pub const MAX_FRAME_MS: f32 = 100.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player moving closer than this to its target snaps onto it
    pub const ARRIVE_DISTANCE: f32 = 5.0;

    /// Live particle cap (cosmetic only)
    pub const MAX_PARTICLES: usize = 256;
}

/// Center of the playfield, where the player spawns and respawns
#[inline]
pub fn canvas_center() -> Vec2 {
    Vec2::new(consts::CANVAS_WIDTH / 2.0, consts::CANVAS_HEIGHT / 2.0)
}

/// Clamp a center-anchored position so a box of `half` extents stays on the canvas
#[inline]
pub fn clamp_to_canvas(pos: Vec2, half: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.clamp(half.x, consts::CANVAS_WIDTH - half.x),
        pos.y.clamp(half.y, consts::CANVAS_HEIGHT - half.y),
    )
}

/// Convert an angle (radians) to a unit heading vector
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
