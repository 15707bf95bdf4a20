//! Pending move command from pointer/touch input
//!
//! The host converts screen coordinates into simulation space and writes
//! them here; the next tick hands the target to the player.

use glam::Vec2;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, TARGET_INSET};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TargetBuffer {
    pending: Option<Vec2>,
}

impl TargetBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a destination, clamped away from the canvas edges.
    /// Later commands overwrite earlier ones not yet consumed.
    pub fn command(&mut self, x: f32, y: f32) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        self.pending = Some(Vec2::new(
            x.clamp(TARGET_INSET, CANVAS_WIDTH - TARGET_INSET),
            y.clamp(TARGET_INSET, CANVAS_HEIGHT - TARGET_INSET),
        ));
    }

    pub fn peek(&self) -> Option<Vec2> {
        self.pending
    }

    /// Consume the pending target, if any
    pub fn take(&mut self) -> Option<Vec2> {
        self.pending.take()
    }
}
