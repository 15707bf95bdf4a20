//! Collectible items lying in the meadow

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use super::player::{Effect, Player};
use crate::tuning::Tuning;

/// Inset from the canvas edges for item spawns
pub const POWER_UP_INSET: f32 = 25.0;

/// Bob amplitude and angular rate (render-only)
const BOB_AMPLITUDE: f32 = 4.0;
const BOB_RATE: f32 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Speed boost
    GoldenCarrot,
    /// Charm
    Clover,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 2] = [PowerUpKind::GoldenCarrot, PowerUpKind::Clover];

    /// Effect armed on the player when collected
    pub fn effect(self) -> Effect {
        match self {
            PowerUpKind::GoldenCarrot => Effect::SpeedBoost,
            PowerUpKind::Clover => Effect::Charm,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub collected: bool,
    /// Vertical draw offset, never part of `pos`
    pub bob: f32,
}

impl PowerUp {
    pub fn new(id: u32, kind: PowerUpKind, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            kind,
            pos,
            size: Vec2::splat(tuning.power_up_size),
            collected: false,
            bob: 0.0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::centered(self.pos, self.size)
    }

    /// Cosmetic float animation keyed to simulation time
    pub fn update(&mut self, time_ms: f64) {
        if !self.collected {
            self.bob = ((time_ms * BOB_RATE as f64).sin() as f32) * BOB_AMPLITUDE;
        }
    }

    /// Mark collected and arm the item's effect. Returns false (and does
    /// nothing) if the item was already taken.
    pub fn collect(&mut self, player: &mut Player, tuning: &Tuning) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        self.bob = 0.0;
        player.arm_effect(self.kind.effect(), tuning.power_up_duration_ms);
        true
    }
}
