//! The shepherd and his dog
//!
//! Patrol on a random heading until the player wanders into detection
//! range, then run straight at it.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Aabb, distance};
use crate::consts::FRAME_MS;
use crate::tuning::Tuning;
use crate::{clamp_to_canvas, heading};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Big and slow
    Shepherd,
    /// Small and quick
    Dog,
}

impl EnemyKind {
    pub fn size(self) -> f32 {
        match self {
            EnemyKind::Shepherd => 64.0,
            EnemyKind::Dog => 48.0,
        }
    }

    /// Multiplier on `Tuning::enemy_speed`
    pub fn speed_factor(self) -> f32 {
        match self {
            EnemyKind::Shepherd => 0.8,
            EnemyKind::Dog => 1.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Chase speed (units per frame)
    pub speed: f32,
    /// Patrol heading (radians)
    pub direction: f32,
    pub detection_radius: f32,
    pub chasing: bool,
    pub patrol_ms: f32,
}

impl Enemy {
    pub fn new(id: u32, kind: EnemyKind, pos: Vec2, direction: f32, tuning: &Tuning) -> Self {
        Self {
            id,
            kind,
            pos,
            size: Vec2::splat(kind.size()),
            speed: tuning.enemy_speed * kind.speed_factor(),
            direction,
            detection_radius: tuning.detection_distance,
            chasing: false,
            patrol_ms: 0.0,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::centered(self.pos, self.size)
    }

    pub fn update(&mut self, player_pos: Vec2, dt_ms: f32, tuning: &Tuning, rng: &mut Pcg32) {
        if !(dt_ms > 0.0) {
            return;
        }
        let frames = dt_ms / FRAME_MS;
        let dist = distance(self.pos, player_pos);

        if dist < self.detection_radius {
            if !self.chasing {
                log::debug!("{:?} {} spotted the player", self.kind, self.id);
            }
            self.chasing = true;
            // Unclamped: a chasing enemy follows the player anywhere
            let to_player = (player_pos - self.pos).normalize_or_zero();
            self.pos += to_player * self.speed * frames;
        } else {
            self.chasing = false;
            self.patrol_ms += dt_ms;
            if self.patrol_ms > tuning.patrol_interval_ms {
                self.direction = rng.random_range(0.0..TAU);
                self.patrol_ms = 0.0;
            }
            self.pos += heading(self.direction) * self.speed * tuning.patrol_speed_factor * frames;
            self.pos = clamp_to_canvas(self.pos, self.half_extents());
        }
    }
}
