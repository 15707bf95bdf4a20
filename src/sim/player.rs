//! The player character
//!
//! Walks toward the last commanded target point and carries at most one
//! timed power-up effect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use crate::consts::{ARRIVE_DISTANCE, FRAME_MS};
use crate::tuning::Tuning;
use crate::{canvas_center, clamp_to_canvas};

/// Timed effect currently applied to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Effect {
    #[default]
    None,
    /// Golden carrot: base speed multiplied by `Tuning::speed_boost`
    SpeedBoost,
    /// Clover: armed and timed, no stat change yet
    Charm,
    /// Ignores enemy hits. No item grants this; armed explicitly only.
    Invincible,
}

impl Effect {
    pub fn is_active(self) -> bool {
        self != Effect::None
    }

    pub fn grants_hit_immunity(self) -> bool {
        self == Effect::Invincible
    }
}

/// The player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    /// Destination, cleared on arrival
    pub target: Option<Vec2>,
    pub size: Vec2,
    pub base_speed: f32,
    /// Effective speed (units per frame)
    pub speed: f32,
    pub moving: bool,
    pub effect: Effect,
    /// Remaining effect time (ms)
    pub effect_ms: f32,
    speed_boost: f32,
}

impl Player {
    /// Fresh player at the canvas center
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: canvas_center(),
            target: None,
            size: Vec2::splat(tuning.player_size),
            base_speed: tuning.player_speed,
            speed: tuning.player_speed,
            moving: false,
            effect: Effect::None,
            effect_ms: 0.0,
            speed_boost: tuning.speed_boost,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::centered(self.pos, self.size)
    }

    /// Advance one tick toward `target` (a freshly commanded point replaces
    /// the current one), count down the active effect, stay on the canvas.
    pub fn update(&mut self, target: Option<Vec2>, dt_ms: f32) {
        if !(dt_ms > 0.0) {
            return;
        }
        let frames = dt_ms / FRAME_MS;

        if let Some(t) = target {
            self.target = Some(t);
            self.moving = true;
        }

        if let Some(t) = self.target {
            let to_target = t - self.pos;
            let dist = to_target.length();
            if dist > ARRIVE_DISTANCE {
                let step = (self.speed * frames).min(dist);
                self.pos += to_target / dist * step;
                self.moving = true;
            } else {
                self.pos = t;
                self.target = None;
                self.moving = false;
            }
        }

        if self.effect.is_active() {
            self.effect_ms -= dt_ms;
            if self.effect_ms <= 0.0 {
                log::debug!("Effect {:?} expired", self.effect);
                self.clear_effect();
            }
        }

        self.pos = clamp_to_canvas(self.pos, self.half_extents());
    }

    /// Arm `effect` for `duration_ms`, replacing whatever was active
    pub fn arm_effect(&mut self, effect: Effect, duration_ms: f32) {
        if effect == Effect::None || !(duration_ms > 0.0) {
            self.clear_effect();
            return;
        }
        self.effect = effect;
        self.effect_ms = duration_ms;
        self.speed = match effect {
            Effect::SpeedBoost => self.base_speed * self.speed_boost,
            _ => self.base_speed,
        };
    }

    pub fn clear_effect(&mut self) {
        self.effect = Effect::None;
        self.effect_ms = 0.0;
        self.speed = self.base_speed;
    }

    /// Back to the canvas center, standing still. Effects survive.
    pub fn respawn(&mut self) {
        self.pos = canvas_center();
        self.target = None;
        self.moving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use proptest::prelude::*;

    fn player() -> Player {
        Player::new(&Tuning::default())
    }

    #[test]
    fn test_spawns_at_center_idle() {
        let p = player();
        assert_eq!(p.pos, Vec2::new(400.0, 300.0));
        assert!(p.target.is_none());
        assert!(!p.moving);
    }

    #[test]
    fn test_idle_without_target() {
        let mut p = player();
        p.update(None, FRAME_MS);
        assert_eq!(p.pos, Vec2::new(400.0, 300.0));
        assert!(!p.moving);
    }

    #[test]
    fn test_moves_speed_per_frame() {
        let mut p = player();
        p.update(Some(Vec2::new(500.0, 300.0)), FRAME_MS);
        assert!((p.pos.x - 403.0).abs() < 1e-4);
        assert!(p.moving);

        // Half a frame covers half the distance
        p.update(None, FRAME_MS / 2.0);
        assert!((p.pos.x - 404.5).abs() < 1e-4);
    }

    #[test]
    fn test_snaps_on_arrival() {
        let mut p = player();
        p.update(Some(Vec2::new(404.0, 300.0)), FRAME_MS);
        assert_eq!(p.pos, Vec2::new(404.0, 300.0));
        assert!(p.target.is_none());
        assert!(!p.moving);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut p = player();
        p.arm_effect(Effect::Charm, 100.0);
        p.update(Some(Vec2::new(600.0, 300.0)), 0.0);
        p.update(Some(Vec2::new(600.0, 300.0)), -16.0);
        assert_eq!(p.pos, Vec2::new(400.0, 300.0));
        assert_eq!(p.effect_ms, 100.0);
        assert!(p.target.is_none());
    }

    #[test]
    fn test_speed_boost_expires() {
        let mut p = player();
        p.arm_effect(Effect::SpeedBoost, 32.0);
        assert_eq!(p.speed, 4.5);
        p.update(None, FRAME_MS);
        assert_eq!(p.effect, Effect::SpeedBoost);
        p.update(None, FRAME_MS);
        assert_eq!(p.effect, Effect::None);
        assert_eq!(p.speed, p.base_speed);
    }

    #[test]
    fn test_charm_replaces_boost() {
        let mut p = player();
        p.arm_effect(Effect::SpeedBoost, 5000.0);
        p.update(None, 1000.0);
        p.arm_effect(Effect::Charm, 5000.0);
        assert_eq!(p.effect, Effect::Charm);
        assert_eq!(p.effect_ms, 5000.0);
        assert_eq!(p.speed, p.base_speed);
    }

    #[test]
    fn test_respawn_keeps_effect() {
        let mut p = player();
        p.pos = Vec2::new(100.0, 100.0);
        p.target = Some(Vec2::new(50.0, 50.0));
        p.arm_effect(Effect::Charm, 1000.0);
        p.respawn();
        assert_eq!(p.pos, Vec2::new(400.0, 300.0));
        assert!(p.target.is_none());
        assert_eq!(p.effect, Effect::Charm);
    }

    proptest! {
        #[test]
        fn prop_player_stays_on_canvas(
            start_x in -500.0f32..1500.0,
            start_y in -500.0f32..1500.0,
            tx in -2000.0f32..2000.0,
            ty in -2000.0f32..2000.0,
            dt in 0.0f32..500.0,
            boosted in any::<bool>(),
        ) {
            let mut p = player();
            p.pos = Vec2::new(start_x, start_y);
            if boosted {
                p.arm_effect(Effect::SpeedBoost, 5000.0);
            }
            for _ in 0..4 {
                p.update(Some(Vec2::new(tx, ty)), dt);
            }
            let half = p.half_extents();
            if dt > 0.0 {
                prop_assert!(p.pos.x >= half.x && p.pos.x <= CANVAS_WIDTH - half.x);
                prop_assert!(p.pos.y >= half.y && p.pos.y <= CANVAS_HEIGHT - half.y);
            }
        }
    }
}
