//! Level table lookup and level population

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::enemy::{Enemy, EnemyKind};
use super::geometry::distance;
use super::player::Player;
use super::powerup::{POWER_UP_INSET, PowerUp, PowerUpKind};
use super::rabbit::{RABBIT_INSET, Rabbit};
use super::state::{GameEvent, GameState};
use crate::canvas_center;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::tuning::LevelConfig;

/// Re-rolls allowed when a spawn lands too close to the player
pub const MAX_SPAWN_ATTEMPTS: usize = 32;

/// Config for a 1-based level number. Past the end of the table the last
/// entry repeats; level 0 reads the first.
pub fn config_for(levels: &[LevelConfig], level: u32) -> LevelConfig {
    let fallback = LevelConfig::new(1, 0, 0);
    if levels.is_empty() {
        return fallback;
    }
    let index = (level.max(1) as usize - 1).min(levels.len() - 1);
    levels[index]
}

/// Uniform point in the inset canvas, re-rolled while within `clearance` of `avoid`
pub fn random_spawn(rng: &mut Pcg32, inset: f32, avoid: Vec2, clearance: f32) -> Vec2 {
    let mut pos = avoid;
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        pos = Vec2::new(
            rng.random_range(inset..CANVAS_WIDTH - inset),
            rng.random_range(inset..CANVAS_HEIGHT - inset),
        );
        if distance(pos, avoid) >= clearance {
            break;
        }
    }
    pos
}

impl GameState {
    /// Replace every entity with a fresh set for the current level
    pub fn populate_level(&mut self) {
        let level = self.progression.level();
        let config = config_for(&self.tuning.levels, level);

        self.rabbits.clear();
        self.enemies.clear();
        self.power_ups.clear();
        self.particles.clear();
        self.player = Player::new(&self.tuning);

        let spawn = canvas_center();
        let clearance = self.tuning.spawn_clearance;

        for _ in 0..config.rabbits {
            let pos = random_spawn(&mut self.rng, RABBIT_INSET, spawn, clearance);
            let id = self.next_entity_id();
            self.rabbits.push(Rabbit::new(id, pos, &self.tuning));
        }

        for i in 0..config.enemies {
            let kind = if i == 0 {
                EnemyKind::Shepherd
            } else {
                EnemyKind::Dog
            };
            let pos = random_spawn(&mut self.rng, RABBIT_INSET, spawn, clearance);
            let direction = self.rng.random_range(0.0..TAU);
            let id = self.next_entity_id();
            self.enemies.push(Enemy::new(id, kind, pos, direction, &self.tuning));
        }

        for _ in 0..config.power_ups {
            let pos = random_spawn(&mut self.rng, POWER_UP_INSET, spawn, 0.0);
            let kind = PowerUpKind::ALL[self.rng.random_range(0..PowerUpKind::ALL.len())];
            let id = self.next_entity_id();
            self.power_ups.push(PowerUp::new(id, kind, pos, &self.tuning));
        }

        self.progression.begin_level(config.rabbits);
        self.events.push(GameEvent::LevelStarted { level });

        log::info!(
            "Level {}: {} rabbits, {} enemies, {} power-ups",
            level,
            config.rabbits,
            config.enemies,
            config.power_ups
        );
    }
}
