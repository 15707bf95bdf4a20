//! Read-only view of the simulation for renderers and UI
//!
//! Captured between ticks. Spent items are left out, matching what gets drawn.

use glam::Vec2;
use serde::Serialize;

use super::enemy::EnemyKind;
use super::particle::ParticleKind;
use super::player::Effect;
use super::powerup::PowerUpKind;
use super::rabbit::Mood;
use super::state::{GameState, Hud};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
    pub moving: bool,
    pub effect: Effect,
}

#[derive(Debug, Clone, Serialize)]
pub struct RabbitView {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub mood: Mood,
    /// 0-1 fill of the happiness bar
    pub happiness: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub chasing: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PowerUpView {
    pub id: u32,
    pub kind: PowerUpKind,
    /// Draw position including the bob offset
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub kind: ParticleKind,
    pub pos: Vec2,
    pub alpha: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub hud: Hud,
    pub player: PlayerView,
    pub rabbits: Vec<RabbitView>,
    pub enemies: Vec<EnemyView>,
    pub power_ups: Vec<PowerUpView>,
    pub particles: Vec<ParticleView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let p = &state.player;
        Self {
            hud: state.hud(),
            player: PlayerView {
                pos: p.pos,
                size: p.size,
                moving: p.moving,
                effect: p.effect,
            },
            rabbits: state
                .rabbits
                .iter()
                .map(|r| RabbitView {
                    id: r.id,
                    pos: r.pos,
                    size: r.size,
                    mood: r.mood,
                    happiness: r.happiness_ratio(&state.tuning),
                })
                .collect(),
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    id: e.id,
                    kind: e.kind,
                    pos: e.pos,
                    size: e.size,
                    chasing: e.chasing,
                })
                .collect(),
            power_ups: state
                .power_ups
                .iter()
                .filter(|p| !p.collected)
                .map(|p| PowerUpView {
                    id: p.id,
                    kind: p.kind,
                    pos: p.pos + Vec2::new(0.0, p.bob),
                    size: p.size,
                })
                .collect(),
            particles: state
                .particles
                .iter()
                .map(|p| ParticleView {
                    kind: p.kind,
                    pos: p.pos,
                    alpha: p.alpha(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
