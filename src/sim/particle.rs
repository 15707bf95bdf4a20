//! Cosmetic particles (hearts and sparkles)
//!
//! Never read by gameplay code.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_MS, MAX_PARTICLES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Rabbit rescued
    Heart,
    /// Item collected
    Sparkle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub kind: ParticleKind,
    pub pos: Vec2,
    /// Sideways spread (units per frame)
    pub vel: Vec2,
    /// Upward drift (units per frame)
    pub rise: f32,
    pub life_ms: f32,
    pub max_life_ms: f32,
}

impl Particle {
    /// Fade ratio, 1 when fresh and 0 when expired
    pub fn alpha(&self) -> f32 {
        (self.life_ms / self.max_life_ms).clamp(0.0, 1.0)
    }

    pub fn is_alive(&self) -> bool {
        self.life_ms > 0.0
    }

    pub fn update(&mut self, dt_ms: f32) {
        let frames = dt_ms / FRAME_MS;
        self.life_ms -= dt_ms;
        self.pos += self.vel * frames;
        self.pos.y -= self.rise * frames;
        self.vel *= 0.98_f32.powf(frames);
    }
}

/// Spawn `count` particles around `origin`, dropping the oldest past the cap
pub fn emit_burst(
    particles: &mut Vec<Particle>,
    rng: &mut Pcg32,
    origin: Vec2,
    kind: ParticleKind,
    count: u32,
    life_ms: f32,
    rise: f32,
) {
    for _ in 0..count {
        let vel = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-0.5..0.5));
        particles.push(Particle {
            kind,
            pos: origin,
            vel,
            rise,
            life_ms,
            max_life_ms: life_ms,
        });
    }
    if particles.len() > MAX_PARTICLES {
        let excess = particles.len() - MAX_PARTICLES;
        particles.drain(..excess);
    }
}

/// Age every particle and drop the expired ones
pub fn update_all(particles: &mut Vec<Particle>, dt_ms: f32) {
    for particle in particles.iter_mut() {
        particle.update(dt_ms);
    }
    particles.retain(Particle::is_alive);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_particle_lifecycle() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut particles = Vec::new();
        emit_burst(
            &mut particles,
            &mut rng,
            Vec2::new(100.0, 100.0),
            ParticleKind::Heart,
            3,
            1000.0,
            2.0,
        );
        assert_eq!(particles.len(), 3);

        update_all(&mut particles, FRAME_MS);
        assert_eq!(particles.len(), 3);
        assert!(particles.iter().all(|p| p.pos.y < 100.0));
        assert!((particles[0].alpha() - 0.984).abs() < 1e-4);

        // 61 more frames leave 8 ms, the next one expires them
        for _ in 0..61 {
            update_all(&mut particles, FRAME_MS);
        }
        assert_eq!(particles.len(), 3);
        update_all(&mut particles, FRAME_MS);
        assert!(particles.is_empty());
    }

    #[test]
    fn test_burst_respects_cap() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut particles = Vec::new();
        for _ in 0..100 {
            emit_burst(
                &mut particles,
                &mut rng,
                Vec2::ZERO,
                ParticleKind::Sparkle,
                6,
                1000.0,
                2.0,
            );
        }
        assert_eq!(particles.len(), MAX_PARTICLES);
    }
}
