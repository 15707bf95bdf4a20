//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit elapsed time only (no wall clock)
//! - Seeded RNG only
//! - Entities are spawned, updated and resolved in id order
//! - No rendering or platform dependencies

pub mod enemy;
pub mod geometry;
pub mod input;
pub mod level;
pub mod particle;
pub mod player;
pub mod powerup;
pub mod progression;
pub mod rabbit;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use enemy::{Enemy, EnemyKind};
pub use geometry::{Aabb, aabb_overlap, distance};
pub use input::TargetBuffer;
pub use level::config_for;
pub use particle::{Particle, ParticleKind};
pub use player::{Effect, Player};
pub use powerup::{PowerUp, PowerUpKind};
pub use progression::{LevelAdvance, Progression};
pub use rabbit::{Mood, Rabbit};
pub use snapshot::Snapshot;
pub use state::{GameEvent, GamePhase, GameState, Hud, Outcome};
pub use tick::{TickInput, tick};
