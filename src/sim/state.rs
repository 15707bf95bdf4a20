//! Game state and core simulation types
//!
//! One `GameState` owns every entity of a run. Hosts hold it by value and
//! only read it between ticks.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::particle::Particle;
use super::player::Player;
use super::powerup::{PowerUp, PowerUpKind};
use super::progression::Progression;
use super::rabbit::{Mood, Rabbit};
use crate::tuning::Tuning;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Out of lives
    Lost,
    /// Every level in the table cleared
    Won,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen; still rendered
    Paused,
    /// Run ended
    GameOver(Outcome),
}

/// Something the UI may want to react to, recorded during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RabbitRescued { id: u32 },
    RabbitMoodChanged { id: u32, mood: Mood },
    PowerUpCollected { id: u32, kind: PowerUpKind },
    /// Enemy contact cost a life
    PlayerHit { lives_left: u8 },
    /// Enemy contact ignored thanks to an active effect
    HitBlocked,
    LevelCleared { level: u32, bonus: u64 },
    LevelStarted { level: u32 },
    GameOver(Outcome),
}

/// HUD values, refreshed after every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub rabbits_left: u32,
    pub phase: GamePhase,
}

/// Complete simulation context for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub progression: Progression,
    /// Simulated time since the run started
    pub time_ms: f64,
    pub time_ticks: u64,
    pub player: Player,
    /// Unrescued rabbits (sorted by id)
    pub rabbits: Vec<Rabbit>,
    pub enemies: Vec<Enemy>,
    /// Items, collected ones kept as spent markers until the level ends
    pub power_ups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Start a run at level 1 with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let mut state = Self {
            seed,
            phase: GamePhase::Playing,
            progression: Progression::new(tuning.starting_lives),
            time_ms: 0.0,
            time_ticks: 0,
            player: Player::new(&tuning),
            rabbits: Vec::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            tuning,
        };
        state.populate_level();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fresh run from level 1, keeping seed stream and tuning
    pub fn new_run(&mut self) {
        log::info!("New run (seed {})", self.seed);
        self.events.clear();
        self.progression = Progression::new(self.tuning.starting_lives);
        self.phase = GamePhase::Playing;
        self.populate_level();
    }

    /// Repopulate the current level; score and lives carry over
    pub fn restart_level(&mut self) {
        log::info!("Restarting level {}", self.progression.level());
        self.events.clear();
        self.phase = GamePhase::Playing;
        self.populate_level();
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.progression.score(),
            lives: self.progression.lives(),
            level: self.progression.level(),
            rabbits_left: self.progression.rabbits_left(),
            phase: self.phase,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }
}
