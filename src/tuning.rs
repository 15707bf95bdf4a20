//! Game balance and level table
//!
//! Loaded once at startup (JSON file or defaults) and never mutated by the
//! simulation. Rates are per reference frame (`consts::FRAME_MS`).

use serde::{Deserialize, Serialize};

/// Population quotas for a single level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Rabbits that must be rescued to clear the level
    pub rabbits: u32,
    /// Enemies patrolling the meadow (first is always the shepherd)
    pub enemies: u32,
    /// Power-up items scattered at level start
    pub power_ups: u32,
}

impl LevelConfig {
    pub const fn new(rabbits: u32, enemies: u32, power_ups: u32) -> Self {
        Self {
            rabbits,
            enemies,
            power_ups,
        }
    }
}

/// Default campaign: five levels, gentle ramp
pub const DEFAULT_LEVELS: [LevelConfig; 5] = [
    LevelConfig::new(3, 0, 1),
    LevelConfig::new(5, 1, 2),
    LevelConfig::new(7, 2, 2),
    LevelConfig::new(10, 2, 3),
    LevelConfig::new(12, 3, 3),
];

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Base player speed (units per frame)
    pub player_speed: f32,
    /// Player sprite size (square)
    pub player_size: f32,
    pub starting_lives: u8,

    // === Rabbits ===
    pub rabbit_size: f32,
    /// Player must be closer than this to cheer a rabbit up
    pub interaction_distance: f32,
    /// Happiness gained per frame while the player is close
    pub happiness_per_frame: f32,
    pub max_happiness: f32,
    /// Unattended time before a rabbit starts getting angry (ms)
    pub rabbit_patience_ms: f32,
    /// Anger gained per frame once patience runs out
    pub anger_per_frame: f32,
    /// Anger at which a rabbit turns angry
    pub anger_threshold: f32,
    /// Angry rabbits pick a new wander point this often (ms)
    pub wander_interval_ms: f32,
    /// Angry rabbit wander speed (units per frame)
    pub rabbit_speed: f32,

    // === Enemies ===
    /// Base enemy speed; shepherd runs at 0.8x, dog at 1.2x
    pub enemy_speed: f32,
    pub detection_distance: f32,
    /// Patrol heading change interval (ms)
    pub patrol_interval_ms: f32,
    /// Patrol speed as a fraction of chase speed
    pub patrol_speed_factor: f32,

    // === Power-ups ===
    pub power_up_size: f32,
    pub power_up_duration_ms: f32,
    /// Golden carrot speed multiplier
    pub speed_boost: f32,

    // === Scoring ===
    pub rescue_score: u64,
    pub power_up_score: u64,
    pub level_bonus: u64,

    // === Spawning ===
    /// Minimum distance between the player spawn and rabbits/enemies
    pub spawn_clearance: f32,

    // === Particles ===
    pub rescue_particles: u32,
    pub collect_particles: u32,
    pub particle_life_ms: f32,
    /// Upward drift (units per frame)
    pub particle_rise: f32,

    /// Ordered level table, 1-based by level number
    pub levels: Vec<LevelConfig>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 3.0,
            player_size: 64.0,
            starting_lives: 3,

            rabbit_size: 48.0,
            interaction_distance: 40.0,
            happiness_per_frame: 2.0,
            max_happiness: 100.0,
            rabbit_patience_ms: 10_000.0,
            anger_per_frame: 0.5,
            anger_threshold: 50.0,
            wander_interval_ms: 1000.0,
            rabbit_speed: 1.0,

            enemy_speed: 1.5,
            detection_distance: 80.0,
            patrol_interval_ms: 2000.0,
            patrol_speed_factor: 0.5,

            power_up_size: 32.0,
            power_up_duration_ms: 5000.0,
            speed_boost: 1.5,

            rescue_score: 100,
            power_up_score: 50,
            level_bonus: 500,

            spawn_clearance: 100.0,

            rescue_particles: 6,
            collect_particles: 4,
            particle_life_ms: 1000.0,
            particle_rise: 2.0,

            levels: DEFAULT_LEVELS.to_vec(),
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a file, falling back to defaults on any failure
    pub fn load_or_default(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Repair values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.levels.is_empty() {
            log::warn!("Tuning has no levels, using default table");
            self.levels = defaults.levels.clone();
        }
        for (i, level) in self.levels.iter_mut().enumerate() {
            if level.rabbits == 0 {
                log::warn!("Level {} has no rabbits, requiring 1", i + 1);
                level.rabbits = 1;
            }
        }

        let fields: [(&str, &mut f32, f32); 19] = [
            ("player_speed", &mut self.player_speed, defaults.player_speed),
            ("player_size", &mut self.player_size, defaults.player_size),
            ("rabbit_size", &mut self.rabbit_size, defaults.rabbit_size),
            ("interaction_distance", &mut self.interaction_distance, defaults.interaction_distance),
            ("happiness_per_frame", &mut self.happiness_per_frame, defaults.happiness_per_frame),
            ("max_happiness", &mut self.max_happiness, defaults.max_happiness),
            ("rabbit_patience_ms", &mut self.rabbit_patience_ms, defaults.rabbit_patience_ms),
            ("anger_per_frame", &mut self.anger_per_frame, defaults.anger_per_frame),
            ("anger_threshold", &mut self.anger_threshold, defaults.anger_threshold),
            ("wander_interval_ms", &mut self.wander_interval_ms, defaults.wander_interval_ms),
            ("rabbit_speed", &mut self.rabbit_speed, defaults.rabbit_speed),
            ("enemy_speed", &mut self.enemy_speed, defaults.enemy_speed),
            ("detection_distance", &mut self.detection_distance, defaults.detection_distance),
            ("patrol_interval_ms", &mut self.patrol_interval_ms, defaults.patrol_interval_ms),
            ("patrol_speed_factor", &mut self.patrol_speed_factor, defaults.patrol_speed_factor),
            ("power_up_size", &mut self.power_up_size, defaults.power_up_size),
            ("power_up_duration_ms", &mut self.power_up_duration_ms, defaults.power_up_duration_ms),
            ("speed_boost", &mut self.speed_boost, defaults.speed_boost),
            ("particle_life_ms", &mut self.particle_life_ms, defaults.particle_life_ms),
        ];
        for (name, value, default) in fields {
            if !(value.is_finite() && *value > 0.0) {
                log::warn!("Tuning {} = {} is invalid, using {}", name, value, default);
                *value = default;
            }
        }

        if self.starting_lives == 0 {
            log::warn!("Tuning starting_lives = 0, using {}", defaults.starting_lives);
            self.starting_lives = defaults.starting_lives;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_campaign() {
        let t = Tuning::default();
        assert_eq!(t.levels.len(), 5);
        assert_eq!(t.levels[0], LevelConfig::new(3, 0, 1));
        assert_eq!(t.levels[4], LevelConfig::new(12, 3, 3));
        assert_eq!(t.starting_lives, 3);
        assert_eq!(t.interaction_distance, 40.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "player_speed": 4.0 }"#).unwrap();
        assert_eq!(t.player_speed, 4.0);
        assert_eq!(t.enemy_speed, 1.5);
        assert_eq!(t.levels, DEFAULT_LEVELS.to_vec());
    }

    #[test]
    fn test_sanitize_repairs_table() {
        let json = r#"{ "levels": [], "enemy_speed": -1.0, "starting_lives": 0 }"#;
        let t = Tuning::from_json(json).unwrap();
        assert_eq!(t.levels.len(), 5);
        assert_eq!(t.enemy_speed, 1.5);
        assert_eq!(t.starting_lives, 3);

        let json = r#"{ "levels": [{ "rabbits": 0, "enemies": 1, "power_ups": 0 }] }"#;
        let t = Tuning::from_json(json).unwrap();
        assert_eq!(t.levels, vec![LevelConfig::new(1, 1, 0)]);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Tuning::from_json("{ not json").is_err());
    }

    #[test]
    fn test_json_roundtrip_preserves_table() {
        let t = Tuning::default();
        let back = Tuning::from_json(&t.to_json().unwrap()).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let t = Tuning::load_or_default(std::path::Path::new("/nonexistent/tuning.json"));
        assert_eq!(t, Tuning::default());
    }
}
