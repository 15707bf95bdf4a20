//! Rabbits waiting to be cheered up
//!
//! Two independent meters: happiness fills while the player is close, and
//! patience drains while it is not. Once patience is gone anger builds up
//! until the rabbit turns angry and starts wandering. A full happiness
//! meter rescues the rabbit no matter how angry it got.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Aabb, distance, step_toward};
use crate::consts::{ARRIVE_DISTANCE, CANVAS_HEIGHT, CANVAS_WIDTH, FRAME_MS};
use crate::tuning::Tuning;

/// Inset from the canvas edges for spawn and wander points
pub const RABBIT_INSET: f32 = 50.0;

/// Discrete rabbit mood, ordered from calm to terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    Content,
    Lonely,
    Frustrated,
    Angry,
    /// Rescued; removed from play on the tick it is reached
    Happy,
}

/// Outcome of a rabbit tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RabbitUpdate {
    Unchanged,
    /// Mood advanced along the patience path
    MoodChanged(Mood),
    /// Happiness hit the maximum this tick
    Rescued,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rabbit {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub mood: Mood,
    pub happiness: f32,
    /// Remaining unattended time before anger sets in (ms)
    pub patience_ms: f32,
    pub anger: f32,
    /// Wander destination (angry rabbits only)
    pub wander_target: Option<Vec2>,
    pub wander_ms: f32,
}

impl Rabbit {
    pub fn new(id: u32, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos,
            size: Vec2::splat(tuning.rabbit_size),
            mood: Mood::Content,
            happiness: 0.0,
            patience_ms: tuning.rabbit_patience_ms,
            anger: 0.0,
            wander_target: None,
            wander_ms: 0.0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::centered(self.pos, self.size)
    }

    pub fn is_rescued(&self) -> bool {
        self.mood == Mood::Happy
    }

    /// Happiness as a 0-1 fraction (for the HUD bar)
    pub fn happiness_ratio(&self, tuning: &Tuning) -> f32 {
        (self.happiness / tuning.max_happiness).clamp(0.0, 1.0)
    }

    pub fn update(
        &mut self,
        player_pos: Vec2,
        dt_ms: f32,
        tuning: &Tuning,
        rng: &mut Pcg32,
    ) -> RabbitUpdate {
        if self.is_rescued() || !(dt_ms > 0.0) {
            return RabbitUpdate::Unchanged;
        }
        let frames = dt_ms / FRAME_MS;
        let before = self.mood;

        if distance(self.pos, player_pos) < tuning.interaction_distance {
            self.happiness =
                (self.happiness + tuning.happiness_per_frame * frames).min(tuning.max_happiness);
            if self.happiness >= tuning.max_happiness {
                self.mood = Mood::Happy;
                self.wander_target = None;
                return RabbitUpdate::Rescued;
            }
        } else {
            // Only the part of this tick past the end of patience feeds anger
            let overflow_ms = (dt_ms - self.patience_ms).max(0.0);
            self.patience_ms = (self.patience_ms - dt_ms).max(0.0);
            if overflow_ms > 0.0 && self.mood != Mood::Angry {
                self.anger += tuning.anger_per_frame * overflow_ms / FRAME_MS;
            }
            self.mood = self.mood.max(self.mood_from_meters(tuning));
        }

        if self.mood == Mood::Angry {
            self.wander(dt_ms, frames, tuning, rng);
        }

        if self.mood != before {
            RabbitUpdate::MoodChanged(self.mood)
        } else {
            RabbitUpdate::Unchanged
        }
    }

    fn mood_from_meters(&self, tuning: &Tuning) -> Mood {
        if self.anger >= tuning.anger_threshold {
            Mood::Angry
        } else if self.patience_ms <= 0.0 {
            Mood::Frustrated
        } else if self.patience_ms <= tuning.rabbit_patience_ms / 2.0 {
            Mood::Lonely
        } else {
            Mood::Content
        }
    }

    fn wander(&mut self, dt_ms: f32, frames: f32, tuning: &Tuning, rng: &mut Pcg32) {
        self.wander_ms += dt_ms;
        if self.wander_ms > tuning.wander_interval_ms {
            self.wander_target = Some(Vec2::new(
                rng.random_range(RABBIT_INSET..CANVAS_WIDTH - RABBIT_INSET),
                rng.random_range(RABBIT_INSET..CANVAS_HEIGHT - RABBIT_INSET),
            ));
            self.wander_ms = 0.0;
        }
        if let Some(target) = self.wander_target {
            if distance(self.pos, target) > ARRIVE_DISTANCE {
                self.pos = step_toward(self.pos, target, tuning.rabbit_speed * frames);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    const FAR: Vec2 = Vec2::new(-10_000.0, -10_000.0);

    fn setup() -> (Rabbit, Tuning, Pcg32) {
        let tuning = Tuning::default();
        let rabbit = Rabbit::new(1, Vec2::new(405.0, 300.0), &tuning);
        (rabbit, tuning, Pcg32::seed_from_u64(7))
    }

    #[test]
    fn test_rescued_after_fifty_frames() {
        let (mut r, t, mut rng) = setup();
        let player = Vec2::new(400.0, 300.0);
        for _ in 0..49 {
            assert_ne!(r.update(player, FRAME_MS, &t, &mut rng), RabbitUpdate::Rescued);
        }
        assert_eq!(r.happiness, 98.0);
        assert_eq!(r.update(player, FRAME_MS, &t, &mut rng), RabbitUpdate::Rescued);
        assert!(r.is_rescued());

        // Terminal: nothing more happens
        assert_eq!(r.update(player, FRAME_MS, &t, &mut rng), RabbitUpdate::Unchanged);
    }

    #[test]
    fn test_patience_path() {
        let (mut r, t, mut rng) = setup();
        // 5000 ms unattended: half patience gone
        for _ in 0..312 {
            r.update(FAR, FRAME_MS, &t, &mut rng);
        }
        assert_eq!(r.mood, Mood::Content);
        assert_eq!(
            r.update(FAR, FRAME_MS, &t, &mut rng),
            RabbitUpdate::MoodChanged(Mood::Lonely)
        );

        // Patience runs out at 10000 ms
        r.update(FAR, 5000.0, &t, &mut rng);
        assert_eq!(r.mood, Mood::Frustrated);
        assert!(r.anger > 0.0);

        // 50 anger at 0.5 per frame
        let mut frames = 1;
        while r.mood != Mood::Angry {
            r.update(FAR, FRAME_MS, &t, &mut rng);
            frames += 1;
            assert!(frames <= 110);
        }
        assert_eq!(r.happiness, 0.0);
    }

    #[test]
    fn test_attention_pauses_patience() {
        let (mut r, t, mut rng) = setup();
        r.update(Vec2::new(400.0, 300.0), 100.0, &t, &mut rng);
        assert_eq!(r.patience_ms, t.rabbit_patience_ms);
        assert_eq!(r.happiness, 12.5);
        r.update(FAR, 1000.0, &t, &mut rng);
        assert_eq!(r.patience_ms, t.rabbit_patience_ms - 1000.0);
    }

    #[test]
    fn test_wander_waits_for_interval() {
        let (mut r, t, mut rng) = setup();
        r.patience_ms = 0.0;
        r.anger = t.anger_threshold;
        r.mood = Mood::Angry;
        let start = r.pos;

        r.update(FAR, FRAME_MS, &t, &mut rng);
        assert!(r.wander_target.is_none());
        assert_eq!(r.pos, start);

        r.update(FAR, t.wander_interval_ms, &t, &mut rng);
        assert!(r.wander_target.is_some());
    }

    #[test]
    fn test_angry_rabbit_wanders_and_can_be_rescued() {
        let (mut r, t, mut rng) = setup();
        r.update(FAR, t.rabbit_patience_ms, &t, &mut rng);
        r.update(FAR, FRAME_MS * 200.0, &t, &mut rng);
        assert_eq!(r.mood, Mood::Angry);
        assert!(r.wander_target.is_some());

        let start = r.pos;
        for _ in 0..30 {
            r.update(FAR, FRAME_MS, &t, &mut rng);
        }
        assert_ne!(r.pos, start);
        assert!(r.pos.x >= RABBIT_INSET - 1.0 && r.pos.x <= CANVAS_WIDTH - RABBIT_INSET + 1.0);

        // Still rescuable
        let mut rescued = false;
        for _ in 0..60 {
            if r.update(r.pos, FRAME_MS, &t, &mut rng) == RabbitUpdate::Rescued {
                rescued = true;
                break;
            }
        }
        assert!(rescued);
    }

    #[test]
    fn test_zero_dt_noop() {
        let (mut r, t, mut rng) = setup();
        r.update(Vec2::new(400.0, 300.0), 0.0, &t, &mut rng);
        r.update(FAR, -5.0, &t, &mut rng);
        assert_eq!(r.happiness, 0.0);
        assert_eq!(r.patience_ms, t.rabbit_patience_ms);
    }

    proptest! {
        #[test]
        fn prop_unattended_mood_is_monotonic(
            seed in any::<u64>(),
            dts in prop::collection::vec(1.0f32..400.0, 1..200),
        ) {
            let t = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut r = Rabbit::new(1, Vec2::new(200.0, 200.0), &t);
            let mut last = r.mood;
            for dt in dts {
                let out = r.update(FAR, dt, &t, &mut rng);
                prop_assert_ne!(out, RabbitUpdate::Rescued);
                prop_assert!(r.mood >= last);
                prop_assert!(r.mood != Mood::Happy);
                last = r.mood;
            }
        }
    }
}
