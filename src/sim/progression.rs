//! Score, lives and level bookkeeping
//!
//! The only place these numbers change. Entity code reports what happened
//! and the tick controller turns it into calls here.

use serde::{Deserialize, Serialize};

/// What clearing a level led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAdvance {
    /// Another level from the table follows
    Next(u32),
    /// The last table entry was cleared
    CampaignComplete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    score: u64,
    lives: u8,
    /// Current level, 1-based
    level: u32,
    rabbits_left: u32,
}

impl Progression {
    pub fn new(starting_lives: u8) -> Self {
        Self {
            score: 0,
            lives: starting_lives,
            level: 1,
            rabbits_left: 0,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn rabbits_left(&self) -> u32 {
        self.rabbits_left
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }

    pub fn is_level_clear(&self) -> bool {
        self.rabbits_left == 0
    }

    pub fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Arm the rescue counter for a freshly populated level
    pub fn begin_level(&mut self, rabbit_quota: u32) {
        self.rabbits_left = rabbit_quota;
    }

    /// One rabbit rescued: award points, count it off
    pub fn record_rescue(&mut self, points: u64) {
        self.award(points);
        self.rabbits_left = self.rabbits_left.saturating_sub(1);
    }

    /// Take one life. Returns true when that was the last one.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    /// Move past a cleared level: bump the counter and pay the bonus
    pub fn complete_level(&mut self, bonus: u64, level_count: usize) -> LevelAdvance {
        self.level += 1;
        self.award(bonus);
        if self.level as usize > level_count {
            LevelAdvance::CampaignComplete
        } else {
            LevelAdvance::Next(self.level)
        }
    }
}
