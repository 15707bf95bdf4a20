//! Simulation tick
//!
//! Core game loop that advances every entity by one time slice, in a fixed
//! order, then settles collisions and level progress. A tick runs to
//! completion before anyone can look at the state again.

use glam::Vec2;

use super::geometry::distance;
use super::particle::{self, ParticleKind, emit_burst};
use super::progression::LevelAdvance;
use super::rabbit::RabbitUpdate;
use super::state::{GameEvent, GamePhase, GameState, Outcome};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Newly commanded destination in simulation space
    pub target: Option<Vec2>,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - the player walks itself to the nearest rabbit
    pub idle_mode: bool,
}

/// Advance the game state by `dt_ms` of simulated time
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                log::info!("Paused");
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                log::info!("Resumed");
            }
            GamePhase::GameOver(_) => {}
        }
    }

    // Don't tick if paused or game over
    if state.phase != GamePhase::Playing {
        return;
    }

    // Zero, negative and NaN slices are no-op ticks
    if !(dt_ms > 0.0 && dt_ms.is_finite()) {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;
    state.time_ms += dt_ms as f64;

    let target = match input.target {
        Some(t) => Some(t),
        None if input.idle_mode => autopilot_target(state),
        None => None,
    };

    state.player.update(target, dt_ms);
    update_rabbits(state, dt_ms);
    update_enemies(state, dt_ms);

    let time_ms = state.time_ms;
    for power_up in &mut state.power_ups {
        power_up.update(time_ms);
    }

    particle::update_all(&mut state.particles, dt_ms);

    resolve_enemy_collisions(state);
    resolve_power_up_collisions(state);
    check_level_clear(state);
}

fn update_rabbits(state: &mut GameState, dt_ms: f32) {
    let GameState {
        tuning,
        rabbits,
        rng,
        player,
        progression,
        particles,
        events,
        ..
    } = state;

    for rabbit in rabbits.iter_mut() {
        match rabbit.update(player.pos, dt_ms, tuning, rng) {
            RabbitUpdate::Rescued => {
                progression.record_rescue(tuning.rescue_score);
                emit_burst(
                    particles,
                    rng,
                    rabbit.pos,
                    ParticleKind::Heart,
                    tuning.rescue_particles,
                    tuning.particle_life_ms,
                    tuning.particle_rise,
                );
                events.push(GameEvent::RabbitRescued { id: rabbit.id });
                log::debug!(
                    "Rabbit {} rescued, {} left",
                    rabbit.id,
                    progression.rabbits_left()
                );
            }
            RabbitUpdate::MoodChanged(mood) => {
                events.push(GameEvent::RabbitMoodChanged { id: rabbit.id, mood });
            }
            RabbitUpdate::Unchanged => {}
        }
    }

    // Rescued rabbits leave on the same tick
    rabbits.retain(|r| !r.is_rescued());
}

fn update_enemies(state: &mut GameState, dt_ms: f32) {
    let player_pos = state.player.pos;
    for enemy in &mut state.enemies {
        enemy.update(player_pos, dt_ms, &state.tuning, &mut state.rng);
    }
}

/// Check every enemy against the player. Later enemies test against the
/// respawned position if an earlier one landed a hit.
pub fn resolve_enemy_collisions(state: &mut GameState) {
    for i in 0..state.enemies.len() {
        if state.phase != GamePhase::Playing {
            break;
        }
        if state.player.aabb().overlaps(&state.enemies[i].aabb()) {
            player_hit(state);
        }
    }
}

/// Enemy contact: lose a life and respawn at the center, unless an
/// immunity effect is active
pub fn player_hit(state: &mut GameState) {
    if state.player.effect.grants_hit_immunity() {
        state.events.push(GameEvent::HitBlocked);
        return;
    }

    let out_of_lives = state.progression.lose_life();
    state.events.push(GameEvent::PlayerHit {
        lives_left: state.progression.lives(),
    });

    if out_of_lives {
        end_run(state, Outcome::Lost);
    } else {
        log::debug!("Player hit, {} lives left", state.progression.lives());
        state.player.respawn();
    }
}

/// Collect every uncollected item the player overlaps. Safe to call again
/// in the same tick: spent items are skipped.
pub fn resolve_power_up_collisions(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let player_box = state.player.aabb();
    let GameState {
        tuning,
        power_ups,
        player,
        progression,
        particles,
        events,
        rng,
        ..
    } = state;

    for power_up in power_ups.iter_mut() {
        if power_up.collected || !player_box.overlaps(&power_up.aabb()) {
            continue;
        }
        if power_up.collect(player, tuning) {
            progression.award(tuning.power_up_score);
            emit_burst(
                particles,
                rng,
                power_up.pos,
                ParticleKind::Sparkle,
                tuning.collect_particles,
                tuning.particle_life_ms,
                tuning.particle_rise,
            );
            events.push(GameEvent::PowerUpCollected {
                id: power_up.id,
                kind: power_up.kind,
            });
            log::debug!("Collected {:?}", power_up.kind);
        }
    }
}

/// Advance to the next level (or win) once every rabbit is rescued
pub fn check_level_clear(state: &mut GameState) {
    if state.phase != GamePhase::Playing || !state.progression.is_level_clear() {
        return;
    }

    let cleared = state.progression.level();
    let bonus = state.tuning.level_bonus;
    let advance = state
        .progression
        .complete_level(bonus, state.tuning.levels.len());
    state.events.push(GameEvent::LevelCleared {
        level: cleared,
        bonus,
    });
    log::info!(
        "Level {} cleared, score {}",
        cleared,
        state.progression.score()
    );

    match advance {
        LevelAdvance::Next(_) => state.populate_level(),
        LevelAdvance::CampaignComplete => end_run(state, Outcome::Won),
    }
}

fn end_run(state: &mut GameState, outcome: Outcome) {
    state.phase = GamePhase::GameOver(outcome);
    state.events.push(GameEvent::GameOver(outcome));
    log::info!(
        "Game over ({:?}) at level {} with score {}",
        outcome,
        state.progression.level(),
        state.progression.score()
    );
}

/// Demo steering: grab an item when something is chasing us, otherwise
/// walk to the nearest rabbit
fn autopilot_target(state: &GameState) -> Option<Vec2> {
    let from = state.player.pos;

    if state.enemies.iter().any(|e| e.chasing) {
        let items = state.power_ups.iter().filter(|p| !p.collected).map(|p| p.pos);
        if let Some(item) = nearest_to(from, items) {
            return Some(item);
        }
    }

    nearest_to(from, state.rabbits.iter().map(|r| r.pos))
}

fn nearest_to(from: Vec2, points: impl Iterator<Item = Vec2>) -> Option<Vec2> {
    points.min_by(|a, b| {
        distance(from, *a)
            .partial_cmp(&distance(from, *b))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}
