//! Simulation tick
//!
//! Advances one session by an explicit elapsed time. Sub-system order is
//! fixed: craft, projectiles, collisions, enemies, stars, particles, then
//! the victory check. Reordering changes same-tick outcomes, so the order
//! is part of the simulation contract.

use glam::Vec2;
use rand::Rng;

use super::collision::resolve_projectile_hits;
use super::particles;
use super::state::{GamePhase, GameSession};
use crate::consts::*;

/// Advance the session by `dt_ms` milliseconds of simulation time
///
/// Idle and GameOver sessions are inert; Victory keeps ticking so the
/// field stays alive behind the banner.
pub fn tick(session: &mut GameSession, dt_ms: f32) {
    match session.phase {
        GamePhase::Idle | GamePhase::GameOver => return,
        GamePhase::Running | GamePhase::Victory => {}
    }

    session.time_ticks += 1;

    // Craft: integrate the held-move velocity, then clamp to the field
    let bounds = session.bounds;
    session.store.craft.pos.x += session.store.craft.dx * dt_ms;
    session.store.craft.clamp_to(bounds);

    // Projectiles: straight up, culled once the nose crosses the top edge
    for projectile in session.store.projectiles.iter_mut() {
        projectile.pos.y -= PROJECTILE_SPEED * dt_ms;
    }
    session.store.projectiles.retain(|p| p.pos.y >= 0.0);

    // Collisions before enemy movement: a projectile overlapping this tick
    // kills before the enemy can advance into a breach
    let outcome =
        resolve_projectile_hits(&mut session.store.projectiles, &mut session.store.enemies);
    if outcome.kills() > 0 {
        session.score += SCORE_PER_KILL * outcome.kills();
        log::debug!(
            "tick {}: {} kill(s), score {}",
            session.time_ticks,
            outcome.kills(),
            session.score
        );
    }
    for center in &outcome.bursts {
        particles::spawn_burst(&mut session.store.particles, &mut session.rng, *center);
    }

    // Enemies: descend, then breach-check against the bottom edge.
    // Two-phase like collision resolution: mark, count, then compact.
    for enemy in session.store.enemies.iter_mut() {
        enemy.pos.y += ENEMY_SPEED * dt_ms;
    }
    let breach_line = bounds.y - ENEMY_SIZE.y;
    let mut breaches: u8 = 0;
    session.store.enemies.retain(|enemy| {
        if enemy.pos.y > breach_line {
            breaches = breaches.saturating_add(1);
            false
        } else {
            true
        }
    });
    for _ in 0..breaches {
        session.lives = session.lives.saturating_sub(1);
        log::debug!(
            "tick {}: enemy breached, {} live(s) left",
            session.time_ticks,
            session.lives
        );
    }
    if breaches > 0 && session.lives == 0 && session.phase == GamePhase::Running {
        session.phase = GamePhase::GameOver;
        session.spawn_timer.cancel();
        log::info!(
            "game over at tick {} with score {}",
            session.time_ticks,
            session.score
        );
    }

    // Stars: drift up and wrap to the bottom at a fresh horizontal position
    let mut wrapped: Vec<usize> = Vec::new();
    for (i, star) in session.store.stars.iter_mut().enumerate() {
        star.pos.y -= STAR_SPEED * dt_ms;
        if star.pos.y < 0.0 {
            wrapped.push(i);
        }
    }
    for i in wrapped {
        let x = session.rng.random_range(0.0..bounds.x);
        let star = &mut session.store.stars[i];
        star.pos = Vec2::new(x, bounds.y);
    }

    particles::advance(&mut session.store.particles, dt_ms);

    // Victory is checked last so the score from this tick's kills counts.
    // One-way: a won run stays won even if enemies later breach.
    if session.phase == GamePhase::Running && session.score >= VICTORY_SCORE {
        session.phase = GamePhase::Victory;
        log::info!(
            "victory at tick {} with score {}",
            session.time_ticks,
            session.score
        );
    }
}
