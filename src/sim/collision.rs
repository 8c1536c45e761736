//! Collision detection and resolution
//!
//! Axis-aligned rectangle overlap between projectiles and enemies. The
//! resolution pass is two-phase: scan first, compact afterwards, so removal
//! never skips an element mid-iteration.

use glam::Vec2;

use super::state::{Enemy, Projectile};
use crate::consts::{ENEMY_SIZE, PROJECTILE_SIZE};

/// Destruction events from one resolution pass
#[derive(Debug, Default)]
pub struct HitOutcome {
    /// Centers of destroyed enemies; one particle burst is owed per entry
    pub bursts: Vec<Vec2>,
}

impl HitOutcome {
    /// Number of enemies destroyed in the pass
    pub fn kills(&self) -> u64 {
        self.bursts.len() as u64
    }
}

/// Strict axis-aligned rectangle intersection
///
/// Edge-touching rectangles do not overlap.
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Resolve projectile/enemy overlap for one tick
///
/// Projectiles are scanned in store order; each takes the first
/// not-yet-consumed enemy (also store order) it overlaps. One kill per
/// projectile per pass, and a consumed enemy cannot be hit twice. The
/// first-match tie-break is deliberate: it keeps resolution deterministic
/// under identical store contents.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Projectile>,
    enemies: &mut Vec<Enemy>,
) -> HitOutcome {
    let mut spent = vec![false; projectiles.len()];
    let mut destroyed = vec![false; enemies.len()];
    let mut outcome = HitOutcome::default();

    for (pi, projectile) in projectiles.iter().enumerate() {
        for (ei, enemy) in enemies.iter().enumerate() {
            if destroyed[ei] {
                continue;
            }
            if aabb_overlap(projectile.pos, PROJECTILE_SIZE, enemy.pos, ENEMY_SIZE) {
                spent[pi] = true;
                destroyed[ei] = true;
                outcome.bursts.push(enemy.center());
                break;
            }
        }
    }

    let mut idx = 0;
    projectiles.retain(|_| {
        let keep = !spent[idx];
        idx += 1;
        keep
    });
    let mut idx = 0;
    enemies.retain(|_| {
        let keep = !destroyed[idx];
        idx += 1;
        keep
    });

    outcome
}
