//! Enemy spawning and its wall-clock cadence
//!
//! Enemies materialize above the top edge on a fixed interval that is
//! independent of the simulation tick rate. The cadence is a value with an
//! explicit start/cancel lifecycle so a reset can never leak spawns into a
//! fresh session.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Enemy, EntityStore};
use crate::consts::ENEMY_SIZE;

/// Materialize one enemy at a uniform random horizontal position
pub fn spawn_enemy(store: &mut EntityStore, rng: &mut Pcg32, bounds: Vec2) {
    let x = rng.random_range(0.0..bounds.x - ENEMY_SIZE.x);
    store.add_enemy(Enemy {
        pos: Vec2::new(x, -ENEMY_SIZE.y),
    });
    log::debug!("enemy spawned at x={x:.1}");
}

/// Fixed-interval spawn cadence with an explicit start/cancel lifecycle
///
/// Wall-clock driven, uncoupled from the tick rate. `advance` reports how
/// many firings are due, so a coalesced host callback covering several
/// intervals loses none of them.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ms: f32,
    elapsed_ms: f32,
    running: bool,
}

impl SpawnTimer {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
            running: false,
        }
    }

    /// (Re)start the cadence from zero
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.running = true;
    }

    /// Stop and clear accumulated time; nothing fires until the next start
    pub fn cancel(&mut self) {
        self.elapsed_ms = 0.0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Account wall-clock time, returning the number of due firings
    pub fn advance(&mut self, wall_dt_ms: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed_ms += wall_dt_ms;
        let mut due = 0;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            due += 1;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn enemy_spawns_above_the_top_edge_within_bounds() {
        let bounds = Vec2::new(800.0, 600.0);
        let mut store = EntityStore::new(bounds);
        let mut rng = Pcg32::seed_from_u64(3);

        for _ in 0..200 {
            spawn_enemy(&mut store, &mut rng, bounds);
        }

        assert_eq!(store.enemies.len(), 200);
        for enemy in &store.enemies {
            assert!(enemy.pos.x >= 0.0);
            assert!(enemy.pos.x <= bounds.x - ENEMY_SIZE.x);
            assert_eq!(enemy.pos.y, -ENEMY_SIZE.y);
        }
    }

    #[test]
    fn timer_fires_only_after_its_interval() {
        let mut timer = SpawnTimer::new(2000.0);
        timer.start();

        assert_eq!(timer.advance(1999.0), 0);
        assert_eq!(timer.advance(1.0), 1);
        assert_eq!(timer.advance(100.0), 0);
    }

    #[test]
    fn coalesced_callback_yields_every_due_firing() {
        let mut timer = SpawnTimer::new(2000.0);
        timer.start();

        // One large dt covering three intervals and a remainder
        assert_eq!(timer.advance(6500.0), 3);
        assert_eq!(timer.advance(1500.0), 1);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = SpawnTimer::new(2000.0);
        timer.start();
        timer.advance(1500.0);
        timer.cancel();

        assert!(!timer.is_running());
        assert_eq!(timer.advance(10_000.0), 0);

        // Restart clears the old accumulation
        timer.start();
        assert_eq!(timer.advance(1999.0), 0);
        assert_eq!(timer.advance(1.0), 1);
    }
}
