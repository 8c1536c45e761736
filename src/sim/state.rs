//! Game state and core simulation types
//!
//! Everything the renderer reads and the tick mutates lives here. The
//! session owns all entity collections and the seeded RNG; there is no
//! module-level mutable state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawner::{self, SpawnTimer};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pre-start, no entities active
    Idle,
    /// Active gameplay
    Running,
    /// Score target reached; the simulation keeps ticking but the run is won
    Victory,
    /// Life pool exhausted; terminal until reset
    GameOver,
}

/// The player's craft - anchored to the bottom edge, moves horizontally only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Craft {
    /// Top-left corner
    pub pos: Vec2,
    /// Horizontal velocity intent (pixels per millisecond, signed)
    pub dx: f32,
}

impl Craft {
    /// Craft centered on the bottom edge of the play field
    pub fn centered(bounds: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                bounds.x / 2.0 - CRAFT_SIZE.x / 2.0,
                bounds.y - CRAFT_SIZE.y,
            ),
            dx: 0.0,
        }
    }

    /// Clamp the horizontal position into [0, bounds.x - craft width]
    pub fn clamp_to(&mut self, bounds: Vec2) {
        self.pos.x = self.pos.x.clamp(0.0, bounds.x - CRAFT_SIZE.x);
    }
}

/// A projectile fired by the craft, travelling straight up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
}

/// A descending enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
}

impl Enemy {
    /// Geometric center, where the destruction burst spawns
    pub fn center(&self) -> Vec2 {
        self.pos + ENEMY_SIZE / 2.0
    }
}

/// Burst particle tint, picked at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    Green,
    Orange,
    Red,
}

/// A short-lived visual particle from a destruction burst
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in milliseconds; removed once it reaches zero
    pub lifetime_ms: f32,
    pub color: ParticleColor,
}

/// A background star - decorative, wraps vertically, never destroyed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
}

/// Owns the mutable entity collections for one session
#[derive(Debug, Clone)]
pub struct EntityStore {
    pub craft: Craft,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub stars: Vec<Star>,
    pub particles: Vec<Particle>,
}

impl EntityStore {
    pub fn new(bounds: Vec2) -> Self {
        Self {
            craft: Craft::centered(bounds),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            stars: Vec::new(),
            particles: Vec::new(),
        }
    }

    pub fn add_projectile(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Drop every entity collection, including the starfield
    pub fn clear(&mut self) {
        self.projectiles.clear();
        self.enemies.clear();
        self.stars.clear();
        self.particles.clear();
    }
}

/// Read-only view of the state a renderer needs for one frame
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub craft: &'a Craft,
    pub projectiles: &'a [Projectile],
    pub enemies: &'a [Enemy],
    pub stars: &'a [Star],
    pub particles: &'a [Particle],
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
}

/// Complete game session: score, lives, phase and all entities
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Play-field dimensions
    pub bounds: Vec2,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Score; +100 per enemy destroyed
    pub score: u64,
    /// Remaining lives; floor at zero
    pub lives: u8,
    pub phase: GamePhase,
    pub store: EntityStore,
    /// Enemy spawn cadence, started on Running-entry, cancelled on exit
    pub spawn_timer: SpawnTimer,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameSession {
    /// Create an idle session with the default play field
    pub fn new(seed: u64) -> Self {
        Self::with_bounds(Vec2::new(BOUNDS_WIDTH, BOUNDS_HEIGHT), seed)
    }

    /// Create an idle session with explicit play-field dimensions
    pub fn with_bounds(bounds: Vec2, seed: u64) -> Self {
        Self {
            bounds,
            seed,
            score: 0,
            lives: START_LIVES,
            phase: GamePhase::Idle,
            store: EntityStore::new(bounds),
            spawn_timer: SpawnTimer::new(SPAWN_INTERVAL_MS),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin the session: Idle -> Running
    ///
    /// No-op outside Idle so a repeated start cannot stack spawn cadences;
    /// terminal phases restart through `reset` instead.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Idle {
            return;
        }
        self.score = 0;
        self.lives = START_LIVES;
        self.seed_stars();
        self.spawn_timer.start();
        self.phase = GamePhase::Running;
        log::info!("session started (seed {})", self.seed);
    }

    /// Fully re-initialize and go straight to Running
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.time_ticks = 0;
        self.store.clear();
        self.store.craft = Craft::centered(self.bounds);
        self.seed_stars();
        self.spawn_timer.start();
        self.phase = GamePhase::Running;
        log::info!("session reset");
    }

    /// Left-move intent; releasing zeroes the shared velocity slot
    pub fn move_left(&mut self, active: bool) {
        self.store.craft.dx = if active { -CRAFT_SPEED } else { 0.0 };
    }

    /// Right-move intent; releasing zeroes the shared velocity slot
    pub fn move_right(&mut self, active: bool) {
        self.store.craft.dx = if active { CRAFT_SPEED } else { 0.0 };
    }

    /// Fire a projectile from the craft's horizontal center
    ///
    /// Accepted only while the simulation is live; an idle or finished
    /// session stays untouched.
    pub fn fire(&mut self) {
        if !matches!(self.phase, GamePhase::Running | GamePhase::Victory) {
            return;
        }
        let craft = &self.store.craft;
        self.store.add_projectile(Projectile {
            pos: Vec2::new(
                craft.pos.x + CRAFT_SIZE.x / 2.0 - PROJECTILE_SIZE.x / 2.0,
                craft.pos.y,
            ),
        });
    }

    /// Materialize one enemy above the top edge (external spawn cadence)
    pub fn spawn_enemy(&mut self) {
        if !matches!(self.phase, GamePhase::Running | GamePhase::Victory) {
            return;
        }
        spawner::spawn_enemy(&mut self.store, &mut self.rng, self.bounds);
    }

    /// Pump the spawn cadence with wall-clock time, firing any due spawns
    ///
    /// Decoupled from the tick rate; a coalesced host callback with a large
    /// dt yields several spawns in one call.
    pub fn advance_spawn_timer(&mut self, wall_dt_ms: f32) {
        let due = self.spawn_timer.advance(wall_dt_ms);
        for _ in 0..due {
            self.spawn_enemy();
        }
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            craft: &self.store.craft,
            projectiles: &self.store.projectiles,
            enemies: &self.store.enemies,
            stars: &self.store.stars,
            particles: &self.store.particles,
            score: self.score,
            lives: self.lives,
            phase: self.phase,
        }
    }

    /// Replace the starfield with a fresh random seeding
    pub(crate) fn seed_stars(&mut self) {
        self.store.stars.clear();
        for _ in 0..STAR_COUNT {
            let star = Star {
                pos: Vec2::new(
                    self.rng.random_range(0.0..self.bounds.x),
                    self.rng.random_range(0.0..self.bounds.y),
                ),
                radius: self.rng.random_range(STAR_MIN_RADIUS..STAR_MAX_RADIUS),
            };
            self.store.stars.push(star);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle_and_empty() {
        let session = GameSession::new(7);
        assert_eq!(session.phase, GamePhase::Idle);
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, START_LIVES);
        assert!(session.store.projectiles.is_empty());
        assert!(session.store.enemies.is_empty());
        assert!(session.store.stars.is_empty());
        assert!(session.store.particles.is_empty());
    }

    #[test]
    fn start_seeds_stars_and_runs() {
        let mut session = GameSession::new(7);
        session.start();
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.store.stars.len(), STAR_COUNT);
        assert!(session.spawn_timer.is_running());
        for star in &session.store.stars {
            assert!(star.pos.x >= 0.0 && star.pos.x < session.bounds.x);
            assert!(star.pos.y >= 0.0 && star.pos.y < session.bounds.y);
            assert!(star.radius >= STAR_MIN_RADIUS && star.radius < STAR_MAX_RADIUS);
        }
    }

    #[test]
    fn start_is_idle_only() {
        let mut session = GameSession::new(7);
        session.start();
        session.score = 300;
        session.start();
        // A second start must not re-initialize a running session
        assert_eq!(session.score, 300);
    }

    #[test]
    fn move_commands_share_one_velocity_slot() {
        let mut session = GameSession::new(7);
        session.start();

        session.move_left(true);
        assert_eq!(session.store.craft.dx, -CRAFT_SPEED);

        // Pressing right overwrites the slot
        session.move_right(true);
        assert_eq!(session.store.craft.dx, CRAFT_SPEED);

        // Releasing either side zeroes it, regardless of press order
        session.move_left(false);
        assert_eq!(session.store.craft.dx, 0.0);
    }

    #[test]
    fn fire_spawns_at_craft_center() {
        let mut session = GameSession::new(7);
        session.start();
        session.fire();

        assert_eq!(session.store.projectiles.len(), 1);
        let p = &session.store.projectiles[0];
        let craft = &session.store.craft;
        assert_eq!(
            p.pos.x,
            craft.pos.x + CRAFT_SIZE.x / 2.0 - PROJECTILE_SIZE.x / 2.0
        );
        assert_eq!(p.pos.y, craft.pos.y);
    }

    #[test]
    fn fire_is_rejected_while_idle() {
        let mut session = GameSession::new(7);
        session.fire();
        assert!(session.store.projectiles.is_empty());
    }

    #[test]
    fn reset_restores_a_fresh_running_session() {
        let mut session = GameSession::new(7);
        session.start();
        session.fire();
        session.spawn_enemy();
        session.score = 900;
        session.lives = 0;
        session.phase = GamePhase::GameOver;

        session.reset();

        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, START_LIVES);
        assert!(session.store.projectiles.is_empty());
        assert!(session.store.enemies.is_empty());
        assert!(session.store.particles.is_empty());
        assert_eq!(session.store.stars.len(), STAR_COUNT);
        assert!(session.spawn_timer.is_running());
    }

    #[test]
    fn snapshot_reflects_session_fields() {
        let mut session = GameSession::new(7);
        session.start();
        session.fire();

        let snap = session.snapshot();
        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.projectiles.len(), 1);
        assert_eq!(snap.stars.len(), STAR_COUNT);
        assert_eq!(snap.lives, START_LIVES);
    }
}
