//! Nova Strike - a vertical space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//!
//! Rendering, input capture and frame scheduling are external: the library
//! exposes commands (`move_left`, `move_right`, `fire`, `start`, `reset`),
//! a per-tick entry point and a read-only snapshot, and never touches a
//! display surface itself. The `nova-strike` binary is a thin headless
//! driver around the same surface.

pub mod sim;

pub use sim::{GamePhase, GameSession, Snapshot, tick};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const SIM_DT_MS: f32 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play-field dimensions (pixels)
    pub const BOUNDS_WIDTH: f32 = 800.0;
    pub const BOUNDS_HEIGHT: f32 = 600.0;

    /// Craft defaults - anchored to the bottom edge, moves horizontally only
    pub const CRAFT_SIZE: Vec2 = Vec2::new(30.0, 30.0);
    /// Horizontal craft speed (pixels per millisecond)
    pub const CRAFT_SPEED: f32 = 0.6;

    /// Projectile defaults - travels straight up
    pub const PROJECTILE_SIZE: Vec2 = Vec2::new(5.0, 15.0);
    pub const PROJECTILE_SPEED: f32 = 0.48;

    /// Enemy defaults - descends from above the top edge
    pub const ENEMY_SIZE: Vec2 = Vec2::new(40.0, 40.0);
    pub const ENEMY_SPEED: f32 = 0.06;

    /// Background starfield
    pub const STAR_COUNT: usize = 100;
    pub const STAR_SPEED: f32 = 0.06;
    pub const STAR_MIN_RADIUS: f32 = 1.0;
    pub const STAR_MAX_RADIUS: f32 = 3.0;

    /// Destruction burst particles
    pub const PARTICLE_COUNT: usize = 20;
    pub const PARTICLE_LIFETIME_MS: f32 = 500.0;
    /// Per-axis particle velocity magnitude cap (pixels per millisecond)
    pub const PARTICLE_MAX_VEL: f32 = 0.12;

    /// Scoring and session rules
    pub const SCORE_PER_KILL: u64 = 100;
    pub const VICTORY_SCORE: u64 = 400;
    pub const START_LIVES: u8 = 3;

    /// Wall-clock cadence between enemy spawns
    pub const SPAWN_INTERVAL_MS: f32 = 2000.0;
}
