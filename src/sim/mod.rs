//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit elapsed-time ticks only (no wall-clock reads)
//! - Seeded RNG only
//! - Stable iteration order (store order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{HitOutcome, aabb_overlap, resolve_projectile_hits};
pub use spawner::SpawnTimer;
pub use state::{
    Craft, Enemy, EntityStore, GamePhase, GameSession, Particle, ParticleColor, Projectile,
    Snapshot, Star,
};
pub use tick::tick;
