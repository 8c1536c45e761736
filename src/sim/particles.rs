//! Destruction burst particles
//!
//! Spawns a batch of short-lived particles at each destruction event and
//! decays them linearly. Stateless beyond the collection it operates on.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Particle, ParticleColor};
use crate::consts::{PARTICLE_COUNT, PARTICLE_LIFETIME_MS, PARTICLE_MAX_VEL};

/// Spawn one burst of particles at a destruction point
pub fn spawn_burst(particles: &mut Vec<Particle>, rng: &mut Pcg32, center: Vec2) {
    for _ in 0..PARTICLE_COUNT {
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_VEL,
            (rng.random::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_VEL,
        );
        particles.push(Particle {
            pos: center,
            vel,
            lifetime_ms: PARTICLE_LIFETIME_MS,
            color: pick_color(rng),
        });
    }
}

/// Three-way tint choice; the boundary case falls through to the last color
fn pick_color(rng: &mut Pcg32) -> ParticleColor {
    if rng.random::<f32>() < 0.33 {
        ParticleColor::Green
    } else if rng.random::<f32>() < 0.5 {
        ParticleColor::Orange
    } else {
        ParticleColor::Red
    }
}

/// Integrate particle motion and decay, dropping expired particles
pub fn advance(particles: &mut Vec<Particle>, dt_ms: f32) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel * dt_ms;
        particle.lifetime_ms -= dt_ms;
    }
    particles.retain(|p| p.lifetime_ms > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn burst_spawns_full_count_at_point() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut particles = Vec::new();
        let center = Vec2::new(50.0, 60.0);

        spawn_burst(&mut particles, &mut rng, center);

        assert_eq!(particles.len(), PARTICLE_COUNT);
        for p in &particles {
            assert_eq!(p.pos, center);
            assert_eq!(p.lifetime_ms, PARTICLE_LIFETIME_MS);
            assert!(p.vel.x.abs() <= PARTICLE_MAX_VEL);
            assert!(p.vel.y.abs() <= PARTICLE_MAX_VEL);
        }
    }

    #[test]
    fn all_three_colors_occur() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut particles = Vec::new();
        for _ in 0..50 {
            spawn_burst(&mut particles, &mut rng, Vec2::ZERO);
        }
        assert!(particles.iter().any(|p| p.color == ParticleColor::Green));
        assert!(particles.iter().any(|p| p.color == ParticleColor::Orange));
        assert!(particles.iter().any(|p| p.color == ParticleColor::Red));
    }

    #[test]
    fn advance_integrates_and_decays() {
        let mut particles = vec![Particle {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::new(0.1, -0.05),
            lifetime_ms: 100.0,
            color: ParticleColor::Green,
        }];

        advance(&mut particles, 16.0);

        assert_eq!(particles.len(), 1);
        assert!((particles[0].pos.x - 11.6).abs() < 1e-4);
        assert!((particles[0].pos.y - 9.2).abs() < 1e-4);
        assert_eq!(particles[0].lifetime_ms, 84.0);
    }

    #[test]
    fn particle_is_removed_the_tick_it_expires() {
        let mut particles = vec![Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            lifetime_ms: 16.0,
            color: ParticleColor::Red,
        }];

        // Lifetime hits exactly zero: gone, never lingering
        advance(&mut particles, 16.0);
        assert!(particles.is_empty());
    }
}
