/// Particle/Effects Engine. Visual only: nothing here feeds back into play.

use rand::Rng;

use crate::constants::{EXPLOSION_PARTICLES, PARTICLE_LIFETIME, PARTICLE_MAX_SPEED};
use crate::entities::Particle;
use crate::palette::EXPLOSION_COLORS;

/// Burst of particles at `(x, y)` with random velocity and palette colour.
pub fn spawn_explosion(particles: &mut Vec<Particle>, x: i32, y: i32, rng: &mut impl Rng) {
    particles.reserve(EXPLOSION_PARTICLES);
    for _ in 0..EXPLOSION_PARTICLES {
        let color = EXPLOSION_COLORS[rng.gen_range(0..EXPLOSION_COLORS.len())];
        particles.push(Particle {
            x: x as f32,
            y: y as f32,
            vx: rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            vy: rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            color,
            life: PARTICLE_LIFETIME,
        });
    }
}

/// Age every particle by one tick and drop the expired ones.
pub fn advance_all(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.x += p.vx;
        p.y += p.vy;
        p.life -= 1;
    }
    particles.retain(|p| p.life > 0);
}
