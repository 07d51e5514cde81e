use crate::core::anchor::Anchor;
use crate::render::BlitTarget;

use super::factory::ScaledSpriteFactory;
use super::particle::Particle;

/// Frame-driven scheduler for one factory's particles.
///
/// Owns the live particle collection: spawns at a particles-per-second
/// rate, integrates motion, counts lifespans down, and removes expired
/// particles. Draw order is insertion order.
pub struct ParticleSource {
    anchor: Anchor,
    particles: Vec<Particle>,
    factory: ScaledSpriteFactory,
    particles_per_second: f32,
    /// Fractional spawn carry between frames.
    accumulator: f32,
    enabled: bool,
}

impl ParticleSource {
    pub fn new(anchor: Anchor, particles_per_second: f32, factory: ScaledSpriteFactory) -> Self {
        Self {
            anchor,
            particles: Vec::new(),
            factory,
            particles_per_second,
            accumulator: 0.0,
            enabled: true,
        }
    }

    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    pub fn factory(&self) -> &ScaledSpriteFactory {
        &self.factory
    }

    pub fn particles_per_second(&self) -> f32 {
        self.particles_per_second
    }

    pub fn set_rate(&mut self, particles_per_second: f32) {
        self.particles_per_second = particles_per_second;
    }

    /// Gate spawning. Live particles keep moving and expiring either way.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance the source by `dt` seconds: spawn, move, expire.
    pub fn tick(&mut self, dt: f32) {
        if self.enabled {
            self.accumulator += self.particles_per_second * dt;
            let count = self.accumulator as usize;
            self.accumulator -= count as f32;
            for _ in 0..count {
                let p = self.factory.create_particle(&self.anchor);
                self.particles.push(p);
            }
        }
        self.particles.retain_mut(|p| p.tick(dt));
    }

    /// Draw every live particle in insertion order. The factory's draw
    /// step also advances per-particle appearance, so call once per frame.
    pub fn draw(&mut self, target: &mut impl BlitTarget) {
        let Self {
            particles, factory, ..
        } = self;
        for p in particles.iter_mut() {
            let x = p.pos.x as i32;
            let y = p.pos.y as i32;
            factory.draw_particle(p, x, y, target);
        }
    }
}
