use glam::Vec2;

/// A single falling sprite with motion and appearance state.
///
/// Created fully initialized by a factory, moved and expired by the
/// particle source, and mutated per frame by the factory's draw step.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Screen-space position.
    pub pos: Vec2,
    /// Screen-space velocity in pixels per second.
    pub vel: Vec2,
    /// Which variant bitmap this particle currently shows.
    pub sprite_index: usize,
    /// Continuous phase accumulator driving frame cycling and wander flips.
    /// Starts at `sprite_index` so cycling continues from the spawn frame.
    pub phase: f32,
    /// Render scale as a fraction of the sprite's native size.
    pub scale: f32,
    /// Remaining time to live in milliseconds.
    pub lifespan_ms: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, sprite_index: usize, scale: f32, lifespan_ms: f32) -> Self {
        Particle {
            pos,
            vel,
            sprite_index,
            phase: sprite_index as f32,
            scale,
            lifespan_ms,
        }
    }

    /// Advance motion and lifespan by `dt` seconds. Returns false when
    /// expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.lifespan_ms -= dt * 1000.0;
        if self.lifespan_ms <= 0.0 {
            return false;
        }
        self.pos += self.vel * dt;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_expires() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(0.0, 10.0), 0, 1.0, 100.0);
        let alive = p.tick(0.2);
        assert!(!alive, "particle should expire after 200ms of a 100ms life");
    }

    #[test]
    fn particle_moves_by_velocity() {
        let mut p = Particle::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, -60.0), 0, 1.0, 5000.0);
        let alive = p.tick(0.5);
        assert!(alive);
        assert_eq!(p.pos, Vec2::new(25.0, -10.0));
    }

    #[test]
    fn phase_starts_at_sprite_index() {
        let p = Particle::new(Vec2::ZERO, Vec2::ZERO, 3, 0.5, 1000.0);
        assert_eq!(p.phase, 3.0);
        assert_eq!(p.sprite_index, 3);
    }
}
