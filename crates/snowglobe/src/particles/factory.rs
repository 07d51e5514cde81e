//! The directional particle factory: spawns scaled, direction-randomized
//! sprites and evolves their appearance every frame.

use glam::Vec2;

use crate::assets::sprite::Sprite;
use crate::core::anchor::Anchor;
use crate::core::error::EffectError;
use crate::core::rng::Rng;
use crate::render::{BlitOp, BlitTarget};

use super::direction::SpawnDirection;
use super::particle::Particle;

/// How a factory animates particles after spawn.
///
/// `Cycle` and `Wander` both drive the particle's phase accumulator, so
/// they form one tagged mode rather than two independently settable rates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SpriteAnimation {
    /// Keep the spawn-time variant for the particle's whole life.
    #[default]
    Static,
    /// Advance the shown variant by `rate` per frame, wrapping over the
    /// set like a flipbook.
    Cycle { rate: f32 },
    /// Grow a flip chance by `rate` per frame; on a hit, reflect travel
    /// across the dominant axis for an organic side-to-side wander.
    Wander { rate: f32 },
}

impl SpriteAnimation {
    fn rate(self) -> f32 {
        match self {
            SpriteAnimation::Static => 0.0,
            SpriteAnimation::Cycle { rate } | SpriteAnimation::Wander { rate } => rate,
        }
    }
}

/// Where a blit is anchored relative to the particle position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpriteOrigin {
    /// Position names the sprite's top-left corner.
    #[default]
    TopLeft,
    /// Position names the sprite's center; the blit is offset by half the
    /// scaled size.
    Centered,
}

/// Tunable configuration for a [`ScaledSpriteFactory`], validated before a
/// factory is built.
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryConfig {
    /// Particle speed in pixels per second.
    pub speed: f32,
    /// Compass direction this factory emits along.
    pub direction: SpawnDirection,
    /// Inclusive lower bound of the initial scale draw, in percent.
    pub min_scale_percent: u32,
    /// Inclusive upper bound of the initial scale draw, in percent.
    pub max_scale_percent: u32,
    /// Per-frame appearance animation.
    pub animation: SpriteAnimation,
    /// Per-frame scale increment; zero disables growth.
    pub growth_rate: f32,
    /// Blit anchoring.
    pub origin: SpriteOrigin,
    /// Screen extent used for lifespan derivation and full-screen anchors.
    pub screen_width: f32,
    pub screen_height: f32,
}

impl FactoryConfig {
    pub const DEFAULT_MIN_SCALE_PERCENT: u32 = 30;
    pub const DEFAULT_MAX_SCALE_PERCENT: u32 = 180;
    pub const DEFAULT_SCREEN_WIDTH: f32 = 160.0;
    pub const DEFAULT_SCREEN_HEIGHT: f32 = 120.0;

    pub fn new(speed: f32, direction: SpawnDirection) -> Self {
        Self {
            speed,
            direction,
            min_scale_percent: Self::DEFAULT_MIN_SCALE_PERCENT,
            max_scale_percent: Self::DEFAULT_MAX_SCALE_PERCENT,
            animation: SpriteAnimation::Static,
            growth_rate: 0.0,
            origin: SpriteOrigin::TopLeft,
            screen_width: Self::DEFAULT_SCREEN_WIDTH,
            screen_height: Self::DEFAULT_SCREEN_HEIGHT,
        }
    }

    // -- Builder pattern --

    pub fn with_scale_range(mut self, min_percent: u32, max_percent: u32) -> Self {
        self.min_scale_percent = min_percent;
        self.max_scale_percent = max_percent;
        self
    }

    pub fn with_animation(mut self, animation: SpriteAnimation) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_growth_rate(mut self, rate: f32) -> Self {
        self.growth_rate = rate;
        self
    }

    pub fn with_origin(mut self, origin: SpriteOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_screen(mut self, width: f32, height: f32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Particle time-to-live: long enough to cross the visible area, with
    /// headroom (1.2x along one axis for edge emitters, 1.5x for the
    /// slower diagonal crossings).
    pub fn lifespan_ms(&self) -> f32 {
        match self.direction {
            SpawnDirection::Top | SpawnDirection::Bottom => {
                (self.screen_height / self.speed) * 1000.0 * 1.2
            }
            SpawnDirection::Left | SpawnDirection::Right => {
                (self.screen_width / self.speed) * 1000.0 * 1.2
            }
            SpawnDirection::TopLeft
            | SpawnDirection::TopRight
            | SpawnDirection::BottomLeft
            | SpawnDirection::BottomRight => (self.screen_width / self.speed) * 1000.0 * 1.5,
        }
    }

    /// Reject configurations that would produce NaN or negative-size draws.
    pub fn validate(&self) -> Result<(), EffectError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(EffectError::InvalidSpeed(self.speed));
        }
        if self.min_scale_percent > self.max_scale_percent {
            return Err(EffectError::ScaleBoundsOutOfOrder {
                min: self.min_scale_percent,
                max: self.max_scale_percent,
            });
        }
        if !self.growth_rate.is_finite() || self.growth_rate < 0.0 {
            return Err(EffectError::InvalidRate {
                name: "growth rate",
                value: self.growth_rate,
            });
        }
        let rate = self.animation.rate();
        if !rate.is_finite() || rate < 0.0 {
            return Err(EffectError::InvalidRate {
                name: "animation rate",
                value: rate,
            });
        }
        if !(self.screen_width > 0.0 && self.screen_height > 0.0)
            || !self.screen_width.is_finite()
            || !self.screen_height.is_finite()
        {
            return Err(EffectError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        Ok(())
    }
}

/// Creates particles for one effect and mutates + draws them each frame.
///
/// Owns its variant set and its RNG; never destroys particles (expiry
/// belongs to the [`super::source::ParticleSource`]).
#[derive(Debug, Clone)]
pub struct ScaledSpriteFactory {
    config: FactoryConfig,
    sources: Vec<Sprite>,
    rng: Rng,
    lifespan_ms: f32,
}

impl ScaledSpriteFactory {
    /// Build a factory with its own generator seeded from `seed`.
    pub fn new(
        config: FactoryConfig,
        sources: Vec<Sprite>,
        seed: u64,
    ) -> Result<Self, EffectError> {
        Self::with_rng(config, sources, Rng::new(seed))
    }

    /// Build a factory around an injected generator (deterministic tests,
    /// host-controlled seeding).
    pub fn with_rng(
        config: FactoryConfig,
        sources: Vec<Sprite>,
        rng: Rng,
    ) -> Result<Self, EffectError> {
        config.validate()?;
        if sources.is_empty() {
            return Err(EffectError::EmptyVariantSet);
        }
        let sources: Vec<Sprite> = sources
            .into_iter()
            .enumerate()
            .map(|(i, s)| s.with_id(i as u32))
            .collect();
        let lifespan_ms = config.lifespan_ms();
        Ok(Self {
            config,
            sources,
            rng,
            lifespan_ms,
        })
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    pub fn variant_count(&self) -> usize {
        self.sources.len()
    }

    pub fn lifespan_ms(&self) -> f32 {
        self.lifespan_ms
    }

    /// Replace the generator state. Used when a stored factory template is
    /// started as a fresh effect run.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = Rng::new(seed);
    }

    /// Re-tune a built factory. The new configuration goes through the same
    /// validation as construction; the lifespan is re-derived, the variant
    /// set and generator are kept.
    pub fn set_config(&mut self, config: FactoryConfig) -> Result<(), EffectError> {
        config.validate()?;
        self.lifespan_ms = config.lifespan_ms();
        self.config = config;
        Ok(())
    }

    /// Create a fully initialized particle spawning around `anchor`.
    pub fn create_particle(&mut self, anchor: &Anchor) -> Particle {
        let index = self.rng.range(0, self.sources.len() as i32 - 1) as usize;
        let scale = self
            .rng
            .range(
                self.config.min_scale_percent as i32,
                self.config.max_scale_percent as i32,
            ) as f32
            / 100.0;
        let vel = self.spawn_velocity();
        let mut p = Particle::new(Vec2::ZERO, vel, index, scale, self.lifespan_ms);
        self.position_particle(anchor, &mut p);
        p
    }

    /// Random initial velocity inside the direction's arc. Screen space is
    /// y-down, so arc center 0 (Top) points straight down.
    fn spawn_velocity(&mut self) -> Vec2 {
        let center = self.config.direction.arc_center_degrees() as i32;
        let spread = self.config.direction.arc_spread_degrees() as i32;
        let min_angle = (center - spread / 2).rem_euclid(360);
        let angle_deg = (min_angle + self.rng.range(0, spread)).rem_euclid(360);
        let angle = (angle_deg as f32).to_radians();
        Vec2::new(angle.sin(), angle.cos()) * self.config.speed
    }

    /// Place a particle just outside the anchor so it enters the visible
    /// region along the factory's direction.
    ///
    /// Edge directions spawn flush against the matching side, offset
    /// outward by the variant's native size, spread evenly along it.
    /// Corner directions spawn off the matching corner, offset by the
    /// variant's *scaled* size so the spray is denser near the anchor.
    pub fn position_particle(&mut self, anchor: &Anchor, p: &mut Particle) {
        let (img_w, img_h) = {
            let img = &self.sources[p.sprite_index];
            (img.width() as f32, img.height() as f32)
        };
        match self.config.direction {
            SpawnDirection::Top => {
                p.pos.y = anchor.top() - img_h;
                p.pos.x = self.rng.range(
                    (anchor.left() - img_w) as i32,
                    (anchor.right() + img_w) as i32,
                ) as f32;
            }
            SpawnDirection::Bottom => {
                p.pos.y = anchor.bottom() + img_h;
                p.pos.x = self.rng.range(
                    (anchor.left() - img_w) as i32,
                    (anchor.right() + img_w) as i32,
                ) as f32;
            }
            SpawnDirection::Left => {
                p.pos.x = anchor.left() - img_w;
                p.pos.y = self.rng.range(
                    (anchor.top() - img_h) as i32,
                    (anchor.bottom() + img_h) as i32,
                ) as f32;
            }
            SpawnDirection::Right => {
                p.pos.x = anchor.right() + img_w;
                p.pos.y = self.rng.range(
                    (anchor.top() - img_h) as i32,
                    (anchor.bottom() + img_h) as i32,
                ) as f32;
            }
            SpawnDirection::TopLeft => {
                p.pos.x = anchor.left() - img_w * p.scale;
                p.pos.y = anchor.top() - img_h * p.scale;
            }
            SpawnDirection::TopRight => {
                p.pos.x = anchor.right() + img_w * p.scale;
                p.pos.y = anchor.top() - img_h * p.scale;
            }
            SpawnDirection::BottomLeft => {
                p.pos.x = anchor.left() - img_w * p.scale;
                p.pos.y = anchor.bottom() + img_h * p.scale;
            }
            SpawnDirection::BottomRight => {
                p.pos.x = anchor.right() + img_w * p.scale;
                p.pos.y = anchor.bottom() + img_h * p.scale;
            }
        }
    }

    /// Per-frame draw step: advance the particle's appearance, then issue
    /// exactly one blit at the position the scheduler interpolated.
    pub fn draw_particle(
        &mut self,
        p: &mut Particle,
        x: i32,
        y: i32,
        target: &mut impl BlitTarget,
    ) {
        match self.config.animation {
            SpriteAnimation::Static => {}
            SpriteAnimation::Cycle { rate } => {
                p.phase = (p.phase + rate) % (self.sources.len() as f32);
                p.sprite_index = p.phase as usize;
            }
            SpriteAnimation::Wander { rate } => {
                p.phase += rate;
                // Chance climbs with the accumulated fraction and is
                // guaranteed to hit 100% before the fraction can wrap into
                // the sprite index.
                let chance = (p.phase.fract() * 100.0 + rate * 100.0) as u32;
                if self.rng.percent_chance(chance) {
                    p.phase = p.phase.floor();
                    if self.config.direction.is_horizontal() {
                        p.vel.y = -p.vel.y;
                    } else {
                        p.vel.x = -p.vel.x;
                    }
                }
            }
        }

        if self.config.growth_rate != 0.0 {
            p.scale += self.config.growth_rate;
        }

        let img = &self.sources[p.sprite_index];
        let w = (img.width() as f32 * p.scale) as i32;
        let h = (img.height() as f32 * p.scale) as i32;
        let (dst_x, dst_y) = match self.config.origin {
            SpriteOrigin::TopLeft => (x, y),
            SpriteOrigin::Centered => (x - w / 2, y - h / 2),
        };
        target.blit(BlitOp::full_sprite(dst_x, dst_y, w, h, img), img);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::BlitRecorder;

    fn solid_sprite(w: u32, h: u32) -> Sprite {
        Sprite::from_pixels(w, h, vec![1; (w * h) as usize]).unwrap()
    }

    fn factory(config: FactoryConfig, variants: usize) -> ScaledSpriteFactory {
        let sources = (0..variants).map(|_| solid_sprite(16, 16)).collect();
        ScaledSpriteFactory::new(config, sources, 42).unwrap()
    }

    fn test_anchor() -> Anchor {
        Anchor::new(80.0, 60.0, 20.0, 10.0)
    }

    #[test]
    fn scale_draws_stay_inside_bounds() {
        let config =
            FactoryConfig::new(100.0, SpawnDirection::Top).with_scale_range(30, 180);
        let mut f = factory(config, 3);
        let anchor = Anchor::screen(160.0, 120.0);
        for _ in 0..1000 {
            let p = f.create_particle(&anchor);
            assert!(p.scale >= 0.30 && p.scale <= 1.80, "scale {}", p.scale);
            assert!(p.sprite_index < 3);
            assert_eq!(p.phase, p.sprite_index as f32);
        }
    }

    #[test]
    fn top_spawns_flush_above_the_anchor() {
        let mut f = factory(FactoryConfig::new(100.0, SpawnDirection::Top), 1);
        let anchor = test_anchor();
        for _ in 0..200 {
            let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 0, 0.5, 0.0);
            f.position_particle(&anchor, &mut p);
            // 16x16 sprite: y = 60 - 5 - 16, x within the widened extent
            assert_eq!(p.pos.y, 39.0);
            assert!(p.pos.x >= 54.0 && p.pos.x <= 106.0, "x {}", p.pos.x);
            assert!(p.pos.y < anchor.top());
        }
    }

    #[test]
    fn left_spawns_flush_beside_the_anchor() {
        let mut f = factory(FactoryConfig::new(100.0, SpawnDirection::Left), 1);
        let anchor = test_anchor();
        for _ in 0..200 {
            let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 0, 1.0, 0.0);
            f.position_particle(&anchor, &mut p);
            assert_eq!(p.pos.x, 54.0);
            assert!(p.pos.y >= 39.0 && p.pos.y <= 81.0, "y {}", p.pos.y);
            assert!(p.pos.x < anchor.left());
        }
    }

    #[test]
    fn every_edge_direction_spawns_outside_the_anchor() {
        let anchor = test_anchor();
        let cases = [
            SpawnDirection::Top,
            SpawnDirection::Bottom,
            SpawnDirection::Left,
            SpawnDirection::Right,
        ];
        for dir in cases {
            let mut f = factory(FactoryConfig::new(100.0, dir), 1);
            for _ in 0..50 {
                let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 0, 0.7, 0.0);
                f.position_particle(&anchor, &mut p);
                let outside = match dir {
                    SpawnDirection::Top => p.pos.y < anchor.top(),
                    SpawnDirection::Bottom => p.pos.y > anchor.bottom(),
                    SpawnDirection::Left => p.pos.x < anchor.left(),
                    SpawnDirection::Right => p.pos.x > anchor.right(),
                    _ => unreachable!(),
                };
                assert!(outside, "{dir:?} spawned inside at {:?}", p.pos);
            }
        }
    }

    #[test]
    fn corner_spawn_offset_scales_with_particle_size() {
        let mut f = factory(FactoryConfig::new(100.0, SpawnDirection::TopLeft), 1);
        let anchor = test_anchor();

        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 0, 0.5, 0.0);
        f.position_particle(&anchor, &mut p);
        assert_eq!((p.pos.x, p.pos.y), (62.0, 47.0));

        let mut big = Particle::new(Vec2::ZERO, Vec2::ZERO, 0, 1.0, 0.0);
        f.position_particle(&anchor, &mut big);
        assert_eq!((big.pos.x, big.pos.y), (54.0, 39.0));
    }

    #[test]
    fn bottom_right_spawns_off_the_far_corner() {
        let mut f = factory(FactoryConfig::new(100.0, SpawnDirection::BottomRight), 1);
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 0, 0.5, 0.0);
        f.position_particle(&test_anchor(), &mut p);
        assert_eq!((p.pos.x, p.pos.y), (98.0, 73.0));
    }

    #[test]
    fn velocity_stays_inside_the_direction_arc() {
        let anchor = Anchor::screen(160.0, 120.0);
        for dir in SpawnDirection::ALL {
            let mut f = factory(FactoryConfig::new(100.0, dir), 1);
            for _ in 0..50 {
                let p = f.create_particle(&anchor);
                let speed = p.vel.length();
                assert!((speed - 100.0).abs() < 0.5, "{dir:?} speed {speed}");
                // Boundary angles land within float noise of an axis
                let eps = 1e-3;
                match dir {
                    SpawnDirection::Top => assert!(p.vel.y > 0.0),
                    SpawnDirection::Bottom => assert!(p.vel.y < 0.0),
                    SpawnDirection::Left => assert!(p.vel.x > 0.0),
                    SpawnDirection::Right => assert!(p.vel.x < 0.0),
                    SpawnDirection::TopLeft => {
                        assert!(p.vel.x >= -eps && p.vel.y >= -eps)
                    }
                    SpawnDirection::TopRight => {
                        assert!(p.vel.x <= eps && p.vel.y >= -eps)
                    }
                    SpawnDirection::BottomLeft => {
                        assert!(p.vel.x >= -eps && p.vel.y <= eps)
                    }
                    SpawnDirection::BottomRight => {
                        assert!(p.vel.x <= eps && p.vel.y <= eps)
                    }
                }
            }
        }
    }

    #[test]
    fn lifespan_covers_screen_traversal() {
        let top = factory(FactoryConfig::new(100.0, SpawnDirection::Top), 1);
        assert!((top.lifespan_ms() - 1440.0).abs() < 0.01);

        let left = factory(FactoryConfig::new(100.0, SpawnDirection::Left), 1);
        assert!((left.lifespan_ms() - 1920.0).abs() < 0.01);

        let diagonal = factory(FactoryConfig::new(100.0, SpawnDirection::TopLeft), 1);
        assert!((diagonal.lifespan_ms() - 2400.0).abs() < 0.01);
    }

    #[test]
    fn cycle_advances_the_flipbook() {
        let config = FactoryConfig::new(100.0, SpawnDirection::Top)
            .with_animation(SpriteAnimation::Cycle { rate: 0.25 });
        let mut f = factory(config, 4);
        let mut rec = BlitRecorder::new();

        let mut p = f.create_particle(&Anchor::screen(160.0, 120.0));
        let initial = p.sprite_index as f32;
        let draws = 10;
        for _ in 0..draws {
            f.draw_particle(&mut p, 0, 0, &mut rec);
            assert_eq!(p.sprite_index, p.phase as usize);
        }
        let expected = ((initial + 0.25 * draws as f32) % 4.0).floor() as usize;
        assert_eq!(p.sprite_index, expected);
        assert_eq!(rec.len(), draws);
    }

    #[test]
    fn wander_reflects_the_perpendicular_axis() {
        let config = FactoryConfig::new(100.0, SpawnDirection::Left)
            .with_animation(SpriteAnimation::Wander { rate: 0.01 });
        let mut f = factory(config, 2);
        let mut rec = BlitRecorder::new();

        let mut p = Particle::new(Vec2::ZERO, Vec2::new(100.0, 7.0), 1, 1.0, 0.0);
        let mut flipped = false;
        for _ in 0..300 {
            f.draw_particle(&mut p, 0, 0, &mut rec);
            assert_eq!(p.vel.x, 100.0, "travel axis must be untouched");
            assert_eq!(p.vel.y.abs(), 7.0);
            assert_eq!(p.sprite_index, 1, "wander must not change the variant");
            if p.vel.y < 0.0 {
                flipped = true;
            }
            if flipped {
                break;
            }
        }
        // rate 0.01 reaches a 100% chance within 100 frames
        assert!(flipped, "flip should trigger well within 300 frames");
        assert_eq!(p.phase.fract(), 0.0, "flip resets the phase fraction");
    }

    #[test]
    fn vertical_emitters_wander_horizontally() {
        let config = FactoryConfig::new(100.0, SpawnDirection::Top)
            .with_animation(SpriteAnimation::Wander { rate: 0.05 });
        let mut f = factory(config, 1);
        let mut rec = BlitRecorder::new();

        let mut p = Particle::new(Vec2::ZERO, Vec2::new(7.0, 100.0), 0, 1.0, 0.0);
        let mut flipped = false;
        for _ in 0..300 {
            f.draw_particle(&mut p, 0, 0, &mut rec);
            assert_eq!(p.vel.y, 100.0);
            if p.vel.x < 0.0 {
                flipped = true;
                break;
            }
        }
        assert!(flipped);
    }

    #[test]
    fn growth_accumulates_per_draw() {
        let config =
            FactoryConfig::new(100.0, SpawnDirection::Top).with_growth_rate(0.125);
        let mut f = factory(config, 1);
        let mut rec = BlitRecorder::new();

        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 0, 0.5, 0.0);
        for _ in 0..8 {
            f.draw_particle(&mut p, 0, 0, &mut rec);
        }
        assert_eq!(p.scale, 1.5);
    }

    #[test]
    fn zero_rates_draw_is_a_pure_render() {
        let mut f = factory(FactoryConfig::new(100.0, SpawnDirection::Top), 3);
        let mut rec = BlitRecorder::new();

        let mut p = Particle::new(Vec2::new(10.0, 20.0), Vec2::new(1.0, 2.0), 2, 0.75, 500.0);
        let before = p.clone();
        f.draw_particle(&mut p, 10, 20, &mut rec);

        assert_eq!(p.pos, before.pos);
        assert_eq!(p.vel, before.vel);
        assert_eq!(p.sprite_index, before.sprite_index);
        assert_eq!(p.phase, before.phase);
        assert_eq!(p.scale, before.scale);
        assert_eq!(p.lifespan_ms, before.lifespan_ms);
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn draw_scales_the_destination_rectangle() {
        let mut f = factory(FactoryConfig::new(100.0, SpawnDirection::Top), 1);
        let mut rec = BlitRecorder::new();
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 0, 0.5, 0.0);
        f.draw_particle(&mut p, 30, 40, &mut rec);

        let cmd = rec.commands()[0];
        assert_eq!((cmd.dst_x, cmd.dst_y), (30.0, 40.0));
        assert_eq!((cmd.dst_w, cmd.dst_h), (8.0, 8.0));
        assert_eq!((cmd.src_w, cmd.src_h), (16.0, 16.0));
        assert_eq!(cmd.sprite_id, 0.0);
    }

    #[test]
    fn centered_origin_offsets_the_blit() {
        let config = FactoryConfig::new(100.0, SpawnDirection::Top)
            .with_origin(SpriteOrigin::Centered);
        let mut f = factory(config, 1);
        let mut rec = BlitRecorder::new();
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 0, 1.0, 0.0);
        f.draw_particle(&mut p, 50, 40, &mut rec);

        let cmd = rec.commands()[0];
        assert_eq!((cmd.dst_x, cmd.dst_y), (42.0, 32.0));
        assert_eq!((cmd.dst_w, cmd.dst_h), (16.0, 16.0));
    }

    #[test]
    fn malformed_configs_are_rejected() {
        let sources = vec![solid_sprite(4, 4)];

        let bad_bounds = FactoryConfig::new(100.0, SpawnDirection::Top).with_scale_range(50, 10);
        assert!(matches!(
            ScaledSpriteFactory::new(bad_bounds, sources.clone(), 1),
            Err(EffectError::ScaleBoundsOutOfOrder { min: 50, max: 10 })
        ));

        let bad_speed = FactoryConfig::new(0.0, SpawnDirection::Top);
        assert!(matches!(
            ScaledSpriteFactory::new(bad_speed, sources.clone(), 1),
            Err(EffectError::InvalidSpeed(_))
        ));

        let bad_growth = FactoryConfig::new(100.0, SpawnDirection::Top).with_growth_rate(-0.1);
        assert!(matches!(
            ScaledSpriteFactory::new(bad_growth, sources.clone(), 1),
            Err(EffectError::InvalidRate { name: "growth rate", .. })
        ));

        let bad_rate = FactoryConfig::new(100.0, SpawnDirection::Top)
            .with_animation(SpriteAnimation::Cycle { rate: f32::NAN });
        assert!(matches!(
            ScaledSpriteFactory::new(bad_rate, sources.clone(), 1),
            Err(EffectError::InvalidRate { name: "animation rate", .. })
        ));

        let bad_screen = FactoryConfig::new(100.0, SpawnDirection::Top).with_screen(0.0, 120.0);
        assert!(matches!(
            ScaledSpriteFactory::new(bad_screen, sources, 1),
            Err(EffectError::InvalidScreen { .. })
        ));

        let no_sprites = FactoryConfig::new(100.0, SpawnDirection::Top);
        assert!(matches!(
            ScaledSpriteFactory::new(no_sprites, Vec::new(), 1),
            Err(EffectError::EmptyVariantSet)
        ));
    }

    #[test]
    fn retuning_revalidates_and_rederives_lifespan() {
        let mut f = factory(FactoryConfig::new(100.0, SpawnDirection::Top), 1);
        assert!((f.lifespan_ms() - 1440.0).abs() < 0.01);

        let faster = FactoryConfig::new(200.0, SpawnDirection::Top);
        f.set_config(faster).unwrap();
        assert!((f.lifespan_ms() - 720.0).abs() < 0.01);

        let bad = FactoryConfig::new(200.0, SpawnDirection::Top).with_scale_range(9, 1);
        assert!(f.set_config(bad).is_err());
        // Failed retune leaves the previous configuration in place
        assert_eq!(f.config().speed, 200.0);
        assert_eq!(f.config().min_scale_percent, 30);
    }

    #[test]
    fn same_seed_same_particles() {
        let anchor = Anchor::screen(160.0, 120.0);
        let config = FactoryConfig::new(100.0, SpawnDirection::TopLeft);
        let mut a = factory(config.clone(), 3);
        let mut b = factory(config, 3);
        for _ in 0..10 {
            let pa = a.create_particle(&anchor);
            let pb = b.create_particle(&anchor);
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
            assert_eq!(pa.sprite_index, pb.sprite_index);
            assert_eq!(pa.scale, pb.scale);
        }
    }
}
