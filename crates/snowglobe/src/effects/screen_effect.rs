use crate::assets::sprite::Sprite;
use crate::core::anchor::Anchor;
use crate::core::error::EffectError;
use crate::core::rng::Rng;
use crate::particles::factory::{FactoryConfig, ScaledSpriteFactory};
use crate::particles::source::ParticleSource;
use crate::render::BlitTarget;

/// A named, startable/stoppable full-screen effect.
///
/// Holds a validated factory template; each `start` clones it with a fresh
/// seed and anchors a new particle source to the whole screen. An optional
/// duration winds the effect down: spawning stops when it elapses and the
/// effect finishes once the last particle expires.
pub struct ScreenEffect {
    name: String,
    factory: ScaledSpriteFactory,
    min_pps: u32,
    max_pps: u32,
    default_duration_ms: Option<f32>,
    remaining_ms: Option<f32>,
    source: Option<ParticleSource>,
}

impl ScreenEffect {
    /// Validate the configuration and variant set up front; `start` cannot
    /// fail afterwards.
    pub fn new(
        name: impl Into<String>,
        config: FactoryConfig,
        sources: Vec<Sprite>,
        min_pps: u32,
        max_pps: u32,
    ) -> Result<Self, EffectError> {
        let factory = ScaledSpriteFactory::new(config, sources, 0)?;
        Ok(Self {
            name: name.into(),
            factory,
            min_pps,
            max_pps,
            default_duration_ms: None,
            remaining_ms: None,
            source: None,
        })
    }

    /// Set a default duration applied by `start`.
    pub fn with_duration(mut self, duration_ms: f32) -> Self {
        self.default_duration_ms = Some(duration_ms);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_running(&self) -> bool {
        self.source.is_some()
    }

    pub fn particle_count(&self) -> usize {
        self.source.as_ref().map_or(0, |s| s.particle_count())
    }

    /// The factory template this effect starts from.
    pub fn factory(&self) -> &ScaledSpriteFactory {
        &self.factory
    }

    pub fn rate_range(&self) -> (u32, u32) {
        (self.min_pps, self.max_pps)
    }

    /// The running source, if any.
    pub fn source(&self) -> Option<&ParticleSource> {
        self.source.as_ref()
    }

    /// Start with the default duration and a spawn rate drawn from the
    /// effect's range. Restarting replaces the running source.
    pub fn start(&mut self, seed: u64) {
        let duration = self.default_duration_ms;
        self.start_with(duration, None, seed);
    }

    /// Start with explicit overrides for duration and spawn rate.
    pub fn start_with(&mut self, duration_ms: Option<f32>, pps: Option<f32>, seed: u64) {
        let mut rng = Rng::new(seed);
        let (min, max) = (self.min_pps as i32, self.max_pps as i32);
        let pps = pps.unwrap_or_else(|| rng.range(min, max) as f32);

        let mut factory = self.factory.clone();
        factory.reseed(seed.wrapping_add(7919));
        let anchor = Anchor::screen(
            factory.config().screen_width,
            factory.config().screen_height,
        );

        self.remaining_ms = duration_ms;
        self.source = Some(ParticleSource::new(anchor, pps, factory));
        log::info!("screen effect '{}' started at {pps} pps", self.name);
    }

    /// Stop immediately, dropping all live particles.
    pub fn stop(&mut self) {
        if self.source.take().is_some() {
            log::info!("screen effect '{}' stopped", self.name);
        }
        self.remaining_ms = None;
    }

    /// Advance the effect by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let Some(src) = self.source.as_mut() else {
            return;
        };

        if let Some(remaining) = self.remaining_ms.as_mut() {
            *remaining -= dt * 1000.0;
        }
        if self.remaining_ms.is_some_and(|r| r <= 0.0) {
            self.remaining_ms = None;
            src.set_enabled(false);
            log::debug!("screen effect '{}' winding down", self.name);
        }

        src.tick(dt);

        let finished = !src.enabled() && src.is_empty();
        if finished {
            self.source = None;
            log::info!("screen effect '{}' finished", self.name);
        }
    }

    /// Draw all live particles. Call once per frame after `tick`.
    pub fn draw(&mut self, target: &mut impl BlitTarget) {
        if let Some(src) = self.source.as_mut() {
            src.draw(target);
        }
    }
}
