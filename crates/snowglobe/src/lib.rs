pub mod assets;
pub mod core;
pub mod effects;
pub mod particles;
pub mod render;

// Re-export key types at crate root for convenience
pub use crate::assets::shapes;
pub use crate::assets::sprite::{Sprite, SpriteParseError, TRANSPARENT};
pub use crate::core::anchor::Anchor;
pub use crate::core::error::EffectError;
pub use crate::core::rng::Rng;
pub use crate::effects::manifest::{EffectDescriptor, EffectManifest};
pub use crate::effects::presets::{self, Theme};
pub use crate::effects::screen_effect::ScreenEffect;
pub use crate::particles::direction::SpawnDirection;
pub use crate::particles::factory::{
    FactoryConfig, ScaledSpriteFactory, SpriteAnimation, SpriteOrigin,
};
pub use crate::particles::particle::Particle;
pub use crate::particles::source::ParticleSource;
pub use crate::render::{BlitCommand, BlitOp, BlitRecorder, BlitTarget, IndexedSurface};
