//! The particle core: direction geometry, the scaled sprite factory, and
//! the frame-driven particle source.

pub mod direction;
pub mod factory;
pub mod particle;
pub mod source;

pub use direction::SpawnDirection;
pub use factory::{FactoryConfig, ScaledSpriteFactory, SpriteAnimation, SpriteOrigin};
pub use particle::Particle;
pub use source::ParticleSource;
