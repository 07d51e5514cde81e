//! Shared value types: anchors, errors, and the RNG primitive.

pub mod anchor;
pub mod error;
pub mod rng;

pub use anchor::Anchor;
pub use error::EffectError;
pub use rng::Rng;
