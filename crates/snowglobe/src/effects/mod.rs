//! Named screen effects: the startable wrapper, the shipped presets, and
//! the JSON manifest surface.

pub mod manifest;
pub mod presets;
pub mod screen_effect;

pub use manifest::{EffectDescriptor, EffectManifest};
pub use presets::Theme;
pub use screen_effect::ScreenEffect;
