use thiserror::Error;

use crate::assets::sprite::SpriteParseError;

/// Configuration and loading errors.
///
/// Runtime operations (create/draw) are total; everything that could make
/// them misbehave is rejected here, at construction time.
#[derive(Debug, Error)]
pub enum EffectError {
    #[error("scale bounds out of order: min {min}% > max {max}%")]
    ScaleBoundsOutOfOrder { min: u32, max: u32 },

    #[error("variant set is empty")]
    EmptyVariantSet,

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidRate { name: &'static str, value: f32 },

    #[error("particle speed must be finite and positive, got {0}")]
    InvalidSpeed(f32),

    #[error("screen dimensions must be positive, got {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },

    #[error("manifest has no effect named '{0}'")]
    UnknownEffect(String),

    #[error(transparent)]
    Sprite(#[from] SpriteParseError),

    #[error("manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
