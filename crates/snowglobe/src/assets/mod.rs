//! Sprite bitmaps: the indexed-color type and the built-in art sets.

pub mod shapes;
pub mod sprite;

pub use sprite::{Sprite, SpriteParseError, TRANSPARENT};
