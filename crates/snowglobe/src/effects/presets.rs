//! The four shipped effects and the custom-effect constructors.
//!
//! Tuning constants here are the shipped visual design; change them and the
//! effects stop looking like themselves.

use serde::{Deserialize, Serialize};

use crate::assets::shapes;
use crate::assets::sprite::Sprite;
use crate::core::error::EffectError;
use crate::particles::direction::SpawnDirection;
use crate::particles::factory::{FactoryConfig, SpriteAnimation};

use super::screen_effect::ScreenEffect;

/// Spawn-rate range shared by the custom-effect constructors.
const CUSTOM_MIN_PPS: u32 = 15;
const CUSTOM_MAX_PPS: u32 = 50;

/// One of the built-in visual themes: an art set plus its tuned motion and
/// animation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Snowballs,
    CandyCanes,
    HolidayCookies,
    Snowflakes,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Snowballs => "snowballs",
            Theme::CandyCanes => "candy-canes",
            Theme::HolidayCookies => "holiday-cookies",
            Theme::Snowflakes => "snowflakes",
        }
    }

    /// The theme's sprite variant set.
    pub fn shapes(self) -> Vec<Sprite> {
        match self {
            Theme::Snowballs => shapes::snowball_shapes(),
            Theme::CandyCanes => shapes::candy_cane_shapes(),
            Theme::HolidayCookies => shapes::cookie_shapes(),
            Theme::Snowflakes => shapes::snowflake_shapes(),
        }
    }

    /// Particle speed used when the caller does not pick one. Snowflakes
    /// drift; everything else falls.
    pub fn speed(self) -> f32 {
        match self {
            Theme::Snowflakes => 30.0,
            _ => 100.0,
        }
    }

    /// Factory configuration with this theme's tuning applied.
    pub fn base_config(self, direction: SpawnDirection) -> FactoryConfig {
        let config = FactoryConfig::new(self.speed(), direction);
        match self {
            Theme::Snowballs => config,
            Theme::CandyCanes => config
                .with_scale_range(15, 150)
                .with_animation(SpriteAnimation::Cycle { rate: 0.25 }),
            Theme::HolidayCookies => config.with_scale_range(1, 40).with_growth_rate(0.07),
            Theme::Snowflakes => config
                .with_scale_range(50, 200)
                .with_animation(SpriteAnimation::Wander { rate: 0.01 }),
        }
    }
}

fn preset(
    name: &'static str,
    config: FactoryConfig,
    sources: Vec<Sprite>,
    min_pps: u32,
    max_pps: u32,
) -> ScreenEffect {
    ScreenEffect::new(name, config, sources, min_pps, max_pps)
        .expect("built-in preset tuning is valid")
}

/// Big tumbling snowballs drifting in from the top-left.
pub fn snowballs() -> ScreenEffect {
    preset(
        "snowballs",
        FactoryConfig::new(100.0, SpawnDirection::TopLeft),
        shapes::snowball_shapes(),
        15,
        250,
    )
}

/// Candy canes spinning through their eight-frame flipbook.
pub fn candy_canes() -> ScreenEffect {
    preset(
        "candy-canes",
        Theme::CandyCanes.base_config(SpawnDirection::TopLeft),
        shapes::candy_cane_shapes(),
        15,
        35,
    )
}

/// Cookies that start tiny and grow as they fall, as if approaching.
pub fn holiday_cookies() -> ScreenEffect {
    preset(
        "holiday-cookies",
        FactoryConfig::new(135.0, SpawnDirection::Top)
            .with_scale_range(1, 40)
            .with_growth_rate(0.07),
        shapes::cookie_shapes(),
        15,
        70,
    )
}

/// Slow snowflakes that wander side to side on the way down.
pub fn snowflakes() -> ScreenEffect {
    preset(
        "snowflakes",
        Theme::Snowflakes.base_config(SpawnDirection::Top),
        shapes::snowflake_shapes(),
        15,
        80,
    )
}

/// A themed effect emitting from an arbitrary direction.
pub fn themed(theme: Theme, direction: SpawnDirection) -> ScreenEffect {
    ScreenEffect::new(
        theme.name(),
        theme.base_config(direction),
        theme.shapes(),
        CUSTOM_MIN_PPS,
        CUSTOM_MAX_PPS,
    )
    .expect("built-in theme tuning is valid")
}

/// A fully custom effect over caller-supplied art and configuration.
pub fn custom(
    name: impl Into<String>,
    sources: Vec<Sprite>,
    config: FactoryConfig,
) -> Result<ScreenEffect, EffectError> {
    ScreenEffect::new(name, config, sources, CUSTOM_MIN_PPS, CUSTOM_MAX_PPS)
}
