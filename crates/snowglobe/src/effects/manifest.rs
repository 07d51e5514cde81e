use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::error::EffectError;
use crate::particles::direction::SpawnDirection;

use super::presets::Theme;
use super::screen_effect::ScreenEffect;

/// Named effect definitions loaded from JSON.
///
/// Lets a host describe its effects in data instead of code:
///
/// ```json
/// {
///     "effects": {
///         "title-snow": { "theme": "snowflakes", "direction": "top" },
///         "win-burst": {
///             "theme": "candy-canes",
///             "direction": "bottom-left",
///             "speed": 140.0,
///             "max_pps": 90
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectManifest {
    #[serde(default)]
    pub effects: HashMap<String, EffectDescriptor>,
}

/// One effect: a theme plus optional overrides of its tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectDescriptor {
    pub theme: Theme,
    pub direction: SpawnDirection,
    #[serde(default)]
    pub speed: Option<f32>,
    #[serde(default)]
    pub min_scale_percent: Option<u32>,
    #[serde(default)]
    pub max_scale_percent: Option<u32>,
    #[serde(default)]
    pub growth_rate: Option<f32>,
    #[serde(default = "default_min_pps")]
    pub min_pps: u32,
    #[serde(default = "default_max_pps")]
    pub max_pps: u32,
    #[serde(default)]
    pub duration_ms: Option<f32>,
}

fn default_min_pps() -> u32 {
    15
}

fn default_max_pps() -> u32 {
    50
}

impl EffectManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build the named effect, or fail if the manifest does not define it.
    pub fn build(&self, name: &str) -> Result<ScreenEffect, EffectError> {
        let desc = self
            .effects
            .get(name)
            .ok_or_else(|| EffectError::UnknownEffect(name.to_string()))?;
        desc.build(name)
    }
}

impl EffectDescriptor {
    /// Build a screen effect: theme tuning first, then overrides, then the
    /// usual construction-time validation.
    pub fn build(&self, name: &str) -> Result<ScreenEffect, EffectError> {
        let mut config = self
            .theme
            .base_config(self.direction);
        config.speed = self.speed.unwrap_or(config.speed);
        if let Some(min) = self.min_scale_percent {
            config.min_scale_percent = min;
        }
        if let Some(max) = self.max_scale_percent {
            config.max_scale_percent = max;
        }
        if let Some(rate) = self.growth_rate {
            config.growth_rate = rate;
        }

        log::debug!("building effect '{name}' from manifest: {config:?}");
        let effect = ScreenEffect::new(
            name,
            config,
            self.theme.shapes(),
            self.min_pps,
            self.max_pps,
        )?;
        Ok(match self.duration_ms {
            Some(ms) => effect.with_duration(ms),
            None => effect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::factory::SpriteAnimation;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "effects": {
                "title-snow": { "theme": "snowflakes", "direction": "top" }
            }
        }"#;
        let manifest = EffectManifest::from_json(json).unwrap();
        assert_eq!(manifest.effects.len(), 1);

        let desc = &manifest.effects["title-snow"];
        assert_eq!(desc.theme, Theme::Snowflakes);
        assert_eq!(desc.direction, SpawnDirection::Top);
        assert_eq!(desc.min_pps, 15);
        assert_eq!(desc.max_pps, 50);
        assert_eq!(desc.speed, None);
    }

    #[test]
    fn built_effect_carries_theme_tuning_and_overrides() {
        let json = r#"{
            "effects": {
                "fast-flakes": {
                    "theme": "snowflakes",
                    "direction": "top-right",
                    "speed": 60.0,
                    "max_pps": 120,
                    "duration_ms": 2000.0
                }
            }
        }"#;
        let manifest = EffectManifest::from_json(json).unwrap();
        let fx = manifest.build("fast-flakes").unwrap();

        let config = fx.factory().config();
        assert_eq!(config.speed, 60.0);
        assert_eq!(config.direction, SpawnDirection::TopRight);
        assert_eq!(config.animation, SpriteAnimation::Wander { rate: 0.01 });
        assert_eq!(config.min_scale_percent, 50);
        assert_eq!(fx.factory().variant_count(), 16);
        assert_eq!(fx.rate_range(), (15, 120));
    }

    #[test]
    fn unknown_effect_is_an_error() {
        let manifest = EffectManifest::from_json(r#"{ "effects": {} }"#).unwrap();
        assert!(matches!(
            manifest.build("nope"),
            Err(EffectError::UnknownEffect(_))
        ));
    }

    #[test]
    fn invalid_overrides_fail_validation() {
        let json = r#"{
            "effects": {
                "bad": {
                    "theme": "snowballs",
                    "direction": "left",
                    "min_scale_percent": 200,
                    "max_scale_percent": 10
                }
            }
        }"#;
        let manifest = EffectManifest::from_json(json).unwrap();
        assert!(matches!(
            manifest.build("bad"),
            Err(EffectError::ScaleBoundsOutOfOrder { .. })
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(EffectManifest::from_json("{ not json").is_err());
        assert!(EffectManifest::from_json(
            r#"{ "effects": { "x": { "theme": "lava", "direction": "top" } } }"#
        )
        .is_err());
    }

    #[test]
    fn manifest_round_trips() {
        let json = r#"{
            "effects": {
                "drift": { "theme": "candy-canes", "direction": "bottom-right" }
            }
        }"#;
        let manifest = EffectManifest::from_json(json).unwrap();
        let back = serde_json::to_string(&manifest).unwrap();
        let again = EffectManifest::from_json(&back).unwrap();
        assert_eq!(again.effects["drift"].theme, Theme::CandyCanes);
        assert_eq!(again.effects["drift"].direction, SpawnDirection::BottomRight);
    }
}
