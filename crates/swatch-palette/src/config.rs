//! Engine configuration.
//!
//! Everything tunable about the engine lives in [`EngineConfig`], parsed
//! from TOML text. Every key is optional; missing keys keep their defaults.
//!
//! | Key                 | Type            | Default       |
//! |---------------------|-----------------|---------------|
//! | `base_color`        | hex string      | `"#1A365D"`   |
//! | `harmony`           | harmony name    | `"all"`       |
//! | `name_distance`     | float           | `80.0`        |
//! | `shuffle`           | [`ShuffleRange`]| S 70–100, L 40–70 |
//! | `shuffle_unlocked`  | [`ShuffleRange`]| S 70–100, L 40–80 |
//!
//! ```toml
//! base_color = "#0FAE96"
//! harmony = "triadic"
//!
//! [shuffle_unlocked]
//! saturation = { min = 70, max = 100 }
//! lightness = { min = 35, max = 75 }
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use swatch_color::color::Color;
use thiserror::Error;

use crate::harmony::HarmonyType;
use crate::names::{DEFAULT_NAME_DISTANCE, NameResolver};

/// The base color a fresh engine starts from.
pub const DEFAULT_BASE: Color = Color::rgb(0x1A, 0x36, 0x5D);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field}: range {min}..={max} is not within 0..=100 in ascending order")]
    InvalidRange {
        field: &'static str,
        min: u8,
        max: u8,
    },

    #[error("name_distance must be non-negative, got {0}")]
    NegativeDistance(f64),
}

// ---------------------------------------------------------------------------
// Ranges
// ---------------------------------------------------------------------------

/// An inclusive integer percent range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentRange {
    pub min: u8,
    pub max: u8,
}

impl PercentRange {
    #[must_use]
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Draw a uniform integer from the range. Reversed bounds are swapped.
    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        f64::from(rng.random_range(lo..=hi))
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.min <= self.max && self.max <= 100
    }
}

/// Saturation and lightness bounds for a shuffle draw. Both keys are
/// required when the table is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShuffleRange {
    pub saturation: PercentRange,
    pub lightness: PercentRange,
}

impl ShuffleRange {
    /// The new-palette shuffle.
    pub const NEW_PALETTE: Self = Self {
        saturation: PercentRange::new(70, 100),
        lightness: PercentRange::new(40, 70),
    };

    /// The regenerate-unlocked shuffle: same saturation, lighter ceiling.
    pub const REGENERATE_UNLOCKED: Self = Self {
        saturation: PercentRange::new(70, 100),
        lightness: PercentRange::new(40, 80),
    };
}

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub base_color: Color,
    pub harmony: HarmonyType,
    pub shuffle: ShuffleRange,
    pub shuffle_unlocked: ShuffleRange,
    pub name_distance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_BASE,
            harmony: HarmonyType::Mixed,
            shuffle: ShuffleRange::NEW_PALETTE,
            shuffle_unlocked: ShuffleRange::REGENERATE_UNLOCKED,
            name_distance: DEFAULT_NAME_DISTANCE,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys, bad
    /// hex colors or unknown harmony names, and a range or distance error
    /// from [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric bounds.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-bounds range or a negative distance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("shuffle.saturation", self.shuffle.saturation),
            ("shuffle.lightness", self.shuffle.lightness),
            ("shuffle_unlocked.saturation", self.shuffle_unlocked.saturation),
            ("shuffle_unlocked.lightness", self.shuffle_unlocked.lightness),
        ];
        for (field, range) in ranges {
            if !range.is_valid() {
                return Err(ConfigError::InvalidRange {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if self.name_distance < 0.0 || self.name_distance.is_nan() {
            return Err(ConfigError::NegativeDistance(self.name_distance));
        }
        Ok(())
    }

    #[must_use]
    pub const fn name_resolver(&self) -> NameResolver {
        NameResolver::new(self.name_distance)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn defaults_match_engine_defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.base_color.to_hex(), "#1A365D");
        assert_eq!(cfg.harmony, HarmonyType::Mixed);
        assert_eq!(cfg.shuffle.lightness, PercentRange::new(40, 70));
        assert_eq!(cfg.shuffle_unlocked.lightness, PercentRange::new(40, 80));
        assert_eq!(cfg.name_distance, 80.0);
    }

    #[test]
    fn partial_document_overrides() {
        let cfg = EngineConfig::from_toml_str(
            r##"
            base_color = "#0fae96"
            harmony = "split-complementary"
            name_distance = 40.0

            [shuffle_unlocked]
            saturation = { min = 60, max = 90 }
            lightness = { min = 35, max = 75 }
            "##,
        )
        .unwrap();
        assert_eq!(cfg.base_color, Color::rgb(0x0F, 0xAE, 0x96));
        assert_eq!(cfg.harmony, HarmonyType::SplitComplementary);
        assert_eq!(cfg.name_distance, 40.0);
        assert_eq!(cfg.shuffle_unlocked.lightness, PercentRange::new(35, 75));
        assert_eq!(cfg.shuffle_unlocked.saturation, PercentRange::new(60, 90));
        assert_eq!(cfg.shuffle, ShuffleRange::NEW_PALETTE);
    }

    #[test]
    fn harmony_all_alias() {
        let cfg = EngineConfig::from_toml_str(r#"harmony = "all""#).unwrap();
        assert_eq!(cfg.harmony, HarmonyType::Mixed);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            EngineConfig::from_toml_str(r#"base_color = "navy""#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str(r#"harmony = "pentagram""#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("colour = 1"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("[shuffle]\nlightness = { min = 40, max = 60 }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_bad_ranges() {
        let err = EngineConfig::from_toml_str(
            "[shuffle]\nsaturation = { min = 70, max = 100 }\nlightness = { min = 80, max = 40 }",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidRange { field: "shuffle.lightness", .. }
        ));

        let err = EngineConfig::from_toml_str(
            "[shuffle_unlocked]\nsaturation = { min = 50, max = 120 }\nlightness = { min = 40, max = 80 }",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { .. }));

        let err = EngineConfig::from_toml_str("name_distance = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::NegativeDistance(_)));
    }

    #[test]
    fn draw_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = PercentRange::new(40, 70);
        for _ in 0..500 {
            let v = range.draw(&mut rng);
            assert!((40.0..=70.0).contains(&v));
            assert_eq!(v.fract(), 0.0);
        }
        // Reversed bounds do not panic.
        let v = PercentRange::new(60, 50).draw(&mut rng);
        assert!((50.0..=60.0).contains(&v));
    }
}
