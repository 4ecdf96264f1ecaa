//! Hue-harmony strategies: pure HSL math from one base color.
//!
//! Each strategy rotates the base hue by fixed offsets and derives
//! lightness/saturation variants with fixed deltas. The first candidate is
//! always the base color itself. Lightness is clamped into the range the
//! strategy documents and saturation into [0, 100], so every candidate is a
//! valid color no matter how close to black or white the base is.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use swatch_color::color::{Color, Hsl};
use thiserror::Error;

/// Lightness clamp used for base-color variants.
const BASE_RANGE: (f64, f64) = (10.0, 90.0);

/// Wider lightness clamp for rotated hues and monochromatic steps.
const WIDE_RANGE: (f64, f64) = (5.0, 95.0);

/// The color-wheel relationship used to derive a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyType {
    /// Base and its opposite (180°).
    Complementary,
    /// Neighbors at ±15° and ±30°.
    Analogous,
    /// Three hues 120° apart.
    Triadic,
    /// Complement ±30° plus the complement itself.
    SplitComplementary,
    /// One hue, many lightness/saturation steps.
    Monochromatic,
    /// Rectangle: 0°, 60°, 180°, 240°.
    Tetradic,
    /// Square: 0°, 90°, 180°, 270°.
    Square,
    /// A bit of everything. Also accepted as `all`.
    #[default]
    #[serde(alias = "all")]
    Mixed,
}

/// A harmony name that is not one of [`HarmonyType::all`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown harmony {0:?} (expected one of: complementary, analogous, triadic, split-complementary, monochromatic, tetradic, square, all)")]
pub struct UnknownHarmony(pub String);

impl HarmonyType {
    /// Generate the raw candidate colors for a base.
    ///
    /// Element 0 is the base color. The list may contain duplicates (for
    /// example when the base is gray and every rotation lands on the same
    /// color); the palette normalizer removes them.
    #[must_use]
    pub fn candidates(self, base: Hsl) -> Vec<Color> {
        generate(self, base).into_iter().map(Color::from_hsl).collect()
    }

    /// Kebab-case identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
            Self::Monochromatic => "monochromatic",
            Self::Tetradic => "tetradic",
            Self::Square => "square",
            Self::Mixed => "mixed",
        }
    }

    /// Capitalized label, used for swatch names that fit no relationship.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::SplitComplementary => "Split Complementary",
            Self::Monochromatic => "Monochromatic",
            Self::Tetradic => "Tetradic",
            Self::Square => "Square",
            Self::Mixed => "Mixed",
        }
    }

    /// Parse a harmony from its name (case-insensitive; `_` and spaces are
    /// read as `-`; `all` means [`HarmonyType::Mixed`]).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase().replace(['_', ' '], "-");
        if key == "all" {
            return Some(Self::Mixed);
        }
        Self::all().iter().find(|h| h.name() == key).copied()
    }

    /// All harmony types, in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Mixed,
            Self::Complementary,
            Self::Analogous,
            Self::Triadic,
            Self::SplitComplementary,
            Self::Monochromatic,
            Self::Tetradic,
            Self::Square,
        ]
    }
}

impl FromStr for HarmonyType {
    type Err = UnknownHarmony;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownHarmony(s.to_string()))
    }
}

/// Core strategy dispatch. Returns HSL triples; the caller rounds to RGB.
fn generate(kind: HarmonyType, base: Hsl) -> Vec<Hsl> {
    let (lo, hi) = BASE_RANGE;
    let (wlo, whi) = WIDE_RANGE;

    match kind {
        HarmonyType::Complementary => {
            let comp = base.complement();
            vec![
                base,
                comp,
                base.adjust_lightness(15.0, lo, hi),
                base.adjust_lightness(-15.0, lo, hi),
                comp.adjust_lightness(15.0, lo, hi),
                comp.adjust_lightness(-15.0, lo, hi),
                comp.adjust_saturation(-20.0),
                // Accent a quarter-turn away so the set isn't two-toned.
                base.shift_hue(90.0),
            ]
        }
        HarmonyType::Analogous => {
            vec![
                base,
                base.shift_hue(15.0),
                base.shift_hue(-15.0),
                base.shift_hue(30.0),
                base.shift_hue(-30.0),
                base.adjust_lightness(20.0, lo, hi),
                base.adjust_lightness(-20.0, lo, hi),
                base.adjust_saturation(-30.0),
            ]
        }
        HarmonyType::Triadic => {
            let second = base.shift_hue(120.0);
            let third = base.shift_hue(240.0);
            vec![
                base,
                second,
                third,
                base.adjust_lightness(20.0, lo, hi),
                base.adjust_lightness(-20.0, lo, hi),
                second.adjust_lightness(10.0, wlo, whi),
                third.adjust_lightness(-10.0, wlo, whi),
                second.adjust_saturation(-10.0),
                third.adjust_saturation(-10.0),
            ]
        }
        HarmonyType::SplitComplementary => {
            let left = base.shift_hue(150.0);
            let right = base.shift_hue(210.0);
            vec![
                base,
                left,
                right,
                base.complement(),
                base.adjust_lightness(15.0, lo, hi),
                base.adjust_lightness(-15.0, lo, hi),
                left.adjust_lightness(5.0, wlo, whi).adjust_saturation(-15.0),
                right.adjust_lightness(-5.0, wlo, whi).adjust_saturation(-15.0),
            ]
        }
        HarmonyType::Monochromatic => {
            vec![
                base,
                base.adjust_lightness(-30.0, wlo, whi),
                base.adjust_lightness(-15.0, wlo, whi),
                base.adjust_lightness(15.0, wlo, whi),
                base.adjust_lightness(30.0, wlo, whi),
                base.adjust_saturation(-30.0),
                base.adjust_saturation(30.0),
                base.adjust_lightness(-20.0, wlo, whi).adjust_saturation(10.0),
                base.adjust_lightness(20.0, wlo, whi).adjust_saturation(-10.0),
            ]
        }
        HarmonyType::Tetradic => rectangle(base, 60.0),
        HarmonyType::Square => rectangle(base, 90.0),
        HarmonyType::Mixed => {
            vec![
                base,
                base.complement(),
                base.shift_hue(120.0),
                base.shift_hue(240.0),
                base.shift_hue(30.0),
                base.shift_hue(-30.0),
                base.shift_hue(150.0),
                base.adjust_lightness(20.0, lo, hi),
                base.adjust_lightness(-20.0, lo, hi),
            ]
        }
    }
}

/// Four hues at 0, `step`, 180, 180 + `step` with lightness variants.
///
/// Tetradic uses a 60° step (rectangle), Square a 90° step. Yields nine
/// candidates: the four hues, one lighter base, two complement steps, a muted
/// fourth and a lighter second.
fn rectangle(base: Hsl, step: f64) -> Vec<Hsl> {
    let (lo, hi) = BASE_RANGE;
    let second = base.shift_hue(step);
    let third = base.complement();
    let fourth = base.shift_hue(180.0 + step);
    vec![
        base,
        second,
        third,
        fourth,
        base.adjust_lightness(15.0, lo, hi),
        third.adjust_lightness(15.0, lo, hi),
        third.adjust_lightness(-15.0, lo, hi),
        fourth.adjust_saturation(-20.0).adjust_lightness(20.0, lo, hi),
        second.adjust_lightness(15.0, lo, hi),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
