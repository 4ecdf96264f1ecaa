//! WCAG contrast evaluation for palette swatches.
//!
//! Every swatch is judged the same way:
//!
//! - compute the background's relative luminance (WCAG 2.x definition)
//! - compare it against pure black and pure white text
//! - keep whichever text color reads better, with its ratio
//! - classify that ratio into a [`WcagLevel`]
//!
//! Black or white text always reaches at least ~4.58:1 against any opaque
//! background, so a swatch scored with [`Evaluation::of`] never grades
//! [`WcagLevel::Fail`] under normal-text thresholds.

use std::fmt;

use serde::{Deserialize, Serialize};
use swatch_color::color::{Color, srgb_to_linear};

/// Luminance of pure black text.
const BLACK_LUMINANCE: f64 = 0.0;

/// Luminance of pure white text.
const WHITE_LUMINANCE: f64 = 1.0;

// ---------------------------------------------------------------------------
// WcagLevel
// ---------------------------------------------------------------------------

/// Conformance grade of a text/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    Fail,
}

impl WcagLevel {
    /// Display form used in reports: `AAA`, `AA`, or `Fail`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "Fail",
        }
    }

    /// Whether the pair meets at least AA.
    #[must_use]
    pub const fn passes(self) -> bool {
        !matches!(self, Self::Fail)
    }

    /// Sort key: stronger levels first.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Aaa => 0,
            Self::Aa => 1,
            Self::Fail => 2,
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the foreground is, which decides the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextUsage {
    /// Body text: AAA at 7:1, AA at 4.5:1.
    #[default]
    Normal,
    /// 18pt+ (or 14pt+ bold) text: AAA at 4.5:1, AA at 3:1.
    Large,
    /// Icons, borders, focus rings: AA at 3:1, no AAA tier.
    UiComponent,
}

// ---------------------------------------------------------------------------
// Luminance and ratio
// ---------------------------------------------------------------------------

/// Relative luminance of a color per WCAG 2.x.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Contrast ratio between two luminances.
///
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Argument order does not matter. The result is in [1.0, 21.0].
#[must_use]
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two colors.
#[must_use]
pub fn color_contrast(a: Color, b: Color) -> f64 {
    contrast_ratio(relative_luminance(a), relative_luminance(b))
}

/// Pick black or white text for a background of the given luminance.
///
/// Returns the text color and its contrast ratio. When both ratios are
/// exactly equal, black wins.
#[must_use]
pub fn best_text_color(bg_luminance: f64) -> (Color, f64) {
    pick_text(
        contrast_ratio(bg_luminance, BLACK_LUMINANCE),
        contrast_ratio(bg_luminance, WHITE_LUMINANCE),
    )
}

fn pick_text(black_ratio: f64, white_ratio: f64) -> (Color, f64) {
    if white_ratio > black_ratio {
        (Color::WHITE, white_ratio)
    } else {
        (Color::BLACK, black_ratio)
    }
}

/// Classify a contrast ratio for the given usage.
#[must_use]
pub fn wcag_level(ratio: f64, usage: TextUsage) -> WcagLevel {
    let (aaa, aa) = match usage {
        TextUsage::Normal => (Some(7.0), 4.5),
        TextUsage::Large => (Some(4.5), 3.0),
        TextUsage::UiComponent => (None, 3.0),
    };
    match aaa {
        Some(aaa) if ratio >= aaa => WcagLevel::Aaa,
        _ if ratio >= aa => WcagLevel::Aa,
        _ => WcagLevel::Fail,
    }
}

/// Flag form of [`wcag_level`]. `is_ui` takes precedence over
/// `is_large_text`.
#[must_use]
pub fn wcag_level_flags(ratio: f64, is_large_text: bool, is_ui: bool) -> WcagLevel {
    let usage = if is_ui {
        TextUsage::UiComponent
    } else if is_large_text {
        TextUsage::Large
    } else {
        TextUsage::Normal
    };
    wcag_level(ratio, usage)
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Everything the palette needs to know about one background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub luminance: f64,
    /// Pure black or pure white.
    pub text: Color,
    pub ratio: f64,
    /// Graded with normal-text thresholds.
    pub level: WcagLevel,
}

impl Evaluation {
    /// Score a background against black and white text.
    #[must_use]
    pub fn of(background: Color) -> Self {
        let luminance = relative_luminance(background);
        let (text, ratio) = best_text_color(luminance);
        Self {
            luminance,
            text,
            ratio,
            level: wcag_level(ratio, TextUsage::Normal),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(relative_luminance(Color::BLACK), 0.0, 1e-12));
    }

    #[test]
    fn luminance_white_is_one() {
        assert!(approx_eq(relative_luminance(Color::WHITE), 1.0, 1e-9));
    }

    #[test]
    fn luminance_pure_channels() {
        assert!(approx_eq(relative_luminance(Color::rgb(255, 0, 0)), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(Color::rgb(0, 255, 0)), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(Color::rgb(0, 0, 255)), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance(Color::rgb(128, 128, 128));
        assert!(approx_eq(lum, 0.2159, 0.001), "Mid-gray luminance: {lum}");
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_identity_is_one() {
        for l in [0.0, 0.05, 0.18, 0.5, 0.999, 1.0] {
            assert_eq!(contrast_ratio(l, l), 1.0, "l = {l}");
        }
    }

    #[test]
    fn contrast_black_white_is_21() {
        assert!(approx_eq(color_contrast(Color::BLACK, Color::WHITE), 21.0, 1e-9));
    }

    #[test]
    fn contrast_is_symmetric() {
        assert_eq!(contrast_ratio(0.3, 0.7), contrast_ratio(0.7, 0.3));
    }

    // ── Best text color ─────────────────────────────────────────────

    #[test]
    fn dark_background_gets_white_text() {
        let navy = Color::from_hex("#1A365D").unwrap();
        let (text, ratio) = best_text_color(relative_luminance(navy));
        assert_eq!(text, Color::WHITE);
        assert!(ratio > 11.0, "navy/white ratio: {ratio}");
    }

    #[test]
    fn light_background_gets_black_text() {
        let (text, _) = best_text_color(relative_luminance(Color::rgb(250, 240, 200)));
        assert_eq!(text, Color::BLACK);
    }

    #[test]
    fn exact_tie_prefers_black() {
        assert_eq!(pick_text(4.58, 4.58), (Color::BLACK, 4.58));
        assert_eq!(pick_text(4.57, 4.58), (Color::WHITE, 4.58));
    }

    #[test]
    fn best_text_never_fails() {
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(17) {
                    let eval = Evaluation::of(Color::rgb(r, g, b));
                    assert!(eval.ratio >= 4.5, "{r},{g},{b}: {}", eval.ratio);
                    assert!(eval.level.passes());
                }
            }
        }
    }

    // ── Levels ──────────────────────────────────────────────────────

    #[test]
    fn normal_text_thresholds() {
        assert_eq!(wcag_level_flags(7.0, false, false), WcagLevel::Aaa);
        assert_eq!(wcag_level_flags(4.5, false, false), WcagLevel::Aa);
        assert_eq!(wcag_level_flags(4.49, false, false), WcagLevel::Fail);
    }

    #[test]
    fn large_text_thresholds() {
        assert_eq!(wcag_level(4.5, TextUsage::Large), WcagLevel::Aaa);
        assert_eq!(wcag_level(3.0, TextUsage::Large), WcagLevel::Aa);
        assert_eq!(wcag_level(2.99, TextUsage::Large), WcagLevel::Fail);
    }

    #[test]
    fn ui_has_no_aaa_tier() {
        assert_eq!(wcag_level_flags(3.0, false, true), WcagLevel::Aa);
        assert_eq!(wcag_level_flags(21.0, false, true), WcagLevel::Aa);
        assert_eq!(wcag_level_flags(2.9, true, true), WcagLevel::Fail);
    }

    #[test]
    fn level_display_and_rank() {
        assert_eq!(WcagLevel::Aaa.to_string(), "AAA");
        assert_eq!(WcagLevel::Aa.to_string(), "AA");
        assert_eq!(WcagLevel::Fail.to_string(), "Fail");
        assert!(WcagLevel::Aaa.rank() < WcagLevel::Aa.rank());
    }
}
