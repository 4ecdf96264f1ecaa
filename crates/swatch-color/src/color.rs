// SPDX-License-Identifier: MIT
//
// swatch color plumbing: opaque 24-bit sRGB with an HSL view.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference formulas.
#![allow(clippy::many_single_char_names)]
//
// Every palette color is an opaque 8-bit-per-channel sRGB value. HSL is a
// derived view that the harmony generator uses to rotate hues and nudge
// lightness and saturation. Going back always passes through
// `Color::from_hsl`, which clamps saturation and lightness into [0, 100]
// first, so delta arithmetic can never produce out-of-range channels.
//
// Conversion pipeline:
//
//   "#1a365d" ──parse──▶ Color { r, g, b } ──to_hsl──▶ Hsl { h, s, l }
//                           ▲                              │
//                           └─────────── from_hsl ◀────────┘
//
// Hex output is always `#RRGGBB` uppercase. RGB → hex → RGB is lossless, and
// so is RGB → HSL → RGB at integer precision.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Failure to interpret text as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not six hex digits with an optional leading `#`.
    #[error("invalid hex color {0:?}: expected 6 hex digits with an optional '#'")]
    InvalidHex(String),
}

/// `#RRGGBB` or `RRGGBB`, any case. One capture group per channel.
static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$")
        .expect("hex color pattern is a valid regex")
});

/// Whether `input` is six hex digits with an optional leading `#`.
#[must_use]
pub fn is_hex_color(input: &str) -> bool {
    HEX_PATTERN.is_match(input)
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8 bits per channel.
///
/// This is the unit every palette slot is made of. It serializes as its
/// canonical hex string (`"#1A365D"`), so exported palettes stay readable.
///
/// # Examples
///
/// ```
/// use swatch_color::color::Color;
///
/// let navy = Color::from_hex("#1a365d").unwrap();
/// assert_eq!(navy.to_hex(), "#1A365D");
///
/// let hsl = navy.to_hsl();
/// let complement = Color::from_hsl(hsl.shift_hue(180.0));
/// assert_ne!(navy, complement);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` / `RRGGBB` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] for anything else, including the
    /// 3-digit shorthand and 8-digit alpha forms.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(input.to_string());
        let caps = HEX_PATTERN.captures(input).ok_or_else(invalid)?;
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Create a color from an HSL triple. Saturation and lightness are
    /// clamped into [0, 100] and hue is wrapped into [0, 360) first.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
        Self::rgb(r, g, b)
    }

    /// Canonical `#RRGGBB`, uppercase.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// The HSL view of this color.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Channels normalized to [0.0, 1.0].
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Euclidean distance in 8-bit RGB space. Ranges from 0 to ~441.7.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        db.mul_add(db, dr.mul_add(dr, dg * dg)).sqrt()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100].
///
/// Values are kept as `f64` so a color can be rotated and nudged several
/// times without accumulating rounding; only [`Color::from_hsl`] rounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Rotate the hue by `degrees` (wraps around 360°).
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Add `delta` to lightness, clamped to `[min, max]`.
    #[inline]
    #[must_use]
    pub const fn adjust_lightness(self, delta: f64, min: f64, max: f64) -> Self {
        Self {
            l: (self.l + delta).clamp(min, max),
            ..self
        }
    }

    /// Add `delta` to saturation, clamped to [0, 100].
    #[inline]
    #[must_use]
    pub const fn adjust_saturation(self, delta: f64) -> Self {
        Self {
            s: (self.s + delta).clamp(0.0, 100.0),
            ..self
        }
    }

    /// The hue on the opposite side of the wheel.
    #[inline]
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }

    /// Whether the color has no hue (gray axis).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s.abs() < 1e-9
    }
}

// ─── Conversion Functions ────────────────────────────────────────────────────
//
// Free-function forms of the conversions. The `Color` methods above are thin
// wrappers; these exist for callers that work on raw channels.

/// Parse a hex color into RGB.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] when `hex` is not `#?[0-9A-Fa-f]{6}`.
pub fn hex_to_rgb(hex: &str) -> Result<Color, ColorError> {
    Color::from_hex(hex)
}

/// Parse a hex color, falling back to black when it does not parse.
///
/// Compatibility path for hosts that rely on the lenient "unparsable means
/// black" contract. New code should use [`hex_to_rgb`].
#[must_use]
pub fn hex_to_rgb_or_black(hex: &str) -> Color {
    Color::from_hex(hex).unwrap_or(Color::BLACK)
}

/// `#RRGGBB` with each channel zero-padded, uppercase.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Convert 8-bit RGB to HSL (h in degrees, s/l in percent).
///
/// Achromatic input (all channels equal) yields h = 0, s = 0.
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (rf, gf, bf) = Color::rgb(r, g, b).to_srgb();
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let l = (max + min) / 2.0;

    if r == g && g == b {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Channel with the largest value picks the sextant; red wins ties.
    let h = if r >= g && r >= b {
        (gf - bf) / d + if g < b { 6.0 } else { 0.0 }
    } else if g >= b {
        (bf - rf) / d + 2.0
    } else {
        (rf - gf) / d + 4.0
    };

    Hsl::new(normalize_hue(h * 60.0), s * 100.0, l * 100.0)
}

/// Convert HSL (h in degrees, s/l in percent) to 8-bit RGB.
///
/// Saturation and lightness are clamped into [0, 100] and the hue wrapped
/// before conversion. Channels round half away from zero.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = normalize_hue(h) / 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    if s <= 0.0 {
        let v = to_u8(l);
        return (v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l.mul_add(-s, l + s)
    };
    let p = 2.0f64.mul_add(l, -q);

    (
        to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_channel(p, q, h)),
        to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// The six-piece helper of the HSL → RGB formula.
#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

/// sRGB gamma decode for one channel in [0.0, 1.0].
///
/// Uses the 0.03928 breakpoint from the WCAG 2.x relative luminance
/// definition (not the 0.04045 of IEC 61966-2-1).
#[inline]
#[must_use]
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Shortest angular distance between two hues, in [0, 180].
#[inline]
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
