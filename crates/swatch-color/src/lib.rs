// SPDX-License-Identifier: MIT
//
// swatch-color: color space plumbing for swatch.
//
// The palette engine thinks in HSL (rotate a hue, nudge a lightness) but
// stores, compares and exports colors as 24-bit sRGB hex. This crate owns
// that boundary: strict hex parsing, canonical uppercase formatting, and
// lossless RGB ↔ HSL conversion at integer precision. It knows nothing
// about contrast, harmonies, or palettes.

pub mod color;

pub use color::{Color, ColorError, Hsl};
