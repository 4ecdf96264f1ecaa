//! Human-readable color names.
//!
//! Resolution runs in three steps, first hit wins:
//!
//! 1. exact match against the reference table
//! 2. nearest table entry by Euclidean RGB distance, if close enough
//! 3. a synthetic name built from the HSL hue bucket and descriptors
//!
//! The table lists the basic palette names first, then the CSS named colors
//! (title-cased). Where two entries share a hex value the earlier one wins,
//! so `#00FFFF` is "Cyan", not "Aqua".

use swatch_color::color::{Color, ColorError, Hsl};

/// Default maximum RGB distance for a nearest-name match.
pub const DEFAULT_NAME_DISTANCE: f64 = 80.0;

/// One reference entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Color,
}

const fn named(name: &'static str, rgb: u32) -> NamedColor {
    #[allow(clippy::cast_possible_truncation)]
    let color = Color::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8);
    NamedColor { name, color }
}

/// The reference table, in lookup order.
pub static NAMED_COLORS: &[NamedColor] = &[
    // Basic palette names.
    named("Red", 0xFF0000),
    named("Green", 0x00FF00),
    named("Blue", 0x0000FF),
    named("Yellow", 0xFFFF00),
    named("Magenta", 0xFF00FF),
    named("Cyan", 0x00FFFF),
    named("Black", 0x000000),
    named("White", 0xFFFFFF),
    named("Gray", 0x808080),
    named("Maroon", 0x800000),
    named("Olive", 0x808000),
    named("Dark Green", 0x008000),
    named("Purple", 0x800080),
    named("Teal", 0x008080),
    named("Navy", 0x000080),
    named("Orange", 0xFFA500),
    named("Brown", 0xA52A2A),
    named("Blue Slate", 0x1A365D),
    named("Light Red", 0xF87171),
    named("Emerald", 0x34D399),
    named("Blue", 0x60A5FA),
    named("Violet", 0xA78BFA),
    named("Pink", 0xF472B6),
    // Reds and pinks.
    named("Crimson", 0xDC143C),
    named("Firebrick", 0xB22222),
    named("Dark Red", 0x8B0000),
    named("Indian Red", 0xCD5C5C),
    named("Light Coral", 0xF08080),
    named("Salmon", 0xFA8072),
    named("Dark Salmon", 0xE9967A),
    named("Light Salmon", 0xFFA07A),
    named("Pink", 0xFFC0CB),
    named("Light Pink", 0xFFB6C1),
    named("Hot Pink", 0xFF69B4),
    named("Deep Pink", 0xFF1493),
    named("Medium Violet Red", 0xC71585),
    named("Pale Violet Red", 0xDB7093),
    // Oranges.
    named("Coral", 0xFF7F50),
    named("Tomato", 0xFF6347),
    named("Orange Red", 0xFF4500),
    named("Dark Orange", 0xFF8C00),
    // Yellows.
    named("Gold", 0xFFD700),
    named("Light Yellow", 0xFFFFE0),
    named("Lemon Chiffon", 0xFFFACD),
    named("Light Goldenrod Yellow", 0xFAFAD2),
    named("Papaya Whip", 0xFFEFD5),
    named("Moccasin", 0xFFE4B5),
    named("Peach Puff", 0xFFDAB9),
    named("Pale Goldenrod", 0xEEE8AA),
    named("Khaki", 0xF0E68C),
    named("Dark Khaki", 0xBDB76B),
    // Purples.
    named("Lavender", 0xE6E6FA),
    named("Thistle", 0xD8BFD8),
    named("Plum", 0xDDA0DD),
    named("Violet", 0xEE82EE),
    named("Orchid", 0xDA70D6),
    named("Medium Orchid", 0xBA55D3),
    named("Medium Purple", 0x9370DB),
    named("Rebecca Purple", 0x663399),
    named("Blue Violet", 0x8A2BE2),
    named("Dark Violet", 0x9400D3),
    named("Dark Orchid", 0x9932CC),
    named("Dark Magenta", 0x8B008B),
    named("Indigo", 0x4B0082),
    named("Slate Blue", 0x6A5ACD),
    named("Dark Slate Blue", 0x483D8B),
    named("Medium Slate Blue", 0x7B68EE),
    // Greens.
    named("Green Yellow", 0xADFF2F),
    named("Chartreuse", 0x7FFF00),
    named("Lawn Green", 0x7CFC00),
    named("Lime Green", 0x32CD32),
    named("Pale Green", 0x98FB98),
    named("Light Green", 0x90EE90),
    named("Medium Spring Green", 0x00FA9A),
    named("Spring Green", 0x00FF7F),
    named("Medium Sea Green", 0x3CB371),
    named("Sea Green", 0x2E8B57),
    named("Forest Green", 0x228B22),
    named("Dark Green", 0x006400),
    named("Yellow Green", 0x9ACD32),
    named("Olive Drab", 0x6B8E23),
    named("Dark Olive Green", 0x556B2F),
    named("Medium Aquamarine", 0x66CDAA),
    named("Dark Sea Green", 0x8FBC8F),
    named("Light Sea Green", 0x20B2AA),
    named("Dark Cyan", 0x008B8B),
    // Blues and cyans.
    named("Light Cyan", 0xE0FFFF),
    named("Pale Turquoise", 0xAFEEEE),
    named("Aquamarine", 0x7FFFD4),
    named("Turquoise", 0x40E0D0),
    named("Medium Turquoise", 0x48D1CC),
    named("Dark Turquoise", 0x00CED1),
    named("Cadet Blue", 0x5F9EA0),
    named("Steel Blue", 0x4682B4),
    named("Light Steel Blue", 0xB0C4DE),
    named("Powder Blue", 0xB0E0E6),
    named("Light Blue", 0xADD8E6),
    named("Sky Blue", 0x87CEEB),
    named("Light Sky Blue", 0x87CEFA),
    named("Deep Sky Blue", 0x00BFFF),
    named("Dodger Blue", 0x1E90FF),
    named("Cornflower Blue", 0x6495ED),
    named("Royal Blue", 0x4169E1),
    named("Medium Blue", 0x0000CD),
    named("Dark Blue", 0x00008B),
    named("Midnight Blue", 0x191970),
    // Browns.
    named("Cornsilk", 0xFFF8DC),
    named("Blanched Almond", 0xFFEBCD),
    named("Bisque", 0xFFE4C4),
    named("Navajo White", 0xFFDEAD),
    named("Wheat", 0xF5DEB3),
    named("Burlywood", 0xDEB887),
    named("Tan", 0xD2B48C),
    named("Rosy Brown", 0xBC8F8F),
    named("Sandy Brown", 0xF4A460),
    named("Goldenrod", 0xDAA520),
    named("Dark Goldenrod", 0xB8860B),
    named("Peru", 0xCD853F),
    named("Chocolate", 0xD2691E),
    named("Saddle Brown", 0x8B4513),
    named("Sienna", 0xA0522D),
    // Whites.
    named("Snow", 0xFFFAFA),
    named("Honeydew", 0xF0FFF0),
    named("Mint Cream", 0xF5FFFA),
    named("Azure", 0xF0FFFF),
    named("Alice Blue", 0xF0F8FF),
    named("Ghost White", 0xF8F8FF),
    named("White Smoke", 0xF5F5F5),
    named("Seashell", 0xFFF5EE),
    named("Beige", 0xF5F5DC),
    named("Old Lace", 0xFDF5E6),
    named("Floral White", 0xFFFAF0),
    named("Ivory", 0xFFFFF0),
    named("Antique White", 0xFAEBD7),
    named("Linen", 0xFAF0E6),
    named("Lavender Blush", 0xFFF0F5),
    named("Misty Rose", 0xFFE4E1),
    // Grays.
    named("Gainsboro", 0xDCDCDC),
    named("Light Gray", 0xD3D3D3),
    named("Silver", 0xC0C0C0),
    named("Dark Gray", 0xA9A9A9),
    named("Dim Gray", 0x696969),
    named("Light Slate Gray", 0x778899),
    named("Slate Gray", 0x708090),
    named("Dark Slate Gray", 0x2F4F4F),
];

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Resolves colors to names with a configurable nearest-match distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameResolver {
    /// Maximum RGB distance for step 2. Zero disables nearest matching.
    pub threshold: f64,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_DISTANCE)
    }
}

impl NameResolver {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Name a color.
    #[must_use]
    pub fn resolve(&self, color: Color) -> String {
        if let Some(entry) = exact_match(color) {
            return entry.name.to_string();
        }
        match nearest_named(color) {
            Some((entry, dist)) if dist <= self.threshold => entry.name.to_string(),
            _ => synthetic_name(color.to_hsl()),
        }
    }

    /// Name a color given as hex text.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if `hex` does not parse.
    pub fn resolve_hex(&self, hex: &str) -> Result<String, ColorError> {
        Color::from_hex(hex).map(|c| self.resolve(c))
    }
}

/// Name a color with the default distance threshold.
#[must_use]
pub fn resolve_name(color: Color) -> String {
    NameResolver::default().resolve(color)
}

/// Name a hex color with the default distance threshold.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] if `hex` does not parse.
pub fn resolve_name_hex(hex: &str) -> Result<String, ColorError> {
    NameResolver::default().resolve_hex(hex)
}

/// The first table entry with exactly this color.
#[must_use]
pub fn exact_match(color: Color) -> Option<&'static NamedColor> {
    NAMED_COLORS.iter().find(|e| e.color == color)
}

/// The closest table entry and its distance. Ties go to the earlier entry.
#[must_use]
pub fn nearest_named(color: Color) -> Option<(&'static NamedColor, f64)> {
    NAMED_COLORS
        .iter()
        .map(|e| (e, color.distance(e.color)))
        .fold(None, |best, (e, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((e, d)),
        })
}

/// Describe a color by hue bucket, lightness and saturation.
#[must_use]
pub fn synthetic_name(hsl: Hsl) -> String {
    if hsl.s < 20.0 {
        let gray = if hsl.l < 30.0 {
            "Dark Gray"
        } else if hsl.l > 80.0 {
            "White"
        } else {
            "Gray"
        };
        return gray.to_string();
    }

    let lightness = if hsl.l < 20.0 {
        "Dark "
    } else if hsl.l > 80.0 {
        "Light "
    } else {
        ""
    };
    let saturation = if hsl.s < 40.0 {
        "Grayish "
    } else if hsl.s > 80.0 {
        "Vibrant "
    } else {
        ""
    };
    format!("{lightness}{saturation}{}", hue_bucket(hsl.h))
}

fn hue_bucket(h: f64) -> &'static str {
    match h {
        h if h < 30.0 => "Red",
        h if h < 60.0 => "Orange",
        h if h < 90.0 => "Yellow",
        h if h < 150.0 => "Green",
        h if h < 210.0 => "Cyan",
        h if h < 270.0 => "Blue",
        h if h < 330.0 => "Purple",
        _ => "Red",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn basic_lookups() {
        assert_eq!(resolve_name_hex("#FF0000").unwrap(), "Red");
        assert_eq!(resolve_name_hex("#000000").unwrap(), "Black");
        assert_eq!(resolve_name_hex("#FFFFFF").unwrap(), "White");
        assert_eq!(resolve_name_hex("1a365d").unwrap(), "Blue Slate");
    }

    #[test]
    fn first_entry_wins_on_shared_hex() {
        assert_eq!(resolve_name(Color::rgb(0, 255, 255)), "Cyan");
        assert_eq!(resolve_name(Color::rgb(0, 128, 0)), "Dark Green");
    }

    #[test]
    fn invalid_hex_is_an_error() {
        assert!(resolve_name_hex("#12345").is_err());
        assert!(resolve_name_hex("red").is_err());
    }

    #[test]
    fn near_colors_take_table_name() {
        assert_eq!(resolve_name(Color::rgb(250, 5, 5)), "Red");
        let (entry, dist) = nearest_named(Color::rgb(250, 5, 5)).unwrap();
        assert_eq!(entry.name, "Red");
        assert!(dist < 10.0);
    }

    #[test]
    fn zero_threshold_falls_through_to_synthetic() {
        let strict = NameResolver::new(0.0);
        assert_eq!(strict.resolve(Color::rgb(0x20, 0x40, 0xC0)), "Blue");
        // Exact matches still apply.
        assert_eq!(strict.resolve(Color::WHITE), "White");
    }

    #[test]
    fn table_has_no_exact_duplicate_entries() {
        for (i, a) in NAMED_COLORS.iter().enumerate() {
            for b in &NAMED_COLORS[i + 1..] {
                assert!(a != b, "duplicate entry {a:?}");
            }
        }
        assert!(NAMED_COLORS.len() >= 140);
    }

    // ── Synthetic names ─────────────────────────────────────────────

    #[test]
    fn synthetic_grays() {
        assert_eq!(synthetic_name(Hsl::new(0.0, 5.0, 10.0)), "Dark Gray");
        assert_eq!(synthetic_name(Hsl::new(200.0, 10.0, 50.0)), "Gray");
        assert_eq!(synthetic_name(Hsl::new(60.0, 19.0, 90.0)), "White");
    }

    #[test]
    fn synthetic_descriptors() {
        assert_eq!(synthetic_name(Hsl::new(10.0, 90.0, 50.0)), "Vibrant Red");
        assert_eq!(synthetic_name(Hsl::new(45.0, 30.0, 50.0)), "Grayish Orange");
        assert_eq!(synthetic_name(Hsl::new(240.0, 60.0, 10.0)), "Dark Blue");
        assert_eq!(synthetic_name(Hsl::new(300.0, 90.0, 85.0)), "Light Vibrant Purple");
        assert_eq!(synthetic_name(Hsl::new(350.0, 60.0, 50.0)), "Red");
    }

    #[test]
    fn hue_bucket_edges() {
        assert_eq!(hue_bucket(0.0), "Red");
        assert_eq!(hue_bucket(30.0), "Orange");
        assert_eq!(hue_bucket(89.9), "Yellow");
        assert_eq!(hue_bucket(150.0), "Cyan");
        assert_eq!(hue_bucket(269.0), "Blue");
        assert_eq!(hue_bucket(330.0), "Red");
    }
}
