//! Plain-text, JSON and stylesheet-variable renderings of a palette.
//!
//! Stylesheet variables are named after each swatch's relationship name:
//! "Lighter Base" becomes `--color-lighter-base-bg` in CSS and
//! `$color-lighter-base-bg` in SCSS. Repeated names get a numeric suffix.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contrast::WcagLevel;
use crate::engine::EngineState;
use crate::harmony::HarmonyType;
use crate::names::NameResolver;
use crate::palette::ColorCombination;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize palette: {0}")]
    Json(#[from] serde_json::Error),
}

/// One swatch as exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwatchRecord {
    /// Relationship name ("Base", "Complementary", ...).
    pub name: String,
    /// Resolved color name ("Blue Slate", "Vibrant Red", ...).
    pub color_name: String,
    pub background: String,
    pub text: String,
    /// Contrast ratio with two decimals.
    pub ratio: String,
    pub level: WcagLevel,
    pub locked: bool,
}

impl SwatchRecord {
    #[must_use]
    pub fn new(combo: &ColorCombination, names: &NameResolver) -> Self {
        Self {
            name: combo.name.clone(),
            color_name: names.resolve(combo.background),
            background: combo.background.to_hex(),
            text: combo.text.to_hex(),
            ratio: format!("{:.2}", combo.ratio),
            level: combo.level,
            locked: combo.is_locked,
        }
    }
}

/// A whole palette as exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteExport {
    pub base: String,
    pub harmony: HarmonyType,
    pub swatches: Vec<SwatchRecord>,
}

impl PaletteExport {
    #[must_use]
    pub fn from_state(state: &EngineState, names: &NameResolver) -> Self {
        Self {
            base: state.base.to_hex(),
            harmony: state.harmony,
            swatches: state
                .palette
                .iter()
                .map(|c| SwatchRecord::new(c, names))
                .collect(),
        }
    }
}

impl fmt::Display for PaletteExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WCAG 2.1 Color Palette")?;
        writeln!(f, "Base Color: {}", self.base)?;
        writeln!(f, "Harmony: {}", self.harmony.label())?;
        for s in &self.swatches {
            writeln!(f)?;
            let lock = if s.locked { " [locked]" } else { "" };
            writeln!(f, "{} ({}){lock}", s.background, s.name)?;
            writeln!(f, "Text: {}", s.text)?;
            writeln!(f, "Contrast Ratio: {}:1", s.ratio)?;
            writeln!(f, "WCAG Level: {}", s.level)?;
            writeln!(f, "Color Name: {}", s.color_name)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Stylesheet variables
// ---------------------------------------------------------------------------

/// Lowercase `name`, replacing every character outside `[a-z0-9]` with `-`.
#[must_use]
pub fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// One slug per swatch, in order. The second "Lighter Base" becomes
/// `lighter-base-2`, the third `lighter-base-3`.
fn variable_names(swatches: &[SwatchRecord]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    swatches
        .iter()
        .map(|s| {
            let base = slug(&s.name);
            let n = seen.entry(base.clone()).or_insert(0);
            *n += 1;
            if *n == 1 { base } else { format!("{base}-{n}") }
        })
        .collect()
}

/// SCSS variables, two per swatch.
#[derive(Debug, Clone, Copy)]
pub struct Scss<'a>(pub &'a PaletteExport);

impl fmt::Display for Scss<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = variable_names(&self.0.swatches);
        for (s, name) in self.0.swatches.iter().zip(&names) {
            writeln!(f, "$color-{name}-bg: {};", s.background)?;
            writeln!(f, "$color-{name}-text: {};", s.text)?;
        }
        Ok(())
    }
}

/// CSS custom properties on `:root`, two per swatch.
#[derive(Debug, Clone, Copy)]
pub struct Css<'a>(pub &'a PaletteExport);

impl fmt::Display for Css<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = variable_names(&self.0.swatches);
        writeln!(f, ":root {{")?;
        for (s, name) in self.0.swatches.iter().zip(&names) {
            writeln!(f, "  --color-{name}-bg: {};", s.background)?;
            writeln!(f, "  --color-{name}-text: {};", s.text)?;
        }
        writeln!(f, "}}")
    }
}

#[must_use]
pub fn to_scss(state: &EngineState) -> String {
    Scss(&PaletteExport::from_state(state, &NameResolver::default())).to_string()
}

#[must_use]
pub fn to_css(state: &EngineState) -> String {
    Css(&PaletteExport::from_state(state, &NameResolver::default())).to_string()
}

// ---------------------------------------------------------------------------
// Text and JSON
// ---------------------------------------------------------------------------

/// Plain-text report with the default name resolver.
#[must_use]
pub fn to_text(state: &EngineState) -> String {
    to_text_with(state, &NameResolver::default())
}

#[must_use]
pub fn to_text_with(state: &EngineState, names: &NameResolver) -> String {
    PaletteExport::from_state(state, names).to_string()
}

/// Pretty-printed JSON with the default name resolver.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn to_json(state: &EngineState) -> Result<String, ExportError> {
    to_json_with(state, &NameResolver::default())
}

/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn to_json_with(state: &EngineState, names: &NameResolver) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&PaletteExport::from_state(
        state, names,
    ))?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use swatch_color::color::Color;

    #[test]
    fn text_report_layout() {
        let state = EngineState::default();
        let text = to_text(&state);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("WCAG 2.1 Color Palette"));
        assert_eq!(lines.next(), Some("Base Color: #1A365D"));
        assert_eq!(lines.next(), Some("Harmony: Mixed"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("#1A365D (Base) [locked]"));
        assert_eq!(lines.next(), Some("Text: #FFFFFF"));
        let ratio = lines.next().unwrap();
        assert!(ratio.starts_with("Contrast Ratio: ") && ratio.ends_with(":1"), "{ratio}");
        assert_eq!(lines.next(), Some("WCAG Level: AAA"));
        assert_eq!(lines.next(), Some("Color Name: Blue Slate"));

        let blocks = text.matches("Contrast Ratio:").count();
        assert_eq!(blocks, state.palette.len());
    }

    #[test]
    fn ratio_has_two_decimals() {
        let state = EngineState::default();
        let export = PaletteExport::from_state(&state, &NameResolver::default());
        for s in &export.swatches {
            let (_, frac) = s.ratio.split_once('.').unwrap();
            assert_eq!(frac.len(), 2, "{}", s.ratio);
            assert!(s.background.starts_with('#') && s.background.len() == 7);
            assert_eq!(s.background, s.background.to_uppercase());
        }
    }

    #[test]
    fn json_shape() {
        let state = EngineState::default();
        let json: serde_json::Value = serde_json::from_str(&to_json(&state).unwrap()).unwrap();
        assert_eq!(json["base"], "#1A365D");
        assert_eq!(json["harmony"], "mixed");
        let swatches = json["swatches"].as_array().unwrap();
        assert_eq!(swatches.len(), state.palette.len());
        assert_eq!(swatches[0]["name"], "Base");
        assert_eq!(swatches[0]["color_name"], "Blue Slate");
        assert_eq!(swatches[0]["level"], "AAA");
        assert_eq!(swatches[0]["locked"], true);
    }

    // ── Stylesheets ─────────────────────────────────────────────────

    fn record(name: &str, background: &str, text: &str) -> SwatchRecord {
        SwatchRecord {
            name: name.to_string(),
            color_name: String::new(),
            background: background.to_string(),
            text: text.to_string(),
            ratio: "7.00".to_string(),
            level: WcagLevel::Aaa,
            locked: false,
        }
    }

    fn sample_export() -> PaletteExport {
        PaletteExport {
            base: "#1A365D".to_string(),
            harmony: HarmonyType::Mixed,
            swatches: vec![
                record("Base", "#1A365D", "#FFFFFF"),
                record("Lighter Base", "#3A6BAE", "#FFFFFF"),
                record("Lighter Base", "#7FA3D4", "#000000"),
                record("Split Complementary", "#5D2A1A", "#FFFFFF"),
            ],
        }
    }

    #[test]
    fn slug_replaces_non_alphanumerics() {
        assert_eq!(slug("Base"), "base");
        assert_eq!(slug("Split Complementary"), "split-complementary");
        assert_eq!(slug("More Saturated"), "more-saturated");
        assert_eq!(slug("Tone #2 (alt)"), "tone--2--alt-");
        assert_eq!(slug("Café"), "caf-");
    }

    #[test]
    fn scss_layout() {
        let scss = Scss(&sample_export()).to_string();
        assert_eq!(
            scss,
            "$color-base-bg: #1A365D;\n\
             $color-base-text: #FFFFFF;\n\
             $color-lighter-base-bg: #3A6BAE;\n\
             $color-lighter-base-text: #FFFFFF;\n\
             $color-lighter-base-2-bg: #7FA3D4;\n\
             $color-lighter-base-2-text: #000000;\n\
             $color-split-complementary-bg: #5D2A1A;\n\
             $color-split-complementary-text: #FFFFFF;\n"
        );
    }

    #[test]
    fn css_layout() {
        let css = Css(&sample_export()).to_string();
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines.first(), Some(&":root {"));
        assert_eq!(lines.last(), Some(&"}"));
        assert_eq!(lines.len(), 2 + 2 * 4);
        assert_eq!(lines[1], "  --color-base-bg: #1A365D;");
        assert_eq!(lines[5], "  --color-lighter-base-2-bg: #7FA3D4;");
        assert_eq!(lines[8], "  --color-split-complementary-text: #FFFFFF;");
    }

    #[test]
    fn stylesheet_names_are_unique_for_real_palettes() {
        for &harmony in HarmonyType::all() {
            let state = EngineState::new(Color::rgb(128, 128, 128), harmony);
            let css = to_css(&state);
            let mut names: Vec<&str> = css
                .lines()
                .filter_map(|l| l.trim().split_once(':').map(|(n, _)| n))
                .filter(|n| n.starts_with("--"))
                .collect();
            let total = names.len();
            assert_eq!(total, 2 * state.palette.len(), "{harmony:?}");
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "{harmony:?}: {css}");
        }
    }

    #[test]
    fn scss_and_css_carry_same_colors() {
        let state = EngineState::default();
        let scss = to_scss(&state);
        let css = to_css(&state);
        assert_eq!(scss.lines().count(), 2 * state.palette.len());
        for c in &state.palette {
            let hex = c.background.to_hex();
            assert!(scss.contains(&hex) && css.contains(&hex), "{hex}");
        }
        assert!(scss.starts_with("$color-base-bg: #1A365D;"));
    }

    #[test]
    fn json_round_trips_through_export_type() {
        let state = EngineState::default();
        let names = NameResolver::default();
        let json = to_json_with(&state, &names).unwrap();
        let back: PaletteExport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PaletteExport::from_state(&state, &names));
    }
}
