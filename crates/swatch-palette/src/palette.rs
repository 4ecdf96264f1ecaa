//! Palette normalization: the bridge from harmony candidates to swatches.
//!
//! Takes the raw candidate list from [`harmony`](crate::harmony) and turns
//! it into a [`Palette`]: exactly 6 or 9 scored, named swatches with the
//! base color pinned at slot 0.
//!
//! ```text
//! candidates ─▶ dedup ─▶ size (6 | 9) ─▶ base at 0 ─▶ score ─▶ filter
//!                                                              │
//!                              Palette ◀── sort ◀── name ◀─────┘
//! ```

use serde::{Deserialize, Serialize};
use swatch_color::color::{Color, Hsl, hue_distance};
use tracing::debug;

use crate::contrast::{Evaluation, WcagLevel};
use crate::harmony::HarmonyType;

/// Size of a short palette.
pub const SMALL_PALETTE: usize = 6;

/// Size of a full palette.
pub const LARGE_PALETTE: usize = 9;

/// Hue difference under which a swatch counts as "the same hue" as the base.
const SAME_HUE: f64 = 15.0;

/// Tolerance around the canonical harmony angles when naming.
const ANGLE_TOLERANCE: f64 = 15.0;

// ---------------------------------------------------------------------------
// ColorCombination
// ---------------------------------------------------------------------------

/// One palette slot: a background, the text color that reads best on it,
/// and how well it reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorCombination {
    pub background: Color,
    /// Always pure black or pure white.
    pub text: Color,
    pub name: String,
    pub ratio: f64,
    pub level: WcagLevel,
    pub is_base: bool,
    pub is_locked: bool,
}

impl ColorCombination {
    /// Score `background` and wrap it as an unlocked, non-base swatch.
    #[must_use]
    pub fn evaluate(background: Color, name: impl Into<String>) -> Self {
        let eval = Evaluation::of(background);
        Self {
            background,
            text: eval.text,
            name: name.into(),
            ratio: eval.ratio,
            level: eval.level,
            is_base: false,
            is_locked: false,
        }
    }

    /// The base swatch: named "Base", locked, exempt from filtering.
    #[must_use]
    pub fn base(background: Color) -> Self {
        Self {
            is_base: true,
            is_locked: true,
            ..Self::evaluate(background, "Base")
        }
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// An ordered list of swatches.
///
/// Palettes built by [`generate_palette`] and the engine transitions hold
/// 6 or 9 entries, with a locked base at index 0 and no failing swatches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<ColorCombination>);

impl Palette {
    #[must_use]
    pub fn swatches(&self) -> &[ColorCombination] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ColorCombination> {
        self.0.get(index)
    }

    /// The swatch at slot 0.
    #[must_use]
    pub fn base(&self) -> Option<&ColorCombination> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorCombination> {
        self.0.iter()
    }

    /// Whether the shape invariants hold: 6 or 9 entries, a locked base at
    /// slot 0 and nowhere else, no non-base swatch at `Fail`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let sized = matches!(self.len(), SMALL_PALETTE | LARGE_PALETTE);
        let base_ok = self.base().is_some_and(|b| b.is_base && b.is_locked);
        let single_base = self.iter().filter(|c| c.is_base).count() == 1;
        let passing = self.iter().skip(1).all(|c| c.level.passes());
        sized && base_ok && single_base && passing
    }

    pub(crate) const fn from_vec(swatches: Vec<ColorCombination>) -> Self {
        Self(swatches)
    }

    pub(crate) fn into_vec(self) -> Vec<ColorCombination> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorCombination;
    type IntoIter = std::slice::Iter<'a, ColorCombination>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Build a normalized palette for `base` under `harmony`.
#[must_use]
pub fn generate_palette(base: Color, harmony: HarmonyType) -> Palette {
    let base_hsl = base.to_hsl();
    let candidates = dedup(harmony.candidates(base_hsl));
    let raw = candidates.len();
    let colors = place_base(canonicalize_size(candidates, base_hsl), base);

    let mut swatches = drop_failing(score(&colors, base_hsl, harmony), base_hsl, harmony);
    sort_swatches(&mut swatches);
    debug!(
        base = %base,
        harmony = harmony.name(),
        candidates = raw,
        size = swatches.len(),
        "palette generated"
    );
    Palette::from_vec(swatches)
}

const fn is_canonical_size(len: usize) -> bool {
    matches!(len, SMALL_PALETTE | LARGE_PALETTE)
}

/// Drop repeated colors, keeping first occurrences in order.
fn dedup(colors: Vec<Color>) -> Vec<Color> {
    let mut out: Vec<Color> = Vec::with_capacity(colors.len());
    for c in colors {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

/// Force the list to 6 or 9 entries.
///
/// - more than 9: keep the first 9
/// - 7 or 8: pad with lighter (+25 L) then darker (−25 L) base variants
/// - fewer than 6: pad with lighter (+20 L), complement, darker and muted
///
/// Padding never repeats a color already in the list. When the preferred
/// variants are used up, lightness steps of 5 around the base fill the rest.
fn canonicalize_size(mut colors: Vec<Color>, base: Hsl) -> Vec<Color> {
    let len = colors.len();
    let (target, preferred) = if len > LARGE_PALETTE {
        colors.truncate(LARGE_PALETTE);
        return colors;
    } else if len > SMALL_PALETTE && len < LARGE_PALETTE {
        let lighter = base.adjust_lightness(25.0, 0.0, 90.0);
        let darker = base.adjust_lightness(-25.0, 10.0, 100.0);
        (LARGE_PALETTE, vec![lighter, darker])
    } else if len < SMALL_PALETTE {
        let lighter = base.adjust_lightness(20.0, 10.0, 90.0);
        let muted = base.adjust_saturation(-10.0).adjust_lightness(-20.0, 10.0, 90.0);
        (SMALL_PALETTE, vec![lighter, base.complement(), muted])
    } else {
        return colors;
    };

    let steps = (1..=20_u8).flat_map(|k| {
        let d = 5.0 * f64::from(k);
        [base.adjust_lightness(d, 0.0, 100.0), base.adjust_lightness(-d, 0.0, 100.0)]
    });
    for hsl in preferred.into_iter().chain(steps) {
        if colors.len() == target {
            break;
        }
        let c = Color::from_hsl(hsl);
        if !colors.contains(&c) {
            colors.push(c);
        }
    }
    colors
}

/// Remove non-base swatches at `Fail`, refilling with base variants if the
/// list falls off a canonical size.
fn drop_failing(
    mut swatches: Vec<ColorCombination>,
    base: Hsl,
    harmony: HarmonyType,
) -> Vec<ColorCombination> {
    swatches.retain(|c| c.is_base || c.level.passes());
    if is_canonical_size(swatches.len()) {
        return swatches;
    }
    // Black/white text keeps the refill passing.
    let kept: Vec<Color> = swatches.iter().map(|c| c.background).collect();
    score(&canonicalize_size(kept, base), base, harmony)
}

/// Move the base to index 0, inserting it (and re-sizing) if absent.
fn place_base(mut colors: Vec<Color>, base: Color) -> Vec<Color> {
    match colors.iter().position(|&c| c == base) {
        Some(0) => colors,
        Some(pos) => {
            let c = colors.remove(pos);
            colors.insert(0, c);
            colors
        }
        None => {
            colors.insert(0, base);
            canonicalize_size(colors, base.to_hsl())
        }
    }
}

fn score(colors: &[Color], base: Hsl, harmony: HarmonyType) -> Vec<ColorCombination> {
    colors
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if i == 0 {
                ColorCombination::base(c)
            } else {
                ColorCombination::evaluate(c, relationship_name(base, c.to_hsl(), harmony))
            }
        })
        .collect()
}

/// Base first, then AAA before AA, then highest ratio first.
fn sort_swatches(swatches: &mut [ColorCombination]) {
    if let Some(rest) = swatches.get_mut(1..) {
        rest.sort_by(|a, b| {
            a.level
                .rank()
                .cmp(&b.level.rank())
                .then_with(|| b.ratio.total_cmp(&a.ratio))
        });
    }
}

/// Name a swatch by how its hue relates to the base.
#[must_use]
pub fn relationship_name(base: Hsl, color: Hsl, harmony: HarmonyType) -> &'static str {
    // A gray has no hue to compare; treat it as sharing the base hue.
    let dh = if base.is_achromatic() || color.is_achromatic() {
        0.0
    } else {
        hue_distance(base.h, color.h)
    };
    let near = |angle: f64| (dh - angle).abs() <= ANGLE_TOLERANCE;

    if dh < SAME_HUE {
        let ds = color.s - base.s;
        if harmony == HarmonyType::Monochromatic && ds.abs() > 15.0 {
            return if ds > 0.0 { "More Saturated" } else { "Less Saturated" };
        }
        let dl = color.l - base.l;
        return if dl > 0.5 {
            "Lighter Base"
        } else if dl < -0.5 {
            "Darker Base"
        } else {
            "Base"
        };
    }

    if near(180.0) {
        "Complementary"
    } else if dh <= 40.0 {
        "Analogous"
    } else if near(120.0) {
        "Triadic"
    } else if near(150.0) {
        "Split Complementary"
    } else if near(60.0) {
        "Tetradic"
    } else if near(90.0) {
        "Square"
    } else {
        harmony.label()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
