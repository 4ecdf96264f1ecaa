//! # swatch-palette: WCAG-aware palette engine
//!
//! Turns one base color and a harmony strategy into a small palette of
//! readable swatches, and keeps the swatches a user locks across every
//! later regeneration.
//!
//! # Architecture
//!
//! ```text
//! base Color + HarmonyType
//!     │
//!     ▼
//! harmony.rs:  rotate/nudge the base in HSL → candidate colors
//!     │
//!     ▼
//! palette.rs:  dedup, size to 6 or 9, pin base, score, name, sort
//!     │             │
//!     │             └── contrast.rs: luminance, ratio, WCAG level
//!     ▼
//! engine.rs:   EngineState transitions, lock overlay, shuffles
//!     │
//!     ▼
//! export.rs:   text / JSON / CSS / SCSS (names.rs resolves color names)
//! ```
//!
//! Nothing here touches the filesystem or a terminal. Randomness comes in
//! through a caller-supplied [`rand::Rng`].

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]
// Harmony tables are one long match.
#![allow(clippy::too_many_lines)]

pub mod config;
pub mod contrast;
pub mod engine;
pub mod export;
pub mod harmony;
pub mod names;
pub mod palette;

pub use config::{ConfigError, EngineConfig, PercentRange, ShuffleRange};
pub use contrast::{TextUsage, WcagLevel};
pub use engine::{EngineError, EngineState, Event, Session};
pub use export::{
    Css, ExportError, PaletteExport, Scss, SwatchRecord, to_css, to_json, to_scss, to_text,
};
pub use harmony::{HarmonyType, UnknownHarmony};
pub use names::{NameResolver, resolve_name, resolve_name_hex};
pub use palette::{ColorCombination, Palette, generate_palette};
pub use swatch_color::{Color, ColorError, Hsl};
