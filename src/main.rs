// SPDX-License-Identifier: MIT
//
// swatch: generate accessible color palettes from the command line.
//
// The binary is a thin host around swatch-palette's Session:
//
//   flags → EngineConfig (+ optional TOML file) → Session
//   --base / --harmony / --random-base → rebuild events
//   --lock N ...                       → lock slots that are not locked yet
//   --shuffle / --shuffle-unlocked     → re-roll unlocked swatches
//   final state → text, JSON, CSS or SCSS on stdout
//
// Logging goes to stderr through tracing-subscriber; set RUST_LOG=debug to
// watch each transition.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use swatch_palette::engine::{EngineError, Session};
use swatch_palette::export::{self, Css, ExportError, PaletteExport, Scss};
use swatch_palette::{ConfigError, EngineConfig, HarmonyType};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    /// CSS custom properties on `:root`.
    Css,
    /// SCSS variables.
    Scss,
}

#[derive(Debug, Parser)]
#[command(name = "swatch", version, about = "Generate WCAG-accessible color palettes")]
struct Cli {
    /// Base color as #RRGGBB.
    #[arg(short, long, value_name = "HEX")]
    base: Option<String>,

    /// Harmony: complementary, analogous, triadic, split-complementary,
    /// monochromatic, tetradic, square or all.
    #[arg(short = 'H', long)]
    harmony: Option<HarmonyType>,

    /// Start from a random base color.
    #[arg(long, conflicts_with = "base")]
    random_base: bool,

    /// Lock a swatch by index before shuffling. Repeatable; a slot that is
    /// already locked stays locked.
    #[arg(short, long = "lock", value_name = "INDEX")]
    locks: Vec<usize>,

    /// Re-roll unlocked swatches (lightness 40-70).
    #[arg(long, conflicts_with = "shuffle_unlocked")]
    shuffle: bool,

    /// Re-roll unlocked swatches (lightness 40-80).
    #[arg(long)]
    shuffle_unlocked: bool,

    /// Seed for reproducible random output.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// TOML file with engine defaults.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the harmony names and exit.
    #[arg(long)]
    list_harmonies: bool,
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Config { path: PathBuf, source: ConfigError },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

// ─── Run ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig, CliError> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    EngineConfig::from_toml_str(&text).map_err(|source| CliError::Config {
        path: path.clone(),
        source,
    })
}

fn list_harmonies() -> String {
    let mut out = String::new();
    for h in HarmonyType::all() {
        let _ = writeln!(out, "{:<20} {}", h.name(), h.label());
    }
    out
}

fn run(cli: &Cli) -> Result<String, CliError> {
    if cli.list_harmonies {
        return Ok(list_harmonies());
    }

    let config = load_config(cli.config.as_ref())?;
    let names = config.name_resolver();
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut session = Session::new(config, rng);

    if let Some(base) = &cli.base {
        session.set_base_color(base)?;
    }
    if let Some(harmony) = cli.harmony {
        session.set_harmony(harmony)?;
    }
    if cli.random_base {
        session.regenerate_with_random_base()?;
    }
    for &index in &cli.locks {
        if !session.palette().get(index).is_some_and(|c| c.is_locked) {
            session.toggle_lock(index)?;
        }
    }
    if cli.shuffle {
        session.shuffle()?;
    } else if cli.shuffle_unlocked {
        session.shuffle_unlocked()?;
    }

    let state = session.state();
    debug!(base = %state.base, swatches = state.palette.len(), "rendering");
    match cli.format {
        Format::Text => Ok(export::to_text_with(state, &names)),
        Format::Json => Ok(export::to_json_with(state, &names)? + "\n"),
        Format::Css => Ok(Css(&PaletteExport::from_state(state, &names)).to_string()),
        Format::Scss => Ok(Scss(&PaletteExport::from_state(state, &names)).to_string()),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("swatch: {e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
