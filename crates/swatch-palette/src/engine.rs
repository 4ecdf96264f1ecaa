//! Palette state and its transitions.
//!
//! [`EngineState`] is an immutable snapshot: base color, harmony, palette.
//! [`EngineState::apply`] maps a state and an [`Event`] to the next state
//! and never mutates in place. Locked swatches survive any transition that
//! rebuilds the palette.
//!
//! [`Session`] wraps a state for a host that triggers generation
//! asynchronously:
//!
//! ```text
//! session.begin(event)?;   // marks a generation as in flight
//! // ... host shows a spinner ...
//! session.finish()?;       // applies the event, clears the flag
//! ```
//!
//! A second `begin` while one is in flight is rejected with
//! [`EngineError::Busy`]. Events are never queued.

use rand::Rng;
use swatch_color::color::{Color, Hsl};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{EngineConfig, ShuffleRange};
use crate::harmony::HarmonyType;
use crate::palette::{ColorCombination, Palette, generate_palette};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid hex color {0:?}")]
    InvalidHexInput(String),

    #[error("slot {index} is out of range for a palette of {len}")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("a palette is already being generated")]
    Busy,

    #[error("no generation is pending")]
    NothingPending,
}

/// A host action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Parse the text as hex and rebuild around it.
    SetBaseColor(String),
    SetHarmony(HarmonyType),
    /// Flip the lock on a slot. Slot 0 always stays locked.
    ToggleLock(usize),
    /// Re-roll unlocked swatches with the new-palette range.
    Shuffle,
    /// Re-roll unlocked swatches with the regenerate-unlocked range.
    ShuffleUnlocked,
    /// Rebuild around a random base color.
    Regenerate,
    /// Back to the configured base and harmony, all locks cleared.
    Reset,
}

// ---------------------------------------------------------------------------
// EngineState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pub base: Color,
    pub harmony: HarmonyType,
    pub palette: Palette,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl EngineState {
    #[must_use]
    pub fn new(base: Color, harmony: HarmonyType) -> Self {
        Self {
            base,
            harmony,
            palette: generate_palette(base, harmony),
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.base_color, config.harmony)
    }

    /// Compute the state that follows `event`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidHexInput`] if a new base color does not parse
    /// - [`EngineError::SlotOutOfRange`] if a lock toggle names no slot
    pub fn apply<R: Rng + ?Sized>(
        &self,
        event: &Event,
        rng: &mut R,
        config: &EngineConfig,
    ) -> Result<Self, EngineError> {
        debug!(?event, base = %self.base, harmony = self.harmony.name(), "apply");
        match event {
            Event::SetBaseColor(input) => {
                let base = Color::from_hex(input)
                    .map_err(|_| EngineError::InvalidHexInput(input.clone()))?;
                Ok(self.rebuild(base, self.harmony))
            }
            Event::SetHarmony(harmony) => Ok(self.rebuild(self.base, *harmony)),
            Event::ToggleLock(index) => self.toggle_lock(*index),
            Event::Shuffle => Ok(self.shuffle(&config.shuffle, rng)),
            Event::ShuffleUnlocked => Ok(self.shuffle(&config.shuffle_unlocked, rng)),
            Event::Regenerate => Ok(self.rebuild(random_base(rng), self.harmony)),
            Event::Reset => Ok(Self::from_config(config)),
        }
    }

    fn rebuild(&self, base: Color, harmony: HarmonyType) -> Self {
        Self {
            base,
            harmony,
            palette: overlay_locked(&self.palette, generate_palette(base, harmony)),
        }
    }

    fn toggle_lock(&self, index: usize) -> Result<Self, EngineError> {
        let mut swatches = self.palette.clone().into_vec();
        let len = swatches.len();
        let slot = swatches
            .get_mut(index)
            .ok_or(EngineError::SlotOutOfRange { index, len })?;
        slot.is_locked = index == 0 || !slot.is_locked;
        Ok(Self {
            palette: Palette::from_vec(swatches),
            ..self.clone()
        })
    }

    fn shuffle<R: Rng + ?Sized>(&self, range: &ShuffleRange, rng: &mut R) -> Self {
        let base_hue = self.base.to_hsl().h;
        let mut swatches = self.palette.clone().into_vec();
        for slot in swatches.iter_mut().skip(1) {
            if slot.is_locked || slot.is_base {
                continue;
            }
            let hue = f64::from(rng.random_range(0..360_u16));
            let s = range.saturation.draw(rng);
            let l = range.lightness.draw(rng);
            let color = Color::from_hsl(Hsl::new(hue, s, l));
            *slot = ColorCombination::evaluate(color, shuffle_name(base_hue, hue));
        }
        Self {
            palette: Palette::from_vec(swatches),
            ..self.clone()
        }
    }
}

/// Carry locked swatches (slot 1 onward) from `previous` into `fresh` at
/// the same index. Slot 0 always comes from `fresh`.
#[must_use]
pub fn overlay_locked(previous: &Palette, fresh: Palette) -> Palette {
    let mut swatches = fresh.into_vec();
    let len = swatches.len();
    for (index, prev) in previous.iter().enumerate().skip(1) {
        if !prev.is_locked {
            continue;
        }
        match swatches.get_mut(index) {
            Some(slot) => {
                *slot = ColorCombination {
                    is_locked: true,
                    is_base: false,
                    ..prev.clone()
                };
            }
            None => warn!(
                index,
                len,
                background = %prev.background,
                "locked swatch dropped, new palette is shorter"
            ),
        }
    }
    Palette::from_vec(swatches)
}

/// A uniformly random RGB color.
pub fn random_base<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::rgb(rng.random(), rng.random(), rng.random())
}

/// Coarse relationship name for a shuffled hue, by raw (non-circular)
/// difference from the base hue.
#[must_use]
pub fn shuffle_name(base_hue: f64, hue: f64) -> &'static str {
    let delta = hue - base_hue;
    let abs = delta.abs();
    if abs < 30.0 || abs > 330.0 {
        "Analogous"
    } else if abs > 150.0 && abs < 210.0 {
        "Complementary"
    } else if (delta - 120.0).abs() < 30.0 || (delta - 240.0).abs() < 30.0 {
        "Triadic"
    } else {
        "Random"
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Single-flight driver around [`EngineState`].
#[derive(Debug)]
pub struct Session<R> {
    state: EngineState,
    config: EngineConfig,
    rng: R,
    pending: Option<Event>,
}

impl<R: Rng> Session<R> {
    /// Start from the configured base color and harmony.
    pub fn new(config: EngineConfig, rng: R) -> Self {
        Self {
            state: EngineState::from_config(&config),
            config,
            rng,
            pending: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &EngineState {
        &self.state
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.state.palette
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether a generation has begun and not finished.
    #[must_use]
    pub const fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Mark `event` as in flight.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Busy`] if another event is already in flight.
    pub fn begin(&mut self, event: Event) -> Result<(), EngineError> {
        if self.pending.is_some() {
            warn!(?event, "generation already in flight, event rejected");
            return Err(EngineError::Busy);
        }
        self.pending = Some(event);
        Ok(())
    }

    /// Apply the in-flight event. On error the previous state is kept and
    /// the session is idle again.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NothingPending`] without a prior `begin`, or
    /// the error from [`EngineState::apply`].
    pub fn finish(&mut self) -> Result<&EngineState, EngineError> {
        let event = self.pending.take().ok_or(EngineError::NothingPending)?;
        match self.state.apply(&event, &mut self.rng, &self.config) {
            Ok(next) => {
                self.state = next;
                Ok(&self.state)
            }
            Err(err) => {
                warn!(?event, %err, "event ignored");
                Err(err)
            }
        }
    }

    /// `begin` and `finish` in one call.
    ///
    /// # Errors
    ///
    /// See [`begin`](Self::begin) and [`finish`](Self::finish).
    pub fn dispatch(&mut self, event: Event) -> Result<&EngineState, EngineError> {
        self.begin(event)?;
        self.finish()
    }

    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHexInput`] for unparsable input.
    pub fn set_base_color(&mut self, hex: &str) -> Result<&EngineState, EngineError> {
        self.dispatch(Event::SetBaseColor(hex.to_string()))
    }

    /// # Errors
    ///
    /// Returns [`EngineError::Busy`] while another event is in flight.
    pub fn set_harmony(&mut self, harmony: HarmonyType) -> Result<&EngineState, EngineError> {
        self.dispatch(Event::SetHarmony(harmony))
    }

    /// # Errors
    ///
    /// Returns [`EngineError::SlotOutOfRange`] for an index past the end.
    pub fn toggle_lock(&mut self, index: usize) -> Result<&EngineState, EngineError> {
        self.dispatch(Event::ToggleLock(index))
    }

    /// # Errors
    ///
    /// Returns [`EngineError::Busy`] while another event is in flight.
    pub fn shuffle(&mut self) -> Result<&EngineState, EngineError> {
        self.dispatch(Event::Shuffle)
    }

    /// # Errors
    ///
    /// Returns [`EngineError::Busy`] while another event is in flight.
    pub fn shuffle_unlocked(&mut self) -> Result<&EngineState, EngineError> {
        self.dispatch(Event::ShuffleUnlocked)
    }

    /// # Errors
    ///
    /// Returns [`EngineError::Busy`] while another event is in flight.
    pub fn regenerate_with_random_base(&mut self) -> Result<&EngineState, EngineError> {
        self.dispatch(Event::Regenerate)
    }

    /// # Errors
    ///
    /// Returns [`EngineError::Busy`] while another event is in flight.
    pub fn reset(&mut self) -> Result<&EngineState, EngineError> {
        self.dispatch(Event::Reset)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
