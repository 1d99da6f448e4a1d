//! Distance → proximity state classification.
//!
//! A three-band step function of a single scalar, recomputed from scratch
//! every frame (no hysteresis):
//!
//! | distance `d`                  | state     |
//! |-------------------------------|-----------|
//! | none                          | `NoHand`  |
//! | `d > safe_px`                 | `Safe`    |
//! | `warning_px < d <= safe_px`   | `Warning` |
//! | `d <= warning_px`             | `Danger`  |
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// BGR display colour.
pub type Bgr = [u8; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProximityState {
    Safe,
    Warning,
    Danger,
    NoHand,
}

impl ProximityState {
    /// Colour used for the rectangle and state text.
    pub fn color(self) -> Bgr {
        match self {
            ProximityState::Safe => [0, 255, 0],
            ProximityState::Warning => [0, 255, 255],
            ProximityState::Danger => [0, 0, 255],
            ProximityState::NoHand => [255, 255, 255],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProximityState::Safe => "SAFE",
            ProximityState::Warning => "WARNING",
            ProximityState::Danger => "DANGER",
            ProximityState::NoHand => "NO HAND",
        }
    }
}

impl fmt::Display for ProximityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distance thresholds in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityThresholds {
    /// Strictly farther than this is `Safe`.
    pub safe_px: f64,
    /// At most this close is `Danger`.
    pub warning_px: f64,
}

impl Default for ProximityThresholds {
    fn default() -> Self {
        Self {
            safe_px: 120.0,
            warning_px: 60.0,
        }
    }
}

impl ProximityThresholds {
    pub fn validate(&self) -> Result<()> {
        if !self.safe_px.is_finite() || !self.warning_px.is_finite() {
            return Err(Error::invalid("distance thresholds must be finite"));
        }
        if self.warning_px > self.safe_px {
            return Err(Error::invalid(format!(
                "warning_px ({}) must not exceed safe_px ({})",
                self.warning_px, self.safe_px
            )));
        }
        Ok(())
    }
}

/// Classify a hand-to-boundary distance; `None` means no hand this frame.
pub fn classify_state(distance: Option<f64>, thresholds: &ProximityThresholds) -> ProximityState {
    match distance {
        None => ProximityState::NoHand,
        Some(d) if d > thresholds.safe_px => ProximityState::Safe,
        Some(d) if d > thresholds.warning_px => ProximityState::Warning,
        Some(_) => ProximityState::Danger,
    }
}
