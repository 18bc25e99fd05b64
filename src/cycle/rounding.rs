//! Weight rounding to plate increments.

use serde::{Deserialize, Serialize};

use super::types::{RoundingMode, Units};

/// Rounds raw percentages-of-TM to weights that can be loaded on a bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundingPolicy {
    /// Plate increment, e.g. 5 lb or 2.5 kg
    pub increment: f64,
    pub mode: RoundingMode,
    pub units: Units,
}

impl RoundingPolicy {
    pub fn new(increment: f64, mode: RoundingMode, units: Units) -> Self {
        Self {
            increment,
            mode,
            units,
        }
    }

    /// Policy using the unit system's standard increment.
    pub fn default_for(units: Units) -> Self {
        Self::new(units.default_increment(), RoundingMode::Nearest, units)
    }

    /// Increment actually used for rounding.
    ///
    /// A non-positive configured increment falls back to the unit default
    /// instead of dividing by zero.
    pub fn effective_increment(&self) -> f64 {
        if self.increment > 0.0 && self.increment.is_finite() {
            self.increment
        } else {
            self.units.default_increment()
        }
    }

    /// Round a raw weight onto the increment grid.
    pub fn round(&self, value: f64) -> f64 {
        round_to_increment(value, self.effective_increment(), self.mode)
    }
}

/// Round `value` to a multiple of `increment`.
///
/// Non-finite values round to 0. Callers that may hold a non-positive
/// increment should go through [`RoundingPolicy::round`], which applies the
/// unit-default fallback.
pub fn round_to_increment(value: f64, increment: f64, mode: RoundingMode) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let steps = value / increment;
    match mode {
        RoundingMode::Nearest => steps.round() * increment,
        RoundingMode::Ceil => steps.ceil() * increment,
        RoundingMode::Floor => steps.floor() * increment,
    }
}
