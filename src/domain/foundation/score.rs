//! Score value object (0-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// An integer score between 0 and 10 inclusive.
///
/// Every criterion and behavioral-driver score leaves the scoring core as a
/// `Score`, so out-of-range intermediates are clamped here rather than
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Lowest possible score.
    pub const MIN: Self = Self(0);

    /// Highest possible score.
    pub const MAX: Self = Self(10);

    /// The score assumed whenever an AI judgment is missing.
    pub const NEUTRAL: Self = Self(5);

    /// Creates a new Score, clamping to 0..=10.
    pub fn new(value: u8) -> Self {
        Self(value.min(10))
    }

    /// Rounds a fractional value half-up and clamps it to 0..=10.
    ///
    /// Non-finite input is treated as zero.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::MIN;
        }
        Self(value.round().clamp(0.0, 10.0) as u8)
    }

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        if !(0..=10).contains(&value) {
            return Err(ValidationError::out_of_range("score", 0, 10, value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as f64 for weighted arithmetic.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}
