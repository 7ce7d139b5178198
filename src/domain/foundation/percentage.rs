//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole number between 0 and 100 inclusive.
///
/// Persona scores are accumulated as signed point totals (the ad-hater
/// persona subtracts penalties), so construction from `i32` clamps on both
/// ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage from a signed point total, clamping to 0..=100.
    pub fn from_points(points: i32) -> Self {
        Self(points.clamp(0, 100) as u8)
    }

    /// Creates a Percentage as `round(part / whole * 100)`.
    ///
    /// A zero `whole` yields zero.
    pub fn of(part: u32, whole: u32) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let pct = (f64::from(part) / f64::from(whole) * 100.0).round();
        Self(pct.clamp(0.0, 100.0) as u8)
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range("percentage", 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(100).value(), 100);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_from_points_clamps_both_ends() {
        assert_eq!(Percentage::from_points(-35).value(), 0);
        assert_eq!(Percentage::from_points(90).value(), 90);
        assert_eq!(Percentage::from_points(140).value(), 100);
    }

    #[test]
    fn percentage_of_rounds() {
        assert_eq!(Percentage::of(90, 100).value(), 90);
        assert_eq!(Percentage::of(1, 3).value(), 33);
        assert_eq!(Percentage::of(2, 3).value(), 67);
        assert_eq!(Percentage::of(5, 0), Percentage::ZERO);
    }

    #[test]
    fn percentage_try_new_rejects_out_of_range() {
        assert!(Percentage::try_new(0).is_ok());
        assert!(Percentage::try_new(100).is_ok());
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "percentage");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            _ => panic!("Expected OutOfRange error"),
        }
        assert!(Percentage::try_new(-1).is_err());
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::HUNDRED), "100%");
    }

    #[test]
    fn percentage_serializes_as_plain_number() {
        let json = serde_json::to_string(&Percentage::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
