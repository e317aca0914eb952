// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for bar values,
//! ensuring they are always within valid ranges.

use crate::error::{Error, Result};

// =============================================================================
// Opacity
// =============================================================================

/// Opacity bounds (fully transparent to fully opaque).
pub mod opacity_bounds {
    /// Minimum opacity.
    pub const MIN: f32 = 0.0;
    /// Maximum opacity.
    pub const MAX: f32 = 1.0;
}

/// Opacity, guaranteed to be within `[0.0, 1.0]`.
///
/// Non-finite input collapses to fully opaque so a bad tint never hides the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully opaque.
    pub const OPAQUE: Self = Self(opacity_bounds::MAX);

    /// Creates a new opacity, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(opacity_bounds::MIN, opacity_bounds::MAX))
        } else {
            Self::OPAQUE
        }
    }

    /// Returns the raw opacity value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if this opacity lets nothing through.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.0 >= opacity_bounds::MAX
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

// =============================================================================
// Length
// =============================================================================

/// A layout length in points: finite and never negative.
///
/// Unlike [`Opacity`], lengths are rejected rather than clamped, so a host
/// passing a negative spacing learns about it at the setter boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Length(f32);

impl Length {
    /// Zero length.
    pub const ZERO: Self = Self(0.0);

    /// Validates a raw value for the named field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] when the value is negative or not finite.
    pub fn new(field: &'static str, value: f32) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::invalid(field, format!("{value} is not a finite number")));
        }
        if value < 0.0 {
            return Err(Error::invalid(field, format!("{value} must not be negative")));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

/// Validates a value that may be any finite number (offsets may be negative).
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] when the value is NaN or infinite.
pub fn finite(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid(field, format!("{value} is not a finite number")))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_clamps() {
        assert!((Opacity::new(-0.5).value() - opacity_bounds::MIN).abs() < f32::EPSILON);
        assert!((Opacity::new(1.5).value() - opacity_bounds::MAX).abs() < f32::EPSILON);
        assert!((Opacity::new(0.4).value() - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn opacity_nan_is_opaque() {
        assert!(Opacity::new(f32::NAN).is_opaque());
    }

    #[test]
    fn opacity_default_is_opaque() {
        assert_eq!(Opacity::default(), Opacity::OPAQUE);
    }

    #[test]
    fn length_accepts_zero_and_positive() {
        assert_eq!(Length::new("spacing", 0.0).map(Length::value), Ok(0.0));
        assert_eq!(Length::new("spacing", 12.5).map(Length::value), Ok(12.5));
    }

    #[test]
    fn length_rejects_negative() {
        let err = Length::new("spacing", -1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { field: "spacing", .. }));
    }

    #[test]
    fn length_rejects_non_finite() {
        assert!(Length::new("width", f32::INFINITY).is_err());
        assert!(Length::new("width", f32::NAN).is_err());
    }

    #[test]
    fn finite_allows_negative_offsets() {
        assert_eq!(finite("shadow_offset", -4.0), Ok(-4.0));
        assert!(finite("shadow_offset", f32::NEG_INFINITY).is_err());
    }
}
