// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Length parsing and pixel normalization.
//!
//! Every length- or offset-valued property funnels through [`to_pixels`], which turns a
//! physical length into a whole number of pixels for a given [`Resolution`].

extern crate alloc;

use alloc::string::ToString;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::ValueError;

/// Units accepted for length-valued properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Device pixels; unaffected by resolution.
    Pixels,
    /// Typographic points (1/72 inch).
    Points,
    /// Picas (1/6 inch).
    Picas,
    /// Inches.
    Inches,
    /// Centimeters.
    Centimeters,
    /// Millimeters.
    Millimeters,
}

impl LengthUnit {
    /// Number of units per inch, or `None` for pixels.
    pub fn per_inch(self) -> Option<f64> {
        match self {
            Self::Pixels => None,
            Self::Points => Some(72.0),
            Self::Picas => Some(6.0),
            Self::Inches => Some(1.0),
            Self::Centimeters => Some(2.54),
            Self::Millimeters => Some(25.4),
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        const SUFFIXES: &[(&str, LengthUnit)] = &[
            ("px", LengthUnit::Pixels),
            ("pt", LengthUnit::Points),
            ("pc", LengthUnit::Picas),
            ("in", LengthUnit::Inches),
            ("cm", LengthUnit::Centimeters),
            ("mm", LengthUnit::Millimeters),
        ];
        SUFFIXES
            .iter()
            .find(|(s, _)| s.eq_ignore_ascii_case(suffix))
            .map(|&(_, unit)| unit)
    }
}

/// A non-negative magnitude with a unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    /// Magnitude in `unit`.
    pub value: f64,
    /// Unit of `value`.
    pub unit: LengthUnit,
}

impl Length {
    /// Creates a length.
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// A length in pixels.
    pub const fn px(value: f64) -> Self {
        Self::new(value, LengthUnit::Pixels)
    }

    /// A length in points.
    pub const fn pt(value: f64) -> Self {
        Self::new(value, LengthUnit::Points)
    }
}

/// Target resolution used to convert physical lengths to pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Resolution {
    /// No resolution was requested; conversions use [`Resolution::DEFAULT_PPI`].
    #[default]
    Unspecified,
    /// Pixels per inch.
    Ppi(f64),
}

impl Resolution {
    /// Pixels per inch substituted for [`Resolution::Unspecified`].
    pub const DEFAULT_PPI: f64 = 100.0;

    /// Interprets a raw resolution where `-1` (or any non-positive value) means unspecified.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_finite() && raw > 0.0 {
            Self::Ppi(raw)
        } else {
            Self::Unspecified
        }
    }

    /// Effective pixels per inch.
    pub fn ppi(self) -> f64 {
        match self {
            Self::Ppi(ppi) if ppi.is_finite() && ppi > 0.0 => ppi,
            _ => Self::DEFAULT_PPI,
        }
    }

    /// Returns `true` when [`Resolution::ppi`] is a requested value rather than the default.
    pub fn is_known(self) -> bool {
        matches!(self, Self::Ppi(ppi) if ppi.is_finite() && ppi > 0.0)
    }
}

/// Converts `length` to a whole number of pixels, rounding to nearest.
pub fn to_pixels(length: Length, resolution: Resolution) -> i32 {
    let px = match length.unit.per_inch() {
        None => length.value,
        Some(per_inch) => length.value / per_inch * resolution.ppi(),
    };
    let px = px.round().clamp(i32::MIN as f64, i32::MAX as f64);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        px as i32
    }
}

/// Parses a length such as `10px`, `12pt`, `2.5cm` or a bare `10`.
///
/// Bare numbers take `default_unit`. The unit is the trailing run of letters, so exponents
/// such as `1e2px` are accepted. Negative, non-finite and non-numeric input is rejected.
pub fn parse_length(text: &str, default_unit: LengthUnit) -> Result<Length, ValueError> {
    let text = text.trim();
    let number = text.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix = &text[number.len()..];
    let unit = if suffix.is_empty() {
        default_unit
    } else {
        LengthUnit::from_suffix(suffix.trim()).ok_or_else(|| ValueError::Length(text.to_string()))?
    };
    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| ValueError::Length(text.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ValueError::Length(text.to_string()));
    }
    Ok(Length::new(value, unit))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn unspecified_resolution_uses_default_ppi() {
        assert_eq!(Resolution::from_raw(-1.0), Resolution::Unspecified);
        assert_eq!(to_pixels(Length::new(1.0, LengthUnit::Inches), Resolution::Unspecified), 100);
        assert_eq!(to_pixels(Length::pt(72.0), Resolution::from_raw(-1.0)), 100);
    }

    #[test]
    fn physical_units_scale_with_resolution() {
        let res = Resolution::Ppi(300.0);
        assert_eq!(to_pixels(Length::pt(12.0), res), 50);
        assert_eq!(to_pixels(Length::new(2.54, LengthUnit::Centimeters), res), 300);
        assert_eq!(to_pixels(Length::new(1.0, LengthUnit::Picas), res), 50);
    }

    #[test]
    fn pixels_ignore_resolution_and_round_to_nearest() {
        assert_eq!(to_pixels(Length::px(10.4), Resolution::Ppi(600.0)), 10);
        assert_eq!(to_pixels(Length::px(10.5), Resolution::Ppi(600.0)), 11);
        // 10pt at 100ppi is 13.89px.
        assert_eq!(to_pixels(Length::pt(10.0), Resolution::Unspecified), 14);
    }

    #[test]
    fn parse_accepts_units_and_bare_numbers() {
        assert_eq!(parse_length("10px", LengthUnit::Points), Ok(Length::px(10.0)));
        assert_eq!(parse_length(" 12 PT ", LengthUnit::Pixels), Ok(Length::pt(12.0)));
        assert_eq!(parse_length("7", LengthUnit::Points), Ok(Length::pt(7.0)));
        assert_eq!(
            parse_length("2.5cm", LengthUnit::Pixels),
            Ok(Length::new(2.5, LengthUnit::Centimeters))
        );
    }

    #[test]
    fn parse_rejects_negative_and_garbage() {
        assert!(parse_length("-3px", LengthUnit::Pixels).is_err());
        assert!(parse_length("wide", LengthUnit::Pixels).is_err());
        assert!(parse_length("3furlongs", LengthUnit::Pixels).is_err());
        assert!(parse_length("", LengthUnit::Pixels).is_err());
        assert!(parse_length("inf", LengthUnit::Pixels).is_err());
        assert!(parse_length("1e", LengthUnit::Pixels).is_err());
    }

    #[test]
    fn parse_accepts_exponents() {
        assert_eq!(parse_length("1e2px", LengthUnit::Points), Ok(Length::px(100.0)));
        assert_eq!(parse_length("1.5E1", LengthUnit::Points), Ok(Length::pt(15.0)));
        assert_eq!(
            parse_length("2.5e-1in", LengthUnit::Pixels),
            Ok(Length::new(0.25, LengthUnit::Inches))
        );
    }

    #[test]
    fn only_usable_resolutions_are_known() {
        assert!(Resolution::Ppi(72.0).is_known());
        assert!(!Resolution::Unspecified.is_known());
        assert!(!Resolution::Ppi(-1.0).is_known());
        assert!(!Resolution::Ppi(0.0).is_known());
        assert!(!Resolution::Ppi(f64::NAN).is_known());
        assert_eq!(Resolution::Ppi(-1.0).ppi(), Resolution::DEFAULT_PPI);
    }
}
