//! Length conversion
//!
//! Recognized units: `mm`, `cm`, `m`, `km`, `in`, `ft`, `yd`, `mi`.
//! Pivot unit: meters.

use crate::{
    constants::factors::{
        METERS_PER_CENTIMETER, METERS_PER_FOOT, METERS_PER_INCH, METERS_PER_KILOMETER,
        METERS_PER_MILE, METERS_PER_MILLIMETER, METERS_PER_YARD,
    },
    errors::ConversionResult,
    units::{convert_symbol_via_pivot, convert_via_pivot, PivotUnit, Quantity, UnitOfMeasure},
};

/// Length units recognized by the conversion core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Millimeters (`mm`)
    Millimeters,
    /// Centimeters (`cm`)
    Centimeters,
    /// Meters (`m`)
    Meters,
    /// Kilometers (`km`)
    Kilometers,
    /// Inches (`in`)
    Inches,
    /// Feet (`ft`)
    Feet,
    /// Yards (`yd`)
    Yards,
    /// Statute miles (`mi`)
    Miles,
}

impl UnitOfMeasure for LengthUnit {
    const QUANTITY: Quantity = Quantity::Length;

    const ALL: &'static [Self] = &[
        Self::Millimeters,
        Self::Centimeters,
        Self::Meters,
        Self::Kilometers,
        Self::Inches,
        Self::Feet,
        Self::Yards,
        Self::Miles,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Inches => "in",
            Self::Feet => "ft",
            Self::Yards => "yd",
            Self::Miles => "mi",
        }
    }
}

impl PivotUnit for LengthUnit {
    fn pivot_factor(&self) -> f32 {
        match self {
            Self::Millimeters => METERS_PER_MILLIMETER,
            Self::Centimeters => METERS_PER_CENTIMETER,
            Self::Meters => 1.0,
            Self::Kilometers => METERS_PER_KILOMETER,
            Self::Inches => METERS_PER_INCH,
            Self::Feet => METERS_PER_FOOT,
            Self::Yards => METERS_PER_YARD,
            Self::Miles => METERS_PER_MILE,
        }
    }
}

/// Convert a length between two recognized units.
///
/// Returns the value unchanged (exactly) when `from == to`; rejects NaN and
/// infinite magnitudes before any arithmetic.
pub fn convert(value: f32, from: LengthUnit, to: LengthUnit) -> ConversionResult<f32> {
    convert_via_pivot(value, from, to)
}

/// Convert a length given unit symbols.
///
/// Both symbols are validated against the recognized set first; either
/// failure names the offending symbol and the length domain.
pub fn convert_symbol(value: f32, from: &str, to: &str) -> ConversionResult<f32> {
    convert_symbol_via_pivot::<LengthUnit>(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConversionError;

    #[test]
    fn mile_to_kilometer() {
        let km = convert(1.0, LengthUnit::Miles, LengthUnit::Kilometers).unwrap();
        assert!((km - 1.609344).abs() < 1e-6);
    }

    #[test]
    fn foot_to_meter() {
        let m = convert(1.0, LengthUnit::Feet, LengthUnit::Meters).unwrap();
        assert!((m - 0.3048).abs() < 1e-7);
    }

    #[test]
    fn negative_and_zero_values_convert() {
        assert_eq!(convert(0.0, LengthUnit::Miles, LengthUnit::Meters).unwrap(), 0.0);
        let cm = convert(-2.5, LengthUnit::Meters, LengthUnit::Centimeters).unwrap();
        assert!((cm + 250.0).abs() < 1e-4);
    }

    #[test]
    fn symbol_round_trip() {
        let yd = convert_symbol(100.0, "m", "yd").unwrap();
        let m = convert_symbol(yd, "yd", "m").unwrap();
        assert!((m - 100.0).abs() < 1e-3);
    }

    #[test]
    fn unknown_symbol_fails_fast() {
        assert!(matches!(
            convert_symbol(1.0, "bob", "m"),
            Err(ConversionError::UnknownUnit { .. })
        ));
        assert!(matches!(
            convert_symbol(1.0, "m", "bob"),
            Err(ConversionError::UnknownUnit { .. })
        ));
    }
}
