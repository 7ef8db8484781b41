//! Mass conversion
//!
//! Recognized units: `g`, `kg`, `oz`, `lb`. Pivot unit: grams.

use crate::{
    constants::factors::{GRAMS_PER_KILOGRAM, GRAMS_PER_OUNCE, GRAMS_PER_POUND},
    errors::ConversionResult,
    units::{convert_symbol_via_pivot, convert_via_pivot, PivotUnit, Quantity, UnitOfMeasure},
};

/// Mass units recognized by the conversion core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassUnit {
    /// Grams (`g`)
    Grams,
    /// Kilograms (`kg`)
    Kilograms,
    /// Avoirdupois ounces (`oz`)
    Ounces,
    /// Avoirdupois pounds (`lb`)
    Pounds,
}

impl UnitOfMeasure for MassUnit {
    const QUANTITY: Quantity = Quantity::Mass;

    const ALL: &'static [Self] = &[Self::Grams, Self::Kilograms, Self::Ounces, Self::Pounds];

    fn symbol(&self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Kilograms => "kg",
            Self::Ounces => "oz",
            Self::Pounds => "lb",
        }
    }
}

impl PivotUnit for MassUnit {
    fn pivot_factor(&self) -> f32 {
        match self {
            Self::Grams => 1.0,
            Self::Kilograms => GRAMS_PER_KILOGRAM,
            Self::Ounces => GRAMS_PER_OUNCE,
            Self::Pounds => GRAMS_PER_POUND,
        }
    }
}

/// Convert a mass between two recognized units.
///
/// Returns the value unchanged (exactly) when `from == to`; rejects NaN and
/// infinite magnitudes before any arithmetic.
pub fn convert(value: f32, from: MassUnit, to: MassUnit) -> ConversionResult<f32> {
    convert_via_pivot(value, from, to)
}

/// Convert a mass given unit symbols.
pub fn convert_symbol(value: f32, from: &str, to: &str) -> ConversionResult<f32> {
    convert_symbol_via_pivot::<MassUnit>(value, from, to)
}
