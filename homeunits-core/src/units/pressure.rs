//! Pressure conversion
//!
//! Recognized units: `Pa`, `hPa`, `mbar`, `inHg`, `psi`. Pivot unit:
//! pascals. Hectopascals and millibars are numerically identical; both stay
//! in the set because weather vendors report either symbol.

use crate::{
    constants::factors::{
        PASCALS_PER_HECTOPASCAL, PASCALS_PER_INHG, PASCALS_PER_MILLIBAR, PASCALS_PER_PSI,
    },
    errors::ConversionResult,
    units::{convert_symbol_via_pivot, convert_via_pivot, PivotUnit, Quantity, UnitOfMeasure},
};

/// Pressure units recognized by the conversion core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressureUnit {
    /// Pascals (`Pa`)
    Pascals,
    /// Hectopascals (`hPa`)
    Hectopascals,
    /// Millibars (`mbar`)
    Millibars,
    /// Inches of mercury (`inHg`)
    InchesOfMercury,
    /// Pounds-force per square inch (`psi`)
    Psi,
}

impl UnitOfMeasure for PressureUnit {
    const QUANTITY: Quantity = Quantity::Pressure;

    const ALL: &'static [Self] = &[
        Self::Pascals,
        Self::Hectopascals,
        Self::Millibars,
        Self::InchesOfMercury,
        Self::Psi,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            Self::Pascals => "Pa",
            Self::Hectopascals => "hPa",
            Self::Millibars => "mbar",
            Self::InchesOfMercury => "inHg",
            Self::Psi => "psi",
        }
    }
}

impl PivotUnit for PressureUnit {
    fn pivot_factor(&self) -> f32 {
        match self {
            Self::Pascals => 1.0,
            Self::Hectopascals => PASCALS_PER_HECTOPASCAL,
            Self::Millibars => PASCALS_PER_MILLIBAR,
            Self::InchesOfMercury => PASCALS_PER_INHG,
            Self::Psi => PASCALS_PER_PSI,
        }
    }
}

/// Convert a pressure between two recognized units.
///
/// Returns the value unchanged (exactly) when `from == to`; rejects NaN and
/// infinite magnitudes before any arithmetic.
pub fn convert(value: f32, from: PressureUnit, to: PressureUnit) -> ConversionResult<f32> {
    convert_via_pivot(value, from, to)
}

/// Convert a pressure given unit symbols.
///
/// Both symbols are validated against the recognized set first; either
/// failure names the offending symbol and the pressure domain.
pub fn convert_symbol(value: f32, from: &str, to: &str) -> ConversionResult<f32> {
    convert_symbol_via_pivot::<PressureUnit>(value, from, to)
}
