//! Volume conversion
//!
//! Recognized units: `mL`, `L`, `m³`, `ft³`, `gal`, `fl. oz.`. Pivot unit:
//! liters. Gallons and fluid ounces are the US liquid definitions.

use crate::{
    constants::factors::{
        LITERS_PER_CUBIC_FOOT, LITERS_PER_CUBIC_METER, LITERS_PER_FLUID_OUNCE, LITERS_PER_GALLON,
        LITERS_PER_MILLILITER,
    },
    errors::ConversionResult,
    units::{convert_symbol_via_pivot, convert_via_pivot, PivotUnit, Quantity, UnitOfMeasure},
};

/// Volume units recognized by the conversion core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeUnit {
    /// Milliliters (`mL`)
    Milliliters,
    /// Liters (`L`)
    Liters,
    /// Cubic meters (`m³`)
    CubicMeters,
    /// Cubic feet (`ft³`)
    CubicFeet,
    /// US liquid gallons (`gal`)
    Gallons,
    /// US fluid ounces (`fl. oz.`)
    FluidOunces,
}

impl UnitOfMeasure for VolumeUnit {
    const QUANTITY: Quantity = Quantity::Volume;

    const ALL: &'static [Self] = &[
        Self::Milliliters,
        Self::Liters,
        Self::CubicMeters,
        Self::CubicFeet,
        Self::Gallons,
        Self::FluidOunces,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            Self::Milliliters => "mL",
            Self::Liters => "L",
            Self::CubicMeters => "m³",
            Self::CubicFeet => "ft³",
            Self::Gallons => "gal",
            Self::FluidOunces => "fl. oz.",
        }
    }
}

impl PivotUnit for VolumeUnit {
    fn pivot_factor(&self) -> f32 {
        match self {
            Self::Milliliters => LITERS_PER_MILLILITER,
            Self::Liters => 1.0,
            Self::CubicMeters => LITERS_PER_CUBIC_METER,
            Self::CubicFeet => LITERS_PER_CUBIC_FOOT,
            Self::Gallons => LITERS_PER_GALLON,
            Self::FluidOunces => LITERS_PER_FLUID_OUNCE,
        }
    }
}

/// Convert a volume between two recognized units.
///
/// Returns the value unchanged (exactly) when `from == to`; rejects NaN and
/// infinite magnitudes before any arithmetic.
pub fn convert(value: f32, from: VolumeUnit, to: VolumeUnit) -> ConversionResult<f32> {
    convert_via_pivot(value, from, to)
}

/// Convert a volume given unit symbols.
pub fn convert_symbol(value: f32, from: &str, to: &str) -> ConversionResult<f32> {
    convert_symbol_via_pivot::<VolumeUnit>(value, from, to)
}
