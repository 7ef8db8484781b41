//! Closed Unit Sets and Conversion per Quantity Domain
//!
//! ## Overview
//!
//! Every physical quantity this crate understands owns a closed enumeration
//! of recognized units and its own conversion routine. A symbol is only
//! meaningful within its quantity; cross-quantity conversion is
//! unrepresentable because each domain's `convert` takes its own enum.
//!
//! ## Pivot Conversion
//!
//! Multiplicative domains (length, pressure, mass, volume) convert through a
//! canonical pivot unit:
//!
//! ```text
//! value[from] ──× factor(from)──▶ value[pivot] ──÷ factor(to)──▶ value[to]
//! ```
//!
//! The pivot keeps the table linear in the number of units instead of
//! quadratic in unit pairs. It costs one extra floating-point rounding step,
//! which stays far inside the 1e-6 relative tolerance the round-trip tests
//! enforce.
//!
//! Temperature is the exception: its two units relate affinely, so
//! [`temperature`] applies the direct linear formula instead of implementing
//! [`PivotUnit`].
//!
//! ## Validation Order
//!
//! Every conversion checks, in order:
//!
//! 1. Both units belong to the domain's recognized set (symbol entry points
//!    only; the typed entry points make this unrepresentable).
//! 2. The magnitude is a finite number. NaN and infinities are rejected
//!    before any arithmetic.
//! 3. `from == to` returns the value unchanged, exactly - not just within
//!    floating-point error.
//!
//! ## Usage
//!
//! ```rust
//! use homeunits_core::units::length::{self, LengthUnit};
//!
//! // Typed entry point - units validated at compile time
//! let km = length::convert(5.0, LengthUnit::Miles, LengthUnit::Kilometers)?;
//! assert!((km - 8.04672).abs() < 1e-4);
//!
//! // Symbol entry point - the config/vendor-payload boundary
//! let km = length::convert_symbol(5.0, "mi", "km")?;
//! # Ok::<(), homeunits_core::ConversionError>(())
//! ```

pub mod length;
pub mod mass;
pub mod pressure;
pub mod temperature;
pub mod volume;

use core::fmt;

use crate::errors::{ConversionError, ConversionResult};

/// Physical quantity domain
///
/// Names the domain in error messages and identifies which closed unit set
/// a symbol is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Distances and lengths, pivot meters
    Length,
    /// Masses, pivot grams
    Mass,
    /// Pressures, pivot pascals
    Pressure,
    /// Temperatures, Celsius/Fahrenheit only
    Temperature,
    /// Volumes, pivot liters
    Volume,
}

impl Quantity {
    /// Get human-readable domain name
    pub const fn name(&self) -> &'static str {
        match self {
            Quantity::Length => "length",
            Quantity::Mass => "mass",
            Quantity::Pressure => "pressure",
            Quantity::Temperature => "temperature",
            Quantity::Volume => "volume",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit drawn from one quantity domain's closed set
pub trait UnitOfMeasure: Copy + PartialEq + Sized + 'static {
    /// The quantity domain this unit set belongs to
    const QUANTITY: Quantity;

    /// Every unit in the domain's recognized set
    const ALL: &'static [Self];

    /// Display symbol, as reported by integrations and shown on dashboards
    fn symbol(&self) -> &'static str;

    /// Parse a symbol against the domain's recognized set
    ///
    /// Fails fast with [`ConversionError::UnknownUnit`] naming the rejected
    /// symbol and the domain; an unrecognized symbol never passes through
    /// silently.
    fn from_symbol(symbol: &str) -> ConversionResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.symbol() == symbol)
            .ok_or_else(|| ConversionError::unknown_unit(symbol, Self::QUANTITY))
    }
}

/// A unit that converts multiplicatively through its domain's pivot unit
pub trait PivotUnit: UnitOfMeasure {
    /// Pivot units per one of this unit (e.g. meters per mile)
    fn pivot_factor(&self) -> f32;
}

/// Convert between two units of one multiplicative domain.
///
/// Shared by every [`PivotUnit`] domain so the finite-value guard and the
/// exact identity short-circuit live in one place.
pub(crate) fn convert_via_pivot<U: PivotUnit>(value: f32, from: U, to: U) -> ConversionResult<f32> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue);
    }
    if from == to {
        return Ok(value);
    }
    Ok(value * from.pivot_factor() / to.pivot_factor())
}

/// Symbol-boundary variant of [`convert_via_pivot`].
///
/// Both symbols are validated before the magnitude is inspected; a bad
/// unit is reported ahead of a bad value.
pub(crate) fn convert_symbol_via_pivot<U: PivotUnit>(
    value: f32,
    from: &str,
    to: &str,
) -> ConversionResult<f32> {
    let from = U::from_symbol(from)?;
    let to = U::from_symbol(to)?;
    convert_via_pivot(value, from, to)
}
