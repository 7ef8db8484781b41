//! Display Preparation for Temperature Readings
//!
//! Integrations hand the hub raw readings in whatever unit the vendor uses;
//! [`display_temp`] turns one into the number a dashboard shows: convert to
//! the deployment's configured unit, then round per the entity's precision
//! policy.
//!
//! Missing data (`None`) passes through untouched - an offline sensor is not
//! an error at this layer, it just has nothing to display.

use crate::{
    errors::{ConversionError, ConversionResult},
    system::UnitSystem,
    units::temperature::{self, TemperatureUnit},
};

/// Rounding rule applied when preparing a value for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Precision {
    /// Round to the nearest whole number (the default)
    #[default]
    Whole,
    /// Round to the nearest 0.5
    Halves,
    /// Round to one decimal place
    Tenths,
}

impl Precision {
    /// Map a configured precision string to a policy.
    ///
    /// `"halves"` and `"tenths"` select their policies; anything else -
    /// including an empty or unrecognized string - falls back to [`Whole`]
    /// (the integer fallback is the default, not an error case).
    pub fn from_config(value: &str) -> Self {
        match value {
            "halves" => Self::Halves,
            "tenths" => Self::Tenths,
            _ => Self::Whole,
        }
    }

    /// Apply this rounding rule to a value.
    pub fn round(&self, value: f32) -> f32 {
        match self {
            Self::Whole => libm::roundf(value),
            Self::Halves => libm::roundf(value * 2.0) / 2.0,
            Self::Tenths => libm::roundf(value * 10.0) / 10.0,
        }
    }
}

/// Prepare a temperature reading for display in a deployment's configured
/// unit.
///
/// Returns `Ok(None)` when `temperature` is `None` (missing data
/// pass-through). A present but non-finite value fails with
/// [`ConversionError::InvalidValue`]. Otherwise the reading is converted
/// from `from` into the system's temperature unit and rounded per
/// `precision`.
pub fn display_temp(
    system: &UnitSystem,
    temperature: Option<f32>,
    from: TemperatureUnit,
    precision: Precision,
) -> ConversionResult<Option<f32>> {
    let Some(value) = temperature else {
        return Ok(None);
    };
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue);
    }

    // Identity short-circuit inside the converter covers from == configured
    let converted = temperature::convert(value, from, system.temperature_unit())?;
    Ok(Some(precision.round(converted)))
}
