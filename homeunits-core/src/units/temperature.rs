//! Temperature Conversion and Dewpoint
//!
//! ## Units
//!
//! The recognized set is exactly `°C` and `°F`. Kelvin is deliberately
//! absent: no consumer integration reports it, and keeping the set closed at
//! two units lets the conversion be a single exact affine step instead of a
//! pivot chain.
//!
//! ```text
//! C → F:  x · 1.8 + 32
//! F → C:  (x − 32) / 1.8
//! ```
//!
//! The map's fixed point is −40 (−40 °C == −40 °F), which the tests pin
//! alongside the 0/32 and 100/212 anchors.
//!
//! ## Dewpoint
//!
//! [`dew_point`] applies the Magnus approximation (see
//! [`constants::physics`](crate::constants::physics)): the input is converted
//! to Celsius, `γ = ln(RH/100) + B·t/(C+t)` is evaluated, and
//! `Td = C·γ/(B−γ)` is converted back to the caller's unit. Humidity must lie
//! in `(0, 100]` - zero is rejected *before* the logarithm is evaluated, so
//! the math never sees `ln(0)`.

use crate::{
    constants::physics::{MAGNUS_B, MAGNUS_C, MAGNUS_TEMP_MAX_C, MAGNUS_TEMP_MIN_C},
    errors::{ConversionError, ConversionResult},
    units::{Quantity, UnitOfMeasure},
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Temperature units recognized by the conversion core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    /// Degrees Celsius (`°C`)
    Celsius,
    /// Degrees Fahrenheit (`°F`)
    Fahrenheit,
}

impl UnitOfMeasure for TemperatureUnit {
    const QUANTITY: Quantity = Quantity::Temperature;

    const ALL: &'static [Self] = &[Self::Celsius, Self::Fahrenheit];

    fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// Convert a temperature between Celsius and Fahrenheit.
///
/// Equal units return the value unchanged, exactly. NaN and infinite
/// magnitudes are rejected before any arithmetic.
pub fn convert(value: f32, from: TemperatureUnit, to: TemperatureUnit) -> ConversionResult<f32> {
    use TemperatureUnit::*;

    if !value.is_finite() {
        return Err(ConversionError::InvalidValue);
    }
    match (from, to) {
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) => Ok(value),
        (Celsius, Fahrenheit) => Ok(value * 1.8 + 32.0),
        (Fahrenheit, Celsius) => Ok((value - 32.0) / 1.8),
    }
}

/// Convert a temperature given unit symbols.
///
/// Both symbols are validated against the two-unit set first; either failure
/// names the offending symbol and the temperature domain.
pub fn convert_symbol(value: f32, from: &str, to: &str) -> ConversionResult<f32> {
    let from = TemperatureUnit::from_symbol(from)?;
    let to = TemperatureUnit::from_symbol(to)?;
    convert(value, from, to)
}

/// Calculate the dewpoint for a temperature/humidity pair.
///
/// `temperature` is interpreted in `unit` and the result is returned in the
/// same unit. `humidity` is relative humidity in percent and must lie in
/// `(0, 100]`; anything else fails with
/// [`ConversionError::InvalidHumidity`].
pub fn dew_point(temperature: f32, humidity: f32, unit: TemperatureUnit) -> ConversionResult<f32> {
    if !temperature.is_finite() || !humidity.is_finite() {
        return Err(ConversionError::InvalidValue);
    }
    // ln(0) is undefined, so 0% is invalid rather than "very dry"
    if humidity <= 0.0 || humidity > 100.0 {
        return Err(ConversionError::InvalidHumidity { humidity });
    }

    let t = convert(temperature, unit, TemperatureUnit::Celsius)?;
    if !(MAGNUS_TEMP_MIN_C..=MAGNUS_TEMP_MAX_C).contains(&t) {
        log_warn!(
            "Dewpoint: temperature {}°C outside Magnus calibration range [{}, {}]",
            t, MAGNUS_TEMP_MIN_C, MAGNUS_TEMP_MAX_C
        );
    }

    let gamma = libm::logf(humidity / 100.0) + MAGNUS_B * t / (MAGNUS_C + t);
    let dew_point_c = MAGNUS_C * gamma / (MAGNUS_B - gamma);

    convert(dew_point_c, TemperatureUnit::Celsius, unit)
}

/// Calculate the dewpoint given a temperature unit symbol.
pub fn dew_point_symbol(temperature: f32, humidity: f32, unit: &str) -> ConversionResult<f32> {
    let unit = TemperatureUnit::from_symbol(unit)?;
    dew_point(temperature, humidity, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::TemperatureUnit::{Celsius, Fahrenheit};

    #[test]
    fn exact_anchor_points() {
        assert_eq!(convert(0.0, Celsius, Fahrenheit).unwrap(), 32.0);
        assert_eq!(convert(100.0, Celsius, Fahrenheit).unwrap(), 212.0);
        assert_eq!(convert(212.0, Fahrenheit, Celsius).unwrap(), 100.0);
    }

    #[test]
    fn minus_forty_is_the_fixed_point() {
        assert_eq!(convert(-40.0, Celsius, Fahrenheit).unwrap(), -40.0);
        assert_eq!(convert(-40.0, Fahrenheit, Celsius).unwrap(), -40.0);
    }

    #[test]
    fn identity_is_exact() {
        let value = 24.636626;
        assert_eq!(convert(value, Celsius, Celsius).unwrap(), value);
        assert_eq!(convert(value, Fahrenheit, Fahrenheit).unwrap(), value);
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(convert(f32::NAN, Celsius, Fahrenheit), Err(ConversionError::InvalidValue));
        assert_eq!(
            convert(f32::NEG_INFINITY, Fahrenheit, Celsius),
            Err(ConversionError::InvalidValue)
        );
    }

    #[test]
    fn symbol_boundary() {
        assert_eq!(convert_symbol(0.0, "°C", "°F").unwrap(), 32.0);
        // Kelvin is not in this domain's valid set
        assert!(matches!(
            convert_symbol(300.0, "K", "°C"),
            Err(ConversionError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn dew_point_saturated_air() {
        // At 100% RH the dewpoint equals the air temperature
        let dp = dew_point(20.0, 100.0, Celsius).unwrap();
        assert!((dp - 20.0).abs() < 1e-3);
    }

    #[test]
    fn dew_point_typical_room() {
        // 20°C at 50% RH gives ~9.3°C with the Bolton constants
        let dp = dew_point(20.0, 50.0, Celsius).unwrap();
        assert!((dp - 9.3).abs() < 0.1);
    }

    #[test]
    fn dew_point_fahrenheit_round_trip() {
        // Same physical state expressed in both units must agree
        let dp_c = dew_point(25.0, 60.0, Celsius).unwrap();
        let dp_f = dew_point(77.0, 60.0, Fahrenheit).unwrap();
        assert!((convert(dp_c, Celsius, Fahrenheit).unwrap() - dp_f).abs() < 1e-3);
    }

    #[test]
    fn dew_point_symbol_boundary() {
        // 70°F at 60% RH is ~55.5°F dewpoint
        let dp = dew_point_symbol(70.0, 60.0, "°F").unwrap();
        assert!(dp > 55.0 && dp < 56.0);

        assert!(matches!(
            dew_point_symbol(20.0, 50.0, "K"),
            Err(ConversionError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn dew_point_humidity_bounds() {
        assert!(matches!(
            dew_point(20.0, 0.0, Celsius),
            Err(ConversionError::InvalidHumidity { .. })
        ));
        assert!(matches!(
            dew_point(20.0, -5.0, Celsius),
            Err(ConversionError::InvalidHumidity { .. })
        ));
        assert!(matches!(
            dew_point(20.0, 100.5, Celsius),
            Err(ConversionError::InvalidHumidity { .. })
        ));
        assert!(dew_point(20.0, 100.0, Celsius).is_ok());
    }
}
