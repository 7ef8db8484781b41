//! Physical Constants for Dewpoint Calculation
//!
//! The Magnus (Magnus-Tetens) approximation expresses saturation vapor
//! pressure as an exponential in temperature:
//!
//! ```text
//! γ(T, RH) = ln(RH/100) + B·T / (C + T)
//! Td = C·γ / (B − γ)
//! ```
//!
//! where T and Td are in Celsius and RH in percent.

/// Magnus coefficient B (dimensionless).
///
/// Source: Bolton (1980), "The computation of equivalent potential
/// temperature", Monthly Weather Review 108
pub const MAGNUS_B: f32 = 17.67;

/// Magnus coefficient C (°C).
///
/// Source: Bolton (1980)
pub const MAGNUS_C: f32 = 243.5;

/// Lower bound of the Magnus fit's calibrated temperature range (°C).
///
/// The approximation stays within 0.1% of reference data inside
/// [-45 °C, 60 °C]; outside, the result is still computed but degrades.
pub const MAGNUS_TEMP_MIN_C: f32 = -45.0;

/// Upper bound of the Magnus fit's calibrated temperature range (°C).
pub const MAGNUS_TEMP_MAX_C: f32 = 60.0;
