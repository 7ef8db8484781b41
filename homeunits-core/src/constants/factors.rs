//! Pivot Conversion Factors
//!
//! Each multiplicative quantity domain converts through a canonical pivot
//! unit: meters for length, pascals for pressure, grams for mass, liters for
//! volume. Every constant here is "pivot units per one source unit", so a
//! conversion is `value * factor(from) / factor(to)`.
//!
//! The imperial factors are the exact values from the international yard and
//! pound agreement of 1959; the pressure factors follow the conventional
//! inch-of-mercury and psi definitions.

// ===== LENGTH (pivot: meters) =====

/// Meters per millimeter.
pub const METERS_PER_MILLIMETER: f32 = 0.001;

/// Meters per centimeter.
pub const METERS_PER_CENTIMETER: f32 = 0.01;

/// Meters per kilometer.
pub const METERS_PER_KILOMETER: f32 = 1000.0;

/// Meters per inch.
///
/// Source: international yard and pound agreement (1959), exact
pub const METERS_PER_INCH: f32 = 0.0254;

/// Meters per foot (12 inches).
pub const METERS_PER_FOOT: f32 = 0.3048;

/// Meters per yard (3 feet).
pub const METERS_PER_YARD: f32 = 0.9144;

/// Meters per statute mile (1760 yards).
pub const METERS_PER_MILE: f32 = 1609.344;

// ===== PRESSURE (pivot: pascals) =====

/// Pascals per hectopascal.
pub const PASCALS_PER_HECTOPASCAL: f32 = 100.0;

/// Pascals per millibar.
///
/// Identical to the hectopascal by definition; both symbols remain in the
/// valid set because vendor APIs report either.
pub const PASCALS_PER_MILLIBAR: f32 = 100.0;

/// Pascals per inch of mercury.
///
/// Source: conventional inHg at 0 °C, NIST SP 811
pub const PASCALS_PER_INHG: f32 = 3386.389;

/// Pascals per pound-force per square inch.
///
/// Source: NIST SP 811
pub const PASCALS_PER_PSI: f32 = 6894.757;

// ===== MASS (pivot: grams) =====

/// Grams per kilogram.
pub const GRAMS_PER_KILOGRAM: f32 = 1000.0;

/// Grams per avoirdupois ounce.
///
/// Source: international yard and pound agreement (1959), exact
pub const GRAMS_PER_OUNCE: f32 = 28.349523125;

/// Grams per avoirdupois pound (16 ounces).
pub const GRAMS_PER_POUND: f32 = 453.59237;

// ===== VOLUME (pivot: liters) =====

/// Liters per milliliter.
pub const LITERS_PER_MILLILITER: f32 = 0.001;

/// Liters per cubic meter.
pub const LITERS_PER_CUBIC_METER: f32 = 1000.0;

/// Liters per cubic foot.
pub const LITERS_PER_CUBIC_FOOT: f32 = 28.316846592;

/// Liters per US liquid gallon (231 cubic inches), exact.
///
/// British/imperial gallons are not in the valid set.
pub const LITERS_PER_GALLON: f32 = 3.785411784;

/// Liters per US fluid ounce (1/128 gallon).
pub const LITERS_PER_FLUID_OUNCE: f32 = 0.0295735295625;
