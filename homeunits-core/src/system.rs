//! Unit System Configuration
//!
//! ## Overview
//!
//! A [`UnitSystem`] bundles one preferred unit per quantity domain for an
//! entire deployment: the hub converts every reading into these units before
//! display. Two presets cover almost all installations:
//!
//! | Preset | Temperature | Length | Volume | Mass |
//! |----------|-------------|--------|--------|------|
//! | [`METRIC`] | °C | km | L | g |
//! | [`IMPERIAL`] | °F | mi | gal | lb |
//!
//! ## Immutability
//!
//! A `UnitSystem` is a plain `Copy` value, constructed once and never
//! mutated. There is deliberately no setter: a deployment that changes its
//! display units constructs a new value and re-threads it through call
//! sites. This keeps concurrent readers safe without coordination and rules
//! out action-at-a-distance through a shared instance.
//!
//! ## Construction
//!
//! The typed constructor is `const` and infallible - a system built from
//! enums is valid by construction. The symbol constructor
//! [`UnitSystem::from_symbols`] is the configuration boundary: it validates
//! **all four** symbols before returning, and its error lists every rejected
//! (quantity, symbol) pair rather than stopping at the first.
//!
//! ```rust
//! use homeunits_core::system::UnitSystem;
//!
//! let err = UnitSystem::from_symbols("custom", "K", "km", "L", "stone").unwrap_err();
//! assert_eq!(err.invalid.len(), 2); // both bad units reported at once
//! ```

use heapless::Vec;

use crate::{
    errors::{ConversionResult, InvalidUnit, SystemConfigError},
    units::{
        length::{self, LengthUnit},
        mass::MassUnit,
        temperature::{self, TemperatureUnit},
        volume::VolumeUnit,
        UnitOfMeasure,
    },
};

/// Name of the metric preset
pub const CONF_METRIC: &str = "metric";

/// Name of the imperial preset
pub const CONF_IMPERIAL: &str = "imperial";

/// Metric unit system: Celsius, kilometers, liters, grams
pub const METRIC: UnitSystem = UnitSystem::new(
    CONF_METRIC,
    TemperatureUnit::Celsius,
    LengthUnit::Kilometers,
    VolumeUnit::Liters,
    MassUnit::Grams,
);

/// Imperial unit system: Fahrenheit, miles, gallons, pounds
pub const IMPERIAL: UnitSystem = UnitSystem::new(
    CONF_IMPERIAL,
    TemperatureUnit::Fahrenheit,
    LengthUnit::Miles,
    VolumeUnit::Gallons,
    MassUnit::Pounds,
);

/// Immutable bundle of one preferred unit per quantity domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSystem {
    name: &'static str,
    temperature: TemperatureUnit,
    length: LengthUnit,
    volume: VolumeUnit,
    mass: MassUnit,
}

impl UnitSystem {
    /// Build a unit system from typed units.
    ///
    /// Infallible: a system assembled from the closed enums is valid by
    /// construction. Used for the [`METRIC`] and [`IMPERIAL`] constants.
    pub const fn new(
        name: &'static str,
        temperature: TemperatureUnit,
        length: LengthUnit,
        volume: VolumeUnit,
        mass: MassUnit,
    ) -> Self {
        Self {
            name,
            temperature,
            length,
            volume,
            mass,
        }
    }

    /// Build a unit system from configured unit symbols.
    ///
    /// This is the configuration boundary. All four symbols are validated
    /// against their domains before returning; on failure the error carries
    /// one [`InvalidUnit`] entry per rejected symbol, in argument order.
    pub fn from_symbols(
        name: &'static str,
        temperature: &str,
        length: &str,
        volume: &str,
        mass: &str,
    ) -> Result<Self, SystemConfigError> {
        // Capacity matches the four checked fields, so push cannot fail
        let mut invalid: Vec<InvalidUnit, 4> = Vec::new();

        let temperature = check::<TemperatureUnit>(temperature, &mut invalid);
        let length = check::<LengthUnit>(length, &mut invalid);
        let volume = check::<VolumeUnit>(volume, &mut invalid);
        let mass = check::<MassUnit>(mass, &mut invalid);

        match (temperature, length, volume, mass) {
            (Some(temperature), Some(length), Some(volume), Some(mass)) => {
                Ok(Self::new(name, temperature, length, volume, mass))
            }
            _ => Err(SystemConfigError { invalid }),
        }
    }

    /// Name of this system (`"metric"`, `"imperial"`, or a custom label)
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this is the metric preset
    pub fn is_metric(&self) -> bool {
        self.name == CONF_METRIC
    }

    /// Configured temperature unit
    pub const fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature
    }

    /// Configured length unit
    pub const fn length_unit(&self) -> LengthUnit {
        self.length
    }

    /// Configured volume unit
    pub const fn volume_unit(&self) -> VolumeUnit {
        self.volume
    }

    /// Configured mass unit
    pub const fn mass_unit(&self) -> MassUnit {
        self.mass
    }

    /// Convert a temperature reading into this system's temperature unit.
    pub fn temperature(&self, value: f32, from: TemperatureUnit) -> ConversionResult<f32> {
        temperature::convert(value, from, self.temperature)
    }

    /// Convert a length reading into this system's length unit.
    pub fn length(&self, value: f32, from: LengthUnit) -> ConversionResult<f32> {
        length::convert(value, from, self.length)
    }

    /// Snapshot of the quantity → unit-symbol mapping, for serialization
    /// and state attributes.
    pub fn units(&self) -> SystemUnits {
        SystemUnits {
            length: self.length.symbol(),
            mass: self.mass.symbol(),
            temperature: self.temperature.symbol(),
            volume: self.volume.symbol(),
        }
    }
}

/// Plain quantity → unit-symbol snapshot of a [`UnitSystem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SystemUnits {
    /// Configured length unit symbol
    pub length: &'static str,
    /// Configured mass unit symbol
    pub mass: &'static str,
    /// Configured temperature unit symbol
    pub temperature: &'static str,
    /// Configured volume unit symbol
    pub volume: &'static str,
}

fn check<U: UnitOfMeasure>(symbol: &str, invalid: &mut Vec<InvalidUnit, 4>) -> Option<U> {
    match U::from_symbol(symbol) {
        Ok(unit) => Some(unit),
        Err(_) => {
            let _ = invalid.push(InvalidUnit::new(U::QUANTITY, symbol));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Quantity;

    #[test]
    fn presets_report_their_units() {
        assert_eq!(METRIC.name(), "metric");
        assert!(METRIC.is_metric());
        assert_eq!(METRIC.temperature_unit(), TemperatureUnit::Celsius);
        assert_eq!(METRIC.length_unit(), LengthUnit::Kilometers);

        assert!(!IMPERIAL.is_metric());
        assert_eq!(IMPERIAL.temperature_unit(), TemperatureUnit::Fahrenheit);
        assert_eq!(IMPERIAL.mass_unit(), MassUnit::Pounds);
    }

    #[test]
    fn from_symbols_accepts_valid_units() {
        let system = UnitSystem::from_symbols("custom", "°F", "m", "mL", "kg").unwrap();
        assert_eq!(system.temperature_unit(), TemperatureUnit::Fahrenheit);
        assert_eq!(system.length_unit(), LengthUnit::Meters);
        assert_eq!(system.volume_unit(), VolumeUnit::Milliliters);
        assert_eq!(system.mass_unit(), MassUnit::Kilograms);
    }

    #[test]
    fn from_symbols_reports_single_invalid_unit() {
        let err = UnitSystem::from_symbols("custom", "K", "km", "L", "g").unwrap_err();
        assert_eq!(err.invalid.len(), 1);
        assert_eq!(err.invalid[0].quantity, Quantity::Temperature);
        assert_eq!(err.invalid[0].symbol.as_str(), "K");
    }

    #[test]
    fn from_symbols_reports_every_invalid_unit() {
        let err = UnitSystem::from_symbols("custom", "K", "km", "barrel", "g").unwrap_err();
        assert_eq!(err.invalid.len(), 2);
        assert_eq!(err.invalid[0].quantity, Quantity::Temperature);
        assert_eq!(err.invalid[1].quantity, Quantity::Volume);
        assert_eq!(err.invalid[1].symbol.as_str(), "barrel");
    }

    #[test]
    fn conversion_wrappers_target_configured_units() {
        let km = METRIC.length(10.0, LengthUnit::Miles).unwrap();
        assert!((km - 16.09344).abs() < 1e-4);

        let f = IMPERIAL.temperature(0.0, TemperatureUnit::Celsius).unwrap();
        assert_eq!(f, 32.0);
    }

    #[test]
    fn units_snapshot() {
        let units = METRIC.units();
        assert_eq!(units.temperature, "°C");
        assert_eq!(units.length, "km");
        assert_eq!(units.volume, "L");
        assert_eq!(units.mass, "g");
    }
}
