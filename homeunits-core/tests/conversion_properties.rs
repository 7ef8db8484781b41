//! Property tests for the conversion core
//!
//! Exercises the contracts every converter must hold across its whole unit
//! set: exact identity, round-trip accuracy through the pivot, closed-domain
//! symbol validation, and the non-finite value guard.

use homeunits_core::units::{length, mass, pressure, temperature, volume, UnitOfMeasure};
use homeunits_core::{
    ConversionError, LengthUnit, MassUnit, PressureUnit, TemperatureUnit, VolumeUnit,
};

use proptest::prelude::*;

/// Relative tolerance for a there-and-back conversion (two pivot roundings).
const ROUND_TRIP_EPS: f32 = 1e-6;

fn assert_round_trip(original: f32, back: f32) {
    let tolerance = original.abs() * ROUND_TRIP_EPS + f32::EPSILON;
    assert!(
        (back - original).abs() <= tolerance,
        "round trip drifted: {original} -> {back}"
    );
}

proptest! {
    #[test]
    fn length_identity_is_exact(
        value in -1e6f32..1e6f32,
        unit in prop::sample::select(LengthUnit::ALL),
    ) {
        let out = length::convert(value, unit, unit).unwrap();
        prop_assert_eq!(out.to_bits(), value.to_bits());
    }

    #[test]
    fn length_round_trip(
        value in -1e6f32..1e6f32,
        from in prop::sample::select(LengthUnit::ALL),
        to in prop::sample::select(LengthUnit::ALL),
    ) {
        let there = length::convert(value, from, to).unwrap();
        let back = length::convert(there, to, from).unwrap();
        assert_round_trip(value, back);
    }

    #[test]
    fn pressure_round_trip(
        value in -1e6f32..1e6f32,
        from in prop::sample::select(PressureUnit::ALL),
        to in prop::sample::select(PressureUnit::ALL),
    ) {
        let there = pressure::convert(value, from, to).unwrap();
        let back = pressure::convert(there, to, from).unwrap();
        assert_round_trip(value, back);
    }

    #[test]
    fn mass_round_trip(
        value in -1e6f32..1e6f32,
        from in prop::sample::select(MassUnit::ALL),
        to in prop::sample::select(MassUnit::ALL),
    ) {
        let there = mass::convert(value, from, to).unwrap();
        let back = mass::convert(there, to, from).unwrap();
        assert_round_trip(value, back);
    }

    #[test]
    fn volume_round_trip(
        value in -1e6f32..1e6f32,
        from in prop::sample::select(VolumeUnit::ALL),
        to in prop::sample::select(VolumeUnit::ALL),
    ) {
        let there = volume::convert(value, from, to).unwrap();
        let back = volume::convert(there, to, from).unwrap();
        assert_round_trip(value, back);
    }

    #[test]
    fn temperature_round_trip(
        value in -1e4f32..1e4f32,
        from in prop::sample::select(TemperatureUnit::ALL),
        to in prop::sample::select(TemperatureUnit::ALL),
    ) {
        let there = temperature::convert(value, from, to).unwrap();
        let back = temperature::convert(there, to, from).unwrap();
        // The affine map amplifies absolute error by 1.8 at most
        prop_assert!((back - value).abs() <= value.abs() * 1e-5 + 1e-3);
    }

    #[test]
    fn conversion_scales_linearly(
        value in -1e5f32..1e5f32,
        from in prop::sample::select(LengthUnit::ALL),
        to in prop::sample::select(LengthUnit::ALL),
    ) {
        // Multiplicative domains must be linear: f(2x) == 2·f(x)
        let one = length::convert(value, from, to).unwrap();
        let two = length::convert(value * 2.0, from, to).unwrap();
        prop_assert!((two - one * 2.0).abs() <= one.abs() * 1e-5 + 1e-3);
    }
}

#[test]
fn identity_is_exact_for_every_unit() {
    // Exact pass-through, not approximate - including awkward fractions
    let values = [0.0f32, -12.5, 0.1 + 0.2, 3.9e4];
    for &value in &values {
        for &unit in LengthUnit::ALL {
            assert_eq!(length::convert(value, unit, unit).unwrap().to_bits(), value.to_bits());
        }
        for &unit in PressureUnit::ALL {
            assert_eq!(pressure::convert(value, unit, unit).unwrap().to_bits(), value.to_bits());
        }
        for &unit in TemperatureUnit::ALL {
            assert_eq!(temperature::convert(value, unit, unit).unwrap().to_bits(), value.to_bits());
        }
        for &unit in MassUnit::ALL {
            assert_eq!(mass::convert(value, unit, unit).unwrap().to_bits(), value.to_bits());
        }
        for &unit in VolumeUnit::ALL {
            assert_eq!(volume::convert(value, unit, unit).unwrap().to_bits(), value.to_bits());
        }
    }
}

#[test]
fn temperature_anchor_points_are_exact() {
    use homeunits_core::TemperatureUnit::{Celsius, Fahrenheit};

    assert_eq!(temperature::convert(0.0, Celsius, Fahrenheit).unwrap(), 32.0);
    assert_eq!(temperature::convert(100.0, Celsius, Fahrenheit).unwrap(), 212.0);
    assert_eq!(temperature::convert(-40.0, Celsius, Fahrenheit).unwrap(), -40.0);
    assert_eq!(temperature::convert(32.0, Fahrenheit, Celsius).unwrap(), 0.0);
}

#[test]
fn every_domain_rejects_bogus_symbols() {
    const INVALID_SYMBOL: &str = "bob";

    assert!(matches!(
        length::convert_symbol(1.0, INVALID_SYMBOL, "m"),
        Err(ConversionError::UnknownUnit { .. })
    ));
    assert!(matches!(
        length::convert_symbol(1.0, "m", INVALID_SYMBOL),
        Err(ConversionError::UnknownUnit { .. })
    ));
    assert!(matches!(
        pressure::convert_symbol(1.0, INVALID_SYMBOL, "Pa"),
        Err(ConversionError::UnknownUnit { .. })
    ));
    assert!(matches!(
        temperature::convert_symbol(1.0, INVALID_SYMBOL, "°C"),
        Err(ConversionError::UnknownUnit { .. })
    ));
    assert!(matches!(
        mass::convert_symbol(1.0, INVALID_SYMBOL, "g"),
        Err(ConversionError::UnknownUnit { .. })
    ));
    assert!(matches!(
        volume::convert_symbol(1.0, INVALID_SYMBOL, "L"),
        Err(ConversionError::UnknownUnit { .. })
    ));
}

#[test]
fn every_domain_rejects_non_finite_values() {
    for value in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        assert_eq!(
            length::convert(value, LengthUnit::Meters, LengthUnit::Feet),
            Err(ConversionError::InvalidValue)
        );
        assert_eq!(
            pressure::convert(value, PressureUnit::Pascals, PressureUnit::Psi),
            Err(ConversionError::InvalidValue)
        );
        assert_eq!(
            temperature::convert(value, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
            Err(ConversionError::InvalidValue)
        );
        assert_eq!(
            mass::convert(value, MassUnit::Grams, MassUnit::Pounds),
            Err(ConversionError::InvalidValue)
        );
        assert_eq!(
            volume::convert(value, VolumeUnit::Liters, VolumeUnit::Gallons),
            Err(ConversionError::InvalidValue)
        );
    }
}

#[test]
fn every_symbol_parses_back_to_its_unit() {
    for &unit in LengthUnit::ALL {
        assert_eq!(LengthUnit::from_symbol(unit.symbol()).unwrap(), unit);
    }
    for &unit in PressureUnit::ALL {
        assert_eq!(PressureUnit::from_symbol(unit.symbol()).unwrap(), unit);
    }
    for &unit in TemperatureUnit::ALL {
        assert_eq!(TemperatureUnit::from_symbol(unit.symbol()).unwrap(), unit);
    }
    for &unit in MassUnit::ALL {
        assert_eq!(MassUnit::from_symbol(unit.symbol()).unwrap(), unit);
    }
    for &unit in VolumeUnit::ALL {
        assert_eq!(VolumeUnit::from_symbol(unit.symbol()).unwrap(), unit);
    }
}
