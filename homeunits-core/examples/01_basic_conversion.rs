//! Basic Unit Conversion Example
//!
//! This example demonstrates the simplest use case of HomeUnits:
//! converting raw vendor readings between display units.
//!
//! ## What You'll Learn
//!
//! - Converting with typed units
//! - Converting at the symbol boundary (config/vendor payloads)
//! - Understanding conversion errors
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_conversion
//! ```

use homeunits_core::{
    units::{length, pressure, temperature},
    LengthUnit, PressureUnit, TemperatureUnit,
};

fn main() {
    println!("HomeUnits Basic Conversion Example");
    println!("==================================\n");

    // A weather API reports visibility in miles; the dashboard is metric
    let visibility_mi = 6.2;
    let visibility_km = length::convert(visibility_mi, LengthUnit::Miles, LengthUnit::Kilometers)
        .expect("finite value, valid units");
    println!("Visibility: {visibility_mi} mi = {visibility_km:.1} km");

    // A barometer reports inHg; hub entities store hPa
    let pressure_inhg = 29.92;
    let pressure_hpa = pressure::convert(
        pressure_inhg,
        PressureUnit::InchesOfMercury,
        PressureUnit::Hectopascals,
    )
    .expect("finite value, valid units");
    println!("Pressure: {pressure_inhg} inHg = {pressure_hpa:.1} hPa");

    // Symbol boundary: units arrive as strings from configuration
    match temperature::convert_symbol(72.0, "°F", "°C") {
        Ok(celsius) => println!("Thermostat: 72°F = {celsius:.1}°C"),
        Err(err) => println!("Conversion failed: {err}"),
    }

    // Unknown symbols fail fast and name the domain
    match temperature::convert_symbol(300.0, "K", "°C") {
        Ok(_) => unreachable!("Kelvin is not in the valid set"),
        Err(err) => println!("As expected: {err}"),
    }

    // Dewpoint from a temperature/humidity pair
    let dew_point = temperature::dew_point(24.0, 65.0, TemperatureUnit::Celsius)
        .expect("humidity within (0, 100]");
    println!("Dewpoint at 24°C / 65% RH: {dew_point:.1}°C");
}
