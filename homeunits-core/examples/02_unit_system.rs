//! Unit System and Display Example
//!
//! This example walks a poll cycle the way a hub integration does: resolve a
//! vendor payload's candidate readings, convert into the deployment's
//! configured units, and round for display.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_unit_system
//! ```

use homeunits_core::{
    display_temp, select, LengthUnit, Observation, Precision, Reading, ReadingMap,
    TemperatureUnit, UnitSystem, IMPERIAL,
};

fn main() {
    println!("HomeUnits Unit System Example");
    println!("=============================\n");

    // Deployments usually pick a preset; custom systems come from config
    // symbols and are batch-validated
    let system = match UnitSystem::from_symbols("custom", "°C", "km", "L", "kg") {
        Ok(system) => system,
        Err(err) => {
            println!("Bad unit configuration: {err}");
            return;
        }
    };
    println!("Unit system '{}': {:?}\n", system.name(), system.units());

    // A forecast payload reports temperature as a min/max range
    let temp_series = [Observation::min(14.0), Observation::max(23.5)];
    let mut readings: ReadingMap<8> = ReadingMap::new();
    readings
        .insert("temp", Reading::Series(&temp_series))
        .expect("map capacity");
    readings
        .insert("visibility", Reading::Single(Observation::new(6.2)))
        .expect("map capacity");

    // Selection picks optimistically: max > min > first > None
    let raw_temp = select(&readings, "temp");
    println!("Forecast temperature resolves to {raw_temp:?} (the daily max)");

    // Convert + round for the dashboard
    let shown = display_temp(&system, raw_temp, TemperatureUnit::Celsius, Precision::Halves)
        .expect("finite reading");
    println!("Displayed at halves precision: {shown:?}");

    // The same reading on an imperial deployment
    let shown_f = display_temp(&IMPERIAL, raw_temp, TemperatureUnit::Celsius, Precision::Whole)
        .expect("finite reading");
    println!("Imperial dashboard shows: {shown_f:?} °F");

    // Length readings convert through the system's configured unit
    let visibility = select(&readings, "visibility").expect("present in payload");
    let km = system
        .length(visibility, LengthUnit::Miles)
        .expect("finite reading");
    println!("Visibility: {visibility} mi = {km:.2} {}", system.units().length);
}
