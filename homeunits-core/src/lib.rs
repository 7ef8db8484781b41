//! Unit conversion core for HomeUnits
//!
//! Converts sensor readings between display units, bundles per-deployment
//! unit preferences, and resolves multi-candidate readings to a single
//! reported value. Designed to sit under a hub's integration layer and on
//! edge devices alike.
//!
//! Key constraints:
//! - Pure functions only - no I/O, no shared state, no allocation
//! - `no_std` compatible (enable default `std` off)
//! - Every failure is synchronous and caller-facing
//!
//! ```rust
//! use homeunits_core::{display_temp, Precision, TemperatureUnit, METRIC};
//!
//! // A Fahrenheit sensor shown on a metric dashboard, one decimal
//! let shown = display_temp(&METRIC, Some(68.5), TemperatureUnit::Fahrenheit, Precision::Tenths)?;
//! assert_eq!(shown, Some(20.3));
//! # Ok::<(), homeunits_core::ConversionError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod display;
pub mod errors;
pub mod reading;
pub mod system;
pub mod units;

// Public API
pub use display::{display_temp, Precision};
pub use errors::{ConversionError, ConversionResult, InvalidUnit, SystemConfigError, UnitSymbol};
pub use reading::{select, Extreme, Observation, Reading, ReadingMap};
pub use system::{SystemUnits, UnitSystem, IMPERIAL, METRIC};
pub use units::{
    length::LengthUnit, mass::MassUnit, pressure::PressureUnit, temperature::TemperatureUnit,
    volume::VolumeUnit, PivotUnit, Quantity, UnitOfMeasure,
};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
