//! Error Types for Unit Conversion Failures
//!
//! ## Design Philosophy
//!
//! HomeUnits' error system is designed with hub and edge deployments in mind:
//!
//! 1. **Small Size**: Each error variant is kept minimal since conversions run
//!    in hot per-poll paths and errors may be buffered alongside readings.
//!
//! 2. **No Heap Allocation**: All error data is inline. An offending unit
//!    symbol arrives as caller input, so it is captured into a bounded
//!    [`UnitSymbol`] rather than a `String`. This ensures deterministic
//!    memory usage.
//!
//! 3. **Actionable Information**: Every unit failure names both the rejected
//!    symbol and the quantity domain it was checked against, so a
//!    misconfigured integration can be identified from the message alone.
//!
//! ## Error Categories
//!
//! ### Conversion Failures
//! - `UnknownUnit`: symbol is not in the quantity's closed unit set
//! - `InvalidValue`: magnitude is NaN or infinite
//! - `InvalidHumidity`: dewpoint humidity outside `(0, 100]`
//!
//! ### Configuration Failures
//! - [`SystemConfigError`]: aggregated result of validating every unit of a
//!   [`UnitSystem`](crate::system::UnitSystem) at once. All four units are
//!   checked before the error is returned, never just the first bad one.
//!
//! ## Propagation Policy
//!
//! Every error is returned synchronously to the immediate caller. This crate
//! performs no catching, logging, retrying, or degradation internally; the
//! surrounding integration layer decides how a failed conversion surfaces to
//! the user.

use core::fmt;

use thiserror_no_std::Error;

use crate::units::Quantity;

/// Maximum stored length of a rejected unit symbol, in bytes.
///
/// Longer caller input is truncated on capture. Every recognized symbol fits
/// well within this bound ("fl. oz." is the longest at 7 bytes).
pub const MAX_SYMBOL_LEN: usize = 16;

/// Bounded, inline copy of a unit symbol taken from caller input.
pub type UnitSymbol = heapless::String<MAX_SYMBOL_LEN>;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion errors - kept small and allocation-free
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Unit symbol is not a member of the quantity's recognized set
    #[error("{symbol} is not a recognized {quantity} unit")]
    UnknownUnit {
        /// The rejected symbol, truncated to [`MAX_SYMBOL_LEN`] bytes
        symbol: UnitSymbol,
        /// The quantity domain the symbol was checked against
        quantity: Quantity,
    },

    /// Magnitude makes no numeric sense (NaN, infinity)
    #[error("value is not a finite number")]
    InvalidValue,

    /// Dewpoint humidity outside the valid `(0, 100]` range
    #[error("humidity {humidity}% is outside the valid range (0, 100]")]
    InvalidHumidity {
        /// The rejected relative humidity, in percent
        humidity: f32,
    },
}

impl ConversionError {
    /// Build an [`UnknownUnit`](Self::UnknownUnit) error, truncating the
    /// caller's symbol to the inline capacity.
    pub fn unknown_unit(symbol: &str, quantity: Quantity) -> Self {
        Self::UnknownUnit {
            symbol: truncate_symbol(symbol),
            quantity,
        }
    }
}

/// One invalid unit found while validating a unit system configuration
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidUnit {
    /// The quantity domain the symbol was checked against
    pub quantity: Quantity,
    /// The rejected symbol, truncated to [`MAX_SYMBOL_LEN`] bytes
    pub symbol: UnitSymbol,
}

impl InvalidUnit {
    /// Capture a rejected (quantity, symbol) pair from caller input.
    pub fn new(quantity: Quantity, symbol: &str) -> Self {
        Self {
            quantity,
            symbol: truncate_symbol(symbol),
        }
    }
}

impl fmt::Display for InvalidUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a recognized {} unit", self.symbol, self.quantity)
    }
}

/// Aggregated unit-system validation failure
///
/// Construction of a [`UnitSystem`](crate::system::UnitSystem) from symbols
/// checks every unit before failing; this error carries one entry per
/// rejected unit so callers can report all configuration mistakes at once.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfigError {
    /// Every rejected (quantity, symbol) pair, in constructor argument order
    pub invalid: heapless::Vec<InvalidUnit, 4>,
}

impl fmt::Display for SystemConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, unit) in self.invalid.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{unit}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SystemConfigError {}

fn truncate_symbol(symbol: &str) -> UnitSymbol {
    let mut out = UnitSymbol::new();
    for ch in symbol.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConversionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnknownUnit { symbol, quantity } =>
                defmt::write!(fmt, "{=str} is not a recognized {=str} unit", symbol.as_str(), quantity.name()),
            Self::InvalidValue =>
                defmt::write!(fmt, "value is not a finite number"),
            Self::InvalidHumidity { humidity } =>
                defmt::write!(fmt, "humidity {}% outside (0, 100]", humidity),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SystemConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} invalid unit(s) in system configuration", self.invalid.len());
    }
}
