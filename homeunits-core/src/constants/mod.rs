//! Conversion Factors and Physical Constants
//!
//! This module defines the fixed conversion tables and physical constants
//! used throughout the unit conversion core. All values are exact legal
//! definitions or established physics constants; none are tunable.
//!
//! Factors live in [`factors`], grouped by quantity domain and oriented as
//! "pivot units per one source unit" (meters, pascals, grams, liters). The
//! Magnus dewpoint constants live in [`physics`].

pub mod factors;
pub mod physics;
