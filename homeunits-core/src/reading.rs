//! Candidate-Value Selection for Polled Readings
//!
//! ## Overview
//!
//! Weather and climate integrations often report one logical field as
//! several candidate observations: a daily forecast may carry a `min` and a
//! `max` entry for the same quantity, a current-conditions payload just one.
//! This module resolves such a reading to the single scalar an entity
//! reports.
//!
//! ## Shape
//!
//! The payload shape is an explicit tagged variant instead of runtime type
//! inspection: a [`Reading`] is either one [`Observation`] or an ordered
//! series of them, and the compiler enforces that selection handles both.
//!
//! ## Precedence
//!
//! Resolution picks optimistically, best value first:
//!
//! ```text
//! max-tagged > min-tagged > first element > None
//! ```
//!
//! A series with exactly one element short-circuits to that element's value
//! regardless of tags, and an absent map key resolves to `None` - selection
//! never fails, it only declines to produce a value.
//!
//! ```rust
//! use homeunits_core::reading::{Observation, Reading, ReadingMap, select};
//!
//! let series = [Observation::min(1.0), Observation::max(9.0), Observation::new(5.0)];
//! let mut readings: ReadingMap<4> = ReadingMap::new();
//! readings.insert("temp", Reading::Series(&series)).unwrap();
//!
//! assert_eq!(select(&readings, "temp"), Some(9.0)); // max wins
//! assert_eq!(select(&readings, "wind"), None);      // absent key
//! ```

use heapless::FnvIndexMap;

/// Marker tagging an observation as one end of a forecast range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Extreme {
    /// Lower end of the reported range
    Min,
    /// Upper end of the reported range
    Max,
}

/// One candidate observation for a reading
///
/// The value is optional because vendors do emit tagged entries with the
/// magnitude missing; selection passes that absence through rather than
/// skipping ahead.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// The observed magnitude, if the vendor reported one
    pub value: Option<f32>,
    /// Range tag, if this observation is one end of a min/max pair
    pub extreme: Option<Extreme>,
}

impl Observation {
    /// Untagged observation with a value.
    pub const fn new(value: f32) -> Self {
        Self {
            value: Some(value),
            extreme: None,
        }
    }

    /// Min-tagged observation.
    pub const fn min(value: f32) -> Self {
        Self {
            value: Some(value),
            extreme: Some(Extreme::Min),
        }
    }

    /// Max-tagged observation.
    pub const fn max(value: f32) -> Self {
        Self {
            value: Some(value),
            extreme: Some(Extreme::Max),
        }
    }

    /// Observation with no reported magnitude.
    pub const fn empty() -> Self {
        Self {
            value: None,
            extreme: None,
        }
    }
}

/// A polled reading: one observation, or an ordered series of candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading<'a> {
    /// A single observation
    Single(Observation),
    /// An ordered series of candidate observations, e.g. a forecast's
    /// min/max pair
    Series(&'a [Observation]),
}

impl Reading<'_> {
    /// Resolve this reading to the single scalar to report.
    ///
    /// Precedence for a multi-element series: the first max-tagged
    /// element's value, else the first min-tagged element's value, else the
    /// first element's value. A one-element series returns that element's
    /// value regardless of tags; an empty series resolves to `None`.
    pub fn resolve(&self) -> Option<f32> {
        match self {
            Self::Single(observation) => observation.value,
            Self::Series(observations) => match observations {
                [] => None,
                [only] => only.value,
                all => {
                    if let Some(max) = all.iter().find(|o| o.extreme == Some(Extreme::Max)) {
                        return max.value;
                    }
                    if let Some(min) = all.iter().find(|o| o.extreme == Some(Extreme::Min)) {
                        return min.value;
                    }
                    all[0].value
                }
            },
        }
    }
}

/// Bounded reading-name → [`Reading`] map, produced fresh per poll cycle
///
/// `N` must be a power of two (FNV index map requirement); 8 or 16 covers
/// typical weather payloads.
pub type ReadingMap<'a, const N: usize> = FnvIndexMap<&'a str, Reading<'a>, N>;

/// Look up `key` and resolve it to a scalar.
///
/// An absent key resolves to `None`; selection never fails.
pub fn select<const N: usize>(readings: &ReadingMap<'_, N>, key: &str) -> Option<f32> {
    readings.get(key).and_then(Reading::resolve)
}
