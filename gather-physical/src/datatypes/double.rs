//! This module defines a wrapper type [Double] for [f64] that can be hashed and totally ordered.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

/// Wrapper for [f64] that is usable as a set element and in comparisons.
///
/// Equality follows IEEE 754 (so `-0.0 == 0.0`), except that all NaN values
/// are equal to each other. NaN is ordered below every other value.
#[derive(Copy, Clone, Debug, Default)]
pub struct Double(f64);

impl Double {
    /// Wraps the given [f64]-`value` as a value over [Double].
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Double> for f64 {
    fn from(value: Double) -> Self {
        value.0
    }
}

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 || (self.0.is_nan() && other.0.is_nan())
    }
}

impl Eq for Double {}

impl PartialOrd for Double {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Double {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0.is_nan(), other.0.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self
                .0
                .partial_cmp(&other.0)
                .expect("comparison can only fail on NaN values, which are handled above"),
        }
    }
}

impl Hash for Double {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let bits = if self.0.is_nan() {
            f64::NAN.to_bits()
        } else if self.0 == 0.0 {
            0.0f64.to_bits()
        } else {
            self.0.to_bits()
        };

        bits.hash(state);
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
impl Arbitrary for Double {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::new(f64::arbitrary(g))
    }
}
