//! Draw bounds and drawn values.
//!
//! `DrawRange` is validated once at construction, so everything downstream of
//! it (entropy sources, the pipeline) can assume `min < max`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::EntropyError;

/// A half-open integer interval `[min, max)` with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDrawRange")]
pub struct DrawRange {
    min: i64,
    max: i64,
}

impl DrawRange {
    /// `[0, 10)`, the range used by the standard decision rule.
    pub const DIGITS: DrawRange = DrawRange::from_bounds(0, 10);

    /// Validate bounds. `min >= max` is rejected instead of being clamped.
    pub fn new(min: i64, max: i64) -> Result<Self, EntropyError> {
        if min >= max {
            return Err(EntropyError::InvalidRange { min, max });
        }
        Ok(Self::from_bounds(min, max))
    }

    const fn from_bounds(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value < self.max
    }

    /// Number of integers in the range.
    pub fn width(&self) -> u64 {
        self.max.abs_diff(self.min)
    }
}

impl fmt::Display for DrawRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}

#[derive(Deserialize)]
struct RawDrawRange {
    min: i64,
    max: i64,
}

impl TryFrom<RawDrawRange> for DrawRange {
    type Error = EntropyError;

    fn try_from(raw: RawDrawRange) -> Result<Self, Self::Error> {
        DrawRange::new(raw.min, raw.max)
    }
}

/// A single draw, known to lie inside the range it was drawn from.
///
/// Created fresh for every decision and dropped right after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RandomValue(i64);

impl RandomValue {
    /// Check a raw draw against the range it was requested from.
    pub fn new(value: i64, range: &DrawRange) -> Result<Self, EntropyError> {
        if !range.contains(value) {
            return Err(EntropyError::OutOfRange {
                value,
                min: range.min(),
                max: range.max(),
            });
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RandomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
