//! Decision rule: maps one drawn value to an `Outcome`.
//!
//! Classification is a pure function of the drawn value. All randomness lives
//! in the entropy source; this module never draws.

use serde::{Deserialize, Serialize};

use super::errors::{ErrorKind, ErrorRecord};
use super::outcome::Outcome;
use super::value::{DrawRange, RandomValue};

/// The range to draw from and the acceptance threshold.
///
/// A draw `v` is accepted when `v < threshold` (strict). A draw equal to the
/// threshold is rejected, and its message still reads "greater than".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRule {
    pub range: DrawRange,
    pub threshold: i64,
}

impl DecisionRule {
    /// Draw from `[0, 10)`, accept below 5.
    pub const STANDARD: DecisionRule = DecisionRule {
        range: DrawRange::DIGITS,
        threshold: 5,
    };

    pub fn new(range: DrawRange, threshold: i64) -> Self {
        Self { range, threshold }
    }

    /// Classify one draw.
    ///
    /// - `v < threshold`: `Success("<v> is less than <threshold>")`
    /// - otherwise: `Failure(WrongNumberError, "<v> is greater than <threshold>")`
    pub fn classify(&self, value: RandomValue) -> Outcome {
        if value.get() < self.threshold {
            Outcome::Success(format!("{value} is less than {}", self.threshold))
        } else {
            Outcome::Failure(ErrorRecord::rendered(
                ErrorKind::WrongNumberError,
                format!("{value} is greater than {}", self.threshold),
            ))
        }
    }
}

impl Default for DecisionRule {
    fn default() -> Self {
        Self::STANDARD
    }
}
