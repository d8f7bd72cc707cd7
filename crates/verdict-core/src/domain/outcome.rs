//! Outcome model: the result of one decision.
//!
//! An `Outcome` is either a success message or a typed failure record. It is
//! plain data: nothing here panics or short-circuits, callers match on it.

use serde::{Deserialize, Serialize};

use super::errors::ErrorRecord;

/// Which variant an outcome is, without its payload.
///
/// Serialized as SCREAMING_SNAKE_CASE (SUCCESS / FAILURE), same as the tag
/// used by `Outcome` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeKind {
    Success,
    Failure,
}

/// The two-variant result of a decision.
///
/// Example shapes:
/// - `{"kind":"SUCCESS","value":"3 is less than 5"}`
/// - `{"kind":"FAILURE","value":{"kind":"WrongNumberError","message":"7 is greater than 5"}}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// The draw satisfied the rule.
    Success(String),

    /// The draw violated the rule.
    Failure(ErrorRecord),
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Success(_) => OutcomeKind::Success,
            Outcome::Failure(_) => OutcomeKind::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The human-readable message of either variant.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(message) => message,
            Outcome::Failure(record) => record.message(),
        }
    }

    pub fn into_result(self) -> Result<String, ErrorRecord> {
        match self {
            Outcome::Success(message) => Ok(message),
            Outcome::Failure(record) => Err(record),
        }
    }
}

impl From<Outcome> for Result<String, ErrorRecord> {
    fn from(outcome: Outcome) -> Self {
        outcome.into_result()
    }
}

impl From<Result<String, ErrorRecord>> for Outcome {
    fn from(result: Result<String, ErrorRecord>) -> Self {
        match result {
            Ok(message) => Outcome::Success(message),
            Err(record) => Outcome::Failure(record),
        }
    }
}
