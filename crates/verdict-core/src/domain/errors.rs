//! Errors - 業務エラーと前提条件エラー
//!
//! 2 種類のエラーを明確に分けています：
//! - **ErrorRecord**: 判定ルール違反（値として返す、Outcome::Failure の中身）
//! - **EntropyError**: 乱数源の設定ミス・契約違反（呼び出し側のプログラミングエラー）

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ErrorKind は業務エラーの判別子
///
/// 現在は `WrongNumberError` の 1 種類のみ。
/// serde では variant 名そのまま（`"WrongNumberError"`）で出力されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// 引いた値が「threshold 未満」のルールを満たさなかった
    WrongNumberError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::WrongNumberError => "WrongNumberError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged, data-bearing business-rule failure.
///
/// This is returned as a value (inside `Outcome::Failure` or the `Err` side of
/// `get_answer`), never raised as a panic. Callers inspect `kind()` and
/// `message()` to branch on it.
///
/// Invariant: `message` is never empty. Deserialization enforces it too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(try_from = "RawErrorRecord")]
#[error("{kind}: {message}")]
pub struct ErrorRecord {
    kind: ErrorKind,
    message: String,
}

impl ErrorRecord {
    /// Build a `WrongNumberError` record.
    pub fn wrong_number(message: impl Into<String>) -> Result<Self, RecordError> {
        Self::new(ErrorKind::WrongNumberError, message)
    }

    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Result<Self, RecordError> {
        let message = message.into();
        if message.is_empty() {
            return Err(RecordError::EmptyMessage(kind));
        }
        Ok(Self { kind, message })
    }

    /// Messages rendered by `DecisionRule` always start with the drawn value.
    pub(crate) fn rendered(kind: ErrorKind, message: String) -> Self {
        debug_assert!(!message.is_empty());
        Self { kind, message }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

/// Wire shape used only to validate incoming records.
#[derive(Deserialize)]
struct RawErrorRecord {
    kind: ErrorKind,
    message: String,
}

impl TryFrom<RawErrorRecord> for ErrorRecord {
    type Error = RecordError;

    fn try_from(raw: RawErrorRecord) -> Result<Self, Self::Error> {
        ErrorRecord::new(raw.kind, raw.message)
    }
}

/// RecordError は ErrorRecord の構築エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("error record of kind {0} must carry a non-empty message")]
    EmptyMessage(ErrorKind),
}

/// EntropyError は乱数源まわりの前提条件エラー
///
/// 業務エラー（ErrorRecord）とは別物で、Outcome::Failure にはなりません。
/// 発生した場合は呼び出し側の設定ミス、または EntropySource 実装の契約違反です。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    #[error("invalid draw range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("entropy source returned {value}, outside of [{min}, {max})")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_displays_its_discriminator() {
        assert_eq!(ErrorKind::WrongNumberError.to_string(), "WrongNumberError");
    }

    #[test]
    fn empty_message_is_rejected() {
        let err = ErrorRecord::wrong_number("").unwrap_err();
        assert_eq!(err, RecordError::EmptyMessage(ErrorKind::WrongNumberError));
    }

    #[test]
    fn record_serializes_with_kind_tag() {
        let record = ErrorRecord::wrong_number("7 is greater than 5").unwrap();
        let v = serde_json::to_value(&record).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"kind": "WrongNumberError", "message": "7 is greater than 5"})
        );
    }

    #[test]
    fn deserialize_rejects_empty_message() {
        let result: Result<ErrorRecord, _> =
            serde_json::from_str(r#"{"kind":"WrongNumberError","message":""}"#);
        assert!(result.is_err());

        let ok: ErrorRecord =
            serde_json::from_str(r#"{"kind":"WrongNumberError","message":"9 is greater than 5"}"#)
                .unwrap();
        assert_eq!(ok.kind(), ErrorKind::WrongNumberError);
        assert_eq!(ok.message(), "9 is greater than 5");
    }

    #[test]
    fn record_works_as_std_error() {
        let record = ErrorRecord::wrong_number("5 is greater than 5").unwrap();
        let boxed: Box<dyn std::error::Error> = Box::new(record);
        assert_eq!(boxed.to_string(), "WrongNumberError: 5 is greater than 5");
    }

    #[test]
    fn invalid_range_message_names_bounds() {
        let err = EntropyError::InvalidRange { min: 10, max: 0 };
        assert_eq!(
            err.to_string(),
            "invalid draw range: min (10) must be less than max (0)"
        );
    }
}
