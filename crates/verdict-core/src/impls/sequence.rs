//! SequenceSource - 決められた値を順番に返すテスト用乱数源
//!
//! 最後まで返したら先頭に戻ります。

use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

use crate::domain::DrawRange;
use crate::ports::EntropySource;

/// SequenceSource は固定の値の列をループで返す
///
/// FixedSource と同様、値が range に入っているかは確認しません。
#[derive(Debug)]
pub struct SequenceSource {
    values: Vec<i64>,
    cursor: AtomicUsize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("sequence source needs at least one value")]
    Empty,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<i64>>) -> Result<Self, SequenceError> {
        let values = values.into();
        if values.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self {
            values,
            cursor: AtomicUsize::new(0),
        })
    }

    /// How many draws have been served so far.
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl EntropySource for SequenceSource {
    fn draw(&self, _range: &DrawRange) -> i64 {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[i % self.values.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_rejected() {
        let err = SequenceSource::new(Vec::new()).unwrap_err();
        assert_eq!(err, SequenceError::Empty);
    }

    #[test]
    fn values_are_returned_in_order_and_wrap() {
        let source = SequenceSource::new([1, 5, 9]).unwrap();
        let drawn: Vec<i64> = (0..7).map(|_| source.draw(&DrawRange::DIGITS)).collect();
        assert_eq!(drawn, vec![1, 5, 9, 1, 5, 9, 1]);
        assert_eq!(source.draws(), 7);
    }
}
