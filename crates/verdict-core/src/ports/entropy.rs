//! EntropySource port - 乱数源の抽象化
//!
//! 判定ロジックを決定的にテストできるよう、乱数は trait として注入します。
//!
//! # 実装
//! - **ThreadRngSource**: `rand::thread_rng()` ベース（本番用）
//! - **FixedSource**: 常に同じ値を返す（テスト用）
//! - `impls` 側に SeededSource, SequenceSource

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;
use rand::Rng;

use crate::domain::{DrawRange, EntropyError};

/// EntropySource は範囲内の一様乱数整数を返す
///
/// # 契約
/// - `draw` は `range.min() <= v < range.max()` を満たす `v` を返す
/// - range は構築時に検証済み（`min < max`）なので、ここでは失敗しない
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数スレッドから同時に呼ばれてもよい）
/// - 内部状態を持つ実装は自分で排他制御すること
#[cfg_attr(test, automock)]
pub trait EntropySource: Send + Sync {
    /// Draw one integer from `range`.
    fn draw(&self, range: &DrawRange) -> i64;

    /// Draw one integer from `[min, max)`.
    ///
    /// Fails fast with `EntropyError::InvalidRange` when `min >= max`.
    fn next_int_between(&self, min: i64, max: i64) -> Result<i64, EntropyError> {
        let range = DrawRange::new(min, max)?;
        Ok(self.draw(&range))
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Arc<S> {
    fn draw(&self, range: &DrawRange) -> i64 {
        (**self).draw(range)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn draw(&self, range: &DrawRange) -> i64 {
        (**self).draw(range)
    }
}

/// ThreadRngSource はスレッドローカルな乱数生成器を使う本番用実装
///
/// `thread_rng()` はスレッドごとに独立した generator を持つので、
/// ロックなしで並行に呼び出せます。暗号学的な品質は保証しません。
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl EntropySource for ThreadRngSource {
    fn draw(&self, range: &DrawRange) -> i64 {
        rand::thread_rng().gen_range(range.min()..range.max())
    }
}

/// FixedSource は常に同じ値を返すテスト用実装
///
/// 値が要求された range に入っているかは確認しません。
/// 範囲外の値はパイプライン側で `EntropyError::OutOfRange` として検出されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSource {
    value: i64,
}

impl FixedSource {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl EntropySource for FixedSource {
    fn draw(&self, _range: &DrawRange) -> i64 {
        self.value
    }
}
