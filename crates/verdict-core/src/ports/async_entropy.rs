//! AsyncEntropySource port - 非同期な乱数源
//!
//! 乱数が I/O や外部プロバイダから来る場合のためのポートです。
//! パイプラインの中で await するのはこの draw だけで、
//! その後の判定は同期的に終わります（キャンセルできるのは draw の前まで）。

use async_trait::async_trait;

use super::entropy::EntropySource;
use crate::domain::{DrawRange, EntropyError};

/// AsyncEntropySource は await 可能な乱数源
///
/// 同期の `EntropySource` はすべて blanket impl でこの trait も満たします。
#[async_trait]
pub trait AsyncEntropySource: Send + Sync {
    /// Draw one integer from `range`.
    async fn draw_async(&self, range: &DrawRange) -> i64;

    /// Draw one integer from `[min, max)`, failing fast when `min >= max`.
    async fn next_int_between_async(&self, min: i64, max: i64) -> Result<i64, EntropyError> {
        let range = DrawRange::new(min, max)?;
        Ok(self.draw_async(&range).await)
    }
}

#[async_trait]
impl<S: EntropySource + ?Sized> AsyncEntropySource for S {
    async fn draw_async(&self, range: &DrawRange) -> i64 {
        self.draw(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedSource;

    #[tokio::test]
    async fn sync_sources_are_async_sources() {
        let source = FixedSource::new(6);
        let v = source.next_int_between_async(0, 10).await.unwrap();
        assert_eq!(v, 6);
    }

    #[tokio::test]
    async fn async_bounds_are_validated_before_drawing() {
        let source = FixedSource::new(6);
        let err = source.next_int_between_async(3, 3).await.unwrap_err();
        assert_eq!(err, EntropyError::InvalidRange { min: 3, max: 3 });
    }
}
