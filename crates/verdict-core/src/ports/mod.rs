//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 判定ロジックが依存する外部要因は乱数だけなので、ポートも乱数源だけです。

pub mod async_entropy;
pub mod entropy;

// 主要な trait を再エクスポート
pub use self::async_entropy::AsyncEntropySource;
pub use self::entropy::{EntropySource, FixedSource, ThreadRngSource};
