//! Impls - ポートの実装（再現用・テスト用）
//!
//! 本番用の ThreadRngSource はポートと同じファイルにあります（SystemClock と同じ扱い）。
//!
//! # 含まれる実装
//! - **SeededSource**: seed 固定の StdRng（再現可能な実行）
//! - **SequenceSource**: 固定の値の列（シナリオテスト）

pub mod seeded;
pub mod sequence;

// 主要な型を再エクスポート
pub use self::seeded::SeededSource;
pub use self::sequence::{SequenceError, SequenceSource};
