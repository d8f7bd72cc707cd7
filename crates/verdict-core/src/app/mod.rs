//! App - アプリケーション層
//!
//! ports（乱数源）と domain（判定ルール）を組み合わせて 1 回の判定を行います。
//!
//! # 主要コンポーネント
//! - **DecisionPipeline**: draw → 検証 → 分類
//! - **get_answer**: ThreadRngSource を使う既定のエントリポイント

pub mod pipeline;

// 主要な型を再エクスポート
pub use self::pipeline::{DecisionPipeline, get_answer};
