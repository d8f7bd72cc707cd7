//! verdict-core
//!
//! Randomized threshold decisions with typed, inspectable failures.
//!
//! A decision draws one integer from an injected entropy source and classifies
//! it: below the threshold is a success message, anything else is an
//! `ErrorRecord` of kind `WrongNumberError`, returned as a value.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（DrawRange, RandomValue, DecisionRule, Outcome, errors）
//! - **ports**: 抽象化レイヤー（EntropySource, AsyncEntropySource）
//! - **impls**: 実装（SeededSource, SequenceSource）
//! - **app**: アプリケーションロジック（DecisionPipeline, get_answer）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{DecisionPipeline, get_answer};
pub use domain::{
    DecisionRule, DrawRange, EntropyError, ErrorKind, ErrorRecord, Outcome, OutcomeKind,
    RandomValue, RecordError,
};
pub use ports::{AsyncEntropySource, EntropySource, FixedSource, ThreadRngSource};
