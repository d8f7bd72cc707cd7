//! DecisionPipeline - 1 回の draw から Outcome を作る
//!
//! # 流れ
//! 1. EntropySource から `rule.range` の範囲で 1 回だけ draw
//! 2. draw した値を RandomValue として検証（範囲外なら乱数源の契約違反）
//! 3. DecisionRule で分類して Outcome を返す
//!
//! リトライや回復はしません。Failure はそのままデータとして返します。

use log::{debug, error};

use crate::domain::{DecisionRule, EntropyError, ErrorRecord, Outcome, RandomValue};
use crate::ports::{AsyncEntropySource, EntropySource, ThreadRngSource};

/// DecisionPipeline は乱数源と判定ルールを束ねる
///
/// # 使用例
/// ```ignore
/// let pipeline = DecisionPipeline::new(FixedSource::new(3));
/// assert_eq!(pipeline.get_answer(), Ok("3 is less than 5".to_string()));
/// ```
///
/// # Thread Safety
/// - 可変状態を持たないので、`E: Send + Sync` なら pipeline も共有できる
/// - 呼び出しごとに独立した draw を 1 回行う
#[derive(Debug, Clone)]
pub struct DecisionPipeline<E> {
    source: E,
    rule: DecisionRule,
}

impl<E> DecisionPipeline<E> {
    /// Pipeline with the standard rule: draw from `[0, 10)`, accept below 5.
    pub fn new(source: E) -> Self {
        Self::with_rule(source, DecisionRule::STANDARD)
    }

    pub fn with_rule(source: E, rule: DecisionRule) -> Self {
        Self { source, rule }
    }

    pub fn rule(&self) -> &DecisionRule {
        &self.rule
    }

    pub fn source(&self) -> &E {
        &self.source
    }

    /// Validate a raw draw and classify it.
    fn settle(&self, raw: i64) -> Result<Outcome, EntropyError> {
        let value = RandomValue::new(raw, &self.rule.range)?;
        let outcome = self.rule.classify(value);
        debug!(
            "drew {value} from {}, outcome={:?}",
            self.rule.range,
            outcome.kind()
        );
        Ok(outcome)
    }
}

impl<E: EntropySource> DecisionPipeline<E> {
    /// Draw once and classify, reporting a misbehaving source as an error.
    pub fn try_compute_decision(&self) -> Result<Outcome, EntropyError> {
        let raw = self.source.draw(&self.rule.range);
        self.settle(raw)
    }

    /// Draw once and classify.
    ///
    /// # Panics
    /// Panics if the entropy source returns a value outside `rule.range`.
    /// That is a bug in the source, not a business failure; use
    /// [`try_compute_decision`](Self::try_compute_decision) to observe it instead.
    pub fn compute_decision(&self) -> Outcome {
        match self.try_compute_decision() {
            Ok(outcome) => outcome,
            Err(err) => contract_violation(err),
        }
    }

    /// `compute_decision` as a `Result`: the success message or the failure record.
    pub fn get_answer(&self) -> Result<String, ErrorRecord> {
        self.compute_decision().into_result()
    }
}

impl<E: AsyncEntropySource> DecisionPipeline<E> {
    /// Async variant of `try_compute_decision`.
    ///
    /// The draw is the only await point. Dropping the future before it
    /// completes cancels the draw; nothing else needs rolling back.
    pub async fn try_compute_decision_async(&self) -> Result<Outcome, EntropyError> {
        let raw = self.source.draw_async(&self.rule.range).await;
        self.settle(raw)
    }

    /// Async variant of `compute_decision`.
    ///
    /// # Panics
    /// Same as [`compute_decision`](Self::compute_decision).
    pub async fn compute_decision_async(&self) -> Outcome {
        match self.try_compute_decision_async().await {
            Ok(outcome) => outcome,
            Err(err) => contract_violation(err),
        }
    }

    pub async fn get_answer_async(&self) -> Result<String, ErrorRecord> {
        self.compute_decision_async().await.into_result()
    }
}

impl Default for DecisionPipeline<ThreadRngSource> {
    fn default() -> Self {
        Self::new(ThreadRngSource)
    }
}

fn contract_violation(err: EntropyError) -> ! {
    error!("entropy source broke its contract: {err}");
    panic!("entropy source broke its contract: {err}");
}

/// Draw from `[0, 10)` with the thread-local generator and classify.
///
/// - `Ok("<v> is less than 5")` when `v < 5`
/// - `Err(ErrorRecord { kind: WrongNumberError, message: "<v> is greater than 5" })` otherwise
pub fn get_answer() -> Result<String, ErrorRecord> {
    DecisionPipeline::default().get_answer()
}
