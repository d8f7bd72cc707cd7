//! Domain model (draw bounds, decision rule, outcomes, errors).
//!
//! ここには乱数も I/O も入りません。すべて純粋なデータと関数です。

pub mod errors;
pub mod outcome;
pub mod rule;
pub mod value;

pub use self::errors::{EntropyError, ErrorKind, ErrorRecord, RecordError};
pub use self::outcome::{Outcome, OutcomeKind};
pub use self::rule::DecisionRule;
pub use self::value::{DrawRange, RandomValue};
