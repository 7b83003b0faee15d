//! Evaluation strategy selection.
//!
//! A `Strategy` names one of the four interchangeable ways of evaluating a
//! recurrence. Strategies are looked up by name the same way for every
//! recurrence; aliases cover the common spellings.

use std::fmt;
use std::str::FromStr;

use crate::error::RecurrenceError;
use crate::evaluator::{self, CoreEvaluator};
use crate::memoized::Memoized;
use crate::options::Options;
use crate::recursive::NaiveRecursive;
use crate::recurrence::RecurrenceSpec;
use crate::tabulated::Tabulated;
use crate::term::Term;
use crate::window::SlidingWindow;

/// One of the four evaluation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Direct recursion with no caching. Exponential; for small n only.
    Recursive,
    /// Top-down evaluation with a per-call cache.
    Memoized,
    /// Bottom-up fill of a dense table.
    Tabulated,
    /// Bottom-up with only the trailing window of terms kept.
    Iterative,
}

impl Strategy {
    /// Every strategy, cheapest-to-read first.
    pub const ALL: [Strategy; 4] = [
        Strategy::Recursive,
        Strategy::Memoized,
        Strategy::Tabulated,
        Strategy::Iterative,
    ];

    /// Canonical name, accepted by `FromStr`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Memoized => "memoized",
            Strategy::Tabulated => "tabulated",
            Strategy::Iterative => "iterative",
        }
    }

    /// Whether the strategy runs without call-stack recursion, so its
    /// depth does not grow with n.
    #[must_use]
    pub fn is_stack_safe(self) -> bool {
        !matches!(self, Strategy::Recursive)
    }

    /// Evaluate term `n` of `spec` with this strategy.
    pub fn evaluate<T: Term>(
        self,
        spec: &RecurrenceSpec,
        n: i64,
        opts: &Options,
    ) -> Result<T, RecurrenceError> {
        evaluator::evaluate(spec, n, self, opts)
    }

    /// Dispatch to the core evaluator.
    pub(crate) fn evaluate_core<T: Term>(
        self,
        spec: &RecurrenceSpec,
        n: i64,
        opts: &Options,
    ) -> Result<T, RecurrenceError> {
        match self {
            Strategy::Recursive => NaiveRecursive.evaluate_core(spec, n, opts),
            Strategy::Memoized => Memoized.evaluate_core(spec, n, opts),
            Strategy::Tabulated => Tabulated.evaluate_core(spec, n, opts),
            Strategy::Iterative => SlidingWindow.evaluate_core(spec, n, opts),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" | "naive" => Ok(Strategy::Recursive),
            "memoized" | "memo" => Ok(Strategy::Memoized),
            "tabulated" | "tabulation" | "dp" => Ok(Strategy::Tabulated),
            "iterative" | "window" => Ok(Strategy::Iterative),
            _ => Err(RecurrenceError::Config(format!("unknown strategy: {s}"))),
        }
    }
}

/// Canonical names of all strategies.
#[must_use]
pub fn available() -> Vec<&'static str> {
    Strategy::ALL.iter().map(|s| s.name()).collect()
}
