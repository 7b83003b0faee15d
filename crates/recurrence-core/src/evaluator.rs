//! Evaluation front door and the core evaluator trait.
//!
//! `evaluate` is the public entry point: it validates the recurrence,
//! resolves indices at or below the base cases (domain errors, base values,
//! the defined extension below the domain), logs, and only then hands the
//! index to the selected `CoreEvaluator`. Core evaluators therefore only ever
//! see indices that must be derived from the recurrence.

use tracing::debug;

use crate::error::RecurrenceError;
use crate::memory_budget::TableEstimate;
use crate::options::Options;
use crate::recurrence::RecurrenceSpec;
use crate::strategy::Strategy;
use crate::term::Term;

/// Internal trait implemented by each evaluation strategy.
pub trait CoreEvaluator: Send + Sync {
    /// Compute term `n`. Called by [`evaluate`] only for `n > spec.max_base_index()`;
    /// implementations still resolve lower indices through the boundary.
    fn evaluate_core<T: Term>(
        &self,
        spec: &RecurrenceSpec,
        n: i64,
        opts: &Options,
    ) -> Result<T, RecurrenceError>;

    /// Get the name of this strategy.
    fn name(&self) -> &'static str;
}

/// Evaluate term `n` of `spec` with the given strategy.
///
/// Every call owns whatever cache or table its strategy needs; nothing is
/// shared between calls.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use recurrence_core::{evaluate, Options, Strategy, FIBONACCI};
///
/// let f: BigUint = evaluate(&FIBONACCI, 100, Strategy::Tabulated, &Options::default()).unwrap();
/// assert_eq!(f.to_string(), "354224848179261915075");
/// ```
pub fn evaluate<T: Term>(
    spec: &RecurrenceSpec,
    n: i64,
    strategy: Strategy,
    opts: &Options,
) -> Result<T, RecurrenceError> {
    spec.validate()?;

    if let Some(resolved) = spec.boundary(n) {
        return resolved;
    }

    debug!(
        recurrence = spec.name(),
        strategy = strategy.name(),
        n,
        "Evaluating term"
    );
    let result = strategy.evaluate_core(spec, n, opts);
    match &result {
        Ok(_) => debug!(
            recurrence = spec.name(),
            strategy = strategy.name(),
            n,
            "Evaluation complete"
        ),
        Err(err) => debug!(
            recurrence = spec.name(),
            strategy = strategy.name(),
            n,
            error = %err,
            "Evaluation failed"
        ),
    }
    result
}

/// Refuse a per-call table of `S` slots that would exceed the memory limit.
pub(crate) fn check_table_budget<S>(
    spec: &RecurrenceSpec,
    n: i64,
    opts: &Options,
) -> Result<(), RecurrenceError> {
    let estimate = TableEstimate::estimate::<S>(spec, n);
    if estimate.fits_in(opts.memory_limit) {
        Ok(())
    } else {
        Err(RecurrenceError::MemoryLimit {
            recurrence: spec.name(),
            n,
            required: estimate.bytes,
            limit: opts.memory_limit,
        })
    }
}

/// Reserve an empty table with room for the slots `first..=n`.
///
/// Allocation failure, or a slot count past `usize`, is reported as
/// `MemoryLimit` instead of aborting.
pub(crate) fn reserve_table<S>(
    spec: &RecurrenceSpec,
    first: i64,
    n: i64,
    opts: &Options,
) -> Result<Vec<S>, RecurrenceError> {
    let len = table_len(first, n);
    let mut table = Vec::new();
    table.try_reserve_exact(len).map_err(|err| {
        debug!(recurrence = spec.name(), n, len, error = %err, "Table allocation failed");
        RecurrenceError::MemoryLimit {
            recurrence: spec.name(),
            n,
            required: len.saturating_mul(std::mem::size_of::<S>()),
            limit: opts.memory_limit,
        }
    })?;
    Ok(table)
}

/// Number of slots covering `first..=n`.
pub(crate) fn table_len(first: i64, n: i64) -> usize {
    if n < first {
        0
    } else {
        slot(first, n).saturating_add(1)
    }
}

/// Slot of index `i >= first` in a dense table whose first slot is index
/// `first`. Saturates at `usize::MAX`, which no table reaches.
pub(crate) fn slot(first: i64, i: i64) -> usize {
    usize::try_from(i.abs_diff(first)).unwrap_or(usize::MAX)
}
