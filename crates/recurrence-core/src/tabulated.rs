//! Bottom-up tabulation.
//!
//! Fills a dense table from the first base case up to n in increasing index
//! order. Linear time and space, no recursion.

use crate::error::RecurrenceError;
use crate::evaluator::{check_table_budget, reserve_table, slot, CoreEvaluator};
use crate::options::Options;
use crate::recurrence::RecurrenceSpec;
use crate::term::Term;

/// Tabulation evaluator.
pub struct Tabulated;

impl Tabulated {
    /// Referenced priors of term `k`, read from the table or the boundary.
    fn priors<T: Term>(
        spec: &RecurrenceSpec,
        table: &[T],
        k: i64,
    ) -> Result<Vec<T>, RecurrenceError> {
        let first = spec.min_index();
        spec.prior_indices(k)
            .map(|i| {
                if i < first {
                    spec.seed_value(i)
                } else {
                    Ok(table[slot(first, i)].clone())
                }
            })
            .collect()
    }
}

impl CoreEvaluator for Tabulated {
    fn evaluate_core<T: Term>(
        &self,
        spec: &RecurrenceSpec,
        n: i64,
        opts: &Options,
    ) -> Result<T, RecurrenceError> {
        if let Some(resolved) = spec.boundary(n) {
            return resolved;
        }
        check_table_budget::<T>(spec, n, opts)?;

        let mut table: Vec<T> = reserve_table(spec, spec.min_index(), n, opts)?;
        table.extend(spec.base_cases().iter().map(|&(_, v)| T::from(v)));

        for k in spec.max_base_index() + 1..n {
            let term = spec.combine(k, &Self::priors(spec, &table, k)?)?;
            table.push(term);
        }
        spec.combine(n, &Self::priors(spec, &table, n)?)
    }

    fn name(&self) -> &'static str {
        "tabulated"
    }
}
