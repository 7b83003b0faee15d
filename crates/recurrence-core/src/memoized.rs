//! Memoized top-down evaluation.
//!
//! Terms are requested top-down from n and each derived term is stored in an
//! `EvaluationCache` the first time it is computed. The descent is driven by
//! an explicit work stack rather than the call stack, so depth never limits n.

use crate::error::RecurrenceError;
use crate::evaluator::{check_table_budget, reserve_table, slot, table_len, CoreEvaluator};
use crate::options::Options;
use crate::recurrence::RecurrenceSpec;
use crate::term::Term;

/// Per-call cache of derived terms, indexed densely from the first derived
/// index. Presence is tracked per slot; zero is an ordinary value.
pub struct EvaluationCache<T> {
    first: i64,
    slots: Vec<Option<T>>,
}

impl<T: Term> EvaluationCache<T> {
    /// Empty cache covering every derived index of `spec` up to `n`.
    ///
    /// Fails with `MemoryLimit` when the slots cannot be allocated.
    pub fn for_term(
        spec: &RecurrenceSpec,
        n: i64,
        opts: &Options,
    ) -> Result<Self, RecurrenceError> {
        let first = spec.max_base_index() + 1;
        let mut slots = reserve_table(spec, first, n, opts)?;
        slots.resize_with(table_len(first, n), || None);
        Ok(Self { first, slots })
    }

    /// Cached term for index `i`, if computed.
    #[must_use]
    pub fn get(&self, i: i64) -> Option<&T> {
        if i < self.first {
            return None;
        }
        self.slots.get(slot(self.first, i)).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn contains(&self, i: i64) -> bool {
        self.get(i).is_some()
    }

    /// Store the term for index `i`. Indices outside the cache are ignored.
    pub fn insert(&mut self, i: i64, value: T) {
        if i < self.first {
            return;
        }
        if let Some(entry) = self.slots.get_mut(slot(self.first, i)) {
            *entry = Some(value);
        }
    }

    /// Remove and return the term for index `i`.
    pub fn take(&mut self, i: i64) -> Option<T> {
        if i < self.first {
            return None;
        }
        self.slots.get_mut(slot(self.first, i)).and_then(Option::take)
    }

    /// Number of terms computed so far.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Memoized evaluator.
pub struct Memoized;

impl Memoized {
    fn run<T: Term>(
        spec: &RecurrenceSpec,
        n: i64,
        cache: &mut EvaluationCache<T>,
    ) -> Result<T, RecurrenceError> {
        let mut stack = vec![n];
        let mut priors = Vec::with_capacity(spec.offsets().len());

        while let Some(&k) = stack.last() {
            if cache.contains(k) {
                stack.pop();
                continue;
            }

            priors.clear();
            let mut pending = false;
            for i in spec.prior_indices(k) {
                if let Some(resolved) = spec.boundary(i) {
                    priors.push(resolved?);
                } else if let Some(known) = cache.get(i) {
                    priors.push(known.clone());
                } else {
                    stack.push(i);
                    pending = true;
                }
            }
            if pending {
                continue;
            }

            let term = spec.combine(k, &priors)?;
            cache.insert(k, term);
            stack.pop();
        }

        cache.take(n).ok_or_else(|| RecurrenceError::InvalidSpec {
            recurrence: spec.name(),
            reason: format!("term {n} was not produced"),
        })
    }
}

impl CoreEvaluator for Memoized {
    fn evaluate_core<T: Term>(
        &self,
        spec: &RecurrenceSpec,
        n: i64,
        opts: &Options,
    ) -> Result<T, RecurrenceError> {
        if let Some(resolved) = spec.boundary(n) {
            return resolved;
        }
        check_table_budget::<Option<T>>(spec, n, opts)?;
        let mut cache = EvaluationCache::for_term(spec, n, opts)?;
        Self::run(spec, n, &mut cache)
    }

    fn name(&self) -> &'static str {
        "memoized"
    }
}
