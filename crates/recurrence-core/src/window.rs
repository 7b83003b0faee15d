//! Constant-space sliding-window evaluation.
//!
//! Only the trailing `window()` terms are kept (one for factorial, two for
//! Fibonacci, four for ways-to-sum). Each step derives the next term from the
//! window and rotates it.

use std::collections::VecDeque;

use crate::error::RecurrenceError;
use crate::evaluator::CoreEvaluator;
use crate::options::Options;
use crate::recurrence::RecurrenceSpec;
use crate::term::Term;

/// Trailing terms of a recurrence, positioned just before `next`.
pub(crate) struct Window<T> {
    spec: RecurrenceSpec,
    next: i64,
    terms: VecDeque<T>,
}

impl<T: Term> Window<T> {
    /// Window over the last `window()` indices at or below the highest base case.
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn seed(spec: &RecurrenceSpec) -> Result<Self, RecurrenceError> {
        let next = spec.max_base_index() + 1;
        let width = spec.window() as i64;
        let terms = (next - width..next)
            .map(|i| spec.seed_value(i))
            .collect::<Result<VecDeque<T>, _>>()?;
        Ok(Self {
            spec: *spec,
            next,
            terms,
        })
    }

    /// Index of the term the next `advance` produces.
    pub(crate) fn next_index(&self) -> i64 {
        self.next
    }

    /// Derive the next term, slide the window and return the new term.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn advance(&mut self) -> Result<&T, RecurrenceError> {
        let width = self.terms.len();
        let priors: Vec<T> = self
            .spec
            .offsets()
            .iter()
            .map(|&k| self.terms[width - k as usize].clone())
            .collect();
        let term = self.spec.combine(self.next, &priors)?;
        self.terms.pop_front();
        self.terms.push_back(term);
        self.next += 1;
        Ok(&self.terms[width - 1])
    }
}

/// Sliding-window evaluator with O(window) auxiliary space.
pub struct SlidingWindow;

impl CoreEvaluator for SlidingWindow {
    fn evaluate_core<T: Term>(
        &self,
        spec: &RecurrenceSpec,
        n: i64,
        _opts: &Options,
    ) -> Result<T, RecurrenceError> {
        if let Some(resolved) = spec.boundary(n) {
            return resolved;
        }
        let mut window = Window::seed(spec)?;
        while window.next_index() < n {
            window.advance()?;
        }
        window.advance().cloned()
    }

    fn name(&self) -> &'static str {
        "iterative"
    }
}
