//! Naive recursive evaluation.
//!
//! Applies the recurrence directly, recomputing shared subterms. The cost is
//! exponential in n (branching factor = number of offsets) and the call depth
//! is linear in n, so this strategy is for small inputs and for reading.
//! Depth is checked up front against `Options::max_recursion_depth` so large
//! inputs fail with an error instead of exhausting the stack. Anything deeper
//! than a few frames runs on its own thread with a stack sized for that depth,
//! so the caller's stack size never decides whether an accepted input aborts.

use std::thread;

use tracing::warn;

use crate::error::RecurrenceError;
use crate::evaluator::CoreEvaluator;
use crate::options::Options;
use crate::recurrence::RecurrenceSpec;
use crate::term::Term;

/// Stack reserved per nested level on a dedicated recursion thread.
/// Unoptimized builds use a few KiB per level.
const STACK_PER_LEVEL: usize = 32 * 1024;

/// Fixed stack headroom on a dedicated recursion thread.
const STACK_BASE: usize = 1024 * 1024;

/// Depth that is evaluated directly on the caller's stack.
const INLINE_DEPTH: u64 = 16;

/// Naive recursive evaluator.
pub struct NaiveRecursive;

impl NaiveRecursive {
    /// Number of nested derived frames needed for term `n`: the longest
    /// chain steps down by the smallest offset until it reaches a base case.
    fn required_depth(spec: &RecurrenceSpec, n: i64) -> u64 {
        let above = n.saturating_sub(spec.max_base_index()).max(0).unsigned_abs();
        above.div_ceil(spec.offsets()[0])
    }

    fn term<T: Term>(spec: &RecurrenceSpec, n: i64) -> Result<T, RecurrenceError> {
        if let Some(resolved) = spec.boundary(n) {
            return resolved;
        }
        let priors = spec
            .prior_indices(n)
            .map(|i| Self::term(spec, i))
            .collect::<Result<Vec<T>, _>>()?;
        spec.combine(n, &priors)
    }

    /// Stack size for a recursion thread descending `depth` levels.
    fn stack_size(depth: u64) -> usize {
        usize::try_from(depth)
            .unwrap_or(usize::MAX)
            .saturating_mul(STACK_PER_LEVEL)
            .saturating_add(STACK_BASE)
    }

    fn term_on_sized_stack<T: Term>(
        spec: &RecurrenceSpec,
        n: i64,
        depth: u64,
        limit: usize,
    ) -> Result<T, RecurrenceError> {
        let stack_size = Self::stack_size(depth);
        thread::scope(|scope| {
            let spawned = thread::Builder::new()
                .name("recurrence-recursive".into())
                .stack_size(stack_size)
                .spawn_scoped(scope, move || Self::term::<T>(spec, n));
            match spawned {
                Ok(handle) => handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload)),
                Err(err) => {
                    warn!(
                        recurrence = spec.name(),
                        n,
                        stack_size,
                        error = %err,
                        "Could not reserve a stack for naive recursion"
                    );
                    Err(RecurrenceError::DepthExceeded {
                        recurrence: spec.name(),
                        n,
                        limit,
                    })
                }
            }
        })
    }
}

impl CoreEvaluator for NaiveRecursive {
    fn evaluate_core<T: Term>(
        &self,
        spec: &RecurrenceSpec,
        n: i64,
        opts: &Options,
    ) -> Result<T, RecurrenceError> {
        if let Some(resolved) = spec.boundary(n) {
            return resolved;
        }
        let limit = opts.max_recursion_depth;
        let depth = Self::required_depth(spec, n);
        if depth > u64::try_from(limit).unwrap_or(u64::MAX) {
            return Err(RecurrenceError::DepthExceeded {
                recurrence: spec.name(),
                n,
                limit,
            });
        }
        if depth <= INLINE_DEPTH {
            return Self::term(spec, n);
        }
        Self::term_on_sized_stack(spec, n, depth, limit)
    }

    fn name(&self) -> &'static str {
        "recursive"
    }
}
