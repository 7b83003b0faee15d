//! # recurrence-core
//!
//! Evaluates linear recurrences (factorial, Fibonacci, compositions with
//! parts {1, 3, 4}, or any custom [`RecurrenceSpec`]) with four
//! interchangeable strategies: naive recursion, memoization, tabulation and
//! a constant-space sliding window. Every strategy returns the same term for
//! the same `(recurrence, n)`.
//!
//! Terms can be computed in `u64`/`u128` with overflow reported as
//! [`RecurrenceError::Overflow`], or in [`num_bigint::BigUint`] with no
//! upper bound.

pub mod constants;
pub mod error;
pub mod evaluator;
pub mod factorial;
pub mod fibonacci;
pub mod iterator;
pub mod memoized;
pub mod memory_budget;
pub mod options;
pub mod recurrence;
pub mod recursive;
pub mod strategy;
pub mod tabulated;
pub mod term;
pub mod ways_to_sum;
pub mod window;

// Re-exports
pub use constants::{
    DEFAULT_MAX_RECURSION_DEPTH, MAX_FACTORIAL_U64, MAX_FIBONACCI_U64, MAX_WAYS_TO_SUM_U64,
};
pub use error::RecurrenceError;
pub use evaluator::{evaluate, CoreEvaluator};
pub use factorial::FACTORIAL;
pub use fibonacci::FIBONACCI;
pub use iterator::{generate, Terms};
pub use options::Options;
pub use recurrence::{BelowDomain, Combine, RecurrenceSpec};
pub use strategy::Strategy;
pub use term::Term;
pub use ways_to_sum::{WAYS_TO_SUM, WAYS_TO_SUM_WITH_EMPTY};
