//! Fibonacci, 1-indexed: `F(1) = F(2) = 1`, `F(n) = F(n-1) + F(n-2)`.
//!
//! Indices below 1 are domain errors.

use num_bigint::BigUint;

use crate::error::RecurrenceError;
use crate::options::Options;
use crate::recurrence::{BelowDomain, Combine, RecurrenceSpec};
use crate::strategy::Strategy;
use crate::term::Term;

/// The Fibonacci recurrence.
pub const FIBONACCI: RecurrenceSpec = RecurrenceSpec::new_unchecked(
    "fibonacci",
    &[1, 2],
    &[(1, 1), (2, 1)],
    BelowDomain::Reject,
    Combine::Sum,
);

/// `F(n)` in any term type, with the chosen strategy and default options.
///
/// # Example
/// ```
/// use recurrence_core::{fibonacci, Strategy};
///
/// assert_eq!(fibonacci::evaluate::<u64>(10, Strategy::Memoized), Ok(55));
/// ```
pub fn evaluate<T: Term>(n: i64, strategy: Strategy) -> Result<T, RecurrenceError> {
    strategy.evaluate(&FIBONACCI, n, &Options::default())
}

/// Naive recursion: O(phi^n) calls. Keep n small.
pub fn recursive(n: i64) -> Result<BigUint, RecurrenceError> {
    evaluate(n, Strategy::Recursive)
}

pub fn memoized(n: i64) -> Result<BigUint, RecurrenceError> {
    evaluate(n, Strategy::Memoized)
}

pub fn tabulated(n: i64) -> Result<BigUint, RecurrenceError> {
    evaluate(n, Strategy::Tabulated)
}

/// Two-term window; constant auxiliary space.
pub fn iterative(n: i64) -> Result<BigUint, RecurrenceError> {
    evaluate(n, Strategy::Iterative)
}
