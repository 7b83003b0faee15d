//! Number of ways to write n as an ordered sum of 1s, 3s and 4s.
//!
//! The last part of a composition of n is 1, 3 or 4, which leaves a
//! composition of n-1, n-3 or n-4, so `D(n) = D(n-1) + D(n-3) + D(n-4)`.
//!
//! Two boundary conventions exist and they disagree at n = 0:
//!
//! - [`WAYS_TO_SUM`] counts only non-empty compositions. `D(n) = 0` for
//!   every n <= 0, so the recurrence cannot be applied until n = 5 and the
//!   base cases run `D(1..=4) = 1, 1, 2, 4`. This is the convention every
//!   function in this module uses.
//! - [`WAYS_TO_SUM_WITH_EMPTY`] counts the empty composition of 0, giving
//!   `D(0) = 1` with `D(n) = 0` for n < 0. The recurrence then holds from
//!   n = 1 on.
//!
//! Both produce the same value for every n != 0.

use num_bigint::BigUint;

use crate::error::RecurrenceError;
use crate::options::Options;
use crate::recurrence::{BelowDomain, Combine, RecurrenceSpec};
use crate::strategy::Strategy;
use crate::term::Term;

/// Parts a composition may use.
pub const PARTS: [u64; 3] = [1, 3, 4];

/// Non-empty compositions: `D(n) = 0` for n <= 0.
pub const WAYS_TO_SUM: RecurrenceSpec = RecurrenceSpec::new_unchecked(
    "ways-to-sum",
    &PARTS,
    &[(1, 1), (2, 1), (3, 2), (4, 4)],
    BelowDomain::Value(0),
    Combine::Sum,
);

/// Compositions including the empty one: `D(0) = 1`, `D(n) = 0` for n < 0.
pub const WAYS_TO_SUM_WITH_EMPTY: RecurrenceSpec = RecurrenceSpec::new_unchecked(
    "ways-to-sum-with-empty",
    &PARTS,
    &[(0, 1)],
    BelowDomain::Value(0),
    Combine::Sum,
);

/// `D(n)` in any term type, with the chosen strategy and default options.
///
/// # Example
/// ```
/// use recurrence_core::{ways_to_sum, Strategy};
///
/// assert_eq!(ways_to_sum::evaluate::<u64>(5, Strategy::Tabulated), Ok(6));
/// assert_eq!(ways_to_sum::evaluate::<u64>(0, Strategy::Tabulated), Ok(0));
/// assert_eq!(ways_to_sum::evaluate::<u64>(-7, Strategy::Tabulated), Ok(0));
/// ```
pub fn evaluate<T: Term>(n: i64, strategy: Strategy) -> Result<T, RecurrenceError> {
    strategy.evaluate(&WAYS_TO_SUM, n, &Options::default())
}

/// Naive recursion: roughly 1.46^n calls.
pub fn recursive(n: i64) -> Result<BigUint, RecurrenceError> {
    evaluate(n, Strategy::Recursive)
}

pub fn memoized(n: i64) -> Result<BigUint, RecurrenceError> {
    evaluate(n, Strategy::Memoized)
}

pub fn tabulated(n: i64) -> Result<BigUint, RecurrenceError> {
    evaluate(n, Strategy::Tabulated)
}

/// Four-term window; constant auxiliary space.
pub fn iterative(n: i64) -> Result<BigUint, RecurrenceError> {
    evaluate(n, Strategy::Iterative)
}
