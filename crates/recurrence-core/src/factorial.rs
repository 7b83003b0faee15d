//! Factorial: `0! = 1`, `n! = n * (n-1)!` for n > 0.
//!
//! Defined for n >= 0; negative indices are domain errors. Grows
//! super-exponentially: the `u64` range ends at 20!, `u128` at 34!.

use num_bigint::BigUint;

use crate::error::RecurrenceError;
use crate::options::Options;
use crate::recurrence::{BelowDomain, Combine, RecurrenceSpec};
use crate::strategy::Strategy;
use crate::term::Term;

/// The factorial recurrence.
pub const FACTORIAL: RecurrenceSpec = RecurrenceSpec::new_unchecked(
    "factorial",
    &[1],
    &[(0, 1)],
    BelowDomain::Reject,
    Combine::ScaleByIndex,
);

/// `n!` in any term type, with the chosen strategy and default options.
///
/// # Example
/// ```
/// use recurrence_core::{factorial, RecurrenceError, Strategy};
///
/// assert_eq!(factorial::evaluate::<u64>(20, Strategy::Iterative), Ok(2_432_902_008_176_640_000));
/// assert!(matches!(
///     factorial::evaluate::<u64>(21, Strategy::Iterative),
///     Err(RecurrenceError::Overflow { .. })
/// ));
/// ```
pub fn evaluate<T: Term>(n: i64, strategy: Strategy) -> Result<T, RecurrenceError> {
    strategy.evaluate(&FACTORIAL, n, &Options::default())
}

/// Naive recursion. Fails with `DepthExceeded` past the default depth limit.
pub fn recursive(n: i64) -> Result<BigUint, RecurrenceError> {
    evaluate(n, Strategy::Recursive)
}

pub fn memoized(n: i64) -> Result<BigUint, RecurrenceError> {
    evaluate(n, Strategy::Memoized)
}

pub fn tabulated(n: i64) -> Result<BigUint, RecurrenceError> {
    evaluate(n, Strategy::Tabulated)
}

/// Running product; constant auxiliary space.
pub fn iterative(n: i64) -> Result<BigUint, RecurrenceError> {
    evaluate(n, Strategy::Iterative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FACTORIAL_TABLE, MAX_FACTORIAL_U64};

    #[test]
    fn spec_is_valid() {
        assert!(FACTORIAL.validate().is_ok());
    }

    #[test]
    fn known_values_all_strategies() {
        for strategy in Strategy::ALL {
            assert_eq!(evaluate::<u64>(0, strategy), Ok(1), "{strategy}");
            assert_eq!(evaluate::<u64>(5, strategy), Ok(120), "{strategy}");
            assert_eq!(evaluate::<u64>(10, strategy), Ok(3_628_800), "{strategy}");
        }
    }

    #[test]
    fn matches_table_up_to_u64_limit() {
        for (n, &expected) in (0..=MAX_FACTORIAL_U64).zip(FACTORIAL_TABLE.iter()) {
            assert_eq!(evaluate::<u64>(n, Strategy::Tabulated), Ok(expected), "n={n}");
        }
    }

    #[test]
    fn overflow_past_limit() {
        for strategy in Strategy::ALL {
            assert_eq!(
                evaluate::<u64>(MAX_FACTORIAL_U64 + 1, strategy),
                Err(RecurrenceError::Overflow {
                    recurrence: "factorial",
                    n: 21,
                }),
                "{strategy}"
            );
        }
        assert!(evaluate::<u128>(34, Strategy::Iterative).is_ok());
        assert!(evaluate::<u128>(35, Strategy::Iterative).is_err());
    }

    #[test]
    fn negative_is_domain_error() {
        assert_eq!(
            recursive(-3),
            Err(RecurrenceError::Domain {
                recurrence: "factorial",
                n: -3,
                min: 0,
            })
        );
        assert!(iterative(-1).is_err());
    }

    #[test]
    fn big_variants_agree() {
        let expected = BigUint::parse_bytes(b"15511210043330985984000000", 10).unwrap();
        assert_eq!(recursive(25).unwrap(), expected);
        assert_eq!(memoized(25).unwrap(), expected);
        assert_eq!(tabulated(25).unwrap(), expected);
        assert_eq!(iterative(25).unwrap(), expected);
    }
}
