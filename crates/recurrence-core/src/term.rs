//! Numeric abstraction for recurrence terms.
//!
//! Fixed-width integers (`u64`, `u128`) use checked arithmetic and report
//! overflow; `BigUint` never overflows.

use std::fmt::Debug;

use num_traits::{CheckedAdd, CheckedMul, One, Zero};

/// A value type a recurrence can be evaluated in.
pub trait Term:
    Clone + Zero + One + CheckedAdd + CheckedMul + From<u64> + Debug + PartialEq + Send + Sync
{
}

impl<T> Term for T where
    T: Clone + Zero + One + CheckedAdd + CheckedMul + From<u64> + Debug + PartialEq + Send + Sync
{
}

/// Checked sum of a slice of terms. `None` on overflow.
pub(crate) fn checked_sum<T: Term>(values: &[T]) -> Option<T> {
    values
        .iter()
        .try_fold(T::zero(), |acc, v| acc.checked_add(v))
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;

    #[test]
    fn sum_fits() {
        assert_eq!(checked_sum(&[1u64, 2, 3]), Some(6));
        assert_eq!(checked_sum::<u64>(&[]), Some(0));
    }

    #[test]
    fn sum_overflows_u64() {
        assert_eq!(checked_sum(&[u64::MAX, 1]), None);
    }

    #[test]
    fn sum_big_never_overflows() {
        let big = BigUint::from(u64::MAX);
        let total = checked_sum(&[big.clone(), big.clone()]).unwrap();
        assert_eq!(total, big * 2u32);
    }
}
