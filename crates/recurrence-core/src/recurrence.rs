//! Recurrence definitions.
//!
//! A `RecurrenceSpec` describes a sequence by the offsets of the prior terms
//! each term references, a contiguous run of base cases, what happens below
//! the first base case, and how the referenced priors are combined.

use crate::error::RecurrenceError;
use crate::term::{checked_sum, Term};

/// Behaviour for indices below the first base case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BelowDomain {
    /// The recurrence is undefined there; evaluation fails with a domain error.
    Reject,
    /// Every such index evaluates to the given value.
    Value(u64),
}

/// How the referenced prior terms produce the current term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    /// `T(n) = sum of T(n - k)` over the offsets.
    Sum,
    /// `T(n) = n * (sum of T(n - k))` over the offsets.
    ScaleByIndex,
}

/// An immutable linear recurrence definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceSpec {
    name: &'static str,
    offsets: &'static [u64],
    base_cases: &'static [(i64, u64)],
    below_domain: BelowDomain,
    combine: Combine,
}

impl RecurrenceSpec {
    /// Build a definition without validation. Only used for the built-in
    /// recurrences, which are covered by tests.
    pub(crate) const fn new_unchecked(
        name: &'static str,
        offsets: &'static [u64],
        base_cases: &'static [(i64, u64)],
        below_domain: BelowDomain,
        combine: Combine,
    ) -> Self {
        Self {
            name,
            offsets,
            base_cases,
            below_domain,
            combine,
        }
    }

    /// Build and validate a custom recurrence.
    ///
    /// # Example
    /// ```
    /// use recurrence_core::recurrence::{BelowDomain, Combine, RecurrenceSpec};
    ///
    /// // Tribonacci: T(0)=0, T(1)=0, T(2)=1.
    /// let trib = RecurrenceSpec::new(
    ///     "tribonacci",
    ///     &[1, 2, 3],
    ///     &[(0, 0), (1, 0), (2, 1)],
    ///     BelowDomain::Reject,
    ///     Combine::Sum,
    /// )
    /// .unwrap();
    /// assert_eq!(trib.window(), 3);
    /// ```
    pub fn new(
        name: &'static str,
        offsets: &'static [u64],
        base_cases: &'static [(i64, u64)],
        below_domain: BelowDomain,
        combine: Combine,
    ) -> Result<Self, RecurrenceError> {
        let spec = Self::new_unchecked(name, offsets, base_cases, below_domain, combine);
        spec.validate()?;
        Ok(spec)
    }

    /// Check the structural invariants every strategy relies on.
    pub fn validate(&self) -> Result<(), RecurrenceError> {
        let invalid = |reason: &str| RecurrenceError::InvalidSpec {
            recurrence: self.name,
            reason: reason.to_string(),
        };

        if self.offsets.is_empty() {
            return Err(invalid("no offsets"));
        }
        if self.offsets[0] == 0 {
            return Err(invalid("offset 0 makes a term depend on itself"));
        }
        if self.offsets.windows(2).any(|w| w[0] >= w[1]) {
            return Err(invalid("offsets must be strictly ascending"));
        }
        if i64::try_from(self.window()).is_err() {
            return Err(invalid("offset too large"));
        }
        if self.base_cases.is_empty() {
            return Err(invalid("no base cases"));
        }
        if self.base_cases.windows(2).any(|w| w[0].0.checked_add(1) != Some(w[1].0)) {
            return Err(invalid("base case indices must be contiguous and ascending"));
        }
        if self.combine == Combine::ScaleByIndex && self.max_base_index() < -1 {
            return Err(invalid("scaling by index needs derived indices >= 0"));
        }
        let base_len = u64::try_from(self.base_cases.len()).unwrap_or(u64::MAX);
        if self.below_domain == BelowDomain::Reject && base_len < self.window() {
            return Err(invalid(
                "fewer base cases than the largest offset reaches below the domain",
            ));
        }
        Ok(())
    }

    /// Name used in errors and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Offsets of the prior terms each term references, ascending.
    #[must_use]
    pub fn offsets(&self) -> &'static [u64] {
        self.offsets
    }

    /// Base cases as `(index, value)`, contiguous and ascending.
    #[must_use]
    pub fn base_cases(&self) -> &'static [(i64, u64)] {
        self.base_cases
    }

    #[must_use]
    pub fn below_domain(&self) -> BelowDomain {
        self.below_domain
    }

    #[must_use]
    pub fn combine_rule(&self) -> Combine {
        self.combine
    }

    /// Smallest index with a base case.
    #[must_use]
    pub fn min_index(&self) -> i64 {
        self.base_cases[0].0
    }

    /// Largest index with a base case. Every index above it is derived.
    #[must_use]
    pub fn max_base_index(&self) -> i64 {
        self.base_cases[self.base_cases.len() - 1].0
    }

    /// Number of trailing terms needed to derive the next one.
    #[must_use]
    pub fn window(&self) -> u64 {
        self.offsets[self.offsets.len() - 1]
    }

    /// Resolve an index at or below the highest base case.
    ///
    /// Returns `None` for indices that must be derived from the recurrence.
    pub fn boundary<T: Term>(&self, n: i64) -> Option<Result<T, RecurrenceError>> {
        if n < self.min_index() {
            return Some(match self.below_domain {
                BelowDomain::Reject => Err(RecurrenceError::Domain {
                    recurrence: self.name,
                    n,
                    min: self.min_index(),
                }),
                BelowDomain::Value(v) => Ok(T::from(v)),
            });
        }
        if n <= self.max_base_index() {
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let slot = (n - self.min_index()) as usize;
            return Some(Ok(T::from(self.base_cases[slot].1)));
        }
        None
    }

    /// Value of an index at or below the highest base case.
    pub(crate) fn seed_value<T: Term>(&self, n: i64) -> Result<T, RecurrenceError> {
        self.boundary(n).unwrap_or_else(|| {
            Err(RecurrenceError::InvalidSpec {
                recurrence: self.name,
                reason: format!("index {n} is above the base cases"),
            })
        })
    }

    /// Produce term `n` from its referenced priors, ordered as `offsets()`.
    pub fn combine<T: Term>(&self, n: i64, priors: &[T]) -> Result<T, RecurrenceError> {
        let overflow = || RecurrenceError::Overflow {
            recurrence: self.name,
            n,
        };
        let sum = checked_sum(priors).ok_or_else(overflow)?;
        match self.combine {
            Combine::Sum => Ok(sum),
            Combine::ScaleByIndex => {
                let index = u64::try_from(n).map_err(|_| RecurrenceError::InvalidSpec {
                    recurrence: self.name,
                    reason: format!("index {n} cannot scale a term"),
                })?;
                sum.checked_mul(&T::from(index)).ok_or_else(overflow)
            }
        }
    }

    /// Indices of the priors referenced by term `n`, ordered as `offsets()`.
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn prior_indices(&self, n: i64) -> impl Iterator<Item = i64> + '_ {
        self.offsets.iter().map(move |&k| n - k as i64)
    }
}
