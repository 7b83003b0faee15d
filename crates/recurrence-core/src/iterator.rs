//! Lazy iteration over the terms of a recurrence.

use crate::error::RecurrenceError;
use crate::recurrence::RecurrenceSpec;
use crate::term::Term;
use crate::window::Window;

/// Lazy iterator over `(index, term)` pairs of a recurrence.
///
/// Base cases and values below the domain are yielded as defined; derived
/// terms come from a sliding window. On the first error (overflow, or an
/// index below a rejecting domain) the error is yielded once and the
/// iterator is exhausted.
///
/// # Example
/// ```
/// use recurrence_core::iterator::Terms;
/// use recurrence_core::FIBONACCI;
///
/// let fibs: Vec<u64> = Terms::new(&FIBONACCI).take(7).map(|t| t.unwrap().1).collect();
/// assert_eq!(fibs, [1, 1, 2, 3, 5, 8, 13]);
/// ```
pub struct Terms<T> {
    spec: RecurrenceSpec,
    next: i64,
    window: Option<Window<T>>,
    pending: Option<RecurrenceError>,
    done: bool,
}

impl<T: Term> Terms<T> {
    /// Iterate from the first base case.
    #[must_use]
    pub fn new(spec: &RecurrenceSpec) -> Self {
        Self::starting_at(spec, spec.min_index())
    }

    /// Iterate from index `start`, skipping ahead through the window.
    #[must_use]
    pub fn starting_at(spec: &RecurrenceSpec, start: i64) -> Self {
        let mut terms = Self {
            spec: *spec,
            next: start,
            window: None,
            pending: None,
            done: false,
        };
        if start > spec.max_base_index().saturating_add(1) {
            if let Err(err) = terms.skip_to(start) {
                terms.pending = Some(err);
            }
        }
        terms
    }

    fn skip_to(&mut self, start: i64) -> Result<(), RecurrenceError> {
        let mut window = Window::seed(&self.spec)?;
        while window.next_index() < start {
            window.advance()?;
        }
        self.window = Some(window);
        Ok(())
    }

    fn derive_next(&mut self) -> Result<T, RecurrenceError> {
        let window = match &mut self.window {
            Some(window) => window,
            empty => empty.insert(Window::seed(&self.spec)?),
        };
        window.advance().cloned()
    }
}

impl<T: Term> Iterator for Terms<T> {
    type Item = Result<(i64, T), RecurrenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(err) = self.pending.take() {
            self.done = true;
            return Some(Err(err));
        }

        let index = self.next;
        let term = match self.spec.boundary(index) {
            Some(resolved) => resolved,
            None => self.derive_next(),
        };
        match term {
            Ok(value) => {
                match self.next.checked_add(1) {
                    Some(next) => self.next = next,
                    None => self.done = true,
                }
                Some(Ok((index, value)))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Collect terms `start..=end` of a recurrence.
pub fn generate<T: Term>(
    spec: &RecurrenceSpec,
    start: i64,
    end: i64,
) -> Result<Vec<(i64, T)>, RecurrenceError> {
    if start > end {
        return Err(RecurrenceError::Config("start must be <= end".into()));
    }
    spec.validate()?;
    let len = usize::try_from(end.abs_diff(start))
        .ok()
        .and_then(|span| span.checked_add(1))
        .ok_or_else(|| RecurrenceError::Config("range too large".into()))?;
    Terms::starting_at(spec, start).take(len).collect()
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;
    use crate::factorial::FACTORIAL;
    use crate::recurrence::{BelowDomain, Combine};
    use crate::fibonacci::FIBONACCI;
    use crate::ways_to_sum::WAYS_TO_SUM;

    #[test]
    fn first_ten_fibonacci() {
        let vals: Vec<u64> = Terms::new(&FIBONACCI)
            .take(10)
            .map(|t| t.unwrap().1)
            .collect();
        assert_eq!(vals, [1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn yields_correct_indices() {
        let indices: Vec<i64> = Terms::<u64>::new(&FACTORIAL)
            .take(5)
            .map(|t| t.unwrap().0)
            .collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn starting_at_skips() {
        let (idx, val) = Terms::<BigUint>::starting_at(&FIBONACCI, 10)
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(idx, 10);
        assert_eq!(val, BigUint::from(55u32));
    }

    #[test]
    fn starts_below_domain_with_padding() {
        let vals: Vec<(i64, u64)> = generate(&WAYS_TO_SUM, -2, 5).unwrap();
        assert_eq!(
            vals,
            [(-2, 0), (-1, 0), (0, 0), (1, 1), (2, 1), (3, 2), (4, 4), (5, 6)]
        );
    }

    #[test]
    fn below_rejecting_domain_errors_once() {
        let mut it = Terms::<u64>::starting_at(&FACTORIAL, -1);
        assert!(matches!(it.next(), Some(Err(RecurrenceError::Domain { .. }))));
        assert!(it.next().is_none());
    }

    #[test]
    fn overflow_errors_once_then_fuses() {
        let results: Vec<_> = Terms::<u64>::new(&FACTORIAL).collect();
        assert_eq!(results.len(), 22);
        assert_eq!(
            results[21],
            Err(RecurrenceError::Overflow {
                recurrence: "factorial",
                n: 21,
            })
        );
    }

    #[test]
    fn overflow_while_skipping_is_reported() {
        let mut it = Terms::<u64>::starting_at(&FIBONACCI, 500);
        assert!(matches!(it.next(), Some(Err(RecurrenceError::Overflow { n: 94, .. }))));
        assert!(it.next().is_none());
    }

    #[test]
    fn generate_range() {
        let vals: Vec<(i64, u64)> = generate(&FIBONACCI, 5, 7).unwrap();
        assert_eq!(vals, [(5, 5), (6, 8), (7, 13)]);
    }

    #[test]
    fn generate_single_element() {
        let vals: Vec<(i64, u64)> = generate(&FACTORIAL, 0, 0).unwrap();
        assert_eq!(vals, [(0, 1)]);
    }

    #[test]
    fn generate_full_index_range_is_too_large() {
        assert_eq!(
            generate::<u64>(&WAYS_TO_SUM, i64::MIN, i64::MAX),
            Err(RecurrenceError::Config("range too large".into()))
        );
    }

    #[test]
    fn last_index_ends_iteration() {
        let top = RecurrenceSpec::new(
            "top",
            &[1],
            &[(i64::MAX, 7)],
            BelowDomain::Value(0),
            Combine::Sum,
        )
        .unwrap();
        let terms: Vec<_> = Terms::<u64>::starting_at(&top, i64::MAX - 1).collect();
        assert_eq!(terms, [Ok((i64::MAX - 1, 0)), Ok((i64::MAX, 7))]);
    }

    #[test]
    fn starts_at_the_lowest_index() {
        let padded: Vec<_> = Terms::<u64>::starting_at(&WAYS_TO_SUM, i64::MIN)
            .take(3)
            .collect();
        assert_eq!(
            padded,
            [Ok((i64::MIN, 0)), Ok((i64::MIN + 1, 0)), Ok((i64::MIN + 2, 0))]
        );
    }

    #[test]
    fn generate_start_greater_than_end_errors() {
        let result = generate::<u64>(&FIBONACCI, 10, 5);
        assert!(matches!(result, Err(RecurrenceError::Config(_))));
    }
}
