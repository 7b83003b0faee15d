//! Table size estimation and memory limit parsing.

use std::mem::size_of;

use crate::recurrence::RecurrenceSpec;

/// Size estimate for the per-call table of a tabulated or memoized evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEstimate {
    /// Number of slots, one per index from the first base case to n.
    pub slots: usize,
    /// Inline bytes for those slots. Heap storage owned by big terms is not counted.
    pub bytes: usize,
}

impl TableEstimate {
    /// Estimate the table needed to evaluate term `n`, with `S` as the slot type.
    #[must_use]
    pub fn estimate<S>(spec: &RecurrenceSpec, n: i64) -> Self {
        let span = n.saturating_sub(spec.min_index()).saturating_add(1).max(0);
        let slots = usize::try_from(span).unwrap_or(usize::MAX);
        Self {
            slots,
            bytes: slots.saturating_mul(size_of::<S>()),
        }
    }

    /// Check if the table fits within the given limit in bytes (0 = unlimited).
    #[must_use]
    pub fn fits_in(&self, limit: usize) -> bool {
        limit == 0 || self.bytes <= limit
    }
}

/// Parse a memory limit string (e.g., "8G", "512M", "1024K", "300B", "300").
///
/// An empty string means unlimited and parses to 0.
pub fn parse_memory_limit(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    let (digits, multiplier) = match s.char_indices().last() {
        Some((i, 'G' | 'g')) => (&s[..i], 1usize << 30),
        Some((i, 'M' | 'm')) => (&s[..i], 1 << 20),
        Some((i, 'K' | 'k')) => (&s[..i], 1 << 10),
        Some((i, 'B' | 'b')) => (&s[..i], 1),
        _ => (s, 1),
    };

    let value: usize = digits
        .trim()
        .parse()
        .map_err(|e| format!("invalid memory limit {s:?}: {e}"))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("memory limit {s:?} does not fit in usize"))
}
