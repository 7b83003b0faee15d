//! Error type shared by every evaluation strategy.

/// Error type for recurrence evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecurrenceError {
    /// The index lies below the first index the recurrence is defined for.
    #[error("{recurrence}: index {n} is outside the domain (expected n >= {min})")]
    Domain {
        recurrence: &'static str,
        n: i64,
        min: i64,
    },

    /// The term does not fit the requested integer type.
    #[error("{recurrence}: term {n} overflows the target integer type")]
    Overflow { recurrence: &'static str, n: i64 },

    /// Naive recursion would nest deeper than the configured limit.
    #[error("{recurrence}: term {n} needs recursion deeper than the limit of {limit}")]
    DepthExceeded {
        recurrence: &'static str,
        n: i64,
        limit: usize,
    },

    /// The cache or table for this index would exceed the memory limit.
    #[error("{recurrence}: term {n} needs {required} bytes of table, limit is {limit}")]
    MemoryLimit {
        recurrence: &'static str,
        n: i64,
        required: usize,
        limit: usize,
    },

    /// A recurrence definition is malformed.
    #[error("invalid recurrence {recurrence}: {reason}")]
    InvalidSpec {
        recurrence: &'static str,
        reason: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
