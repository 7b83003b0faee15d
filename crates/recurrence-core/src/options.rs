//! Evaluation options and configuration.

use crate::constants::{DEFAULT_MAX_RECURSION_DEPTH, ENV_MAX_DEPTH, ENV_MEMORY_LIMIT};
use crate::error::RecurrenceError;
use crate::memory_budget::parse_memory_limit;

/// Options for recurrence evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Deepest call nesting the naive recursive strategy may use.
    pub max_recursion_depth: usize,
    /// Memory limit in bytes for memo caches and tables (0 = unlimited).
    pub memory_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            memory_limit: 0,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_recursion_depth == 0 {
            self.max_recursion_depth = DEFAULT_MAX_RECURSION_DEPTH;
        }
        self
    }

    /// Defaults overridden by `RECURRENCE_MAX_DEPTH` and `RECURRENCE_MEMORY_LIMIT`.
    pub fn from_env() -> Result<Self, RecurrenceError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Options::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RecurrenceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        if let Some(raw) = lookup(ENV_MAX_DEPTH) {
            opts.max_recursion_depth = raw.trim().parse().map_err(|e| {
                RecurrenceError::Config(format!("{ENV_MAX_DEPTH}={raw:?}: {e}"))
            })?;
        }
        if let Some(raw) = lookup(ENV_MEMORY_LIMIT) {
            opts.memory_limit = parse_memory_limit(&raw)
                .map_err(|e| RecurrenceError::Config(format!("{ENV_MEMORY_LIMIT}: {e}")))?;
        }
        Ok(opts.normalize())
    }
}
