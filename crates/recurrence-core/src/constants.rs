//! Constants for evaluation limits and fixed-width overflow thresholds.

/// Default recursion depth limit for the naive recursive strategy.
///
/// Deep recursion runs on a dedicated thread whose stack is sized from the
/// checked depth, so the limit bounds that reservation rather than the
/// caller's stack.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 1024;

/// Largest factorial index whose term fits in a `u64`.
/// 20! = 2432902008176640000, 21! overflows.
pub const MAX_FACTORIAL_U64: i64 = 20;

/// Largest (1-indexed) Fibonacci index whose term fits in a `u64`.
/// F(93) = 12200160415121876738.
pub const MAX_FIBONACCI_U64: i64 = 93;

/// Largest ways-to-sum index whose term fits in a `u64`.
/// D(93) = 14284196614945309248.
pub const MAX_WAYS_TO_SUM_U64: i64 = 93;

/// Environment variable overriding `Options::max_recursion_depth`.
pub const ENV_MAX_DEPTH: &str = "RECURRENCE_MAX_DEPTH";

/// Environment variable overriding `Options::memory_limit` (e.g. "512M").
pub const ENV_MEMORY_LIMIT: &str = "RECURRENCE_MEMORY_LIMIT";

/// Factorials 0!..=20!, the full range representable in `u64`.
pub const FACTORIAL_TABLE: [u64; 21] = {
    let mut table = [0u64; 21];
    table[0] = 1;
    let mut i = 1;
    while i < 21 {
        table[i] = table[i - 1] * i as u64;
        i += 1;
    }
    table
};

/// Fibonacci numbers indexed from 1: `FIB_TABLE[n - 1] == F(n)` for n in 1..=93.
pub const FIB_TABLE: [u64; 93] = {
    let mut table = [0u64; 93];
    table[0] = 1;
    table[1] = 1;
    let mut i = 2;
    while i < 93 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};
