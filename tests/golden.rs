//! Golden file integration tests.
//!
//! Reads tests/testdata/recurrence_golden.json and verifies every strategy
//! produces the known terms of the built-in recurrences.

use num_bigint::BigUint;
use serde::Deserialize;

use recurrence_core::{
    evaluate, Options, RecurrenceError, RecurrenceSpec, Strategy, FACTORIAL, FIBONACCI,
    WAYS_TO_SUM,
};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    factorial: Vec<GoldenEntry>,
    fibonacci: Vec<GoldenEntry>,
    ways_to_sum: Vec<GoldenEntry>,
    digits: Vec<DigitsEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: i64,
    value: String,
}

#[derive(Deserialize)]
struct DigitsEntry {
    recurrence: String,
    n: i64,
    digits: usize,
    prefix: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/recurrence_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn spec_named(name: &str) -> RecurrenceSpec {
    match name {
        "factorial" => FACTORIAL,
        "fibonacci" => FIBONACCI,
        "ways_to_sum" => WAYS_TO_SUM,
        other => panic!("unknown recurrence in golden data: {other}"),
    }
}

/// Naive recursion is exponential for the additive recurrences; only ask it
/// for terms it can reach quickly.
fn affordable(spec: &RecurrenceSpec, strategy: Strategy, n: i64) -> bool {
    strategy != Strategy::Recursive || spec.name() == "factorial" || n <= 25
}

fn check_exact(spec: &RecurrenceSpec, entries: &[GoldenEntry]) {
    let opts = Options::default();
    for entry in entries {
        for strategy in Strategy::ALL {
            if !affordable(spec, strategy, entry.n) {
                continue;
            }
            let result: BigUint = evaluate(spec, entry.n, strategy, &opts).unwrap();
            assert_eq!(
                result.to_string(),
                entry.value,
                "{} {} mismatch at n={}",
                spec.name(),
                strategy,
                entry.n,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: exact values
// ---------------------------------------------------------------------------

#[test]
fn golden_exact_factorial() {
    check_exact(&FACTORIAL, &load_golden_data().factorial);
}

#[test]
fn golden_exact_fibonacci() {
    check_exact(&FIBONACCI, &load_golden_data().fibonacci);
}

#[test]
fn golden_exact_ways_to_sum() {
    check_exact(&WAYS_TO_SUM, &load_golden_data().ways_to_sum);
}

// ---------------------------------------------------------------------------
// Golden: digit count and prefix for large terms
// ---------------------------------------------------------------------------

#[test]
fn golden_digits_large_terms() {
    let opts = Options::default();
    for entry in &load_golden_data().digits {
        let spec = spec_named(&entry.recurrence);
        for strategy in [Strategy::Memoized, Strategy::Tabulated, Strategy::Iterative] {
            let s = evaluate::<BigUint>(&spec, entry.n, strategy, &opts)
                .unwrap()
                .to_string();
            assert_eq!(s.len(), entry.digits, "{} {} digits", entry.recurrence, strategy);
            assert!(
                s.starts_with(&entry.prefix),
                "{} {} prefix mismatch",
                entry.recurrence,
                strategy
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: fixed-width results agree where they fit
// ---------------------------------------------------------------------------

#[test]
fn golden_u64_agrees_or_overflows() {
    let data = load_golden_data();
    let opts = Options::default();
    let sets = [
        (FACTORIAL, &data.factorial),
        (FIBONACCI, &data.fibonacci),
        (WAYS_TO_SUM, &data.ways_to_sum),
    ];
    for (spec, entries) in sets {
        for entry in entries {
            let narrow = evaluate::<u64>(&spec, entry.n, Strategy::Tabulated, &opts);
            match entry.value.parse::<u64>() {
                Ok(expected) => assert_eq!(narrow, Ok(expected), "{} n={}", spec.name(), entry.n),
                Err(_) => assert!(
                    matches!(narrow, Err(RecurrenceError::Overflow { .. })),
                    "{} n={} should overflow u64",
                    spec.name(),
                    entry.n
                ),
            }
        }
    }
}
