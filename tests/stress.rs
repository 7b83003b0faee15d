//! Large-index tests for the strategies that do not recurse.
//!
//! Naive recursion is excluded: it is expected to refuse these inputs.

use num_bigint::BigUint;

use recurrence_core::{
    evaluate, Options, RecurrenceError, Strategy, FACTORIAL, FIBONACCI, WAYS_TO_SUM,
};

const N: i64 = 10_000;

#[test]
fn fibonacci_ten_thousand() {
    let opts = Options::default();
    for strategy in [Strategy::Memoized, Strategy::Tabulated, Strategy::Iterative] {
        let s = evaluate::<BigUint>(&FIBONACCI, N, strategy, &opts)
            .unwrap()
            .to_string();
        assert_eq!(s.len(), 2090, "{strategy}");
        assert!(s.starts_with("33644764876431783266"), "{strategy}");
    }
}

#[test]
fn ways_to_sum_ten_thousand() {
    let opts = Options::default();
    for strategy in [Strategy::Memoized, Strategy::Tabulated, Strategy::Iterative] {
        let s = evaluate::<BigUint>(&WAYS_TO_SUM, N, strategy, &opts)
            .unwrap()
            .to_string();
        assert_eq!(s.len(), 2090, "{strategy}");
        assert!(s.starts_with("39391976843425525456"), "{strategy}");
    }
}

#[test]
fn factorial_ten_thousand_constant_space() {
    let opts = Options::default();
    for strategy in [Strategy::Tabulated, Strategy::Iterative] {
        let s = evaluate::<BigUint>(&FACTORIAL, N, strategy, &opts)
            .unwrap()
            .to_string();
        assert_eq!(s.len(), 35_660, "{strategy}");
        assert!(s.starts_with("28462596809170545189"), "{strategy}");
    }
}

#[test]
fn naive_recursion_refuses_instead_of_overflowing_the_stack() {
    let result = evaluate::<BigUint>(&FACTORIAL, N, Strategy::Recursive, &Options::default());
    assert!(matches!(
        result,
        Err(RecurrenceError::DepthExceeded { n: N, .. })
    ));
}

#[test]
fn stress_runs_on_a_small_stack() {
    // 256 KiB is far too little for 10 000 nested frames.
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            let opts = Options::default();
            let memo: BigUint = evaluate(&FIBONACCI, N, Strategy::Memoized, &opts).unwrap();
            let window: BigUint = evaluate(&FIBONACCI, N, Strategy::Iterative, &opts).unwrap();
            memo == window
        })
        .unwrap();
    assert!(handle.join().unwrap());
}
