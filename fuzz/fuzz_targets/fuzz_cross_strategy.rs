#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use recurrence_core::{evaluate, Options, Strategy, FACTORIAL, FIBONACCI, WAYS_TO_SUM};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First byte picks the recurrence, next two give n in [-1024, 1024).
    let spec = match data[0] % 3 {
        0 => FACTORIAL,
        1 => FIBONACCI,
        _ => WAYS_TO_SUM,
    };
    let n = i64::from(u16::from_le_bytes([data[1], data[2]]) % 2048) - 1024;

    let opts = Options::default();
    let memo = evaluate::<BigUint>(&spec, n, Strategy::Memoized, &opts);
    let table = evaluate::<BigUint>(&spec, n, Strategy::Tabulated, &opts);
    let window = evaluate::<BigUint>(&spec, n, Strategy::Iterative, &opts);

    assert_eq!(memo, table, "{} memoized != tabulated at n={n}", spec.name());
    assert_eq!(table, window, "{} tabulated != iterative at n={n}", spec.name());

    // Naive recursion only where it finishes quickly.
    if n <= 20 {
        let naive = evaluate::<BigUint>(&spec, n, Strategy::Recursive, &opts);
        assert_eq!(naive, window, "{} recursive != iterative at n={n}", spec.name());
    }
});
