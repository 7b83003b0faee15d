#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use recurrence_core::{
    evaluate, Options, RecurrenceError, Strategy, FACTORIAL, FIBONACCI, WAYS_TO_SUM,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let spec = match data[0] % 3 {
        0 => FACTORIAL,
        1 => FIBONACCI,
        _ => WAYS_TO_SUM,
    };
    let n = i64::from(data[1]);
    let opts = Options::default();

    let exact = evaluate::<BigUint>(&spec, n, Strategy::Iterative, &opts);
    let narrow = evaluate::<u64>(&spec, n, Strategy::Tabulated, &opts);
    match (exact, narrow) {
        (Ok(big), Ok(small)) => assert_eq!(big, BigUint::from(small)),
        (Ok(big), Err(RecurrenceError::Overflow { .. })) => {
            assert!(big > BigUint::from(u64::MAX), "{} n={n} overflowed early", spec.name());
        }
        (Err(a), Err(b)) => assert_eq!(a, b),
        (exact, narrow) => panic!("{} n={n}: {exact:?} vs {narrow:?}", spec.name()),
    }
});
