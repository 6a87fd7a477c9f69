#![no_main]

use libfuzzer_sys::fuzz_target;

use mathutil_core::gcd::gcd;

fuzz_target!(|input: (i64, i64)| {
    let (m, n) = input;
    let g = gcd(m, n);
    if m >= 0 && n >= 0 {
        assert!(g >= 0);
        if g != 0 {
            assert_eq!(m % g, 0);
            assert_eq!(n % g, 0);
        }
    }
});
