//! Euclidean greatest common divisor.
//!
//! Operands are not normalized to their absolute values: the remainder is
//! truncated (its sign follows the dividend), so the sign of the result is
//! whatever survives the reduction chain. `gcd(-12, 18)` is `6` while
//! `gcd(12, -18)` is `-6`.

/// Greatest common divisor of `m` and `n` by iterative Euclidean reduction.
///
/// `gcd(m, 0)` returns `m` unchanged.
///
/// # Example
/// ```
/// assert_eq!(mathutil_core::gcd(48, 18), 6);
/// assert_eq!(mathutil_core::gcd(17, 5), 1);
/// assert_eq!(mathutil_core::gcd(7, 0), 7);
/// ```
#[must_use]
pub fn gcd(mut m: i64, mut n: i64) -> i64 {
    while n != 0 {
        // wrapping_rem: i64::MIN % -1 is 0 instead of an overflow panic.
        (m, n) = (n, m.wrapping_rem(n));
    }
    m
}

/// Number of remainder steps [`gcd`] performs for `(m, n)`.
#[must_use]
pub fn gcd_steps(mut m: i64, mut n: i64) -> u32 {
    let mut steps = 0;
    while n != 0 {
        (m, n) = (n, m.wrapping_rem(n));
        steps += 1;
    }
    steps
}
