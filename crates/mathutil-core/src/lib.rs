//! # mathutil-core
//!
//! Core numeric routines for the mathutil console utility: a lazy Fibonacci
//! sequence, the Euclidean greatest common divisor, and a quadratic root
//! classifier. None of them perform I/O.

pub mod constants;
pub mod error;
pub mod gcd;
pub mod iterator;
pub mod quadratic;

// Re-exports
pub use constants::exit_codes;
pub use error::MathError;
pub use gcd::{gcd, gcd_steps};
pub use iterator::{FibIterator, FibSequence};
pub use quadratic::{discriminant, quadratic_roots, Roots};

/// Build the sequence of the first `terms` Fibonacci numbers.
///
/// # Example
/// ```
/// let seq = mathutil_core::fibonacci(10);
/// assert_eq!(seq.to_string(), "0 1 1 2 3 5 8 13 21 34");
/// ```
#[must_use]
pub fn fibonacci(terms: u64) -> FibSequence {
    FibSequence::new(terms)
}
