//! Lazy, bounded Fibonacci sequence using the standard additive recurrence.

use std::fmt;
use std::iter::FusedIterator;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::Serialize;

/// The first `terms` Fibonacci numbers, starting at F(0) = 0.
///
/// A `FibSequence` holds no computed state; every call to [`iter`](Self::iter)
/// starts a fresh pass from F(0), so the sequence can be walked any number
/// of times.
///
/// # Example
/// ```
/// use mathutil_core::iterator::FibSequence;
/// let seq = FibSequence::new(7);
/// let fibs: Vec<_> = seq.iter().map(|v| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// assert_eq!(seq.iter().count(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FibSequence {
    terms: u64,
}

impl FibSequence {
    #[must_use]
    pub fn new(terms: u64) -> Self {
        Self { terms }
    }

    /// Build a sequence from a signed term count; negative counts yield an
    /// empty sequence.
    #[must_use]
    pub fn from_signed(terms: i64) -> Self {
        let clamped = u64::try_from(terms).unwrap_or_else(|_| {
            tracing::warn!(terms, "negative Fibonacci term count, emitting nothing");
            0
        });
        Self::new(clamped)
    }

    /// Number of terms the sequence yields.
    #[must_use]
    pub fn terms(&self) -> u64 {
        self.terms
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms == 0
    }

    /// Start a new lazy pass over the sequence.
    #[must_use]
    pub fn iter(&self) -> FibIterator {
        FibIterator::new(self.terms)
    }
}

impl IntoIterator for &FibSequence {
    type Item = BigUint;
    type IntoIter = FibIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for FibSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Lazy iterator over a bounded prefix of the Fibonacci sequence.
#[derive(Debug, Clone)]
pub struct FibIterator {
    a: BigUint,
    b: BigUint,
    remaining: u64,
}

impl FibIterator {
    #[must_use]
    pub fn new(terms: u64) -> Self {
        Self {
            a: BigUint::zero(),
            b: BigUint::one(),
            remaining: terms,
        }
    }
}

impl Iterator for FibIterator {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // The final term does not need its successor.
        if self.remaining == 0 {
            return Some(std::mem::take(&mut self.a));
        }

        let next = &self.a + &self.b;
        let b = std::mem::replace(&mut self.b, next);
        Some(std::mem::replace(&mut self.a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for FibIterator {}
