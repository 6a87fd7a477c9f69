//! Quadratic equation root classification for `a·x² + b·x + c = 0`.
//!
//! Comparisons against zero are exact. Coefficients that are "almost" zero
//! are treated like any other value, and a discriminant that rounds to a
//! tiny non-zero number selects the distinct or complex branch.

use serde::Serialize;

use crate::constants::DISCRIMINANT_FACTOR;

/// Roots of a quadratic equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Roots {
    /// The leading coefficient is zero; no roots are computed.
    NotQuadratic,
    /// Two distinct real roots (positive discriminant).
    RealDistinct { root1: f64, root2: f64 },
    /// One repeated real root (zero discriminant).
    RealEqual { root: f64 },
    /// Complex conjugate pair `real ± imaginary·i` (negative discriminant).
    Complex { real: f64, imaginary: f64 },
}

impl Roots {
    /// Whether any roots were computed.
    #[must_use]
    pub fn is_quadratic(&self) -> bool {
        !matches!(self, Self::NotQuadratic)
    }
}

/// The discriminant `b² − 4ac`.
#[must_use]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - DISCRIMINANT_FACTOR * a * c
}

/// Classify and compute the roots of `a·x² + b·x + c = 0`.
///
/// # Example
/// ```
/// use mathutil_core::quadratic::{quadratic_roots, Roots};
/// assert_eq!(
///     quadratic_roots(1.0, -3.0, 2.0),
///     Roots::RealDistinct { root1: 2.0, root2: 1.0 }
/// );
/// assert_eq!(quadratic_roots(0.0, 2.0, 3.0), Roots::NotQuadratic);
/// ```
#[must_use]
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Roots {
    if a == 0.0 {
        return Roots::NotQuadratic;
    }

    let d = discriminant(a, b, c);
    let denom = 2.0 * a;

    let roots = if d > 0.0 {
        let sqrt_d = d.sqrt();
        Roots::RealDistinct {
            root1: unsigned_zero((-b + sqrt_d) / denom),
            root2: unsigned_zero((-b - sqrt_d) / denom),
        }
    } else if d == 0.0 {
        Roots::RealEqual {
            root: unsigned_zero(-b / denom),
        }
    } else {
        // NaN discriminants land here as well.
        Roots::Complex {
            real: unsigned_zero(-b / denom),
            imaginary: unsigned_zero((-d).sqrt() / denom),
        }
    };

    tracing::debug!(a, b, c, discriminant = d, ?roots, "solved quadratic");
    roots
}

/// Map `-0.0` to `0.0`; every other value passes through.
fn unsigned_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}
