//! Text formatting for results.

use mathutil_core::quadratic::Roots;

/// Message printed when the leading coefficient is zero.
pub const NOT_QUADRATIC_MESSAGE: &str = "This is not a quadratic equation (a cannot be 0).";

/// Magnitudes in `[1e-3, 1e7)` print positionally; others use exponent form.
const POSITIONAL_RANGE: std::ops::Range<f64> = 1e-3..1e7;

/// Format a double in shortest round-trip form.
///
/// Values in `[1e-3, 1e7)` print positionally and keep a trailing `.0`
/// (`2.0`, `-0.5`). Other magnitudes use an exponent with a fractional
/// mantissa (`1.0E16`, `1.5E-5`). Non-finite values print as `NaN`,
/// `Infinity` and `-Infinity`.
#[must_use]
pub fn format_double(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        let s = if x > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }
    if x == 0.0 || POSITIONAL_RANGE.contains(&x.abs()) {
        return format!("{x:?}");
    }

    let sci = format!("{x:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}

/// Header line preceding the Fibonacci terms.
#[must_use]
pub fn fibonacci_header(requested: i64) -> String {
    format!("Fibonacci sequence with {requested} terms:")
}

/// The GCD result line.
#[must_use]
pub fn gcd_line(m: i64, n: i64, gcd: i64) -> String {
    format!("The GCD of {m} and {n} is: {gcd}")
}

/// Lines describing the roots of a quadratic equation.
#[must_use]
pub fn roots_lines(roots: &Roots) -> Vec<String> {
    match *roots {
        Roots::NotQuadratic => vec![NOT_QUADRATIC_MESSAGE.to_string()],
        Roots::RealDistinct { root1, root2 } => vec![
            "The roots are real and distinct:".to_string(),
            format!("Root 1: {}", format_double(root1)),
            format!("Root 2: {}", format_double(root2)),
        ],
        Roots::RealEqual { root } => vec![
            "The roots are real and equal:".to_string(),
            format!("Root: {}", format_double(root)),
        ],
        Roots::Complex { real, imaginary } => {
            let re = format_double(real);
            let im = format_double(imaginary);
            vec![
                "The roots are complex:".to_string(),
                format!("Root 1: {re} + {im}i"),
                format!("Root 2: {re} - {im}i"),
            ]
        }
    }
}
