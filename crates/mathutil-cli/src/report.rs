//! Serializable run report for `--format json`.

use serde::Serialize;

use mathutil_core::iterator::FibSequence;
use mathutil_core::quadratic::Roots;

/// Fibonacci part of the report. Terms are decimal strings so arbitrarily
/// large values survive JSON consumers limited to 53-bit integers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FibReport {
    pub requested: i64,
    pub terms: Vec<String>,
}

impl FibReport {
    #[must_use]
    pub fn new(requested: i64, seq: &FibSequence) -> Self {
        Self {
            requested,
            terms: seq.iter().map(|v| v.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GcdReport {
    pub m: i64,
    pub n: i64,
    pub gcd: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuadraticReport {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub roots: Roots,
}

/// Everything one run produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fibonacci: Option<FibReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcd: Option<GcdReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quadratic: Option<QuadraticReport>,
}
