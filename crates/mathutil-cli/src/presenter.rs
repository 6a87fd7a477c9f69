//! Result presenters.

use std::io::{self, Write};

use mathutil_core::iterator::FibSequence;
use mathutil_core::quadratic::Roots;

use crate::output::{fibonacci_header, gcd_line, roots_lines};
use crate::report::{FibReport, GcdReport, QuadraticReport, Report};

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present the first terms of the Fibonacci sequence. `requested` is the
    /// count as entered, before clamping.
    fn present_fibonacci(&mut self, requested: i64, seq: &FibSequence) -> io::Result<()>;

    /// Present the GCD of `m` and `n`.
    fn present_gcd(&mut self, m: i64, n: i64, gcd: i64) -> io::Result<()>;

    /// Present the roots of `a·x² + b·x + c = 0`.
    fn present_quadratic(&mut self, coefficients: [f64; 3], roots: &Roots) -> io::Result<()>;

    /// Called once after every result was presented.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Plain-text presenter, one labeled block per result.
pub struct TextPresenter<W> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultPresenter for TextPresenter<W> {
    fn present_fibonacci(&mut self, requested: i64, seq: &FibSequence) -> io::Result<()> {
        writeln!(self.out, "{}", fibonacci_header(requested))?;
        // Terms are rendered lazily straight into the writer.
        writeln!(self.out, "{seq}")?;
        self.out.flush()
    }

    fn present_gcd(&mut self, m: i64, n: i64, gcd: i64) -> io::Result<()> {
        writeln!(self.out, "{}", gcd_line(m, n, gcd))?;
        self.out.flush()
    }

    fn present_quadratic(&mut self, _coefficients: [f64; 3], roots: &Roots) -> io::Result<()> {
        for line in roots_lines(roots) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

/// JSON presenter. Results are collected and written as one document by
/// [`finish`](ResultPresenter::finish).
pub struct JsonPresenter<W> {
    out: W,
    report: Report,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            report: Report::default(),
        }
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultPresenter for JsonPresenter<W> {
    fn present_fibonacci(&mut self, requested: i64, seq: &FibSequence) -> io::Result<()> {
        self.report.fibonacci = Some(FibReport::new(requested, seq));
        Ok(())
    }

    fn present_gcd(&mut self, m: i64, n: i64, gcd: i64) -> io::Result<()> {
        self.report.gcd = Some(GcdReport { m, n, gcd });
        Ok(())
    }

    fn present_quadratic(&mut self, coefficients: [f64; 3], roots: &Roots) -> io::Result<()> {
        let [a, b, c] = coefficients;
        self.report.quadratic = Some(QuadraticReport {
            a,
            b,
            c,
            roots: *roots,
        });
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
