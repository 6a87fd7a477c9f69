//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One labeled text block per result.
    #[default]
    Text,
    /// A single JSON document once every input has been read.
    Json,
}

/// mathutil — Fibonacci sequence, greatest common divisor and quadratic roots.
///
/// Reads six values from standard input: a Fibonacci term count, two GCD
/// operands, and three quadratic coefficients.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "mathutil", version, about)]
pub struct AppConfig {
    /// Do not print input prompts.
    #[arg(short, long, env = "MATHUTIL_QUIET")]
    pub quiet: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "MATHUTIL_FORMAT")]
    pub format: OutputFormat,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether prompts are written. JSON output never interleaves prompts.
    #[must_use]
    pub fn show_prompts(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }
}
