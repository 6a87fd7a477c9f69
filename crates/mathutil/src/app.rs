//! Application entry point and dispatch.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::debug;

use mathutil_cli::input::Prompter;
use mathutil_cli::presenter::{JsonPresenter, ResultPresenter, TextPresenter};
use mathutil_core::gcd::{gcd, gcd_steps};
use mathutil_core::iterator::FibSequence;
use mathutil_core::quadratic::quadratic_roots;

use crate::config::{AppConfig, OutputFormat};

/// Prompts, in the order values are read.
pub mod prompts {
    pub const FIBONACCI_TERMS: &str = "Enter the number of terms for the Fibonacci sequence: ";
    pub const GCD_M: &str = "Enter the first number (m): ";
    pub const GCD_N: &str = "Enter the second number (n): ";
    pub const COEFFICIENT_A: &str = "Enter coefficient a: ";
    pub const COEFFICIENT_B: &str = "Enter coefficient b: ";
    pub const COEFFICIENT_C: &str = "Enter coefficient c: ";
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        mathutil_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let stdin = io::stdin();
    run_session(config, stdin.lock(), io::stdout(), io::stdout())
}

/// Read the six inputs from `input` and write results to `out`.
///
/// Prompts go to `prompts_out`, which lets callers separate them from the
/// results. The first malformed or missing value aborts the session; results
/// already presented in text mode stay written.
pub fn run_session<R, P, W>(config: &AppConfig, input: R, prompts_out: P, out: W) -> Result<()>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let mut prompter = Prompter::new(input, prompts_out, !config.show_prompts());
    match config.format {
        OutputFormat::Text => session(&mut prompter, &mut TextPresenter::new(out)),
        OutputFormat::Json => session(&mut prompter, &mut JsonPresenter::new(out)),
    }
}

fn session<R, P, T>(prompter: &mut Prompter<R, P>, presenter: &mut T) -> Result<()>
where
    R: BufRead,
    P: Write,
    T: ResultPresenter,
{
    let requested = prompter.prompt_i64(prompts::FIBONACCI_TERMS)?;
    let seq = FibSequence::from_signed(requested);
    presenter.present_fibonacci(requested, &seq)?;

    let m = prompter.prompt_i64(prompts::GCD_M)?;
    let n = prompter.prompt_i64(prompts::GCD_N)?;
    let g = gcd(m, n);
    debug!(m, n, gcd = g, steps = gcd_steps(m, n), "computed gcd");
    presenter.present_gcd(m, n, g)?;

    let a = prompter.prompt_f64(prompts::COEFFICIENT_A)?;
    let b = prompter.prompt_f64(prompts::COEFFICIENT_B)?;
    let c = prompter.prompt_f64(prompts::COEFFICIENT_C)?;
    let roots = quadratic_roots(a, b, c);
    presenter.present_quadratic([a, b, c], &roots)?;

    presenter.finish()?;
    Ok(())
}
