//! Styled terminal messages.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Render an error line, styled unless color is disabled.
#[must_use]
pub fn error_line(text: &str) -> String {
    if is_color_disabled() {
        format!("[ERROR] {text}")
    } else {
        format!("{} {text}", style("[ERROR]").for_stderr().red().bold())
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", error_line(text));
}
