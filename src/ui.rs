// UI module for consistent terminal output with styling
//
// All stdout/stderr writes go through here so the rest of the crate can
// keep the print lints enabled.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use console::style;

/// Print a plain output line
pub fn line(message: &str) {
    println!("{}", message);
}

/// Print a success message with checkmark
pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

/// Print a header/section message
pub fn header(message: &str) {
    println!("{}", style(message).bold());
}

/// Print a dimmed/secondary message
pub fn dim(message: &str) {
    println!("{}", style(message).dim());
}

/// Print a status message (for check summaries, etc.)
pub fn status(prefix: &str, message: &str) {
    println!("{} {}", style(prefix).cyan().bold(), message);
}
