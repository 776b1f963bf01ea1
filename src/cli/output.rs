//! Consistent CLI output formatting
//!
//! Styled status lines for the interactive surface. Diagnostics emitted
//! while files are being processed go through `tracing` instead; this is
//! only for the run-level conversation with the user.

use console::style;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✔").green(), message);
}

/// Print an error message (always to stderr)
pub fn error(message: &str) {
    eprintln!("{} {}", style("✖").red(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Print a configuration key/value line
pub fn property(label: &str, value: &str) {
    println!(
        "  {} {}",
        style(format!("{label}:")).dim(),
        style(value).cyan()
    );
}
