//! Output formatting helpers.
//!
//! Everything the user is meant to read goes to stdout, failures included.

use colored::Colorize;

/// Print a progress message.
pub fn progress(msg: &str) {
    println!("{}", msg.dimmed());
}

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    println!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("{}: {}", label.dimmed(), value);
}
