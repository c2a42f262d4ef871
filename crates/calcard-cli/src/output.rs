//! Terminal output for the calcard CLI.
//!
//! Descriptors go to stdout untouched. Diagnostics go to stderr, styled with
//! the [`console`] crate.

use std::io::Write;

use console::style;

/// Write a complete descriptor to stdout in a single write.
pub fn emit(descriptor: &str) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(descriptor.as_bytes())?;
    lock.flush()
}

/// Print an error message prefixed with red `[ERROR]` to stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {}", style("[ERROR]").for_stderr().red().bold(), text);
}
