//! Status lines printed to the terminal by the command-line tool.

pub mod colors;

use std::fmt::Display;

pub use colors::Colors;

/// Formats an error message.
pub fn format_error(err: impl Display, no_color: bool) -> String {
    Colors::paint(&format!("ERROR: {}", err), Colors::ERROR, no_color)
}

/// Formats a warning message.
pub fn format_warning(msg: impl Display, no_color: bool) -> String {
    Colors::paint(&format!("WARNING: {}", msg), Colors::WARN, no_color)
}

/// Formats a success message.
pub fn format_success(msg: impl Display, no_color: bool) -> String {
    Colors::paint(&msg.to_string(), Colors::OK, no_color)
}

/// Prints a warning message to stderr.
pub fn print_warning(msg: impl Display, no_color: bool) {
    eprintln!("{}", format_warning(msg, no_color));
}

/// Prints a success message to stdout.
pub fn print_success(msg: impl Display, no_color: bool) {
    println!("{}", format_success(msg, no_color));
}

/// Prints the error to stderr and exits with status 1.
/// Only the outermost layer of the command-line tool should call this.
pub fn exit_with_error(err: impl Display, no_color: bool) -> ! {
    eprintln!("{}", format_error(err, no_color));
    std::process::exit(1)
}
