use console::style;

use crate::boundary::PrepWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal preparation warning to the user.
pub fn display_warning(warning: &PrepWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}
