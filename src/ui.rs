//! One-line notices for whoever reads the build log.
//!
//! Everything goes to stderr; stdout belongs to the response envelope.

use console::style;

use crate::warning::StepWarning;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print an informational status message with a yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning.
pub fn display_warning(warning: &StepWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Report that the staged version differs from the requested one.
pub fn display_bump(from: &str, to: &str) {
    display_status(&format!(
        "bumped locally from {} to {}",
        style(from).red(),
        style(to).green()
    ));
}
