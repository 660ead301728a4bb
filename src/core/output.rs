//! Colored status output for the command line
//!
//! Uses owo-colors for terminal colors. Menu screens themselves are rendered
//! through [`crate::core::style::Palette`] so their bytes stay predictable;
//! these helpers are for the one-shot commands around them.

use owo_colors::OwoColorize;

/// Print an action header (blue, bold)
/// Example: "==> Removing fluidd"
pub fn action(message: &str) {
    println!("{} {}", "==>".blue().bold(), message.bold());
}

/// Print a warning message (yellow)
pub fn warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message.yellow());
}

/// Print a category heading in list output
pub fn heading(title: &str) {
    println!("{}", title.bold());
}

/// Print one removal target in list output
/// Example: "   4) Fluidd  fluidd"
pub fn list_item(number: usize, name: &str, id: &str) {
    println!(
        "  {} {} {}",
        format!("{:>2})", number).cyan(),
        name,
        id.dimmed()
    );
}
