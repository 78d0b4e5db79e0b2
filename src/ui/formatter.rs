//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.

use console::style;

const BANNER_RULE: &str =
    "######################################################################";

/// Frame a step message between two rules of `#`.
pub fn format_banner(text: &str) -> String {
    format!("\n{}\n# {}\n{}\n", BANNER_RULE, text, BANNER_RULE)
}

/// Print a framed step banner.
pub fn display_banner(text: &str) {
    println!("{}", format_banner(text));
}

/// Print a framed banner on stderr, for cancellations.
pub fn display_cancelled(text: &str) {
    eprintln!("{}", format_banner(text));
}

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

/// Display the version change proposed for this release.
///
/// # Arguments
/// * `previous_tag` - The latest tag found in the repository
/// * `version` - The release about to be cut
pub fn display_proposed_release(previous_tag: &str, version: &str) {
    println!("{}", style("Proposed Release:").bold());
    println!("  From: {}", style(previous_tag).red());
    println!("  To:   {}", style(version).green());
}

/// Lines describing what a confirmed release would execute.
pub fn format_release_plan(commands: &[String]) -> Vec<String> {
    commands
        .iter()
        .enumerate()
        .map(|(i, cmd)| format!("  Step {}: {}", i + 1, cmd))
        .collect()
}

/// Display the commands of a dry run.
pub fn display_release_plan(commands: &[String]) {
    display_status("Dry run, nothing will be changed. Would run:");
    for line in format_release_plan(commands) {
        println!("{}", style(line).cyan());
    }
}
