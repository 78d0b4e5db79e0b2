//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_banner, display_cancelled, display_error, display_proposed_release, display_release_plan,
    display_status, display_success,
};

/// Whether an answer accepts a `[Y/n]` prompt.
///
/// Empty input, `y` and `yes` are acceptance, compared case-insensitively
/// after trimming whitespace. Everything else declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

/// Prompt text asking to cut `next` after `previous`
pub fn release_prompt(previous: &str, next: &str) -> String {
    format!(
        "Last release version was '{}', do you want to create '{}' [Y/n]: ",
        previous, next
    )
}

/// Asks on stdin whether to cut the release.
///
/// Blocks until a line is read. Default is to confirm.
///
/// # Returns
/// * `Ok(true)` - If the user pressed Enter or typed "y"/"yes"
/// * `Ok(false)` - Any other answer
/// * `Err` - If input error occurs
pub fn confirm_release(previous: &str, next: &str) -> Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    confirm_release_with(&mut input, &mut io::stdout(), previous, next)
}

/// [`confirm_release`] over arbitrary streams.
///
/// End of input declines: an empty line is an answer, a closed stream is not.
pub fn confirm_release_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    previous: &str,
    next: &str,
) -> Result<bool> {
    write!(output, "{}", release_prompt(previous, next))?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }

    Ok(is_affirmative(&answer))
}
