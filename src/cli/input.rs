//! User input utilities for interactive CLI prompts
//!
//! This module provides the confirmation prompt used before overwriting an
//! existing output file.

use crate::{Error, Result};
use std::io::{self, Write};

/// Get user confirmation for an action
pub fn prompt_confirmation(message: &str, default_yes: bool) -> Result<bool> {
    let default_text = if default_yes { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", message, default_text);

    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    let input = input.trim().to_lowercase();

    if input.is_empty() {
        return Ok(default_yes);
    }

    match input.as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => {
            println!("Please enter 'y' for yes or 'n' for no.");
            prompt_confirmation(message, default_yes)
        }
    }
}
