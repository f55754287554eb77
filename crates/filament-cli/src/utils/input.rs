//! User input utilities for interactive command-line prompts.
//!
//! Prompts go to stdout. Answers come from any `BufRead`: handlers pass a
//! locked stdin, tests pass a `Cursor`.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result, bail};

/// Prompts for a line of text, returned with whitespace trimmed.
///
/// # Errors
///
/// Returns an error if reading fails or the input is exhausted.
pub fn prompt_string_from(input: &mut impl BufRead, prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to write prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read user input")?;
    if read == 0 {
        bail!("No input available for '{prompt}'");
    }
    Ok(line.trim().to_string())
}

/// Prompts until the answer parses as `T`.
///
/// Invalid answers print the parse error and ask again.
pub fn prompt_parsed_from<T>(input: &mut impl BufRead, prompt: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    loop {
        let answer = prompt_string_from(input, prompt)?;
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("Invalid value '{answer}': {e}"),
        }
    }
}

/// Prompts for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input is treated as 'no'.
pub fn prompt_confirmation_from(input: &mut impl BufRead, prompt: &str) -> Result<bool> {
    loop {
        let answer = prompt_string_from(input, &format!("{prompt} (y/N)"))?;
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => eprintln!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}
