//! User input utilities for interactive CLI prompts
//!
//! Paths missing from the command line are asked for on standard input,
//! one whitespace-free name per prompt.

use anyhow::{Context, bail};
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Print `message` and read a single file name from `input`
pub fn prompt_path<R: BufRead, W: Write>(
    message: &str,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<PathBuf> {
    writeln!(output, "{}", message.bright_white()).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read file name")?;
    if read == 0 {
        bail!("No file name given (end of input)");
    }

    match line.split_whitespace().next() {
        Some(name) => Ok(PathBuf::from(name)),
        None => bail!("No file name given"),
    }
}

/// Prompt on the terminal for the input file name
pub fn prompt_input_path() -> anyhow::Result<PathBuf> {
    prompt_path(
        "Please enter input file name",
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )
}

/// Prompt on the terminal for the output file name
pub fn prompt_output_path() -> anyhow::Result<PathBuf> {
    prompt_path(
        "Please enter an output file name",
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )
}
