//! Shared helpers for CLI commands.

use std::io::{self, BufRead};

use anyhow::Result;

/// Expand CLI inputs, reading from stdin when the single argument `-` is passed.
pub fn gather_inputs(inputs: &[String]) -> Result<Vec<String>> {
    if inputs.len() == 1 && inputs[0] == "-" {
        read_lines_from_stdin()
    } else {
        Ok(inputs.to_vec())
    }
}

/// Read inputs from stdin, one per line, skipping blank lines.
fn read_lines_from_stdin() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}
