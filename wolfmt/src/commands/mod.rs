//! Command implementations, one module per subcommand.

pub mod complete;
pub mod eval;
pub mod format;
pub mod highlight;
pub mod snippets;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// Reads the command input: a file when given, stdin otherwise.
pub fn read_input(input_file: Option<&PathBuf>) -> Result<String> {
    match input_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
