//! Complete command implementation.

use anyhow::Result;
use log::debug;
use std::io::{self, Write};

use wolfmt_core::complete;

/// Runs the complete command: prefix-match the built-in symbol tables.
pub fn run_complete(prefix: &str, limit: Option<usize>, as_json: bool) -> Result<()> {
    let mut completions = complete(prefix);
    debug!("Prefix '{}' matched {} symbols.", prefix, completions.len());
    if let Some(limit) = limit {
        completions.truncate(limit);
    }

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    if as_json {
        writeln!(writer, "{}", serde_json::to_string(&completions)?)?;
    } else {
        for name in completions {
            writeln!(writer, "{name}")?;
        }
    }
    Ok(())
}
