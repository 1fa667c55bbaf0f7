//! Snippets command implementation.

use anyhow::Result;
use std::io::{self, Write};

use wolfmt_core::SnippetTable;

/// Lists every available trigger with its description.
pub fn run_list() -> Result<()> {
    let table = SnippetTable::load()?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    for snippet in table.iter() {
        match &snippet.description {
            Some(description) => writeln!(writer, "{}\t{}", snippet.trigger, description)?,
            None => writeln!(writer, "{}", snippet.trigger)?,
        }
    }
    Ok(())
}

/// Expands one trigger and prints the result.
pub fn run_expand(trigger: &str, sel: &str) -> Result<()> {
    let table = SnippetTable::load()?;
    let expanded = table.expand(trigger, sel)?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writeln!(writer, "{expanded}")?;
    Ok(())
}
