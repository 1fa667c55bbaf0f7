//! Themed message printing helpers.
//!
//! All informational output goes to a caller-supplied writer (in practice
//! stderr), leaving stdout for the formatted text itself.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

use crate::ui::theme::{ThemeEntry, ThemeMap};

fn print_styled(
    writer: &mut dyn Write,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    if enable_colors {
        if let Some(color) = theme.get(&entry).and_then(|s| s.fg.as_ref()) {
            writeln!(writer, "{}{}", prefix.color(color.to_ansi_color()), msg)?;
            return Ok(());
        }
    }
    writeln!(writer, "{prefix}{msg}")?;
    Ok(())
}

pub fn print_info_message(
    writer: &mut dyn Write,
    msg: &str,
    theme: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    print_styled(writer, "[INFO] ", msg, ThemeEntry::Info, theme, enable_colors)
}

pub fn print_warn_message(
    writer: &mut dyn Write,
    msg: &str,
    theme: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    print_styled(writer, "[WARN] ", msg, ThemeEntry::Warn, theme, enable_colors)
}

pub fn print_error_message(
    writer: &mut dyn Write,
    msg: &str,
    theme: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    print_styled(writer, "[ERROR] ", msg, ThemeEntry::Error, theme, enable_colors)
}
