//! Unified diff printing for the `--diff` flag.
//!
//! Renders exactly what the formatter removed (red) and inserted (green).

use anyhow::Result;
use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::Write;

use crate::ui::theme::{ThemeEntry, ThemeMap};

fn styled_line(
    writer: &mut dyn Write,
    marker: &str,
    line: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    let line = line.trim_end_matches('\n');
    if enable_colors {
        if let Some(color) = theme.get(&entry).and_then(|s| s.fg.as_ref()) {
            writeln!(writer, "{}", format!("{marker}{line}").color(color.to_ansi_color()))?;
            return Ok(());
        }
    }
    writeln!(writer, "{marker}{line}")?;
    Ok(())
}

/// Writes a line-oriented diff between the original and formatted text.
pub fn print_diff(
    original: &str,
    formatted: &str,
    writer: &mut dyn Write,
    theme: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    let patch = create_patch(original, formatted);

    styled_line(writer, "", "--- formatting diff ---", ThemeEntry::DiffHeader, theme, enable_colors)?;

    let mut any_change = false;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    any_change = true;
                    styled_line(writer, "- ", s, ThemeEntry::DiffRemoved, theme, enable_colors)?;
                }
                DiffLine::Insert(s) => {
                    any_change = true;
                    styled_line(writer, "+ ", s, ThemeEntry::DiffAdded, theme, enable_colors)?;
                }
                DiffLine::Context(s) => {
                    let line = s.trim_end_matches('\n');
                    writeln!(writer, "  {line}")?;
                }
            }
        }
    }

    if !any_change {
        writeln!(writer, "No changes.")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn diff_shows_removed_and_added_lines() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_diff("a,b\n", "a, b\n", &mut out, &theme, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("- a,b"));
        assert!(text.contains("+ a, b"));
    }

    #[test]
    fn identical_inputs_report_no_changes() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_diff("same\n", "same\n", &mut out, &theme, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No changes."));
    }
}
