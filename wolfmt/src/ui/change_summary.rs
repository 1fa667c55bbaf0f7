//! Change summary printing.
//!
//! After a rewrite, lists which rules fired and how many replacements each
//! performed. Goes to stderr so piped stdout stays clean source text.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

use wolfmt_core::RuleChangeItem;

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes the per-rule change summary.
pub fn print_summary(
    summary: &[RuleChangeItem],
    writer: &mut dyn Write,
    theme: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    if summary.is_empty() {
        writeln!(writer, "No formatting changes.")?;
        return Ok(());
    }

    writeln!(writer, "Formatting changes:")?;
    for item in summary {
        let count = item.replacements;
        let noun = if count == 1 { "replacement" } else { "replacements" };
        if enable_colors {
            if let Some(color) =
                theme.get(&ThemeEntry::SummaryRuleName).and_then(|s| s.fg.as_ref())
            {
                writeln!(
                    writer,
                    "  {} ({} {})",
                    item.rule_name.color(color.to_ansi_color()),
                    count,
                    noun
                )?;
                continue;
            }
        }
        writeln!(writer, "  {} ({} {})", item.rule_name, count, noun)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn summary_lists_each_rule() {
        let theme = ThemeStyle::default_theme_map();
        let summary = vec![
            RuleChangeItem { rule_name: "set_spacing".into(), replacements: 2 },
            RuleChangeItem { rule_name: "comma_spacing".into(), replacements: 1 },
        ];
        let mut out = Vec::new();
        print_summary(&summary, &mut out, &theme, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("set_spacing (2 replacements)"));
        assert!(text.contains("comma_spacing (1 replacement)"));
    }

    #[test]
    fn empty_summary_says_so() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_summary(&[], &mut out, &theme, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No formatting changes."));
    }
}
