//! Highlight command implementation.

use anyhow::Result;
use is_terminal::IsTerminal;
use log::debug;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use wolfmt_core::{classify, spans_to_json, ClassifiedSpan};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Runs the highlight command: classify the input and render it.
pub fn run_highlight(input: &str, as_json: bool, theme_map: &ThemeMap) -> Result<()> {
    let spans = classify(input);
    debug!("Classified {} spans.", spans.len());

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    if as_json {
        let value = spans_to_json(input, &spans);
        writeln!(writer, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    write_highlighted(&mut writer, input, &spans, theme_map, supports_color)?;
    Ok(())
}

/// Writes the input with classified spans colored; unclassified text
/// (whitespace and anything the table does not claim) passes through plain.
fn write_highlighted(
    writer: &mut dyn Write,
    input: &str,
    spans: &[ClassifiedSpan],
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    if !enable_colors {
        write!(writer, "{input}")?;
        return Ok(());
    }

    let mut cursor = 0;
    for cs in spans {
        write!(writer, "{}", &input[cursor..cs.span.start])?;
        let lexeme = cs.span.slice(input);
        match theme_map.get(&ThemeEntry::from(cs.class)).and_then(|s| s.fg.as_ref()) {
            Some(color) => write!(writer, "{}", lexeme.color(color.to_ansi_color()))?,
            None => write!(writer, "{lexeme}")?,
        }
        cursor = cs.span.end;
    }
    write!(writer, "{}", &input[cursor..])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn colored_rendering_preserves_the_text() {
        let theme = ThemeStyle::default_theme_map();
        let input = "N[Pi, 20] (* digits *)";
        let spans = classify(input);
        let mut out = Vec::new();
        write_highlighted(&mut out, input, &spans, &theme, true).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        let stripped = strip_ansi(&rendered);
        assert_eq!(stripped, input);
    }

    #[test]
    fn plain_rendering_is_the_input() {
        let theme = ThemeStyle::default_theme_map();
        let input = "f[x] + 1";
        let spans = classify(input);
        let mut out = Vec::new();
        write_highlighted(&mut out, input, &spans, &theme, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), input);
    }

    // Minimal ANSI stripper for assertions; the CLI tests use the
    // strip-ansi-escapes crate, but unit tests keep dependencies local.
    fn strip_ansi(text: &str) -> String {
        let mut result = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }
}
