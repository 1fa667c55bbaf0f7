//! Format command implementation.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use owo_colors::OwoColorize;
use std::fs;
use std::io::{self, Write};

use wolfmt_core::{engine::FormatEngine, resolve_block, RewriteOutcome, Span};

use crate::ui::change_summary;
use crate::ui::diff_viewer;
use crate::ui::output_format;
use crate::ui::theme::{ThemeEntry, ThemeMap};
use crate::utils::clipboard::copy_to_clipboard;

/// Which part of the input to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanMode {
    /// The whole input.
    Whole,
    /// An explicit byte range.
    Select(Span),
    /// The blank-line-delimited block around a byte offset.
    Cursor(usize),
}

/// Options for the ergonomic run_format API.
pub struct FormatOptions {
    pub input: String,
    pub span_mode: SpanMode,
    pub output_path: Option<std::path::PathBuf>,
    pub diff: bool,
    pub check: bool,
    pub clipboard: bool,
    pub no_change_summary: bool,
    pub quiet: bool,
}

/// What the rewrite did, for the caller to turn into an exit code.
pub struct FormatStatus {
    pub changed: bool,
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// The main operation runner for the `format` subcommand.
pub fn run_format(
    engine: &dyn FormatEngine,
    opts: FormatOptions,
    theme_map: &ThemeMap,
) -> Result<FormatStatus> {
    info!("Starting format operation with style '{}'.", engine.style().name);

    let span = match opts.span_mode {
        SpanMode::Whole => Span::whole(&opts.input),
        SpanMode::Select(span) => span,
        SpanMode::Cursor(offset) => {
            let span = resolve_block(&opts.input, offset);
            debug!("Cursor {} resolved to block {}..{}.", offset, span.start, span.end);
            span
        }
    };

    let outcome = engine.rewrite(&opts.input, span).context("Formatting failed")?;
    let changed = outcome.text != opts.input;

    debug!(
        "Span rewritten. Original length: {}, formatted length: {}, changed ranges: {}",
        opts.input.len(),
        outcome.text.len(),
        outcome.changed.len()
    );

    if opts.check {
        if !opts.quiet {
            let verdict = if changed { "input is not formatted" } else { "input is formatted" };
            info_msg(verdict, theme_map);
        }
        return Ok(FormatStatus { changed });
    }

    handle_primary_output(&opts, &outcome, theme_map)?;

    if opts.clipboard {
        handle_clipboard_output(&outcome.text, theme_map);
    }

    handle_change_summary(&outcome, &opts, theme_map)?;

    info!("Format operation completed.");
    Ok(FormatStatus { changed })
}

fn handle_primary_output(
    opts: &FormatOptions,
    outcome: &RewriteOutcome,
    theme_map: &ThemeMap,
) -> Result<()> {
    if let Some(path) = opts.output_path.clone() {
        info_msg(format!("Writing formatted content to file: {}", path.display()), theme_map);
        let mut file = fs::File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;

        if opts.diff {
            diff_viewer::print_diff(&opts.input, &outcome.text, &mut file, theme_map, false)?;
        } else {
            write!(file, "{}", outcome.text)?;
        }
    } else {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();

        if opts.diff {
            diff_viewer::print_diff(&opts.input, &outcome.text, &mut writer, theme_map, supports_color)?;
        } else if supports_color && !outcome.changed.is_empty() {
            write_with_changed_ranges(&mut writer, outcome, theme_map)?;
        } else {
            write!(writer, "{}", outcome.text)?;
        }
    };
    Ok(())
}

/// Writes the formatted text with the changed sub-ranges colored, so an
/// interactive user can see at a glance what the style touched.
fn write_with_changed_ranges(
    writer: &mut dyn Write,
    outcome: &RewriteOutcome,
    theme_map: &ThemeMap,
) -> Result<()> {
    let color = theme_map.get(&ThemeEntry::ChangedText).and_then(|s| s.fg.as_ref());
    let Some(color) = color else {
        write!(writer, "{}", outcome.text)?;
        return Ok(());
    };

    let mut cursor = 0;
    for range in &outcome.changed {
        write!(writer, "{}", &outcome.text[cursor..range.start])?;
        write!(writer, "{}", (&outcome.text[range.start..range.end]).color(color.to_ansi_color()))?;
        cursor = range.end;
    }
    write!(writer, "{}", &outcome.text[cursor..])?;
    Ok(())
}

fn handle_clipboard_output(formatted: &str, theme_map: &ThemeMap) {
    match copy_to_clipboard(formatted) {
        Ok(_) => info_msg("Formatted content copied to clipboard successfully.", theme_map),
        Err(e) => warn_msg(format!("Failed to copy to clipboard: {e}"), theme_map),
    }
}

fn handle_change_summary(
    outcome: &RewriteOutcome,
    opts: &FormatOptions,
    theme_map: &ThemeMap,
) -> Result<()> {
    if !opts.no_change_summary && !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        change_summary::print_summary(
            &outcome.summary,
            &mut io::stderr(),
            theme_map,
            stderr_supports_color,
        )?;
    }
    Ok(())
}

/// Parses a `START..END` byte-range argument.
pub fn parse_select(arg: &str) -> Result<Span> {
    let (start, end) = arg
        .split_once("..")
        .with_context(|| format!("Invalid --select range '{arg}' (expected START..END)"))?;
    let start: usize = start.trim().parse()
        .with_context(|| format!("Invalid --select start offset '{start}'"))?;
    let end: usize = end.trim().parse()
        .with_context(|| format!("Invalid --select end offset '{end}'"))?;
    Ok(Span::new(start, end))
}
