// wolfmt/src/main.rs
//! wolfmt entry point.
//!
//! Parses the CLI, initializes logging and the theme, builds the engine
//! for the requested style, and dispatches to the command runners.

use anyhow::{Context, Result};
use clap::Parser;

use wolfmt_core::{merge_styles, RewriteEngine, StyleConfig};

use wolfmt::cli::{Cli, Commands, FormatCommand, SnippetsCommand};
use wolfmt::commands::format::{parse_select, run_format, FormatOptions, SpanMode};
use wolfmt::commands::{complete, eval, format, highlight, read_input, snippets};
use wolfmt::logger;
use wolfmt::ui::theme::build_theme_map;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug, cli.disable_debug));

    let theme_map = build_theme_map(cli.theme.as_ref()).context("Theme error")?;

    match cli.command {
        Commands::Format(cmd) => {
            let status = run_format_command(&cmd, cli.quiet, &theme_map)?;
            if cmd.check && status.changed {
                std::process::exit(1);
            }
        }
        Commands::Highlight(cmd) => {
            let input = read_input(cmd.input_file.as_ref())?;
            highlight::run_highlight(&input, cmd.json, &theme_map)?;
        }
        Commands::Complete(cmd) => {
            complete::run_complete(&cmd.prefix, cmd.limit, cmd.json)?;
        }
        Commands::Snippets(cmd) => match cmd {
            SnippetsCommand::List => snippets::run_list()?,
            SnippetsCommand::Expand { trigger, sel } => snippets::run_expand(&trigger, &sel)?,
        },
        Commands::Eval(cmd) => {
            let code = match &cmd.code {
                Some(code) => code.clone(),
                None => read_input(cmd.input_file.as_ref())?,
            };
            if let Err(e) = eval::run_eval(&cmd.program, &code) {
                // Evaluation failures are reported loudly and independently;
                // they never share a path with the formatter.
                format::error_msg(format!("{e:#}"), &theme_map);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn run_format_command(
    cmd: &FormatCommand,
    quiet: bool,
    theme_map: &wolfmt::ui::theme::ThemeMap,
) -> Result<format::FormatStatus> {
    // Base rules come from the chosen built-in style (or the user's override
    // of it); an explicit --config file is merged over them by rule name.
    let mut style = match &cmd.config {
        Some(path) => {
            let base = StyleConfig::builtin(cmd.style.as_str())?;
            let user = StyleConfig::load_from_file(path)?;
            merge_styles(base, Some(user))
        }
        None => wolfmt_core::load_style_by_name(cmd.style.as_str())?,
    };
    style.set_active_rules(&cmd.enable, &cmd.disable);

    let engine = RewriteEngine::new(style)
        .with_context(|| format!("Failed to build engine for style '{}'", cmd.style.as_str()))?;

    let input = read_input(cmd.input_file.as_ref())?;

    let span_mode = if let Some(select) = &cmd.select {
        SpanMode::Select(parse_select(select)?)
    } else if let Some(cursor) = cmd.cursor {
        SpanMode::Cursor(cursor)
    } else {
        SpanMode::Whole
    };

    let opts = FormatOptions {
        input,
        span_mode,
        output_path: cmd.output.clone(),
        diff: cmd.diff,
        check: cmd.check,
        clipboard: cmd.clipboard,
        no_change_summary: cmd.no_summary,
        quiet,
    };

    run_format(&engine, opts, theme_map)
}
