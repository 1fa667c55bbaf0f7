// wolfmt/src/cli.rs
//! This file defines the command-line interface (CLI) for the wolfmt
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wolfmt",
    author = "wolfmt contributors",
    version = env!("CARGO_PKG_VERSION"),
    about = "Format, highlight, complete, and evaluate Wolfram Language source",
    long_about = "Wolfmt is a command-line utility for working with Wolfram Language source text. It reformats code with ordered rewrite-rule styles (pretty inserts spaces around operators, compact removes them), highlights source using the built-in symbol tables, completes symbol names, expands snippets, and passes code to an external wolframscript interpreter for evaluation.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'wolfmt' crate to DEBUG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `wolfmt` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reformats an input file or stdin with an ordered rewrite style.
    #[command(about = "Reformats an input file or stdin with an ordered rewrite style.")]
    Format(FormatCommand),

    /// Highlights an input by classifying tokens against the symbol tables.
    #[command(about = "Highlights an input by classifying tokens against the symbol tables.")]
    Highlight(HighlightCommand),

    /// Completes a symbol-name prefix against the built-in tables.
    #[command(about = "Completes a symbol-name prefix against the built-in tables.")]
    Complete(CompleteCommand),

    /// Provides tools for listing and expanding snippets.
    #[command(subcommand, about = "Provides tools for listing and expanding snippets.")]
    Snippets(SnippetsCommand),

    /// Evaluates code with an external wolframscript interpreter.
    #[command(about = "Evaluates code with an external wolframscript interpreter.")]
    Eval(EvalCommand),
}

/// Arguments for the `format` command.
#[derive(Parser, Debug)]
pub struct FormatCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write formatted output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Select which built-in style to apply.
    #[arg(long = "style", short = 's', value_name = "STYLE", default_value = "pretty", help = "Select a formatting style ('pretty' or 'compact').")]
    pub style: StyleChoice,

    /// Path to a custom style file (YAML), overriding the built-in rules by name.
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom style file (YAML).")]
    pub config: Option<PathBuf>,

    /// Format only the byte range START..END instead of the whole input.
    #[arg(long = "select", value_name = "START..END", conflicts_with = "cursor", help = "Format only the given byte range (e.g., '10..42').")]
    pub select: Option<String>,

    /// Format only the block around this byte offset (delimited by blank lines).
    #[arg(long = "cursor", value_name = "OFFSET", help = "Format only the blank-line-delimited block around this byte offset.")]
    pub cursor: Option<usize>,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Exit with code 1 if the input is not already formatted; writes nothing.
    #[arg(long = "check", conflicts_with_all = ["output", "diff"], help = "Exit with code 1 if the input is not already formatted. Writes nothing.")]
    pub check: bool,

    /// Copy formatted output to the system clipboard.
    #[arg(long, short = 'c', help = "Copy formatted output to the system clipboard.")]
    pub clipboard: bool,

    /// Explicitly enable these rule names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable these rule names (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these rule names (comma-separated).")]
    pub disable: Vec<String>,

    /// Suppress the change summary.
    #[arg(long = "no-change-summary", help = "Suppress the change summary.")]
    pub no_summary: bool,
}

/// Arguments for the `highlight` command.
#[derive(Parser, Debug)]
pub struct HighlightCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print classified spans as JSON instead of colored text.
    #[arg(long = "json", help = "Print classified spans as JSON instead of colored text.")]
    pub json: bool,
}

/// Arguments for the `complete` command.
#[derive(Parser, Debug)]
pub struct CompleteCommand {
    /// The symbol-name prefix to complete.
    #[arg(value_name = "PREFIX", help = "The symbol-name prefix to complete.")]
    pub prefix: String,

    /// Limit the number of completions printed.
    #[arg(long = "limit", short = 'n', value_name = "N", help = "Print at most N completions.")]
    pub limit: Option<usize>,

    /// Print completions as a JSON array.
    #[arg(long = "json", help = "Print completions as a JSON array.")]
    pub json: bool,
}

/// Subcommands for the `snippets` command.
#[derive(Subcommand, Debug)]
pub enum SnippetsCommand {
    #[command(about = "Lists all available snippet triggers.")]
    List,
    #[command(about = "Expands the snippet registered for a trigger.")]
    Expand {
        /// The snippet trigger to expand.
        #[arg(value_name = "TRIGGER", help = "The snippet trigger to expand.")]
        trigger: String,
        /// Text to substitute for the {sel} placeholder.
        #[arg(long = "sel", value_name = "TEXT", default_value = "", help = "Text to substitute for the {sel} placeholder.")]
        sel: String,
    },
}

/// Arguments for the `eval` command.
#[derive(Parser, Debug)]
pub struct EvalCommand {
    /// Code to evaluate, passed directly on the command line.
    #[arg(long = "code", short = 'c', value_name = "CODE", help = "Code to evaluate, passed directly on the command line.")]
    pub code: Option<String>,

    /// Path to a file of code to evaluate (reads from stdin if neither this nor --code is given).
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "code", help = "Read code from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// The interpreter executable to invoke.
    #[arg(long = "program", value_name = "PATH", default_value = "wolframscript", env = "WOLFMT_EVAL_PROGRAM", help = "The interpreter executable to invoke.")]
    pub program: PathBuf,
}

/// Enum for selecting the formatting style.
#[derive(Debug, Clone, ValueEnum, PartialEq)]
pub enum StyleChoice {
    /// Insert single spaces around operators and after commas.
    Pretty,
    /// Remove spaces around brackets, operators, and separators.
    Compact,
}

impl StyleChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleChoice::Pretty => "pretty",
            StyleChoice::Compact => "compact",
        }
    }
}
