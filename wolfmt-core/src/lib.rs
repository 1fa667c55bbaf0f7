// wolfmt-core/src/lib.rs
//! # wolfmt Core Library
//!
//! `wolfmt-core` provides the fundamental, platform-independent logic for
//! reformatting Wolfram Language source text. It defines the core data
//! structures for rewrite rules and styles, provides mechanisms for compiling
//! them, and implements a pluggable `FormatEngine` trait for applying the
//! ordered rewrite logic.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input text based on ordered rules, without concerns for
//! terminal I/O or application-specific state management. In particular it
//! never talks to an external interpreter: evaluation is a capability trait
//! implemented elsewhere.
//!
//! ## Modules
//!
//! * `config`: Defines `RewriteRule`s and `StyleConfig`s for specifying
//!   formatting styles, including the embedded `pretty` and `compact` styles.
//! * `styles`: Contains the compiler that turns styles into compiled rule
//!   sequences, with a global cache.
//! * `engine`: Defines the `FormatEngine` trait, enabling a modular design.
//! * `engines`: Contains the concrete `RewriteEngine` implementation.
//! * `span`: Span arithmetic and blank-line block resolution.
//! * `symbols`: Static tables of built-in symbol names, with classification
//!   and prefix completion.
//! * `highlight`: Declarative token classification for highlighting.
//! * `snippets`: Trigger-to-template snippet expansion.
//! * `eval`: The `Evaluator` capability contract.
//! * `headless`: Convenience wrappers for one-shot, non-interactive use.
//!
//! ## Usage Example
//!
//! ```rust
//! use wolfmt_core::{format_str, load_style_by_name, FormatEngine, RewriteEngine};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // One-shot: reformat a whole string with a built-in style.
//!     assert_eq!(format_str("pretty", "x=3")?, "x = 3");
//!
//!     // Engine API: reformat only the block under a cursor.
//!     let buffer = "a,b\n\nuntouched";
//!     let engine = RewriteEngine::new(load_style_by_name("pretty")?)?;
//!     let span = wolfmt_core::resolve_block(buffer, 1);
//!     let outcome = engine.rewrite(buffer, span)?;
//!     assert_eq!(outcome.text, "a, b\n\nuntouched");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Semantics
//!
//! Rule order is the formatting semantics: each rule is applied exhaustively
//! over the span before the next begins, later rules see earlier output, and
//! the pipeline is deliberately not iterated to a fixed point. Rewriting is
//! total over all string inputs; malformed source yields a best-effort
//! result, never an error.
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible operations and defines the
//! specific `WolfmtError` type for programmatic handling of rule and snippet
//! failures.

// All modules must be declared before they can be used.
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod eval;
pub mod headless;
pub mod highlight;
pub mod snippets;
pub mod span;
pub mod styles;
pub mod symbols;

/// Re-exports the public configuration types and functions for managing
/// styles.
pub use config::{
    load_style_by_name,
    merge_styles,
    style_candidate_paths,
    validate_rules,
    RewriteRule,
    StyleConfig,
    BUILTIN_STYLE_NAMES,
    MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::WolfmtError;

/// Re-exports types related to the core formatting engine trait.
pub use engine::{FormatEngine, RewriteOutcome, RuleChangeItem};

/// Re-exports the concrete `RewriteEngine` implementation.
pub use engines::rewrite_engine::RewriteEngine;

/// Re-exports span arithmetic and block resolution.
pub use span::{resolve_block, Span};

/// Re-exports symbol classification and completion.
pub use symbols::{classify_symbol, complete, symbols_of_kind, SymbolKind};

/// Re-exports token classification for highlighting.
pub use highlight::{classify, spans_to_json, ClassifiedSpan, TokenClass};

/// Re-exports snippet expansion.
pub use snippets::{merge_snippets, Snippet, SnippetTable};

/// Re-exports the evaluation capability contract.
pub use eval::Evaluator;

/// Re-exports functions for one-shot, non-interactive use.
pub use headless::{format_str, is_formatted_str};

// Re-export key types from the styles::compiler module for advanced usage.
pub use styles::compiler::{compile_style, get_or_compile_style, CompiledRule, CompiledStyle};
