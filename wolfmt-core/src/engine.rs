//! Defines the core FormatEngine trait and related data structures.
//!
//! The `FormatEngine` trait provides a pluggable interface over formatting
//! backends. This module defines the contract that all such engines must
//! adhere to, ensuring a consistent and interchangeable core API for
//! `wolfmt`.

use anyhow::Result;

use crate::config::StyleConfig;
use crate::span::Span;
use crate::styles::compiler::CompiledStyle;

/// A summary of what a single rule changed during one rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleChangeItem {
    pub rule_name: String,
    /// Number of replacements the rule performed that actually modified text.
    pub replacements: usize,
}

/// The result of one rewrite over a span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The full buffer content with the span rewritten in place; text outside
    /// the original span is byte-identical to the input.
    pub text: String,
    /// Where the rewritten region lives inside `text`.
    pub rewritten_span: Span,
    /// Sub-ranges of `text` that differ from the input, for visual
    /// highlighting. Cosmetic only; empty when nothing changed.
    pub changed: Vec<Span>,
    /// Per-rule modification counts, in rule order. Rules that changed
    /// nothing are omitted.
    pub summary: Vec<RuleChangeItem>,
}

impl RewriteOutcome {
    /// True when the rewrite left the buffer byte-identical.
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }
}

/// A trait that defines the core functionality of a formatting engine.
///
/// This trait decouples the high-level application logic from the specific
/// implementation of a formatting method, allowing for different engines to
/// be used interchangeably.
pub trait FormatEngine: Send + Sync {
    /// Rewrites the given span of `content` and returns the full rewritten
    /// buffer together with change information.
    ///
    /// The transform is total: malformed or unbalanced input yields a
    /// best-effort result, never an error. Errors can only arise from the
    /// surrounding plumbing, not from the text itself.
    fn rewrite(&self, content: &str, span: Span) -> Result<RewriteOutcome>;

    /// Returns true when rewriting the span would leave `content` unchanged,
    /// i.e. the span is already in this engine's style.
    fn is_formatted(&self, content: &str, span: Span) -> Result<bool>;

    /// Returns a reference to the `CompiledStyle` used by the engine.
    ///
    /// This is used by external components, such as the change summary
    /// printer, to access information about the rules without needing to
    /// recompile them.
    fn compiled_style(&self) -> &CompiledStyle;

    /// Returns a reference to the engine's style configuration.
    fn style(&self) -> &StyleConfig;
}
