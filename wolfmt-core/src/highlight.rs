//! Token classification for highlighting.
//!
//! This is a declarative classifier, not a parser: an ordered table of
//! token patterns is scanned over the buffer, earliest match wins, and
//! bare symbols are refined against the static symbol tables. Comments do
//! not track nesting (the first `*)` closes), strings understand only
//! backslash escapes; anything the table does not claim is left
//! unclassified. Best effort by design, like the rewrite rules.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::{json, Value};

use crate::span::Span;
use crate::symbols::{classify_symbol, SymbolKind};

/// The category assigned to a classified region of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenClass {
    Comment,
    String,
    Number,
    BuiltinFunction,
    Constant,
    OptionName,
    SystemVariable,
    Identifier,
    Operator,
}

impl From<SymbolKind> for TokenClass {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::BuiltinFunction => TokenClass::BuiltinFunction,
            SymbolKind::Constant => TokenClass::Constant,
            SymbolKind::OptionName => TokenClass::OptionName,
            SymbolKind::SystemVariable => TokenClass::SystemVariable,
        }
    }
}

/// One classified region. Spans are non-overlapping and in offset order;
/// unclassified text (whitespace, stray characters) appears in neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassifiedSpan {
    pub span: Span,
    pub class: TokenClass,
}

/// The raw token shapes, in priority order. A comment opener beats the
/// bare `(` operator, a string beats everything inside it, and numbers
/// beat the operator dot. Symbols are refined against the tables after
/// matching.
const TOKEN_TABLE: &[(&str, &str)] = &[
    ("comment", r"\(\*(?s:.*?)(?:\*\)|\z)"),
    ("string", r#""(?:\\.|[^"\\])*""#),
    ("number", r"\d+\.\d*|\.\d+|\d+"),
    ("symbol", r"[$A-Za-z][$A-Za-z0-9]*"),
    (
        "operator",
        r"===|=!=|==|:=|:>|->|//@|/@|@@@|@@|//\.|//|/;|/\.|&&|\|\||<>|<=|>=|!=|~~|\+\+|--|[=+\-*/^&|!;,<>@#%~?.:\[\]{}()]",
    ),
];

lazy_static! {
    static ref TOKEN_REGEX: Regex = {
        let alternation = TOKEN_TABLE
            .iter()
            .map(|(name, pattern)| format!("(?P<{name}>{pattern})"))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&alternation).unwrap()
    };
}

/// Scans `text` and returns its classified regions in offset order.
pub fn classify(text: &str) -> Vec<ClassifiedSpan> {
    let mut spans = Vec::new();
    for caps in TOKEN_REGEX.captures_iter(text) {
        for (name, _) in TOKEN_TABLE {
            let Some(m) = caps.name(name) else { continue };
            let class = match *name {
                "comment" => TokenClass::Comment,
                "string" => TokenClass::String,
                "number" => TokenClass::Number,
                "symbol" => classify_symbol(m.as_str())
                    .map(TokenClass::from)
                    .unwrap_or(TokenClass::Identifier),
                _ => TokenClass::Operator,
            };
            spans.push(ClassifiedSpan { span: Span::new(m.start(), m.end()), class });
            break;
        }
    }
    spans
}

/// Serializes classified spans, with their lexemes, for machine consumers.
pub fn spans_to_json(text: &str, spans: &[ClassifiedSpan]) -> Value {
    json!(spans
        .iter()
        .map(|cs| {
            json!({
                "start": cs.span.start,
                "end": cs.span.end,
                "class": cs.class,
                "text": cs.span.slice(text),
            })
        })
        .collect::<Vec<_>>())
}
