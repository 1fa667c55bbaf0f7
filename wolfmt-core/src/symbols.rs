//! Static symbol tables for the Wolfram Language.
//!
//! The tables are read-only constants embedded at compile time and parsed
//! once on first use; there is no runtime mutation. They back both the
//! highlighter's refinement of bare symbols and the prefix-completion
//! command.

use once_cell::sync::Lazy;
use serde::Serialize;

/// The category a known built-in symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    BuiltinFunction,
    Constant,
    OptionName,
    SystemVariable,
}

fn load_table(raw: &'static str) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

static FUNCTIONS: Lazy<Vec<&'static str>> =
    Lazy::new(|| load_table(include_str!("../data/functions.txt")));
static CONSTANTS: Lazy<Vec<&'static str>> =
    Lazy::new(|| load_table(include_str!("../data/constants.txt")));
static OPTIONS: Lazy<Vec<&'static str>> =
    Lazy::new(|| load_table(include_str!("../data/options.txt")));
static SYSTEM_VARIABLES: Lazy<Vec<&'static str>> =
    Lazy::new(|| load_table(include_str!("../data/system_variables.txt")));

/// All known symbols, sorted and deduplicated, for completion.
static ALL_SYMBOLS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut names: Vec<&'static str> = FUNCTIONS
        .iter()
        .chain(CONSTANTS.iter())
        .chain(OPTIONS.iter())
        .chain(SYSTEM_VARIABLES.iter())
        .copied()
        .collect();
    names.sort_unstable();
    names.dedup();
    names
});

fn table_for(kind: SymbolKind) -> &'static [&'static str] {
    match kind {
        SymbolKind::BuiltinFunction => &FUNCTIONS,
        SymbolKind::Constant => &CONSTANTS,
        SymbolKind::OptionName => &OPTIONS,
        SymbolKind::SystemVariable => &SYSTEM_VARIABLES,
    }
}

/// Classifies a bare symbol name against the built-in tables.
///
/// A name present in several tables resolves to the first category in
/// declaration order (constants before functions before options), so `None`
/// and friends read as constants rather than functions.
pub fn classify_symbol(name: &str) -> Option<SymbolKind> {
    for kind in [
        SymbolKind::Constant,
        SymbolKind::BuiltinFunction,
        SymbolKind::OptionName,
        SymbolKind::SystemVariable,
    ] {
        if table_for(kind).binary_search(&name).is_ok() {
            return Some(kind);
        }
    }
    None
}

/// The symbols in one category, sorted.
pub fn symbols_of_kind(kind: SymbolKind) -> &'static [&'static str] {
    table_for(kind)
}

/// Case-sensitive prefix completion over the union of all tables.
///
/// The empty prefix completes to nothing: offering every known symbol is
/// never useful.
pub fn complete(prefix: &str) -> Vec<&'static str> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let all = &*ALL_SYMBOLS;
    let start = all.partition_point(|name| name < &prefix);
    all[start..]
        .iter()
        .take_while(|name| name.starts_with(prefix))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_populated() {
        assert!(symbols_of_kind(SymbolKind::BuiltinFunction).len() > 500);
        assert!(symbols_of_kind(SymbolKind::Constant).contains(&"Pi"));
        assert!(symbols_of_kind(SymbolKind::SystemVariable).contains(&"$Version"));
    }

    #[test]
    fn classification_covers_each_table() {
        assert_eq!(classify_symbol("Module"), Some(SymbolKind::BuiltinFunction));
        assert_eq!(classify_symbol("GoldenRatio"), Some(SymbolKind::Constant));
        assert_eq!(classify_symbol("PlotRange"), Some(SymbolKind::OptionName));
        assert_eq!(classify_symbol("$Failed"), Some(SymbolKind::SystemVariable));
        assert_eq!(classify_symbol("myLocalName"), None);
    }

    #[test]
    fn completion_is_prefix_scoped_and_sorted() {
        let results = complete("Nest");
        assert_eq!(results, vec!["Nest", "NestList", "NestWhile", "NestWhileList"]);
    }

    #[test]
    fn completion_spans_tables() {
        let results = complete("$Ver");
        assert_eq!(results, vec!["$Version", "$VersionNumber"]);
    }

    #[test]
    fn empty_prefix_completes_to_nothing() {
        assert!(complete("").is_empty());
    }

    #[test]
    fn completion_is_case_sensitive() {
        assert!(complete("module").is_empty());
    }
}
