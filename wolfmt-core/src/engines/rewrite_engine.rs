//! A `FormatEngine` implementation that applies an ordered sequence of
//! regex rewrite rules over a span of text.
//!
//! Each rule is applied exhaustively over the whole span before the next
//! rule begins: later rules see the output of earlier ones, and a
//! replacement that happens to match an earlier rule is never re-processed.
//! The ordered single pass per rule is the defined semantics; the pipeline
//! is deliberately not iterated to a fixed point.

use std::sync::Arc;

use anyhow::Result;
use log::debug;

use crate::config::StyleConfig;
use crate::engine::{FormatEngine, RewriteOutcome, RuleChangeItem};
use crate::span::Span;
use crate::styles::compiler::{get_or_compile_style, CompiledRule, CompiledStyle};

/// One modifying replacement, collected before the output is rebuilt.
struct Edit {
    start: usize,
    end: usize,
    replacement: String,
}

#[derive(Debug)]
pub struct RewriteEngine {
    compiled: Arc<CompiledStyle>,
    config: StyleConfig,
}

impl RewriteEngine {
    pub fn new(config: StyleConfig) -> Result<Self> {
        use anyhow::Context;
        let compiled = get_or_compile_style(&config)
            .with_context(|| format!("Failed to compile style '{}' for RewriteEngine", config.name))?;

        Ok(Self { compiled, config })
    }

    /// Applies one rule exhaustively over `text`, returning the rewritten
    /// text and the number of modifying replacements. `ranges` carries the
    /// changed sub-ranges accumulated by earlier rules; offsets are remapped
    /// through this rule's edits and the new replacement ranges are merged in.
    fn apply_rule(rule: &CompiledRule, text: &str, ranges: &mut Vec<(usize, usize)>) -> (String, usize) {
        let mut edits: Vec<Edit> = Vec::new();
        for caps in rule.regex.captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            // Zero-width matches would fire between every character pair.
            // Validation rejects such patterns; this is the runtime guard.
            if m.start() == m.end() {
                continue;
            }
            let mut replacement = String::new();
            if rule.literal_replacement {
                replacement.push_str(&rule.replace_with);
            } else {
                caps.expand(&rule.replace_with, &mut replacement);
            }
            // A replacement identical to the match is a no-op; it neither
            // counts nor dirties a range.
            if replacement == m.as_str() {
                continue;
            }
            edits.push(Edit { start: m.start(), end: m.end(), replacement });
        }

        if edits.is_empty() {
            return (text.to_string(), 0);
        }

        let remapped: Vec<(usize, usize)> = ranges
            .iter()
            .map(|&(s, e)| (map_through_edits(&edits, s), map_through_edits(&edits, e)))
            .collect();

        let mut out = String::with_capacity(text.len());
        let mut new_ranges: Vec<(usize, usize)> = remapped;
        let mut last_end = 0;
        for edit in &edits {
            out.push_str(&text[last_end..edit.start]);
            let replaced_at = out.len();
            out.push_str(&edit.replacement);
            new_ranges.push((replaced_at, out.len()));
            last_end = edit.end;
        }
        out.push_str(&text[last_end..]);

        *ranges = coalesce_ranges(new_ranges);
        (out, edits.len())
    }
}

/// Maps a position in the pre-edit text to the corresponding position in the
/// post-edit text. Positions inside a replaced range snap to the end of the
/// replacement.
fn map_through_edits(edits: &[Edit], pos: usize) -> usize {
    let mut delta: isize = 0;
    for edit in edits {
        if edit.end <= pos {
            delta += edit.replacement.len() as isize - (edit.end - edit.start) as isize;
        } else if edit.start < pos {
            return (edit.start as isize + delta) as usize + edit.replacement.len();
        } else {
            break;
        }
    }
    (pos as isize + delta) as usize
}

/// Sorts ranges and merges any that touch or overlap.
fn coalesce_ranges(mut ranges: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    ranges.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some((_, prev_end)) if start <= *prev_end => {
                *prev_end = (*prev_end).max(end);
            }
            _ => merged.push((start, end)),
        }
    }
    merged
}

impl FormatEngine for RewriteEngine {
    fn rewrite(&self, content: &str, span: Span) -> Result<RewriteOutcome> {
        let span = span.clamp_to(content);
        let prefix = &content[..span.start];
        let suffix = &content[span.end..];
        let mut region = span.slice(content).to_string();

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        let mut summary: Vec<RuleChangeItem> = Vec::new();
        for rule in &self.compiled.rules {
            let (next, replacements) = Self::apply_rule(rule, &region, &mut ranges);
            if replacements > 0 {
                debug!("Rule '{}' performed {} replacement(s).", rule.name, replacements);
                summary.push(RuleChangeItem { rule_name: rule.name.clone(), replacements });
            }
            region = next;
        }

        let rewritten_span = Span::new(span.start, span.start + region.len());
        let mut text = String::with_capacity(prefix.len() + region.len() + suffix.len());
        text.push_str(prefix);
        text.push_str(&region);
        text.push_str(suffix);

        let changed = ranges
            .into_iter()
            .map(|(s, e)| Span::new(span.start + s, span.start + e))
            .collect();

        Ok(RewriteOutcome { text, rewritten_span, changed, summary })
    }

    fn is_formatted(&self, content: &str, span: Span) -> Result<bool> {
        let outcome = self.rewrite(content, span)?;
        Ok(outcome.text == content)
    }

    fn compiled_style(&self) -> &CompiledStyle {
        &self.compiled
    }

    fn style(&self) -> &StyleConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RewriteRule, StyleConfig};

    fn engine(rules: Vec<(&str, &str, &str)>) -> RewriteEngine {
        let config = StyleConfig {
            name: "test".into(),
            description: None,
            rules: rules
                .into_iter()
                .map(|(name, pattern, replace_with)| RewriteRule {
                    name: name.into(),
                    pattern: pattern.into(),
                    replace_with: replace_with.into(),
                    ..Default::default()
                })
                .collect(),
        };
        RewriteEngine::new(config).unwrap()
    }

    fn rewrite_all(engine: &RewriteEngine, text: &str) -> RewriteOutcome {
        engine.rewrite(text, Span::whole(text)).unwrap()
    }

    #[test]
    fn rules_apply_in_order_over_prior_output() {
        let e = engine(vec![("ab", "a", "b"), ("bc", "bb", "c")]);
        // "a" -> "b" first, exhaustively; only then does "bb" -> "c" run.
        assert_eq!(rewrite_all(&e, "aa").text, "c");
    }

    #[test]
    fn earlier_rules_do_not_reprocess_later_output() {
        // The second rule reintroduces text the first rule would rewrite;
        // a single ordered pass must leave it alone.
        let e = engine(vec![("strip_x", "x", "y"), ("make_x", "z", "x")]);
        assert_eq!(rewrite_all(&e, "xz").text, "yx");
    }

    #[test]
    fn group_references_expand() {
        let e = engine(vec![("swap", r"(\w+)-(\w+)", "$2-$1")]);
        assert_eq!(rewrite_all(&e, "left-right").text, "right-left");
    }

    #[test]
    fn literal_replacement_keeps_dollar_signs() {
        let config = StyleConfig {
            name: "test".into(),
            description: None,
            rules: vec![RewriteRule {
                name: "lit".into(),
                pattern: "VAR".into(),
                replace_with: "$1".into(),
                literal_replacement: true,
                ..Default::default()
            }],
        };
        let e = RewriteEngine::new(config).unwrap();
        assert_eq!(rewrite_all(&e, "VAR").text, "$1");
    }

    #[test]
    fn text_outside_span_is_untouched() {
        let e = engine(vec![("strip", " +", " ")]);
        let text = "a  b\n\nc  d";
        let span = Span::new(0, 4);
        let outcome = e.rewrite(text, span).unwrap();
        assert_eq!(outcome.text, "a b\n\nc  d");
        assert_eq!(outcome.rewritten_span, Span::new(0, 3));
    }

    #[test]
    fn empty_span_is_a_noop() {
        let e = engine(vec![("strip", " +", " ")]);
        let outcome = e.rewrite("a  b", Span::new(1, 1)).unwrap();
        assert_eq!(outcome.text, "a  b");
        assert!(outcome.is_noop());
        assert!(outcome.summary.is_empty());
    }

    #[test]
    fn no_match_output_equals_input() {
        let e = engine(vec![("nope", "qqq", "z")]);
        let outcome = rewrite_all(&e, "f[x]");
        assert_eq!(outcome.text, "f[x]");
        assert!(outcome.is_noop());
    }

    #[test]
    fn rewrite_is_deterministic() {
        let e = engine(vec![("a", " *, *", ", "), ("b", "  +", " ")]);
        let input = "f[1 ,2,   3]";
        let first = rewrite_all(&e, input);
        let second = rewrite_all(&e, input);
        assert_eq!(first, second);
    }

    #[test]
    fn noop_replacements_do_not_count_as_changes() {
        let e = engine(vec![("comma", ", *", ", ")]);
        let outcome = rewrite_all(&e, "a, b");
        assert_eq!(outcome.text, "a, b");
        assert!(outcome.is_noop());
        assert!(outcome.summary.is_empty());
    }

    #[test]
    fn changed_ranges_cover_replacements() {
        let e = engine(vec![("comma", ",", ", ")]);
        let outcome = rewrite_all(&e, "a,b");
        assert_eq!(outcome.text, "a, b");
        assert_eq!(outcome.changed, vec![Span::new(1, 3)]);
    }

    #[test]
    fn changed_ranges_survive_later_rules() {
        // First rule rewrites at the end; second rule shortens text before
        // it, shifting the recorded range left.
        let e = engine(vec![("tail", "z$", "Z"), ("head", "aa", "a")]);
        let outcome = rewrite_all(&e, "aaz");
        assert_eq!(outcome.text, "aZ");
        assert_eq!(outcome.changed, vec![Span::new(0, 2)]);
    }

    #[test]
    fn summary_reports_rules_in_order() {
        let e = engine(vec![("one", "1", "x"), ("two", "2", "y")]);
        let outcome = rewrite_all(&e, "121");
        let names: Vec<&str> = outcome.summary.iter().map(|i| i.rule_name.as_str()).collect();
        assert_eq!(names, vec!["one", "two"]);
        assert_eq!(outcome.summary[0].replacements, 2);
    }

    #[test]
    fn is_formatted_detects_both_states() {
        let e = engine(vec![("comma", ",(\\w)", ", $1")]);
        assert!(e.is_formatted("a, b", Span::new(0, 4)).unwrap());
        assert!(!e.is_formatted("a,b", Span::new(0, 3)).unwrap());
    }
}
