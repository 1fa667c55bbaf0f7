//! `headless.rs`
//! Convenience wrappers for using the rewrite engine in headless mode
//! (non-UI). Provides helper functions for a full, one-shot reformat of
//! strings.

use anyhow::Result;

use crate::config::load_style_by_name;
use crate::engine::FormatEngine;
use crate::engines::rewrite_engine::RewriteEngine;
use crate::span::Span;

/// Reformats an entire string with the named style in a single call.
/// This function is the primary entry point for non-interactive use.
///
/// # Arguments
///
/// * `style` - A built-in style name ("pretty", "compact") or the name of a
///   user style file.
/// * `content` - The string to reformat.
pub fn format_str(style: &str, content: &str) -> Result<String> {
    let config = load_style_by_name(style)?;
    let engine = RewriteEngine::new(config)?;
    let outcome = engine.rewrite(content, Span::whole(content))?;
    Ok(outcome.text)
}

/// Returns true when `content` is already formatted in the named style.
pub fn is_formatted_str(style: &str, content: &str) -> Result<bool> {
    let config = load_style_by_name(style)?;
    let engine = RewriteEngine::new(config)?;
    engine.is_formatted(content, Span::whole(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_squeezes_call_brackets() {
        assert_eq!(format_str("compact", "f[ x , y ]").unwrap(), "f[x,y]");
    }

    #[test]
    fn pretty_spaces_a_comma() {
        assert_eq!(format_str("pretty", "a,b").unwrap(), "a, b");
    }

    #[test]
    fn is_formatted_str_agrees_with_format_str() {
        assert!(is_formatted_str("pretty", "a, b").unwrap());
        assert!(!is_formatted_str("pretty", "a,b").unwrap());
    }
}
