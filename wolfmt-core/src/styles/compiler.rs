//! compiler.rs - Manages the compilation and caching of style rules.
//!
//! This module provides a thread-safe, cached mechanism to convert a
//! `StyleConfig` into a `CompiledStyle`, which is optimized for efficient
//! rewriting. It uses a global, shared cache to avoid redundant compilation.

use anyhow::Result;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{StyleConfig, MAX_PATTERN_LENGTH};
use crate::errors::WolfmtError;

/// Represents a single compiled rewrite rule.
///
/// This struct holds a compiled regular expression along with its associated
/// replacement template and metadata, ready for efficient application.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The replacement template for matches of this rule's pattern.
    pub replace_with: String,
    /// The unique name of the rewrite rule.
    pub name: String,
    /// If true, `replace_with` is inserted verbatim with no `$n` expansion.
    pub literal_replacement: bool,
}

/// An ordered sequence of compiled rules for one formatting style.
///
/// The `rules` vector preserves the order of the source `StyleConfig`; that
/// order is the application order.
#[derive(Debug)]
pub struct CompiledStyle {
    /// The style identifier this was compiled from.
    pub name: String,
    /// The compiled rules, in application order.
    pub rules: Vec<CompiledRule>,
}

lazy_static! {
    /// A thread-safe, global cache for compiled styles.
    /// The key is a hash of the `StyleConfig`.
    static ref COMPILED_STYLE_CACHE: RwLock<HashMap<u64, Arc<CompiledStyle>>> =
        RwLock::new(HashMap::new());
}

/// Hashes the `StyleConfig` to create a stable, unique key for the cache.
///
/// Rules are hashed in sequence order: two styles with the same rules in a
/// different order are different styles and must not share a cache slot.
fn hash_config(config: &StyleConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);
    hasher.finish()
}

/// Compiles the rules of a `StyleConfig` into a `CompiledStyle`.
/// This is the low-level function that performs the actual regex compilation.
pub fn compile_style(config: &StyleConfig) -> Result<CompiledStyle, WolfmtError> {
    debug!("Starting compilation of {} rules for style '{}'.", config.rules.len(), config.name);

    let mut compiled_rules = Vec::new();
    let mut compilation_errors = Vec::new();

    for rule in &config.rules {
        if let Some(false) = rule.enabled {
            warn!("Skipping rule '{}' because it is disabled.", rule.name);
            continue;
        }

        debug!("Attempting to compile rule: '{}' with pattern '{:?}'", rule.name, rule.pattern);

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(WolfmtError::PatternLengthExceeded(
                rule.name.clone(),
                rule.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let regex_result = RegexBuilder::new(&rule.pattern)
            .case_insensitive(rule.case_insensitive)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build();

        match regex_result {
            Ok(regex) => {
                log::debug!(
                    target: "wolfmt_core::styles",
                    "Rule '{}' compiled successfully.",
                    rule.name
                );
                compiled_rules.push(CompiledRule {
                    regex,
                    replace_with: rule.replace_with.clone(),
                    name: rule.name.clone(),
                    literal_replacement: rule.literal_replacement,
                });
            }
            Err(e) => {
                compilation_errors.push(WolfmtError::RuleCompilationError(rule.name.clone(), e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(WolfmtError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!("Finished compiling style '{}'. Total compiled: {}.", config.name, compiled_rules.len());
        Ok(CompiledStyle { name: config.name.clone(), rules: compiled_rules })
    }
}

/// Gets a `CompiledStyle` instance from the cache or compiles it if not found.
///
/// This is the public entry point for retrieving compiled styles. It returns
/// an `Arc` to a `CompiledStyle` instance, allowing for cheap sharing.
pub fn get_or_compile_style(config: &StyleConfig) -> Result<Arc<CompiledStyle>> {
    let cache_key = hash_config(config);

    // Attempt to acquire a read lock first.
    {
        let cache = COMPILED_STYLE_CACHE.read().unwrap();
        if let Some(style) = cache.get(&cache_key) {
            debug!("Serving compiled style from cache for key: {}", &cache_key);
            return Ok(Arc::clone(style));
        }
    } // Read lock is released here.

    debug!("Compiled style not found in cache. Compiling now.");
    let compiled = compile_style(config)?;
    let compiled_arc = Arc::new(compiled);

    COMPILED_STYLE_CACHE.write().unwrap().insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached style for key: {}", &cache_key);
    Ok(compiled_arc)
}
