//! Configuration management for `wolfmt-core`.
//!
//! This module defines the core data structures for rewrite rules and the
//! ordered styles built out of them. It handles serialization/deserialization
//! of YAML style files and provides utilities for loading, merging, and
//! validating styles.
//!
//! Rule order inside a style is load-bearing: each rule is applied
//! exhaustively over the span before the next rule begins, so the sequence in
//! the YAML file is the formatting semantics, not a presentation detail.

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Represents a single ordered rewrite rule used by the rewrite engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct RewriteRule {
    /// Unique identifier for the rule (e.g., "open_bracket_spacing").
    pub name: String,
    /// Human-readable description of what the rule rewrites.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: String,
    /// The replacement template. May reference capture groups as `$1`..`$n`
    /// unless `literal_replacement` is set.
    pub replace_with: String,
    /// If true, the pattern is matched without case sensitivity.
    pub case_insensitive: bool,
    /// If true, `replace_with` is inserted verbatim, `$` included.
    pub literal_replacement: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Default for RewriteRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: String::new(),
            replace_with: String::new(),
            case_insensitive: false,
            literal_replacement: false,
            enabled: None,
        }
    }
}

/// An ordered sequence of rewrite rules representing one formatting style.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Style identifier (e.g., "pretty", "compact").
    pub name: String,
    /// Human-readable description of the style.
    pub description: Option<String>,
    /// The rules, in application order.
    pub rules: Vec<RewriteRule>,
}

/// Names of the styles embedded in the library.
pub const BUILTIN_STYLE_NAMES: &[&str] = &["pretty", "compact"];

impl StyleConfig {
    /// Loads a style from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading style from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read style file {}", path.display()))?;
        let config: StyleConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse style file {}", path.display()))?;

        validate_rules(&config.rules)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads one of the built-in styles from its embedded YAML definition.
    pub fn builtin(name: &str) -> Result<Self> {
        debug!("Loading built-in style '{}' from embedded string...", name);
        let yaml = match name {
            "pretty" => include_str!("../config/pretty.yaml"),
            "compact" => include_str!("../config/compact.yaml"),
            other => {
                return Err(crate::errors::WolfmtError::UnknownStyle(other.to_string()).into())
            }
        };
        let config: StyleConfig = serde_yml::from_str(yaml)
            .with_context(|| format!("Failed to parse built-in style '{}'", name))?;

        debug!("Loaded {} rules for built-in style '{}'.", config.rules.len(), name);
        Ok(config)
    }

    /// Filters active rules based on enable/disable lists provided via CLI.
    ///
    /// Relative order of the surviving rules is preserved.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();

        debug!("Initial rules count before filtering: {}", self.rules.len());

        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in enable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", rule_name);
        }

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        self.rules.retain(|rule| {
            let rule_name_str = rule.name.as_str();
            if disable_set.contains(rule_name_str) {
                return false;
            }
            match rule.enabled {
                Some(false) => enable_set.contains(rule_name_str),
                _ => true,
            }
        });

        debug!("Final active rules count after filtering: {}", self.rules.len());
    }
}

/// Merges a user-defined style over a base style.
///
/// Unlike a plain map merge, this is order-preserving: a user rule whose name
/// matches a base rule replaces it in place, keeping the base position in the
/// sequence; user rules with new names are appended after the base rules in
/// the order they appear in the user file.
pub fn merge_styles(base: StyleConfig, user: Option<StyleConfig>) -> StyleConfig {
    debug!("merge_styles called. Base rules count: {}", base.rules.len());

    let mut merged = base;
    if let Some(user_cfg) = user {
        debug!("User style provided. Merging {} user rules.", user_cfg.rules.len());
        for user_rule in user_cfg.rules {
            if let Some(slot) = merged.rules.iter_mut().find(|r| r.name == user_rule.name) {
                *slot = user_rule;
            } else {
                merged.rules.push(user_rule);
            }
        }
        if user_cfg.description.is_some() {
            merged.description = user_cfg.description;
        }
    }

    debug!("Final total rules after merge: {}", merged.rules.len());
    merged
}

/// Candidate file paths where a user style of the given name may live.
///
/// Searched in order: the per-user wolfmt config directory, then the current
/// working directory.
pub fn style_candidate_paths(name: &str) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("wolfmt").join("styles").join(format!("{name}.yaml")));
    }
    candidates.push(PathBuf::from(format!("{name}.yaml")));
    candidates
}

/// Resolves a style by name: built-in styles first, then user style files.
///
/// A user style file with the same name as a built-in style overrides the
/// built-in rules by name (order-preserving merge).
pub fn load_style_by_name(name: &str) -> Result<StyleConfig> {
    let builtin = if BUILTIN_STYLE_NAMES.contains(&name) {
        Some(StyleConfig::builtin(name)?)
    } else {
        None
    };

    for candidate in style_candidate_paths(name) {
        if candidate.is_file() {
            let user = StyleConfig::load_from_file(&candidate)?;
            return Ok(match builtin {
                Some(base) => merge_styles(base, Some(user)),
                None => user,
            });
        }
    }

    builtin.ok_or_else(|| crate::errors::WolfmtError::UnknownStyle(name.to_string()).into())
}

/// Validates rule integrity (regex compilation, capture groups, ordering keys).
pub fn validate_rules(rules: &[RewriteRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();
    let capture_group_regex = Regex::new(r"\$(\d+)").unwrap();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH
            ));
        }

        let compiled = match Regex::new(&rule.pattern) {
            Ok(re) => re,
            Err(e) => {
                errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
                continue;
            }
        };

        // A pattern that matches the empty string would fire between every
        // pair of characters during the exhaustive per-rule scan.
        if compiled.is_match("") {
            errors.push(format!(
                "Rule '{}': pattern matches the empty string and cannot be applied.",
                rule.name
            ));
        }

        if !rule.literal_replacement {
            let mut group_count = 0;
            let mut is_escaped = false;
            for c in rule.pattern.chars() {
                match c {
                    '\\' => is_escaped = !is_escaped,
                    '(' if !is_escaped => group_count += 1,
                    _ => is_escaped = false,
                }
            }

            for cap in capture_group_regex.captures_iter(&rule.replace_with) {
                if let Some(group_num_str) = cap.get(1) {
                    if let Ok(group_num) = group_num_str.as_str().parse::<usize>() {
                        if group_num > group_count {
                            errors.push(format!(
                                "Rule '{}': replacement references non-existent capture group '${}'.",
                                rule.name, group_num
                            ));
                        }
                    }
                }
            }
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Rule validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_styles_parse_and_validate() {
        for name in BUILTIN_STYLE_NAMES {
            let style = StyleConfig::builtin(name).unwrap();
            assert_eq!(&style.name, name);
            assert!(!style.rules.is_empty());
            validate_rules(&style.rules).unwrap();
        }
    }

    #[test]
    fn unknown_builtin_style_is_an_error() {
        let err = StyleConfig::builtin("ornate").unwrap_err();
        assert!(err.to_string().contains("ornate"));
    }

    #[test]
    fn merge_preserves_base_order() {
        let base = StyleConfig {
            name: "base".into(),
            description: None,
            rules: vec![
                RewriteRule { name: "a".into(), pattern: "a".into(), replace_with: "A".into(), ..Default::default() },
                RewriteRule { name: "b".into(), pattern: "b".into(), replace_with: "B".into(), ..Default::default() },
            ],
        };
        let user = StyleConfig {
            name: "base".into(),
            description: None,
            rules: vec![
                RewriteRule { name: "a".into(), pattern: "a".into(), replace_with: "X".into(), ..Default::default() },
                RewriteRule { name: "c".into(), pattern: "c".into(), replace_with: "C".into(), ..Default::default() },
            ],
        };
        let merged = merge_styles(base, Some(user));
        let names: Vec<&str> = merged.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(merged.rules[0].replace_with, "X");
    }

    #[test]
    fn empty_match_patterns_are_rejected() {
        let rules = vec![RewriteRule {
            name: "bad".into(),
            pattern: "x*".into(),
            replace_with: " ".into(),
            ..Default::default()
        }];
        assert!(validate_rules(&rules).is_err());
    }

    #[test]
    fn out_of_range_group_reference_is_rejected() {
        let rules = vec![RewriteRule {
            name: "bad_group".into(),
            pattern: "(a)".into(),
            replace_with: "$2".into(),
            ..Default::default()
        }];
        assert!(validate_rules(&rules).is_err());
    }
}
