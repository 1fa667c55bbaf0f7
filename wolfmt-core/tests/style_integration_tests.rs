// wolfmt-core/tests/style_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

// Import the specific types and functions needed from the main crate's config module
use wolfmt_core::config::{self, RewriteRule, StyleConfig};

#[test]
fn test_builtin_pretty_style() {
    let style = StyleConfig::builtin("pretty").unwrap();
    assert_eq!(style.name, "pretty");
    assert!(!style.rules.is_empty());
    // Multi-character operators must stay ahead of their prefixes.
    let position = |name: &str| style.rules.iter().position(|r| r.name == name).unwrap();
    assert!(position("same_q_spacing") < position("equal_spacing"));
    assert!(position("equal_spacing") < position("set_spacing"));
    assert!(position("set_delayed_spacing") < position("set_spacing"));
}

#[test]
fn test_builtin_compact_style() {
    let style = StyleConfig::builtin("compact").unwrap();
    assert_eq!(style.name, "compact");
    assert!(style.rules.iter().any(|r| r.name == "space_runs"));
    // Collapsing space runs must come last, after the operator rules have
    // already deleted the spaces they own.
    assert_eq!(style.rules.last().unwrap().name, "space_runs");
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
name: custom
description: "A test style"
rules:
  - name: test_rule
    pattern: "test"
    replace_with: "TEST"
    case_insensitive: true
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let style = StyleConfig::load_from_file(file.path())?;
    assert_eq!(style.name, "custom");
    assert_eq!(style.rules.len(), 1);
    assert_eq!(style.rules[0].name, "test_rule");
    assert!(style.rules[0].case_insensitive);
    assert!(!style.rules[0].literal_replacement); // omitted, defaults to false
    Ok(())
}

#[test]
fn test_load_from_file_rejects_invalid_rules() -> Result<()> {
    let yaml_content = r#"
name: broken
rules:
  - name: bad
    pattern: "("
    replace_with: "x"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    assert!(StyleConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_merge_styles_no_user_config() {
    let base = StyleConfig::builtin("compact").unwrap();
    let merged = config::merge_styles(base.clone(), None);
    assert_eq!(merged, base);
}

#[test]
fn test_merge_styles_overrides_in_place() {
    let base = StyleConfig::builtin("compact").unwrap();
    let original_position =
        base.rules.iter().position(|r| r.name == "comma_spacing").unwrap();
    let user = StyleConfig {
        name: "compact".to_string(),
        description: None,
        rules: vec![RewriteRule {
            name: "comma_spacing".to_string(),
            pattern: "[ ]*,[ ]*".to_string(),
            replace_with: ",".to_string(),
            ..Default::default()
        }],
    };
    let merged = config::merge_styles(base, Some(user));
    let merged_position =
        merged.rules.iter().position(|r| r.name == "comma_spacing").unwrap();
    assert_eq!(merged_position, original_position);
    assert_eq!(merged.rules[merged_position].pattern, "[ ]*,[ ]*");
}

#[test]
fn test_set_active_rules_disables_by_name() {
    let mut style = StyleConfig::builtin("pretty").unwrap();
    let before = style.rules.len();
    style.set_active_rules(&[], &["comma_spacing".to_string()]);
    assert_eq!(style.rules.len(), before - 1);
    assert!(style.rules.iter().all(|r| r.name != "comma_spacing"));
}

#[test]
fn test_unknown_style_name_errors() {
    let err = config::load_style_by_name("no_such_style").unwrap_err();
    assert!(err.to_string().contains("no_such_style"));
}
