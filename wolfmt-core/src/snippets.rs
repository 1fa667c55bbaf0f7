//! Snippet expansion.
//!
//! A declarative trigger-to-template table, the standalone rendition of an
//! editor abbrev list. Templates go through `tinytemplate`; the only
//! context value is `sel`, the text being wrapped, so a snippet can either
//! enclose a selection or stand alone.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tinytemplate::TinyTemplate;

use crate::errors::WolfmtError;

/// A single trigger and its expansion template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Snippet {
    pub trigger: String,
    pub description: Option<String>,
    pub template: String,
}

impl Default for Snippet {
    fn default() -> Self {
        Self { trigger: String::new(), description: None, template: String::new() }
    }
}

/// The full trigger table for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SnippetTable {
    pub snippets: Vec<Snippet>,
}

#[derive(Serialize)]
struct SnippetContext<'a> {
    sel: &'a str,
}

impl SnippetTable {
    /// Loads the embedded default snippet table.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default snippets from embedded string...");
        let table: SnippetTable = serde_yml::from_str(include_str!("../config/snippets.yaml"))
            .context("Failed to parse default snippets")?;
        debug!("Loaded {} default snippets.", table.snippets.len());
        Ok(table)
    }

    /// Loads a snippet table from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading snippets from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snippet file {}", path.display()))?;
        let table: SnippetTable = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse snippet file {}", path.display()))?;
        Ok(table)
    }

    /// Loads the defaults merged with the per-user snippet file, if any.
    pub fn load() -> Result<Self> {
        let mut table = Self::load_default()?;
        if let Some(path) = user_snippet_path() {
            if path.is_file() {
                let user = Self::load_from_file(&path)?;
                table = merge_snippets(table, user);
            }
        }
        Ok(table)
    }

    pub fn get(&self, trigger: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.trigger == trigger)
    }

    /// The snippets in table order, for listing.
    pub fn iter(&self) -> impl Iterator<Item = &Snippet> {
        self.snippets.iter()
    }

    /// Expands the snippet registered for `trigger`, substituting `sel` for
    /// the `{sel}` placeholder.
    pub fn expand(&self, trigger: &str, sel: &str) -> Result<String> {
        let snippet = self
            .get(trigger)
            .ok_or_else(|| WolfmtError::SnippetNotFound(trigger.to_string()))?;

        let mut tt = TinyTemplate::new();
        // Snippets produce source text, not markup.
        tt.set_default_formatter(&tinytemplate::format_unescaped);
        tt.add_template(trigger, &snippet.template)
            .with_context(|| format!("Invalid template for snippet '{trigger}'"))?;
        let rendered = tt
            .render(trigger, &SnippetContext { sel })
            .with_context(|| format!("Failed to expand snippet '{trigger}'"))?;
        Ok(rendered)
    }
}

/// Merges a user snippet table over the base: triggers already present are
/// replaced in place, new triggers are appended in user order.
pub fn merge_snippets(base: SnippetTable, user: SnippetTable) -> SnippetTable {
    let mut merged = base;
    for user_snippet in user.snippets {
        if let Some(slot) = merged.snippets.iter_mut().find(|s| s.trigger == user_snippet.trigger) {
            *slot = user_snippet;
        } else {
            merged.snippets.push(user_snippet);
        }
    }
    merged
}

/// The per-user snippet override file, when a config directory exists.
pub fn user_snippet_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wolfmt").join("snippets.yaml"))
}
