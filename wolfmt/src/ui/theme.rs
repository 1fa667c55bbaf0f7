//! Module for managing the application's command-line interface (CLI) theme.
//!
//! This module defines the structure for theme configuration, allowing users
//! to customize the colors of various output elements, including the token
//! classes produced by the highlighter. It supports 16-color ANSI named
//! colors for foreground styling and provides functionality to load themes
//! from YAML files and manage default theme settings.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use wolfmt_core::TokenClass;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
///
/// Each variant represents a distinct type of message or highlighted token
/// that can have a configurable foreground color in the theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Style for prominent headers or section titles.
    Header,
    /// Style for successful operation messages.
    Success,
    /// Style for general informational messages.
    Info,
    /// Style for warning messages.
    Warn,
    /// Style for error messages.
    Error,
    /// Style for text the formatter changed.
    ChangedText,
    /// Style for lines added in a diff view.
    DiffAdded,
    /// Style for lines removed in a diff view.
    DiffRemoved,
    /// Style for the header/footer of a diff view.
    DiffHeader,
    /// Style for the name of a rule in a change summary.
    SummaryRuleName,
    /// Style for the number of replacements in a change summary.
    SummaryOccurrences,
    /// Highlighter: comments.
    Comment,
    /// Highlighter: string literals.
    StringToken,
    /// Highlighter: numbers.
    Number,
    /// Highlighter: built-in function names.
    BuiltinFunction,
    /// Highlighter: built-in constants.
    Constant,
    /// Highlighter: option names.
    OptionName,
    /// Highlighter: session/system $-variables.
    SystemVariable,
    /// Highlighter: user-defined symbols.
    Identifier,
    /// Highlighter: operators and punctuation.
    Operator,
}

impl From<TokenClass> for ThemeEntry {
    fn from(class: TokenClass) -> Self {
        match class {
            TokenClass::Comment => ThemeEntry::Comment,
            TokenClass::String => ThemeEntry::StringToken,
            TokenClass::Number => ThemeEntry::Number,
            TokenClass::BuiltinFunction => ThemeEntry::BuiltinFunction,
            TokenClass::Constant => ThemeEntry::Constant,
            TokenClass::OptionName => ThemeEntry::OptionName,
            TokenClass::SystemVariable => ThemeEntry::SystemVariable,
            TokenClass::Identifier => ThemeEntry::Identifier,
            TokenClass::Operator => ThemeEntry::Operator,
        }
    }
}

const ALL_ENTRIES: &[ThemeEntry] = &[
    ThemeEntry::Header,
    ThemeEntry::Success,
    ThemeEntry::Info,
    ThemeEntry::Warn,
    ThemeEntry::Error,
    ThemeEntry::ChangedText,
    ThemeEntry::DiffAdded,
    ThemeEntry::DiffRemoved,
    ThemeEntry::DiffHeader,
    ThemeEntry::SummaryRuleName,
    ThemeEntry::SummaryOccurrences,
    ThemeEntry::Comment,
    ThemeEntry::StringToken,
    ThemeEntry::Number,
    ThemeEntry::BuiltinFunction,
    ThemeEntry::Constant,
    ThemeEntry::OptionName,
    ThemeEntry::SystemVariable,
    ThemeEntry::Identifier,
    ThemeEntry::Operator,
];

/// Represents an ANSI color that can be used in the theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    /// Attempts to parse a string into a `ThemeColor`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white" |
            "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue" |
            "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl ThemeColor {
    /// Converts the `ThemeColor` enum variant into its corresponding `owo_colors::AnsiColors`.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
///
/// With no explicit path, the per-user theme file is picked up when present.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        return ThemeStyle::load_from_file(path);
    }
    if let Some(path) = user_theme_path() {
        if path.is_file() {
            return ThemeStyle::load_from_file(&path);
        }
    }
    Ok(ThemeStyle::default_theme_map())
}

/// The per-user theme override file, when a config directory exists.
pub fn user_theme_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wolfmt").join("theme.yaml"))
}

impl ThemeStyle {
    /// Loads a theme configuration from a YAML file on disk and merges it with default styles.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        let defaults = Self::default_theme_map();
        for entry in ALL_ENTRIES {
            if let Some(default_style) = defaults.get(entry) {
                custom.entry(entry.clone()).or_insert_with(|| default_style.clone());
            }
        }
        Ok(custom)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::DiffAdded, ThemeStyle { fg: Some(ThemeColor::Named("green".into())) });
        default_theme.insert(ThemeEntry::DiffRemoved, ThemeStyle { fg: Some(ThemeColor::Named("red".into())) });
        default_theme.insert(ThemeEntry::DiffHeader, ThemeStyle { fg: Some(ThemeColor::Named("yellow".into())) });
        default_theme.insert(ThemeEntry::ChangedText, ThemeStyle { fg: Some(ThemeColor::Named("brightgreen".into())) });
        default_theme.insert(ThemeEntry::Warn, ThemeStyle { fg: Some(ThemeColor::Named("yellow".into())) });
        default_theme.insert(ThemeEntry::Error, ThemeStyle { fg: Some(ThemeColor::Named("brightred".into())) });
        default_theme.insert(ThemeEntry::SummaryRuleName, ThemeStyle { fg: Some(ThemeColor::Named("cyan".into())) });

        // Default token colors for the highlighter.
        default_theme.insert(ThemeEntry::Comment, ThemeStyle { fg: Some(ThemeColor::Named("brightblack".into())) });
        default_theme.insert(ThemeEntry::StringToken, ThemeStyle { fg: Some(ThemeColor::Named("green".into())) });
        default_theme.insert(ThemeEntry::Number, ThemeStyle { fg: Some(ThemeColor::Named("magenta".into())) });
        default_theme.insert(ThemeEntry::BuiltinFunction, ThemeStyle { fg: Some(ThemeColor::Named("blue".into())) });
        default_theme.insert(ThemeEntry::Constant, ThemeStyle { fg: Some(ThemeColor::Named("cyan".into())) });
        default_theme.insert(ThemeEntry::OptionName, ThemeStyle { fg: Some(ThemeColor::Named("brightcyan".into())) });
        default_theme.insert(ThemeEntry::SystemVariable, ThemeStyle { fg: Some(ThemeColor::Named("brightmagenta".into())) });
        default_theme.insert(ThemeEntry::Operator, ThemeStyle { fg: Some(ThemeColor::Named("brightyellow".into())) });

        for entry in ALL_ENTRIES {
            default_theme
                .entry(entry.clone())
                .or_insert_with(|| ThemeStyle { fg: Some(ThemeColor::Named("white".into())) });
        }
        default_theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert!("BrightGreen".parse::<ThemeColor>().is_ok());
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn to_ansi_color_roundtrip() {
        let tc: ThemeColor = "blue".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::Blue);
        let tc: ThemeColor = "brightmagenta".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::BrightMagenta);
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        for entry in ALL_ENTRIES {
            assert!(theme.contains_key(entry), "missing default for {entry:?}");
        }
    }

    #[test]
    fn token_classes_map_to_entries() {
        assert_eq!(ThemeEntry::from(TokenClass::String), ThemeEntry::StringToken);
        assert_eq!(ThemeEntry::from(TokenClass::Operator), ThemeEntry::Operator);
    }
}
