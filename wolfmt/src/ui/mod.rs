//! Terminal output: theming, message helpers, diff view, change summary.

pub mod change_summary;
pub mod diff_viewer;
pub mod output_format;
pub mod theme;
