//! Style compilation.
//!
//! Contains the machinery that turns a declarative [`StyleConfig`]
//! into compiled, ready-to-apply rule sequences.
//!
//! [`StyleConfig`]: crate::config::StyleConfig

pub mod compiler;

pub use compiler::{compile_style, get_or_compile_style, CompiledRule, CompiledStyle};
