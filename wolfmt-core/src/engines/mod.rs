//! Concrete implementations of the `FormatEngine` trait.
//!
//! The only backend is the ordered-regex rewrite engine; the trait seam
//! exists so callers never depend on that directly.

pub mod rewrite_engine;

pub use rewrite_engine::RewriteEngine;
