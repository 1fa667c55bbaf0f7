// wolfmt/src/lib.rs
//! # wolfmt CLI Application
//!
//! This crate provides the command-line interface for the wolfmt rewrite
//! engine: formatting, highlighting, symbol completion, snippet expansion,
//! and evaluation through an external `wolframscript` interpreter.

pub mod cli;
pub mod commands;
pub mod evaluator;
pub mod logger;
pub mod ui;
pub mod utils;

// Re-export the subprocess evaluator for embedding.
pub use evaluator::WolframScriptEvaluator;
