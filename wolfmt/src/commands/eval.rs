//! Eval command implementation.
//!
//! A thin wrapper over the `Evaluator` capability: read code, hand it to
//! the interpreter, print whatever came back. Evaluation failures must
//! never mingle with the formatting path; they surface here and nowhere
//! else.

use anyhow::Result;
use std::io::{self, Write};

use wolfmt_core::Evaluator;

use crate::evaluator::WolframScriptEvaluator;

/// Runs the eval command against the given interpreter program.
pub fn run_eval(program: &std::path::Path, code: &str) -> Result<()> {
    let evaluator = WolframScriptEvaluator::new(program);
    let output = evaluator.evaluate(code)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write!(writer, "{output}")?;
    Ok(())
}
