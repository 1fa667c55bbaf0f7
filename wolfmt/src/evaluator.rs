//! The `wolframscript` subprocess implementation of the core `Evaluator`
//! capability.
//!
//! Evaluation is deliberately dumb plumbing: invoke the interpreter,
//! capture what it printed, hand it back. The exit status is logged but
//! never interpreted; interpreter error text reaches the user the same way
//! results do. A hanging interpreter hangs. The only hard error is a
//! process that cannot be started at all.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::Command;

use wolfmt_core::Evaluator;

/// Evaluates code by invoking `wolframscript -code <code>` (or any
/// compatible interpreter) as a blocking subprocess.
#[derive(Debug, Clone)]
pub struct WolframScriptEvaluator {
    program: PathBuf,
}

impl WolframScriptEvaluator {
    pub fn new<P: AsRef<Path>>(program: P) -> Self {
        Self { program: program.as_ref().to_path_buf() }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for WolframScriptEvaluator {
    fn default() -> Self {
        Self::new("wolframscript")
    }
}

impl Evaluator for WolframScriptEvaluator {
    fn evaluate(&self, code: &str) -> Result<String> {
        info!("Invoking {} for evaluation.", self.program.display());
        let output = Command::new(&self.program)
            .arg("-code")
            .arg(code)
            .output()
            .with_context(|| {
                format!("Failed to start interpreter '{}'", self.program.display())
            })?;

        // Best-effort by contract: the status is recorded, not judged.
        debug!("Interpreter exited with status {:?}.", output.status.code());

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}
