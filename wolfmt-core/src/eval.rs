//! The evaluation capability contract.
//!
//! Evaluation is an external collaborator, not a core concern: the rewrite
//! path never calls it, and the core defines only the seam. Implementations
//! (such as the CLI's `wolframscript` subprocess wrapper) send source text
//! to an interpreter and hand back whatever it printed, with no structured
//! result and no success/failure distinction beyond "the process could be
//! started at all".

use anyhow::Result;

/// A capability that executes source code in an external interpreter and
/// returns the captured output text.
pub trait Evaluator: Send + Sync {
    /// Evaluates `code` and returns the combined captured output.
    ///
    /// Output is best-effort: interpreter diagnostics and error text arrive
    /// the same way results do. The only hard error is failing to reach the
    /// interpreter in the first place.
    fn evaluate(&self, code: &str) -> Result<String>;
}
