//! Result verification report types.
//!
//! A verifier inspects a finished `SymptomAnalysisResult` and reports every
//! broken check at once, so a misbehaving knowledge table shows its full
//! failure set in one pass.

use serde::{Deserialize, Serialize};

/// The result of running every check against one analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// True only if every check passed.
    pub passed: bool,
    /// All failures collected during this run. Empty on pass.
    pub failures: Vec<VerificationFailure>,
}

impl VerificationReport {
    /// Build a report from collected failures.
    pub fn from_failures(failures: Vec<VerificationFailure>) -> Self {
        Self {
            passed: failures.is_empty(),
            failures,
        }
    }

    /// Failure messages joined into one line, for error values and logs.
    pub fn summary(&self) -> String {
        self.failures
            .iter()
            .map(|f| format!("[{}] {}", f.check_id, f.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A single failed check within a `VerificationReport`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationFailure {
    /// Stable identifier of the check that failed (e.g. "max-conditions").
    pub check_id: String,
    /// Human-readable explanation of why the check failed.
    pub message: String,
}
