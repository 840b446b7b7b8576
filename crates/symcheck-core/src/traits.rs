//! Trait seams of the symcheck engine.
//!
//! - `KnowledgeSource`: read-only symptom → condition facts
//! - `Verifier`: checks a finished result before it is delivered
//!
//! The analyzer depends only on these traits; the TOML-backed table and the
//! schema verifier live in their own crates.

use symcheck_contracts::{
    analysis::SymptomAnalysisResult,
    error::SymcheckResult,
    knowledge::SymptomEntry,
    symptom::BodyPart,
    verify::VerificationReport,
};

/// A read-only table of symptom facts.
///
/// Implementations must be immutable once built: the analyzer shares one
/// source across threads and never locks it.
pub trait KnowledgeSource: Send + Sync {
    /// Look up a symptom by name, ignoring ASCII and Unicode case.
    ///
    /// Returns `None` for names the table does not know. No fuzzy matching,
    /// no synonyms.
    fn lookup(&self, symptom: &str) -> Option<&SymptomEntry>;

    /// Every entry, in table order.
    fn entries(&self) -> Vec<&SymptomEntry>;

    /// Canonical names of the symptoms associated with `part`, in table order.
    fn symptoms_for_body_part(&self, part: BodyPart) -> Vec<&str> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.body_parts.contains(&part))
            .map(|entry| entry.name.as_str())
            .collect()
    }
}

/// A checker for finished analysis results.
///
/// Implementations are pure: they inspect the result and report, never
/// modify it.
pub trait Verifier: Send + Sync {
    /// Return a report with `passed = true` if every check holds, or
    /// `passed = false` with every failure listed.
    fn verify(&self, result: &SymptomAnalysisResult) -> SymcheckResult<VerificationReport>;
}
