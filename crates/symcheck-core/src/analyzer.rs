//! The symptom analyzer: one pure pass from reported symptoms to guidance.
//!
//!   SymptomInput[] → Score → Rank → Urgency + Specialties → Recommendations
//!
//! The analyzer holds no mutable state. One instance can serve any number
//! of concurrent callers.

use std::sync::Arc;

use tracing::debug;

use symcheck_contracts::{
    analysis::{AnalysisOutcome, SymptomAnalysisResult},
    symptom::SymptomInput,
};

use crate::{
    scoring::{collect_specialties, overall_urgency, score_symptoms, MAX_CONDITIONS},
    synthesis::synthesize,
    traits::KnowledgeSource,
};

/// Scores symptoms against a shared knowledge source.
#[derive(Clone)]
pub struct SymptomAnalyzer {
    knowledge: Arc<dyn KnowledgeSource>,
}

impl SymptomAnalyzer {
    /// Create an analyzer over `knowledge`.
    pub fn new(knowledge: Arc<dyn KnowledgeSource>) -> Self {
        Self { knowledge }
    }

    /// The knowledge source this analyzer reads.
    pub fn knowledge(&self) -> &dyn KnowledgeSource {
        self.knowledge.as_ref()
    }

    /// Analyze `symptoms` and return the result only.
    ///
    /// Total over its input: unknown names are dropped and an empty list
    /// yields a result whose only recommendation is the general disclaimer.
    pub fn analyze(&self, symptoms: &[SymptomInput]) -> SymptomAnalysisResult {
        self.analyze_with_diagnostics(symptoms).result
    }

    /// Analyze `symptoms` and also report which names were not recognized.
    pub fn analyze_with_diagnostics(&self, symptoms: &[SymptomInput]) -> AnalysisOutcome {
        debug!(reported = symptoms.len(), "symptom analysis starting");

        let scored = score_symptoms(self.knowledge.as_ref(), symptoms, MAX_CONDITIONS);

        let urgency_level = overall_urgency(&scored.conditions);
        let recommended_specialties = collect_specialties(&scored.conditions);
        let recommendations =
            synthesize(&scored.conditions, urgency_level, &recommended_specialties);

        debug!(
            conditions = scored.conditions.len(),
            unrecognized = scored.unrecognized.len(),
            urgency = %urgency_level,
            recommendations = recommendations.len(),
            "symptom analysis complete"
        );

        AnalysisOutcome {
            result: SymptomAnalysisResult {
                possible_conditions: scored.conditions,
                recommendations,
                urgency_level,
                recommended_specialties,
            },
            unrecognized_symptoms: scored.unrecognized,
        }
    }
}

impl std::fmt::Debug for SymptomAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymptomAnalyzer")
            .field("symptoms", &self.knowledge.entries().len())
            .finish()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
