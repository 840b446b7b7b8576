//! Analysis request and result types.
//!
//! Field names serialize in camelCase so the JSON matches what the portal's
//! front end already renders (`possibleConditions`, `urgencyLevel`, …).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{SymcheckError, SymcheckResult};
use crate::knowledge::UrgencyLevel;
use crate::symptom::SymptomInput;

/// A condition the engine considers plausible for the reported symptoms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PossibleCondition {
    pub name: String,

    /// Aggregated ranking score, rounded and capped to 0–100.
    ///
    /// Kept under this name for front-end compatibility; it is a weighted sum
    /// of table weights, not a probability.
    pub probability: u8,

    pub description: String,

    /// Reported symptom names that contributed to the score, as the caller
    /// spelled them.
    pub symptoms: Vec<String>,

    pub urgency: UrgencyLevel,

    pub specialties: Vec<String>,
}

/// The kind of guidance a recommendation carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKind {
    Specialist,
    SelfCare,
    Emergency,
    General,
}

/// One piece of user-facing guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,

    pub description: String,

    pub urgency: UrgencyLevel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_care_steps: Option<Vec<String>>,
}

/// The complete output of one analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysisResult {
    /// At most five conditions, highest score first.
    pub possible_conditions: Vec<PossibleCondition>,

    /// Ordered guidance: emergency alone, or specialist, self-care, and a
    /// closing general disclaimer.
    pub recommendations: Vec<HealthRecommendation>,

    /// The highest urgency among `possible_conditions`; `Low` when empty.
    pub urgency_level: UrgencyLevel,

    /// Union of the conditions' specialties, first-seen order, no duplicates.
    pub recommended_specialties: Vec<String>,
}

/// An analysis result plus the diagnostics the plain result leaves out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub result: SymptomAnalysisResult,

    /// Reported names the knowledge table did not recognize, in input order.
    /// They were dropped from scoring without error.
    pub unrecognized_symptoms: Vec<String>,
}

/// The JSON body a caller submits for analysis.
///
/// ```json
/// { "symptoms": [ { "name": "fever", "duration": "days", "severity": "moderate" } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub symptoms: Vec<SymptomInput>,
}

impl AnalyzeRequest {
    /// Parse and validate a JSON request body.
    pub fn from_json(body: &str) -> SymcheckResult<Self> {
        let request: AnalyzeRequest =
            serde_json::from_str(body).map_err(|e| SymcheckError::InvalidInput {
                reason: format!("failed to parse analysis request: {e}"),
            })?;
        request.validate()?;
        Ok(request)
    }

    /// Boundary checks the engine itself never performs.
    ///
    /// Rejects blank symptom names and the same symptom reported twice
    /// (compared case-insensitively). An empty list is valid.
    pub fn validate(&self) -> SymcheckResult<()> {
        let mut seen = HashSet::new();
        for (index, symptom) in self.symptoms.iter().enumerate() {
            let key = symptom.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(SymcheckError::InvalidInput {
                    reason: format!("symptom #{} has an empty name", index + 1),
                });
            }
            if !seen.insert(key) {
                return Err(SymcheckError::InvalidInput {
                    reason: format!("symptom '{}' has already been added", symptom.name),
                });
            }
        }
        Ok(())
    }
}
