//! Schema and invariant verifier for analysis results.
//!
//! `ResultVerifier` implements the `Verifier` trait from `symcheck-core`.
//! Verification runs in two phases:
//!
//! 1. **Structural**: the serialized result is validated against the
//!    published result JSON Schema using the `jsonschema` crate.
//! 2. **Semantic**: the built-in invariant checks run in order, followed by
//!    any custom checks the host registered. All failures are collected
//!    before returning.

use serde_json::{json, Value};
use tracing::{debug, warn};

use symcheck_contracts::{
    analysis::{RecommendationKind, SymptomAnalysisResult},
    error::{SymcheckError, SymcheckResult},
    knowledge::UrgencyLevel,
    verify::{VerificationFailure, VerificationReport},
};
use symcheck_core::{
    scoring::{collect_specialties, overall_urgency, MAX_CONDITIONS, SCORE_CAP},
    traits::Verifier,
};

/// A caller-supplied check.
///
/// Returns `Some(message)` when the result fails the check, `None` on success.
pub type CustomCheckFn = Box<dyn Fn(&SymptomAnalysisResult) -> Option<String> + Send + Sync>;

/// The JSON Schema every serialized `SymptomAnalysisResult` must satisfy.
pub fn result_schema() -> Value {
    let urgency = json!({ "enum": ["low", "medium", "high", "emergency"] });
    let strings = json!({ "type": "array", "items": { "type": "string" } });

    json!({
        "type": "object",
        "required": ["possibleConditions", "recommendations", "urgencyLevel", "recommendedSpecialties"],
        "properties": {
            "possibleConditions": {
                "type": "array",
                "maxItems": MAX_CONDITIONS,
                "items": {
                    "type": "object",
                    "required": ["name", "probability", "description", "symptoms", "urgency", "specialties"],
                    "properties": {
                        "name": { "type": "string", "minLength": 1 },
                        "probability": { "type": "integer", "minimum": 0, "maximum": SCORE_CAP },
                        "description": { "type": "string" },
                        "symptoms": strings,
                        "urgency": urgency,
                        "specialties": strings
                    }
                }
            },
            "recommendations": {
                "type": "array",
                "minItems": 1,
                "items": {
                    "type": "object",
                    "required": ["type", "description", "urgency"],
                    "properties": {
                        "type": { "enum": ["specialist", "self-care", "emergency", "general"] },
                        "description": { "type": "string", "minLength": 1 },
                        "urgency": urgency,
                        "specialties": strings,
                        "timeframe": { "type": "string" },
                        "selfCareSteps": strings
                    }
                }
            },
            "urgencyLevel": urgency,
            "recommendedSpecialties": {
                "type": "array",
                "uniqueItems": true,
                "items": { "type": "string" }
            }
        }
    })
}

/// The symcheck result verifier.
///
/// Built-in checks encode the engine's output guarantees. Hosts can add
/// their own checks by name, e.g. a clinic that never wants a given
/// specialty recommended.
pub struct ResultVerifier {
    schema: Value,
    /// Named custom checks, run in registration order.
    custom_checks: Vec<(String, CustomCheckFn)>,
}

impl ResultVerifier {
    /// Create a verifier with the built-in schema and no custom checks.
    pub fn new() -> Self {
        Self {
            schema: result_schema(),
            custom_checks: Vec::new(),
        }
    }

    /// Register a custom check under `name`.
    ///
    /// Registering the same name twice replaces the previous function but
    /// keeps its position.
    pub fn register_check(&mut self, name: impl Into<String>, f: CustomCheckFn) {
        let name = name.into();
        match self.custom_checks.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = f,
            None => self.custom_checks.push((name, f)),
        }
    }

    /// Verify `result` and turn a failing report into an error.
    ///
    /// Returns `SymcheckError::VerificationFailed` listing every failure.
    pub fn ensure_valid(&self, result: &SymptomAnalysisResult) -> SymcheckResult<()> {
        let report = self.verify(result)?;
        if report.passed {
            Ok(())
        } else {
            Err(SymcheckError::VerificationFailed {
                reason: report.summary(),
            })
        }
    }

    // ── Built-in checks ───────────────────────────────────────────────────────

    fn check_structure(&self, payload: &Value, failures: &mut Vec<VerificationFailure>) {
        match jsonschema::validator_for(&self.schema) {
            Ok(validator) => {
                for error in validator.iter_errors(payload) {
                    let message =
                        format!("JSON Schema violation at {}: {}", error.instance_path, error);
                    warn!(%message, "structural validation failure");
                    failures.push(VerificationFailure {
                        check_id: "json-schema".to_string(),
                        message,
                    });
                }
            }
            Err(e) => {
                let message = format!("invalid JSON Schema document: {e}");
                warn!(%message, "schema compilation failure");
                failures.push(VerificationFailure {
                    check_id: "json-schema".to_string(),
                    message,
                });
            }
        }
    }

    /// Every invariant as `(check_id, failure message if broken)`.
    fn invariant_results(result: &SymptomAnalysisResult) -> Vec<(&'static str, Option<String>)> {
        let conditions = &result.possible_conditions;
        let recommendations = &result.recommendations;
        let kinds: Vec<RecommendationKind> = recommendations.iter().map(|r| r.kind).collect();

        let probability_range = conditions
            .iter()
            .find(|c| c.probability > SCORE_CAP)
            .map(|c| format!("condition '{}' has probability {}", c.name, c.probability));

        let max_conditions = (conditions.len() > MAX_CONDITIONS).then(|| {
            format!(
                "{} conditions listed, at most {} allowed",
                conditions.len(),
                MAX_CONDITIONS
            )
        });

        let descending = conditions
            .windows(2)
            .find(|pair| pair[0].probability < pair[1].probability)
            .map(|pair| {
                format!(
                    "'{}' ({}) is ranked above '{}' ({})",
                    pair[0].name, pair[0].probability, pair[1].name, pair[1].probability
                )
            });

        let expected_urgency = overall_urgency(conditions);
        let urgency = (result.urgency_level != expected_urgency).then(|| {
            format!(
                "urgency is '{}' but the conditions call for '{}'",
                result.urgency_level, expected_urgency
            )
        });

        let emergency_exclusive = if result.urgency_level == UrgencyLevel::Emergency {
            (kinds != [RecommendationKind::Emergency]).then(|| {
                format!("emergency result must carry exactly one emergency recommendation, found {kinds:?}")
            })
        } else {
            None
        };

        let ordering = if result.urgency_level == UrgencyLevel::Emergency {
            None
        } else {
            recommendation_order_problem(&kinds)
        };

        let expected_specialties = collect_specialties(conditions);
        let specialties = (result.recommended_specialties != expected_specialties).then(|| {
            format!(
                "recommended specialties {:?} differ from the conditions' union {:?}",
                result.recommended_specialties, expected_specialties
            )
        });

        vec![
            ("probability-range", probability_range),
            ("max-conditions", max_conditions),
            ("descending-order", descending),
            ("urgency-matches-conditions", urgency),
            ("emergency-exclusive", emergency_exclusive),
            ("recommendation-order", ordering),
            ("specialty-union", specialties),
        ]
    }
}

/// Non-emergency results read `[specialist] [self-care] general`, each kind
/// at most once.
fn recommendation_order_problem(kinds: &[RecommendationKind]) -> Option<String> {
    fn rank(kind: RecommendationKind) -> Option<u8> {
        match kind {
            RecommendationKind::Specialist => Some(0),
            RecommendationKind::SelfCare => Some(1),
            RecommendationKind::General => Some(2),
            RecommendationKind::Emergency => None,
        }
    }

    if kinds.last() != Some(&RecommendationKind::General) {
        return Some(format!("recommendations must end with the general disclaimer, found {kinds:?}"));
    }

    let mut previous: Option<u8> = None;
    for &kind in kinds {
        let Some(current) = rank(kind) else {
            return Some("non-emergency result carries an emergency recommendation".to_string());
        };
        if previous.is_some_and(|p| p >= current) {
            return Some(format!("recommendations out of order or repeated: {kinds:?}"));
        }
        previous = Some(current);
    }
    None
}

impl Default for ResultVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Verifier for ResultVerifier {
    /// Verify `result` against the schema and every check.
    ///
    /// Runs structural validation first, then the built-in invariants, then
    /// custom checks. All failures are accumulated into one report.
    fn verify(&self, result: &SymptomAnalysisResult) -> SymcheckResult<VerificationReport> {
        let mut failures: Vec<VerificationFailure> = Vec::new();

        // ── Phase 1: JSON Schema structural validation ────────────────────────
        let payload = serde_json::to_value(result).map_err(|e| SymcheckError::SchemaValidation {
            reason: format!("failed to serialize analysis result: {e}"),
        })?;
        self.check_structure(&payload, &mut failures);

        // ── Phase 2: Invariants and custom checks ─────────────────────────────
        let builtin = Self::invariant_results(result)
            .into_iter()
            .map(|(id, outcome)| (id.to_string(), outcome));
        let custom = self
            .custom_checks
            .iter()
            .map(|(name, f)| (name.clone(), f(result)));

        for (check_id, outcome) in builtin.chain(custom) {
            debug!(check_id = %check_id, passed = outcome.is_none(), "result check evaluated");
            if let Some(message) = outcome {
                warn!(check_id = %check_id, %message, "result check failed");
                failures.push(VerificationFailure { check_id, message });
            }
        }

        let report = VerificationReport::from_failures(failures);
        debug!(
            passed = report.passed,
            failure_count = report.failures.len(),
            "verification complete"
        );
        Ok(report)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
