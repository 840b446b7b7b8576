//! # symcheck-contracts
//!
//! Shared types, wire formats, and errors for the symcheck symptom analysis
//! engine.
//!
//! All crates in the workspace import from here. No scoring logic lives in
//! this crate: only data definitions, their text forms, and error types.

pub mod analysis;
pub mod error;
pub mod knowledge;
pub mod symptom;
pub mod verify;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use analysis::{AnalyzeRequest, HealthRecommendation, RecommendationKind, SymptomAnalysisResult};
    use error::SymcheckError;
    use knowledge::UrgencyLevel;
    use symptom::{BodyPart, SymptomDuration, SymptomInput, SymptomSeverity};

    // ── Multipliers ──────────────────────────────────────────────────────────

    #[test]
    fn severity_multipliers() {
        assert_eq!(SymptomSeverity::Mild.multiplier(), 1.0);
        assert_eq!(SymptomSeverity::Moderate.multiplier(), 1.2);
        assert_eq!(SymptomSeverity::Severe.multiplier(), 1.5);
    }

    #[test]
    fn duration_multipliers() {
        assert_eq!(SymptomDuration::Hours.multiplier(), 1.0);
        assert_eq!(SymptomDuration::Days.multiplier(), 1.1);
        assert_eq!(SymptomDuration::Weeks.multiplier(), 1.2);
        assert_eq!(SymptomDuration::Months.multiplier(), 1.3);
    }

    // ── UrgencyLevel ─────────────────────────────────────────────────────────

    #[test]
    fn urgency_orders_low_to_emergency() {
        assert!(UrgencyLevel::Low < UrgencyLevel::Medium);
        assert!(UrgencyLevel::Medium < UrgencyLevel::High);
        assert!(UrgencyLevel::High < UrgencyLevel::Emergency);

        let max = [UrgencyLevel::Medium, UrgencyLevel::Emergency, UrgencyLevel::Low]
            .into_iter()
            .max();
        assert_eq!(max, Some(UrgencyLevel::Emergency));
        assert_eq!(UrgencyLevel::default(), UrgencyLevel::Low);
    }

    #[test]
    fn urgency_parses_its_display_form() {
        for level in [
            UrgencyLevel::Low,
            UrgencyLevel::Medium,
            UrgencyLevel::High,
            UrgencyLevel::Emergency,
        ] {
            assert_eq!(level.to_string().parse::<UrgencyLevel>().unwrap(), level);
        }
        assert!("critical".parse::<UrgencyLevel>().is_err());
    }

    // ── BodyPart inference ───────────────────────────────────────────────────

    #[test]
    fn body_part_inferred_from_symptom_name() {
        assert_eq!(BodyPart::infer_from_name("Headache"), BodyPart::Head);
        assert_eq!(BodyPart::infer_from_name("sore throat"), BodyPart::Head);
        assert_eq!(BodyPart::infer_from_name("Chest Pain"), BodyPart::Chest);
        assert_eq!(BodyPart::infer_from_name("stomach cramps"), BodyPart::Abdomen);
        assert_eq!(BodyPart::infer_from_name("lower abdomen pain"), BodyPart::Abdomen);
        assert_eq!(BodyPart::infer_from_name("abdominal pain"), BodyPart::General);
        assert_eq!(BodyPart::infer_from_name("back pain"), BodyPart::Back);
        assert_eq!(BodyPart::infer_from_name("arm numbness"), BodyPart::Arms);
        assert_eq!(BodyPart::infer_from_name("leg swelling"), BodyPart::Legs);
        assert_eq!(BodyPart::infer_from_name("Rash"), BodyPart::Skin);
        assert_eq!(BodyPart::infer_from_name("fatigue"), BodyPart::General);
    }

    // ── SymptomInput parsing ─────────────────────────────────────────────────

    #[test]
    fn symptom_input_parses_compact_form() {
        let input: SymptomInput = "chest pain:severe:hours".parse().unwrap();
        assert_eq!(input.name, "chest pain");
        assert_eq!(input.severity, SymptomSeverity::Severe);
        assert_eq!(input.duration, SymptomDuration::Hours);
        assert_eq!(input.body_part, BodyPart::Chest);
        assert_eq!(input.symptom_id, None);
    }

    #[test]
    fn symptom_input_explicit_body_part_overrides_inference() {
        let input: SymptomInput = "rash:Mild:DAYS:arms".parse().unwrap();
        assert_eq!(input.body_part, BodyPart::Arms);
        assert_eq!(input.severity, SymptomSeverity::Mild);
        assert_eq!(input.duration, SymptomDuration::Days);
    }

    #[test]
    fn symptom_input_rejects_malformed_forms() {
        for bad in ["headache", "headache:mild", ":mild:hours", "a:b:c:d:e"] {
            match bad.parse::<SymptomInput>() {
                Err(SymcheckError::InvalidInput { .. }) => {}
                other => panic!("expected InvalidInput for '{bad}', got {:?}", other),
            }
        }

        match "fever:extreme:days".parse::<SymptomInput>() {
            Err(SymcheckError::InvalidInput { reason }) => {
                assert!(reason.contains("extreme"), "reason should echo the bad value: {reason}");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    // ── Wire format ──────────────────────────────────────────────────────────

    #[test]
    fn symptom_input_deserializes_camel_case_with_defaults() {
        let input: SymptomInput = serde_json::from_value(json!({
            "name": "Fever",
            "duration": "days",
            "severity": "moderate"
        }))
        .unwrap();
        assert_eq!(input.body_part, BodyPart::General);
        assert_eq!(input.symptom_id, None);

        let input: SymptomInput = serde_json::from_value(json!({
            "symptomId": "sym_2",
            "name": "Fever",
            "bodyPart": "general",
            "duration": "weeks",
            "severity": "severe"
        }))
        .unwrap();
        assert_eq!(input.symptom_id.as_deref(), Some("sym_2"));
        assert_eq!(input.duration, SymptomDuration::Weeks);
    }

    #[test]
    fn recommendation_serializes_type_key_and_omits_absent_fields() {
        let rec = HealthRecommendation {
            kind: RecommendationKind::SelfCare,
            description: "try these".to_string(),
            urgency: UrgencyLevel::Low,
            specialties: None,
            timeframe: None,
            self_care_steps: Some(vec!["Rest".to_string()]),
        };

        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["type"], "self-care");
        assert_eq!(value["urgency"], "low");
        assert_eq!(value["selfCareSteps"], json!(["Rest"]));
        assert!(value.get("timeframe").is_none());
        assert!(value.get("specialties").is_none());
    }

    #[test]
    fn empty_result_uses_front_end_field_names() {
        let value = serde_json::to_value(SymptomAnalysisResult::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "possibleConditions": [],
                "recommendations": [],
                "urgencyLevel": "low",
                "recommendedSpecialties": []
            })
        );
    }

    // ── AnalyzeRequest validation ────────────────────────────────────────────

    #[test]
    fn request_accepts_empty_and_distinct_symptoms() {
        assert!(AnalyzeRequest::default().validate().is_ok());

        let request = AnalyzeRequest::from_json(
            r#"{ "symptoms": [
                { "name": "fever", "duration": "days", "severity": "moderate" },
                { "name": "cough", "duration": "days", "severity": "moderate" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(request.symptoms.len(), 2);
    }

    #[test]
    fn request_rejects_duplicate_symptoms_case_insensitively() {
        let request = AnalyzeRequest {
            symptoms: vec![
                SymptomInput::new("Fever", SymptomSeverity::Mild, SymptomDuration::Days),
                SymptomInput::new("fever ", SymptomSeverity::Severe, SymptomDuration::Hours),
            ],
        };

        match request.validate() {
            Err(SymcheckError::InvalidInput { reason }) => {
                assert!(reason.contains("already been added"), "unexpected reason: {reason}");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn request_rejects_blank_names_and_bad_json() {
        let request = AnalyzeRequest {
            symptoms: vec![SymptomInput::new("  ", SymptomSeverity::Mild, SymptomDuration::Hours)],
        };
        assert!(request.validate().is_err());

        match AnalyzeRequest::from_json(r#"{ "symptoms": [ { "name": "fever", "severity": "awful" } ] }"#) {
            Err(SymcheckError::InvalidInput { reason }) => {
                assert!(reason.contains("failed to parse analysis request"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    // ── SymcheckError display messages ───────────────────────────────────────

    #[test]
    fn error_config_error_display() {
        let err = SymcheckError::ConfigError {
            reason: "duplicate symptom 'fever'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("fever"));
    }

    #[test]
    fn error_verification_failed_display() {
        let err = SymcheckError::VerificationFailed {
            reason: "[max-conditions] 6 conditions".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("result verification failed"));
        assert!(msg.contains("max-conditions"));
    }
}
