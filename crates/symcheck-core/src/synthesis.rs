//! Recommendation synthesis.
//!
//! Turns ranked conditions into ordered, user-facing guidance:
//!
//!   emergency (alone) | specialist? → self-care? → general
//!
//! An emergency result gets exactly one recommendation and nothing else.
//! Every other result ends with the general disclaimer, even when no
//! condition matched.

use symcheck_contracts::{
    analysis::{HealthRecommendation, PossibleCondition, RecommendationKind},
    knowledge::UrgencyLevel,
};

pub const EMERGENCY_ADVICE: &str = "Seek immediate medical attention. Your symptoms may indicate a serious condition that requires emergency care.";

pub const SELF_CARE_INTRO: &str = "While waiting to see a healthcare professional, you can try these self-care measures to help manage your symptoms:";

pub const GENERAL_DISCLAIMER: &str = "Remember that this analysis is not a medical diagnosis. Always consult with a healthcare professional for proper evaluation and treatment.";

/// Canned self-care steps per symptom keyword, in the order they are offered.
const SELF_CARE_GUIDANCE: &[(&str, &[&str])] = &[
    (
        "headache",
        &[
            "Rest in a quiet, dark room and apply a cold compress to your forehead",
            "Stay hydrated and consider over-the-counter pain relievers if appropriate",
        ],
    ),
    (
        "fever",
        &[
            "Rest and drink plenty of fluids",
            "Take over-the-counter fever reducers if appropriate",
            "Use a light blanket if you have chills",
        ],
    ),
    (
        "cough",
        &[
            "Stay hydrated and use a humidifier to add moisture to the air",
            "Consider over-the-counter cough suppressants or expectorants if appropriate",
            "Avoid irritants like smoke or strong perfumes",
        ],
    ),
    (
        "sore throat",
        &[
            "Gargle with warm salt water several times a day",
            "Drink warm liquids like tea with honey",
            "Use throat lozenges or sprays for temporary relief",
        ],
    ),
    (
        "rash",
        &[
            "Avoid scratching the affected area",
            "Apply a cool compress or calamine lotion for itching",
            "Use mild, fragrance-free soap and moisturizer",
        ],
    ),
];

/// How soon to see a specialist for a non-emergency urgency.
pub fn specialist_timeframe(urgency: UrgencyLevel) -> &'static str {
    match urgency {
        UrgencyLevel::Emergency => "Immediately",
        UrgencyLevel::High => "Within 1-2 days",
        UrgencyLevel::Medium => "Within a week",
        UrgencyLevel::Low => "When convenient",
    }
}

/// Self-care steps for every keyword found among `matched_symptoms`.
///
/// Keywords must equal a whole symptom name exactly, case included, and are
/// visited in guidance order, not report order.
pub fn self_care_steps<S: AsRef<str>>(matched_symptoms: &[S]) -> Vec<String> {
    SELF_CARE_GUIDANCE
        .iter()
        .filter(|(keyword, _)| {
            matched_symptoms
                .iter()
                .any(|name| name.as_ref() == *keyword)
        })
        .flat_map(|(_, steps)| steps.iter().map(|step| step.to_string()))
        .collect()
}

/// Build the ordered recommendation list for a scored result.
pub fn synthesize(
    conditions: &[PossibleCondition],
    urgency: UrgencyLevel,
    specialties: &[String],
) -> Vec<HealthRecommendation> {
    if urgency == UrgencyLevel::Emergency {
        return vec![HealthRecommendation {
            kind: RecommendationKind::Emergency,
            description: EMERGENCY_ADVICE.to_string(),
            urgency: UrgencyLevel::Emergency,
            specialties: None,
            timeframe: Some("Immediately".to_string()),
            self_care_steps: None,
        }];
    }

    let mut recommendations = Vec::new();

    if !specialties.is_empty() {
        recommendations.push(HealthRecommendation {
            kind: RecommendationKind::Specialist,
            description: format!(
                "Consult with a healthcare professional specializing in {} for proper diagnosis and treatment.",
                specialties.join(" or ")
            ),
            urgency,
            specialties: Some(specialties.to_vec()),
            timeframe: Some(specialist_timeframe(urgency).to_string()),
            self_care_steps: None,
        });
    }

    let matched: Vec<&str> = conditions
        .iter()
        .flat_map(|c| c.symptoms.iter().map(String::as_str))
        .collect();
    let steps = self_care_steps(&matched);
    if !steps.is_empty() {
        recommendations.push(HealthRecommendation {
            kind: RecommendationKind::SelfCare,
            description: SELF_CARE_INTRO.to_string(),
            urgency: UrgencyLevel::Low,
            specialties: None,
            timeframe: None,
            self_care_steps: Some(steps),
        });
    }

    recommendations.push(HealthRecommendation {
        kind: RecommendationKind::General,
        description: GENERAL_DISCLAIMER.to_string(),
        urgency: UrgencyLevel::Low,
        specialties: None,
        timeframe: None,
        self_care_steps: None,
    });

    recommendations
}

// ── Tests ─────────────────────────────────────────────────────────────────────
