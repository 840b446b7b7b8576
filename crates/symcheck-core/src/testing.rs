//! In-memory knowledge source for unit tests.

use symcheck_contracts::{
    knowledge::{ConditionProfile, SymptomEntry, UrgencyLevel},
    symptom::BodyPart,
};

use crate::traits::KnowledgeSource;

/// Build a condition with a generated description.
pub(crate) fn condition(
    name: &str,
    base_probability: u8,
    urgency: UrgencyLevel,
    specialties: &[&str],
) -> ConditionProfile {
    ConditionProfile {
        name: name.to_string(),
        base_probability,
        description: format!("{name} description"),
        urgency,
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
    }
}

/// A tiny table kept in a `Vec`, matched by lowercase comparison.
pub(crate) struct FixtureTable {
    entries: Vec<SymptomEntry>,
}

impl FixtureTable {
    pub(crate) fn new(entries: Vec<(&str, Vec<ConditionProfile>)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, conditions)| SymptomEntry {
                    name: name.to_string(),
                    body_parts: vec![BodyPart::infer_from_name(name)],
                    conditions,
                })
                .collect(),
        }
    }

    /// Two chest symptoms sharing Asthma, with a high-urgency tail condition.
    pub(crate) fn respiratory() -> Self {
        Self::new(vec![
            (
                "cough",
                vec![
                    condition("Common Cold", 70, UrgencyLevel::Low, &["General Physician"]),
                    condition(
                        "Bronchitis",
                        40,
                        UrgencyLevel::Medium,
                        &["General Physician", "Pulmonologist"],
                    ),
                    condition("Asthma", 30, UrgencyLevel::Medium, &["Pulmonologist", "Allergist"]),
                    condition("Pneumonia", 20, UrgencyLevel::High, &["Pulmonologist"]),
                ],
            ),
            (
                "wheeze",
                vec![condition("Asthma", 40, UrgencyLevel::Medium, &["Pulmonologist", "Allergist"])],
            ),
            (
                "crushing chest pain",
                vec![
                    condition("Muscle Strain", 40, UrgencyLevel::Low, &["General Physician"]),
                    condition("Heart Attack", 15, UrgencyLevel::Emergency, &["Cardiologist"]),
                ],
            ),
            (
                "sore throat",
                vec![
                    condition("Common Cold", 70, UrgencyLevel::Low, &["General Physician"]),
                    condition("Laryngitis", 25, UrgencyLevel::Low, &["ENT Specialist"]),
                ],
            ),
        ])
    }
}

impl KnowledgeSource for FixtureTable {
    fn lookup(&self, symptom: &str) -> Option<&SymptomEntry> {
        let wanted = symptom.to_lowercase();
        self.entries.iter().find(|e| e.name.to_lowercase() == wanted)
    }

    fn entries(&self) -> Vec<&SymptomEntry> {
        self.entries.iter().collect()
    }
}
