//! Condition scoring: symptoms in, ranked conditions out.
//!
//! Algorithm:
//!
//! 1. Look each reported symptom up in the knowledge source. Unknown names
//!    are set aside and contribute nothing.
//! 2. Weight every condition under the symptom by
//!    `base_probability × severity multiplier × duration multiplier`.
//! 3. Sum the weights per condition name across symptoms, remembering which
//!    reported names contributed and the condition's metadata from its first
//!    occurrence.
//! 4. Rank by descending total. The sort is stable, so equal totals keep the
//!    order in which the conditions were first seen.
//! 5. Keep the top `limit` and turn each total into a 0–100 score.

use std::collections::HashMap;

use tracing::debug;

use symcheck_contracts::{
    analysis::PossibleCondition,
    knowledge::{ConditionProfile, UrgencyLevel},
    symptom::SymptomInput,
};

use crate::traits::KnowledgeSource;

/// How many conditions an analysis reports.
pub const MAX_CONDITIONS: usize = 5;

/// Upper bound of a reported condition score.
pub const SCORE_CAP: u8 = 100;

/// Ranked conditions plus the names the knowledge source did not know.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoredConditions {
    /// Highest score first, at most `limit` entries.
    pub conditions: Vec<PossibleCondition>,
    /// Reported names with no table entry, in input order.
    pub unrecognized: Vec<String>,
}

/// Running total for one condition name.
struct Tally<'k> {
    profile: &'k ConditionProfile,
    score: f64,
    contributors: Vec<String>,
}

impl Tally<'_> {
    fn add(&mut self, weight: f64, symptom: &str) {
        self.score += weight;
        // A symptom reported twice adds its weight twice but is listed once.
        // Same folding as table lookup.
        let key = symptom.to_lowercase();
        if !self
            .contributors
            .iter()
            .any(|name| name.to_lowercase() == key)
        {
            self.contributors.push(symptom.to_string());
        }
    }

    fn into_condition(self) -> PossibleCondition {
        PossibleCondition {
            name: self.profile.name.clone(),
            probability: clamp_score(self.score),
            description: self.profile.description.clone(),
            symptoms: self.contributors,
            urgency: self.profile.urgency,
            specialties: self.profile.specialties.clone(),
        }
    }
}

/// Round a raw total to the nearest integer and cap it to `0..=SCORE_CAP`.
///
/// Halves round up.
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    let rounded = (raw + 0.5).floor();
    if rounded >= f64::from(SCORE_CAP) {
        SCORE_CAP
    } else {
        rounded as u8
    }
}

/// The weight one reported symptom lends to one of its conditions.
pub fn weighted_probability(profile: &ConditionProfile, symptom: &SymptomInput) -> f64 {
    f64::from(profile.base_probability)
        * symptom.severity.multiplier()
        * symptom.duration.multiplier()
}

/// Score `symptoms` against `knowledge` and keep the best `limit` conditions.
pub fn score_symptoms(
    knowledge: &dyn KnowledgeSource,
    symptoms: &[SymptomInput],
    limit: usize,
) -> ScoredConditions {
    let mut tallies: Vec<Tally<'_>> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();
    let mut unrecognized = Vec::new();

    for symptom in symptoms {
        let Some(entry) = knowledge.lookup(&symptom.name) else {
            unrecognized.push(symptom.name.clone());
            continue;
        };

        debug!(
            symptom = %entry.name,
            severity = %symptom.severity,
            duration = %symptom.duration,
            candidates = entry.conditions.len(),
            "scoring symptom"
        );

        for profile in &entry.conditions {
            let weight = weighted_probability(profile, symptom);
            let index = *index_by_name
                .entry(profile.name.as_str())
                .or_insert_with(|| {
                    tallies.push(Tally {
                        profile,
                        score: 0.0,
                        contributors: Vec::new(),
                    });
                    tallies.len() - 1
                });
            tallies[index].add(weight, &symptom.name);
        }
    }

    tallies.sort_by(|a, b| b.score.total_cmp(&a.score));

    let conditions = tallies
        .into_iter()
        .take(limit)
        .map(Tally::into_condition)
        .collect();

    ScoredConditions {
        conditions,
        unrecognized,
    }
}

/// The most urgent tier among `conditions`, or `Low` when there are none.
pub fn overall_urgency(conditions: &[PossibleCondition]) -> UrgencyLevel {
    conditions
        .iter()
        .map(|c| c.urgency)
        .max()
        .unwrap_or_default()
}

/// Union of every condition's specialties, first-seen order, no duplicates.
pub fn collect_specialties(conditions: &[PossibleCondition]) -> Vec<String> {
    let mut specialties: Vec<String> = Vec::new();
    for specialty in conditions.iter().flat_map(|c| c.specialties.iter()) {
        if !specialties.contains(specialty) {
            specialties.push(specialty.clone());
        }
    }
    specialties
}

// ── Tests ─────────────────────────────────────────────────────────────────────
