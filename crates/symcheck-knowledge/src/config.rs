//! Knowledge table file schema.
//!
//! A `KnowledgeConfig` is deserialized from TOML and holds an ordered list of
//! `SymptomEntry`s. Order matters: it decides which entry's metadata wins
//! for a condition listed under several symptoms, and the order symptoms are
//! listed by body part.
//!
//! Example:
//! ```toml
//! [[symptoms]]
//! name = "headache"
//! body_parts = ["head"]
//!
//! [[symptoms.conditions]]
//! name = "Tension Headache"
//! base_probability = 70
//! description = "Common headache with mild to moderate pain."
//! urgency = "low"
//! specialties = ["General Physician", "Neurologist"]
//! ```

use serde::{Deserialize, Serialize};

use symcheck_contracts::{
    error::{SymcheckError, SymcheckResult},
    knowledge::SymptomEntry,
};

use crate::table::MAX_BASE_PROBABILITY;

/// The top-level structure of a knowledge table file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Symptom entries in table order.
    #[serde(default)]
    pub symptoms: Vec<SymptomEntry>,
}

impl KnowledgeConfig {
    /// Check the entries for problems TOML typing cannot catch.
    ///
    /// Returns the first problem found as `SymcheckError::ConfigError`.
    pub fn validate(&self) -> SymcheckResult<()> {
        let mut seen: Vec<String> = Vec::with_capacity(self.symptoms.len());

        for entry in &self.symptoms {
            let key = entry.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(config_error("symptom entry has an empty name".to_string()));
            }
            if key != entry.name.to_lowercase() {
                return Err(config_error(format!(
                    "symptom name '{}' has leading or trailing whitespace",
                    entry.name
                )));
            }
            if seen.contains(&key) {
                return Err(config_error(format!("duplicate symptom '{}'", entry.name)));
            }
            if entry.conditions.is_empty() {
                return Err(config_error(format!(
                    "symptom '{}' lists no conditions",
                    entry.name
                )));
            }

            for condition in &entry.conditions {
                if condition.name.trim().is_empty() {
                    return Err(config_error(format!(
                        "symptom '{}' has a condition with an empty name",
                        entry.name
                    )));
                }
                if condition.base_probability > MAX_BASE_PROBABILITY {
                    return Err(config_error(format!(
                        "condition '{}' under symptom '{}' has base_probability {} (must be 0-{})",
                        condition.name, entry.name, condition.base_probability, MAX_BASE_PROBABILITY
                    )));
                }
            }

            seen.push(key);
        }

        Ok(())
    }
}

fn config_error(reason: String) -> SymcheckError {
    SymcheckError::ConfigError { reason }
}
