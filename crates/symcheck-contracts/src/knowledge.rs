//! Knowledge table entry types.
//!
//! These are the static facts the scoring engine reads: for each canonical
//! symptom, the conditions it may indicate and the body regions it is usually
//! reported against. Tables are loaded once and never mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SymcheckError;
use crate::symptom::BodyPart;

/// How quickly a condition needs attention.
///
/// Variants are declared in ascending order, so the derived `Ord` gives
/// `Low < Medium < High < Emergency` and the overall urgency of a result is
/// simply the maximum over its conditions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    #[default]
    Low,
    Medium,
    High,
    Emergency,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
            UrgencyLevel::Emergency => "emergency",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyLevel {
    type Err = SymcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(UrgencyLevel::Low),
            "medium" => Ok(UrgencyLevel::Medium),
            "high" => Ok(UrgencyLevel::High),
            "emergency" => Ok(UrgencyLevel::Emergency),
            _ => Err(SymcheckError::InvalidInput {
                reason: format!("unknown urgency '{s}' (expected low, medium, high or emergency)"),
            }),
        }
    }
}

/// One candidate condition listed under a symptom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionProfile {
    /// Display name. Conditions with the same name under different symptoms
    /// are the same condition and their scores add up.
    pub name: String,

    /// Relative weight in 0–100. Not a calibrated likelihood: it only ranks
    /// this condition against the others the symptom points at.
    pub base_probability: u8,

    pub description: String,

    pub urgency: UrgencyLevel,

    /// Specialties that treat the condition, most relevant first.
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// Everything the table knows about one canonical symptom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    /// Canonical symptom name. Lookups compare it case-insensitively.
    pub name: String,

    /// Regions the symptom is usually reported against.
    #[serde(default)]
    pub body_parts: Vec<BodyPart>,

    /// Candidate conditions, in table order.
    pub conditions: Vec<ConditionProfile>,
}
