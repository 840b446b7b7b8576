//! Caller-supplied symptom reports.
//!
//! A `SymptomInput` is one reported symptom as collected by an intake form.
//! The enumerations here are closed: every multiplier and lookup over them
//! is an exhaustive `match`, so adding a variant is a compile error until
//! every consumer handles it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SymcheckError;

/// The body region a symptom is reported against.
///
/// Informational only: scoring ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyPart {
    Head,
    Chest,
    Abdomen,
    Back,
    Arms,
    Legs,
    Skin,
    #[default]
    General,
}

impl BodyPart {
    /// Every region, in intake-form order.
    pub const ALL: [BodyPart; 8] = [
        BodyPart::Head,
        BodyPart::Chest,
        BodyPart::Abdomen,
        BodyPart::Back,
        BodyPart::Arms,
        BodyPart::Legs,
        BodyPart::Skin,
        BodyPart::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyPart::Head => "head",
            BodyPart::Chest => "chest",
            BodyPart::Abdomen => "abdomen",
            BodyPart::Back => "back",
            BodyPart::Arms => "arms",
            BodyPart::Legs => "legs",
            BodyPart::Skin => "skin",
            BodyPart::General => "general",
        }
    }

    /// Guess the region for a free-text symptom name.
    ///
    /// Keyword checks run in a fixed order and the first hit wins, so
    /// "sore throat" lands on `Head` and "back pain" on `Back`. Anything
    /// unmatched is `General`.
    pub fn infer_from_name(name: &str) -> BodyPart {
        let name = name.to_lowercase();
        let has = |needle: &str| name.contains(needle);

        if has("head") || has("throat") {
            BodyPart::Head
        } else if has("chest") {
            BodyPart::Chest
        } else if has("abdomen") || has("stomach") {
            BodyPart::Abdomen
        } else if has("back") {
            BodyPart::Back
        } else if has("arm") {
            BodyPart::Arms
        } else if has("leg") {
            BodyPart::Legs
        } else if has("skin") || has("rash") {
            BodyPart::Skin
        } else {
            BodyPart::General
        }
    }
}

/// How long the symptom has been present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomDuration {
    Hours,
    Days,
    Weeks,
    Months,
}

impl SymptomDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomDuration::Hours => "hours",
            SymptomDuration::Days => "days",
            SymptomDuration::Weeks => "weeks",
            SymptomDuration::Months => "months",
        }
    }

    /// Weight applied to every condition the symptom points at.
    pub fn multiplier(&self) -> f64 {
        match self {
            SymptomDuration::Hours => 1.0,
            SymptomDuration::Days => 1.1,
            SymptomDuration::Weeks => 1.2,
            SymptomDuration::Months => 1.3,
        }
    }
}

/// How intense the symptom is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomSeverity {
    Mild,
    Moderate,
    Severe,
}

impl SymptomSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomSeverity::Mild => "mild",
            SymptomSeverity::Moderate => "moderate",
            SymptomSeverity::Severe => "severe",
        }
    }

    /// Weight applied to every condition the symptom points at.
    pub fn multiplier(&self) -> f64 {
        match self {
            SymptomSeverity::Mild => 1.0,
            SymptomSeverity::Moderate => 1.2,
            SymptomSeverity::Severe => 1.5,
        }
    }
}

// ── Text forms ────────────────────────────────────────────────────────────────

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SymptomDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SymptomSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyPart {
    type Err = SymcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BodyPart::ALL
            .into_iter()
            .find(|part| part.as_str() == wanted)
            .ok_or_else(|| SymcheckError::InvalidInput {
                reason: format!(
                    "unknown body part '{s}' (expected head, chest, abdomen, back, arms, legs, skin or general)"
                ),
            })
    }
}

impl FromStr for SymptomDuration {
    type Err = SymcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hours" => Ok(SymptomDuration::Hours),
            "days" => Ok(SymptomDuration::Days),
            "weeks" => Ok(SymptomDuration::Weeks),
            "months" => Ok(SymptomDuration::Months),
            _ => Err(SymcheckError::InvalidInput {
                reason: format!("unknown duration '{s}' (expected hours, days, weeks or months)"),
            }),
        }
    }
}

impl FromStr for SymptomSeverity {
    type Err = SymcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mild" => Ok(SymptomSeverity::Mild),
            "moderate" => Ok(SymptomSeverity::Moderate),
            "severe" => Ok(SymptomSeverity::Severe),
            _ => Err(SymcheckError::InvalidInput {
                reason: format!("unknown severity '{s}' (expected mild, moderate or severe)"),
            }),
        }
    }
}

// ── SymptomInput ──────────────────────────────────────────────────────────────

/// One reported symptom.
///
/// `name` is matched case-insensitively against the knowledge table. A name
/// the table does not know contributes nothing to the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomInput {
    /// Identifier assigned by the intake form, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptom_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub body_part: BodyPart,
    pub duration: SymptomDuration,
    pub severity: SymptomSeverity,
}

impl SymptomInput {
    /// Build an input with the body part inferred from `name`.
    pub fn new(
        name: impl Into<String>,
        severity: SymptomSeverity,
        duration: SymptomDuration,
    ) -> Self {
        let name = name.into();
        Self {
            symptom_id: None,
            body_part: BodyPart::infer_from_name(&name),
            name,
            duration,
            severity,
        }
    }
}

/// Parse the compact command-line form `name:severity:duration[:body-part]`.
///
/// ```text
/// chest pain:severe:hours
/// rash:mild:days:arms
/// ```
///
/// When the body part is omitted it is inferred from the name.
impl FromStr for SymptomInput {
    type Err = SymcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() < 3 || parts.len() > 4 {
            return Err(SymcheckError::InvalidInput {
                reason: format!("expected 'name:severity:duration[:body-part]', got '{s}'"),
            });
        }

        let name = parts[0].trim();
        if name.is_empty() {
            return Err(SymcheckError::InvalidInput {
                reason: format!("symptom name is empty in '{s}'"),
            });
        }

        let severity: SymptomSeverity = parts[1].parse()?;
        let duration: SymptomDuration = parts[2].parse()?;

        let mut input = SymptomInput::new(name, severity, duration);
        if let Some(part) = parts.get(3) {
            input.body_part = part.parse()?;
        }
        Ok(input)
    }
}
