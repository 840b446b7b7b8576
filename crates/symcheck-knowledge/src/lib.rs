//! # symcheck-knowledge
//!
//! A TOML-driven symptom knowledge table for the symcheck engine.
//!
//! ## Overview
//!
//! This crate provides [`KnowledgeTable`], which implements the
//! [`KnowledgeSource`](symcheck_core::traits::KnowledgeSource) trait. Entries
//! are declared in a TOML file, validated on load, and looked up by
//! case-insensitive exact name. The seed table ships embedded in the crate.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use symcheck_knowledge::analyze_symptoms;
//!
//! let result = analyze_symptoms(&symptoms);
//! println!("{}", result.urgency_level);
//! ```

pub mod config;
pub mod table;

pub use config::KnowledgeConfig;
pub use table::KnowledgeTable;

use symcheck_contracts::{analysis::SymptomAnalysisResult, symptom::SymptomInput};
use symcheck_core::SymptomAnalyzer;

/// An analyzer over the embedded seed table.
pub fn builtin_analyzer() -> SymptomAnalyzer {
    SymptomAnalyzer::new(KnowledgeTable::builtin())
}

/// Analyze `symptoms` against the embedded seed table.
pub fn analyze_symptoms(symptoms: &[SymptomInput]) -> SymptomAnalysisResult {
    builtin_analyzer().analyze(symptoms)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
