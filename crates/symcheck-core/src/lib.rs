//! # symcheck-core
//!
//! The deterministic symptom analysis engine.
//!
//! This crate provides:
//! - The two seam traits (`KnowledgeSource`, `Verifier`)
//! - Condition scoring (`scoring`) and recommendation synthesis (`synthesis`)
//! - The `SymptomAnalyzer` that runs them in order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use symcheck_core::SymptomAnalyzer;
//!
//! let analyzer = SymptomAnalyzer::new(Arc::new(table));
//! let result = analyzer.analyze(&symptoms);
//! ```

pub mod analyzer;
pub mod scoring;
pub mod synthesis;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use analyzer::SymptomAnalyzer;
pub use traits::{KnowledgeSource, Verifier};
