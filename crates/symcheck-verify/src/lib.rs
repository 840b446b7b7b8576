//! # symcheck-verify
//!
//! Result verification for the symcheck engine.
//!
//! This crate provides [`engine::ResultVerifier`], which implements the
//! [`symcheck_core::traits::Verifier`] trait. It checks a
//! `SymptomAnalysisResult` in two phases:
//!
//! 1. **Structural**: JSON Schema validation of the serialized result via
//!    the `jsonschema` crate.
//! 2. **Semantic**: the engine's output invariants (score range, ranking,
//!    urgency, recommendation layout, specialty union) plus any custom checks.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use symcheck_verify::engine::ResultVerifier;
//!
//! let mut verifier = ResultVerifier::new();
//! verifier.register_check("no-surgery", Box::new(|result| {
//!     result
//!         .recommended_specialties
//!         .iter()
//!         .any(|s| s.contains("Surgeon"))
//!         .then(|| "surgical referral requires clinician review".to_string())
//! }));
//! verifier.ensure_valid(&result)?;
//! ```

pub mod engine;

pub use engine::ResultVerifier;
