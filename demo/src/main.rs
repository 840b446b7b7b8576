//! symcheck Symptom Analysis Demo CLI
//!
//! Analyzes reported symptoms against the embedded knowledge table (or one
//! loaded from TOML) and prints ranked conditions with recommendations.
//!
//! Usage:
//!   cargo run -p demo -- analyze --symptom headache:mild:hours
//!   cargo run -p demo -- analyze --input request.json --json --verify
//!   cargo run -p demo -- symptoms --body-part head
//!   cargo run -p demo -- scenarios

mod render;
mod scenarios;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use symcheck_contracts::{
    analysis::AnalyzeRequest,
    error::{SymcheckError, SymcheckResult},
    symptom::{BodyPart, SymptomInput},
};
use symcheck_core::{traits::KnowledgeSource, SymptomAnalyzer};
use symcheck_knowledge::KnowledgeTable;
use symcheck_verify::ResultVerifier;

// ── CLI definition ────────────────────────────────────────────────────────────

/// symcheck: rule-based symptom analysis.
///
/// Scores possible conditions from reported symptoms and suggests next steps.
/// This is not a medical diagnosis.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "symcheck symptom analysis demo",
    long_about = "Scores possible conditions from reported symptoms using a static\n\
                  knowledge table and prints urgency, specialties, and recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a set of symptoms.
    Analyze {
        /// Symptom as `name:severity:duration[:body-part]`, e.g. `fever:moderate:days`.
        #[arg(long = "symptom", value_name = "SPEC", conflicts_with = "input")]
        symptoms: Vec<String>,
        /// JSON request file of the form `{"symptoms": [...]}`.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Knowledge table TOML to use instead of the embedded one.
        #[arg(long, value_name = "FILE")]
        knowledge: Option<PathBuf>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
        /// Verify the result against the result schema and invariants.
        #[arg(long)]
        verify: bool,
    },
    /// List the symptoms the knowledge table recognizes.
    Symptoms {
        /// Only list symptoms for this body part.
        #[arg(long, value_name = "PART")]
        body_part: Option<String>,
        /// Knowledge table TOML to use instead of the embedded one.
        #[arg(long, value_name = "FILE")]
        knowledge: Option<PathBuf>,
    },
    /// Run the reference scenarios against the embedded table, with verification.
    Scenarios,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Analyze {
            symptoms,
            input,
            knowledge,
            json,
            verify,
        } => run_analyze(&symptoms, input.as_deref(), knowledge.as_deref(), json, verify),
        Command::Symptoms {
            body_part,
            knowledge,
        } => run_symptoms(body_part.as_deref(), knowledge.as_deref()),
        Command::Scenarios => {
            print_banner();
            scenarios::run_all()
        }
    };

    if let Err(e) = result {
        eprintln!("symcheck error: {}", e);
        std::process::exit(1);
    }
}

// ── Command dispatch ──────────────────────────────────────────────────────────

fn load_table(knowledge: Option<&Path>) -> SymcheckResult<Arc<KnowledgeTable>> {
    match knowledge {
        Some(path) => Ok(Arc::new(KnowledgeTable::from_file(path)?)),
        None => Ok(KnowledgeTable::builtin()),
    }
}

/// Build a validated request from `--input` or the `--symptom` specs.
fn read_request(symptoms: &[String], input: Option<&Path>) -> SymcheckResult<AnalyzeRequest> {
    match input {
        Some(path) => {
            let body = std::fs::read_to_string(path).map_err(|e| SymcheckError::InvalidInput {
                reason: format!("failed to read request file '{}': {}", path.display(), e),
            })?;
            AnalyzeRequest::from_json(&body)
        }
        None => {
            let request = AnalyzeRequest {
                symptoms: symptoms
                    .iter()
                    .map(|s| s.parse::<SymptomInput>())
                    .collect::<SymcheckResult<Vec<_>>>()?,
            };
            request.validate()?;
            Ok(request)
        }
    }
}

fn run_analyze(
    symptoms: &[String],
    input: Option<&Path>,
    knowledge: Option<&Path>,
    json: bool,
    verify: bool,
) -> SymcheckResult<()> {
    let request = read_request(symptoms, input)?;
    let analyzer = SymptomAnalyzer::new(load_table(knowledge)?);

    debug!(symptoms = request.symptoms.len(), "running analysis");
    let outcome = analyzer.analyze_with_diagnostics(&request.symptoms);

    if verify {
        ResultVerifier::new().ensure_valid(&outcome.result)?;
    }

    if json {
        let body = serde_json::to_string_pretty(&outcome.result).map_err(|e| {
            SymcheckError::SchemaValidation {
                reason: format!("failed to serialize analysis result: {e}"),
            }
        })?;
        println!("{body}");
    } else {
        render::print_outcome(&outcome);
        if verify {
            println!("Verification: PASS");
        }
    }
    Ok(())
}

fn run_symptoms(body_part: Option<&str>, knowledge: Option<&Path>) -> SymcheckResult<()> {
    let table = load_table(knowledge)?;

    match body_part {
        Some(part) => {
            let part: BodyPart = part.parse()?;
            println!("Symptoms for {}:", part);
            for name in table.symptoms_for_body_part(part) {
                println!("  {}", name);
            }
        }
        None => {
            for part in BodyPart::ALL {
                let names = table.symptoms_for_body_part(part);
                if !names.is_empty() {
                    println!("{:<8} {}", part.as_str(), names.join(", "));
                }
            }
        }
    }
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("symcheck: Rule-based Symptom Analysis");
    println!("Reference Scenarios");
    println!("======================================");
    println!();
    println!("Analysis pipeline per request:");
    println!("  [1] Each recognized symptom contributes base × severity × duration per condition");
    println!("  [2] Contributions are summed, ranked, and the top 5 kept (scores capped at 100)");
    println!("  [3] Overall urgency = highest urgency among kept conditions");
    println!("  [4] Recommendations: emergency alone, or specialist → self-care → disclaimer");
    println!("  [5] Verifier checks the result against JSON Schema + output invariants");
    println!();
}

// ── Tests ─────────────────────────────────────────────────────────────────────
