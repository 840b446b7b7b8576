//! Plain-text rendering of analysis results.

use symcheck_contracts::analysis::{AnalysisOutcome, RecommendationKind};

pub fn print_outcome(outcome: &AnalysisOutcome) {
    let result = &outcome.result;

    println!("Overall urgency: {}", result.urgency_level);
    println!();

    if result.possible_conditions.is_empty() {
        println!("No matching conditions.");
    } else {
        println!("Possible conditions:");
        for (rank, condition) in result.possible_conditions.iter().enumerate() {
            println!(
                "  {}. {:<24} {:>3}  [{}]  from: {}",
                rank + 1,
                condition.name,
                condition.probability,
                condition.urgency,
                condition.symptoms.join(", ")
            );
        }
    }

    if !outcome.unrecognized_symptoms.is_empty() {
        println!();
        println!(
            "Not recognized (ignored): {}",
            outcome.unrecognized_symptoms.join(", ")
        );
    }

    println!();
    println!("Recommendations:");
    for recommendation in &result.recommendations {
        let label = match recommendation.kind {
            RecommendationKind::Emergency => "EMERGENCY",
            RecommendationKind::Specialist => "Specialist",
            RecommendationKind::SelfCare => "Self-care",
            RecommendationKind::General => "Note",
        };
        println!("  [{}] {}", label, recommendation.description);
        if let Some(timeframe) = &recommendation.timeframe {
            println!("      Timeframe: {}", timeframe);
        }
        for step in recommendation.self_care_steps.iter().flatten() {
            println!("      - {}", step);
        }
    }
    println!();
}
