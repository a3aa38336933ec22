//! Turns raw model text into a validated [`RecommendationOutput`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{RecommendationOutput, RecommendationSource, Workout};

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\n?").expect("code fence pattern is valid"));

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Response is not valid recommendation JSON: {0}")]
    Malformed(String),

    #[error("Expected {expected} recommendations, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("Recommended workout {0} is not in the catalog")]
    UnknownWorkout(Uuid),

    #[error("Workout {0} was recommended more than once")]
    Duplicate(Uuid),

    #[error("Recommendation for workout {0} has no reasoning")]
    MissingReasoning(Uuid),

    #[error("Response has an empty overall message")]
    EmptyMessage,
}

/// Remove markdown code fences the model sometimes wraps its JSON in
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

pub fn parse_recommendations(
    text: &str,
    catalog: &[Workout],
    expected: usize,
) -> Result<RecommendationOutput, ParseError> {
    let cleaned = strip_code_fences(text);
    let mut output: RecommendationOutput =
        serde_json::from_str(&cleaned).map_err(|e| ParseError::Malformed(e.to_string()))?;

    if output.recommendations.len() != expected {
        return Err(ParseError::WrongCount {
            expected,
            actual: output.recommendations.len(),
        });
    }

    let known: HashMap<Uuid, &Workout> = catalog.iter().map(|w| (w.id, w)).collect();
    let mut seen = HashSet::new();
    for rec in &mut output.recommendations {
        let Some(workout) = known.get(&rec.workout_id) else {
            return Err(ParseError::UnknownWorkout(rec.workout_id));
        };
        if !seen.insert(rec.workout_id) {
            return Err(ParseError::Duplicate(rec.workout_id));
        }
        if rec.reasoning.trim().is_empty() {
            return Err(ParseError::MissingReasoning(rec.workout_id));
        }
        // Catalog title wins over whatever the model echoed back
        rec.title = workout.title.clone();
    }

    if output.overall_message.trim().is_empty() {
        return Err(ParseError::EmptyMessage);
    }

    output.source = RecommendationSource::Model;
    Ok(output)
}
