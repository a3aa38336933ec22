use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::workout::Workout;

/// Number of ranked recommendations produced per check-in
pub const RECOMMENDATION_COUNT: usize = 3;

/// One ranked entry of the structured model output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecommendation {
    pub workout_id: Uuid,
    pub title: String,
    pub reasoning: String,
}

/// Structured output of a recommendation round, as stored with the check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationOutput {
    pub recommendations: Vec<ModelRecommendation>,
    pub overall_message: String,
    #[serde(default)]
    pub source: RecommendationSource,
}

impl RecommendationOutput {
    pub fn workout_ids(&self) -> Vec<Uuid> {
        self.recommendations.iter().map(|r| r.workout_id).collect()
    }

    pub fn reasoning_for(&self, workout_id: Uuid) -> Option<&str> {
        self.recommendations
            .iter()
            .find(|r| r.workout_id == workout_id)
            .map(|r| r.reasoning.as_str())
    }
}

/// Where a recommendation set came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    #[default]
    Model,
    Fallback,
}

/// Full workout record enriched with its justification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedWorkout {
    #[serde(flatten)]
    pub workout: Workout,
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasoning_for_looks_up_by_id() {
        let first = Uuid::new_v4();
        let output = RecommendationOutput {
            recommendations: vec![ModelRecommendation {
                workout_id: first,
                title: "Gentle Yoga".to_string(),
                reasoning: "Eases nausea.".to_string(),
            }],
            overall_message: "Take it slow.".to_string(),
            source: RecommendationSource::Model,
        };

        assert_eq!(output.reasoning_for(first), Some("Eases nausea."));
        assert_eq!(output.reasoning_for(Uuid::new_v4()), None);
    }
}
