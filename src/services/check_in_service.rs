use anyhow::{anyhow, Context};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::recommendation_engine::RecommendationEngine;
use crate::errors::{AppError, AppResult};
use crate::models::{
    validate_check_in, validate_history_limit, CheckIn, CheckInHistoryEntry, CheckInRequest,
    NewCheckIn, RecommendationOutput, RecommendedWorkout, Workout,
};
use crate::repositories::{CheckInRepository, WorkoutRepository};

/// Result of a successful check-in
#[derive(Debug, Clone)]
pub struct CheckInOutcome {
    pub check_in: CheckIn,
    pub recommendations: Vec<RecommendedWorkout>,
    pub message: String,
    pub insights: RecommendationOutput,
}

#[derive(Clone)]
pub struct CheckInService {
    workouts: Arc<dyn WorkoutRepository>,
    check_ins: Arc<dyn CheckInRepository>,
    engine: RecommendationEngine,
}

impl CheckInService {
    pub fn new(
        workouts: Arc<dyn WorkoutRepository>,
        check_ins: Arc<dyn CheckInRepository>,
        engine: RecommendationEngine,
    ) -> Self {
        Self {
            workouts,
            check_ins,
            engine,
        }
    }

    /// Validate, recommend, persist. Nothing external is touched before the
    /// request passes validation.
    #[instrument(skip_all)]
    pub async fn submit_check_in(&self, request: CheckInRequest) -> AppResult<CheckInOutcome> {
        let state = validate_check_in(request)?;

        let catalog = self.workouts.list_all().await?;
        let output = self.engine.recommend(&state, &catalog).await?;

        let ids = output.workout_ids();
        let fetched = self.workouts.find_by_ids(&ids).await?;
        let recommendations = attach_reasoning(&output, fetched)?;

        let new_check_in = NewCheckIn {
            user_id: state.user_id,
            energy_level: state.energy_level,
            symptoms: state.symptoms,
            moods: state.moods,
            preferred_workout_type: state.preferred_workout_type,
            recommended_workout_ids: ids,
            gemini_reasoning: serde_json::to_string(&output)
                .context("Failed to serialize recommendation output")?,
        };
        let check_in = self.check_ins.create(&new_check_in).await?;

        info!(
            check_in_id = %check_in.id,
            user_id = %check_in.user_id,
            source = ?output.source,
            "Check-in recorded"
        );

        Ok(CheckInOutcome {
            check_in,
            recommendations,
            message: output.overall_message.clone(),
            insights: output,
        })
    }

    #[instrument(skip(self))]
    pub async fn history(
        &self,
        user_id: Uuid,
        limit: Option<i64>,
    ) -> AppResult<Vec<CheckInHistoryEntry>> {
        let limit = validate_history_limit(limit)?;
        let check_ins = self.check_ins.list_by_user(user_id, limit).await?;

        check_ins
            .into_iter()
            .map(|check_in| {
                let id = check_in.id;
                CheckInHistoryEntry::try_from(check_in)
                    .with_context(|| format!("Stored recommendation for check-in {} is corrupt", id))
                    .map_err(AppError::from)
            })
            .collect()
    }
}

/// Pair each recommended id with its full record, keeping the ranking order
fn attach_reasoning(
    output: &RecommendationOutput,
    mut fetched: Vec<Workout>,
) -> AppResult<Vec<RecommendedWorkout>> {
    output
        .workout_ids()
        .into_iter()
        .map(|id| -> AppResult<RecommendedWorkout> {
            let position = fetched
                .iter()
                .position(|w| w.id == id)
                .ok_or_else(|| anyhow!("Recommended workout {} no longer exists", id))?;
            let reasoning = output.reasoning_for(id).unwrap_or_default().to_string();
            Ok(RecommendedWorkout {
                workout: fetched.swap_remove(position),
                reasoning,
            })
        })
        .collect()
}
