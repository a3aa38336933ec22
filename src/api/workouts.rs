use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{parse_workout_filter, Workout};
use crate::services::WorkoutService;

#[derive(Debug, Serialize)]
pub struct WorkoutsResponse {
    pub success: bool,
    pub workouts: Vec<Workout>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutResponse {
    pub success: bool,
    pub workout: Workout,
}

/// Raw filter parameters; `symptoms` is comma-separated
#[derive(Debug, Default, Deserialize)]
pub struct WorkoutFilterQuery {
    pub intensity: Option<String>,
    #[serde(rename = "type")]
    pub workout_type: Option<String>,
    pub duration: Option<String>,
    pub symptoms: Option<String>,
}

#[derive(Clone)]
pub struct WorkoutsAppState {
    pub service: WorkoutService,
}

pub fn workout_routes(service: WorkoutService) -> Router {
    Router::new()
        .route("/", get(list_workouts))
        .route("/filter", get(filter_workouts))
        .route("/:id", get(get_workout))
        .with_state(WorkoutsAppState { service })
}

async fn list_workouts(State(state): State<WorkoutsAppState>) -> AppResult<Json<WorkoutsResponse>> {
    let workouts = state.service.list().await?;
    Ok(Json(WorkoutsResponse {
        success: true,
        workouts,
    }))
}

async fn get_workout(
    State(state): State<WorkoutsAppState>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<Json<WorkoutResponse>> {
    let workout = state.service.get(id).await?;
    Ok(Json(WorkoutResponse {
        success: true,
        workout,
    }))
}

async fn filter_workouts(
    State(state): State<WorkoutsAppState>,
    WithRejection(Query(query), _): WithRejection<Query<WorkoutFilterQuery>, AppError>,
) -> AppResult<Json<WorkoutsResponse>> {
    let filter = parse_workout_filter(
        query.intensity.as_deref(),
        query.workout_type.as_deref(),
        query.duration.as_deref(),
        query.symptoms.as_deref(),
    )?;

    let workouts = state.service.filter(&filter).await?;
    Ok(Json(WorkoutsResponse {
        success: true,
        workouts,
    }))
}
