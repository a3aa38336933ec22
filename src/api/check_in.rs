use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{
    CheckIn, CheckInHistoryEntry, CheckInRequest, RecommendationOutput, RecommendedWorkout,
};
use crate::services::CheckInService;

#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub success: bool,
    #[serde(rename = "checkIn")]
    pub check_in: CheckIn,
    pub recommendations: Vec<RecommendedWorkout>,
    pub message: String,
    pub gemini_insights: RecommendationOutput,
}

#[derive(Debug, Serialize)]
pub struct CheckInHistoryResponse {
    pub success: bool,
    pub history: Vec<CheckInHistoryEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

#[derive(Clone)]
pub struct CheckInAppState {
    pub service: CheckInService,
}

pub fn check_in_routes(service: CheckInService) -> Router {
    Router::new()
        .route("/", post(submit_check_in))
        .route("/history/:user_id", get(get_history))
        .with_state(CheckInAppState { service })
}

/// Submit a daily check-in and get ranked workout recommendations
async fn submit_check_in(
    State(state): State<CheckInAppState>,
    WithRejection(Json(request), _): WithRejection<Json<CheckInRequest>, AppError>,
) -> AppResult<Json<CheckInResponse>> {
    let outcome = state.service.submit_check_in(request).await?;

    Ok(Json(CheckInResponse {
        success: true,
        check_in: outcome.check_in,
        recommendations: outcome.recommendations,
        message: outcome.message,
        gemini_insights: outcome.insights,
    }))
}

async fn get_history(
    State(state): State<CheckInAppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Query(query), _): WithRejection<Query<HistoryQuery>, AppError>,
) -> AppResult<Json<CheckInHistoryResponse>> {
    let history = state.service.history(user_id, query.limit).await?;

    Ok(Json(CheckInHistoryResponse {
        success: true,
        history,
    }))
}
