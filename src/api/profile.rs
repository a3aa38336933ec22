use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{CreateProfileRequest, UpdateProfileRequest, UserProfile};
use crate::services::ProfileService;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Serialize)]
pub struct ProfileChangeResponse {
    pub success: bool,
    pub profile: UserProfile,
    pub message: String,
}

#[derive(Clone)]
pub struct ProfileAppState {
    pub service: ProfileService,
}

pub fn profile_routes(service: ProfileService) -> Router {
    Router::new()
        .route("/", post(create_profile))
        .route("/:user_id", get(get_profile).put(update_profile))
        .with_state(ProfileAppState { service })
}

/// A missing profile is not an error: `profile` is `null`
async fn get_profile(
    State(state): State<ProfileAppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<Json<ProfileResponse>> {
    let profile = state.service.get(user_id).await?;
    Ok(Json(ProfileResponse {
        success: true,
        profile,
    }))
}

async fn create_profile(
    State(state): State<ProfileAppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateProfileRequest>, AppError>,
) -> AppResult<Json<ProfileChangeResponse>> {
    let profile = state.service.create(request).await?;
    Ok(Json(ProfileChangeResponse {
        success: true,
        profile,
        message: "Profile created successfully!".to_string(),
    }))
}

async fn update_profile(
    State(state): State<ProfileAppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Json(patch), _): WithRejection<Json<UpdateProfileRequest>, AppError>,
) -> AppResult<Json<ProfileChangeResponse>> {
    let profile = state.service.update(user_id, patch).await?;
    Ok(Json(ProfileChangeResponse {
        success: true,
        profile,
        message: "Profile updated successfully!".to_string(),
    }))
}
