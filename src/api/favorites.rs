use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get, post},
    Router,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{AddFavoriteRequest, Favorite, FavoriteWithWorkout};
use crate::services::FavoriteService;

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub success: bool,
    pub favorites: Vec<FavoriteWithWorkout>,
}

#[derive(Debug, Serialize)]
pub struct AddFavoriteResponse {
    pub success: bool,
    pub favorite: Favorite,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Clone)]
pub struct FavoritesAppState {
    pub service: FavoriteService,
}

// `:id` is the user id for GET and the favorite id for DELETE.
pub fn favorites_routes(service: FavoriteService) -> Router {
    Router::new()
        .route("/", post(add_favorite))
        .route("/:id", get(list_favorites).delete(remove_favorite))
        .route("/:id/:workout_id", delete(remove_user_favorite))
        .with_state(FavoritesAppState { service })
}

async fn list_favorites(
    State(state): State<FavoritesAppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<Json<FavoritesResponse>> {
    let favorites = state.service.list(user_id).await?;
    Ok(Json(FavoritesResponse {
        success: true,
        favorites,
    }))
}

async fn add_favorite(
    State(state): State<FavoritesAppState>,
    WithRejection(Json(request), _): WithRejection<Json<AddFavoriteRequest>, AppError>,
) -> AppResult<Json<AddFavoriteResponse>> {
    let favorite = state.service.add(request).await?;
    Ok(Json(AddFavoriteResponse {
        success: true,
        favorite,
        message: "Workout added to favorites!".to_string(),
    }))
}

async fn remove_favorite(
    State(state): State<FavoritesAppState>,
    WithRejection(Path(favorite_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    state.service.remove(favorite_id).await?;
    Ok(Json(removed()))
}

async fn remove_user_favorite(
    State(state): State<FavoritesAppState>,
    WithRejection(Path((user_id, workout_id)), _): WithRejection<Path<(Uuid, Uuid)>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    state.service.remove_for_user(user_id, workout_id).await?;
    Ok(Json(removed()))
}

fn removed() -> MessageResponse {
    MessageResponse {
        success: true,
        message: "Workout removed from favorites".to_string(),
    }
}
