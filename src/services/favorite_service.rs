use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{validate_new_favorite, AddFavoriteRequest, Favorite, FavoriteWithWorkout};
use crate::repositories::{FavoriteRepository, WorkoutRepository};

#[derive(Clone)]
pub struct FavoriteService {
    favorites: Arc<dyn FavoriteRepository>,
    workouts: Arc<dyn WorkoutRepository>,
}

impl FavoriteService {
    pub fn new(
        favorites: Arc<dyn FavoriteRepository>,
        workouts: Arc<dyn WorkoutRepository>,
    ) -> Self {
        Self {
            favorites,
            workouts,
        }
    }

    pub async fn list(&self, user_id: Uuid) -> AppResult<Vec<FavoriteWithWorkout>> {
        Ok(self.favorites.list_by_user(user_id).await?)
    }

    #[instrument(skip_all)]
    pub async fn add(&self, request: AddFavoriteRequest) -> AppResult<Favorite> {
        let (user_id, workout_id) = validate_new_favorite(request)?;

        if self.workouts.find_by_id(workout_id).await?.is_none() {
            return Err(AppError::not_found("Workout not found"));
        }

        let favorite = self
            .favorites
            .insert_if_absent(user_id, workout_id)
            .await?
            .ok_or_else(|| AppError::validation("Workout already in favorites"))?;

        info!(%user_id, %workout_id, "Favorite added");
        Ok(favorite)
    }

    /// Succeeds whether or not anything matched
    pub async fn remove(&self, favorite_id: Uuid) -> AppResult<()> {
        let removed = self.favorites.delete_by_id(favorite_id).await?;
        tracing::debug!(%favorite_id, removed, "Favorite delete by id");
        Ok(())
    }

    pub async fn remove_for_user(&self, user_id: Uuid, workout_id: Uuid) -> AppResult<()> {
        let removed = self
            .favorites
            .delete_by_user_and_workout(user_id, workout_id)
            .await?;
        tracing::debug!(%user_id, %workout_id, removed, "Favorite delete by pair");
        Ok(())
    }
}
