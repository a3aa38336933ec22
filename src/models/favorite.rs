use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::workout::WorkoutSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub workout_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Favorite listing entry with the joined workout under `workouts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteWithWorkout {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub workouts: WorkoutSummary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddFavoriteRequest {
    pub user_id: Option<Uuid>,
    pub workout_id: Option<Uuid>,
}
