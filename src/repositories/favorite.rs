use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::{
    Favorite, FavoriteWithWorkout, IntensityLevel, SymptomType, WorkoutSummary, WorkoutType,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Newest first, with the favorited workout joined in
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<FavoriteWithWorkout>>;

    /// Insert the pair unless it already exists. `None` means it was already
    /// favorited; the check and the insert are a single statement.
    async fn insert_if_absent(&self, user_id: Uuid, workout_id: Uuid) -> Result<Option<Favorite>>;

    async fn delete_by_id(&self, id: Uuid) -> Result<u64>;

    async fn delete_by_user_and_workout(&self, user_id: Uuid, workout_id: Uuid) -> Result<u64>;
}

#[derive(Clone)]
pub struct PgFavoriteRepository {
    db: PgPool,
}

impl PgFavoriteRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(FromRow)]
struct FavoriteRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    workout_id: Uuid,
    title: String,
    youtube_url: String,
    youtube_id: String,
    duration: i32,
    intensity_level: IntensityLevel,
    workout_type: WorkoutType,
    description: String,
    good_for_symptoms: Vec<SymptomType>,
}

impl From<FavoriteRow> for FavoriteWithWorkout {
    fn from(row: FavoriteRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            workouts: WorkoutSummary {
                id: row.workout_id,
                title: row.title,
                youtube_url: row.youtube_url,
                youtube_id: row.youtube_id,
                duration: row.duration,
                intensity_level: row.intensity_level,
                workout_type: row.workout_type,
                description: row.description,
                good_for_symptoms: row.good_for_symptoms,
            },
        }
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<FavoriteWithWorkout>> {
        let rows = sqlx::query_as::<_, FavoriteRow>(
            r#"
            SELECT
                f.id, f.created_at,
                w.id AS workout_id, w.title, w.youtube_url, w.youtube_id, w.duration,
                w.intensity_level, w.workout_type, w.description, w.good_for_symptoms
            FROM favorites f
            JOIN workouts w ON w.id = f.workout_id
            WHERE f.user_id = $1
            ORDER BY f.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .context("Failed to fetch favorites")?;

        Ok(rows.into_iter().map(FavoriteWithWorkout::from).collect())
    }

    async fn insert_if_absent(&self, user_id: Uuid, workout_id: Uuid) -> Result<Option<Favorite>> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id, workout_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, workout_id) DO NOTHING
            RETURNING id, user_id, workout_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(workout_id)
        .fetch_optional(&self.db)
        .await
        .context("Failed to add favorite")?;

        Ok(favorite)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .context("Failed to remove favorite")?;

        Ok(result.rows_affected())
    }

    async fn delete_by_user_and_workout(&self, user_id: Uuid, workout_id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND workout_id = $2")
            .bind(user_id)
            .bind(workout_id)
            .execute(&self.db)
            .await
            .context("Failed to remove favorite")?;

        Ok(result.rows_affected())
    }
}
