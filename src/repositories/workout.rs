//! Workout catalog repository
//!
//! The catalog is reference data: the service only reads it. `insert` exists
//! for the demo seeder.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewWorkout, Workout, WorkoutFilter};

const WORKOUT_COLUMNS: &str = "id, title, youtube_url, youtube_id, duration, intensity_level, \
     workout_type, description, good_for_symptoms, benefits, trimester_suitability, created_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Whole catalog, ordered by intensity ascending
    async fn list_all(&self) -> Result<Vec<Workout>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Workout>>;

    /// Records for the given ids. Unknown ids are skipped; order is unspecified.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Workout>>;

    async fn filter(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>>;

    async fn insert(&self, workout: &NewWorkout) -> Result<Workout>;
}

#[derive(Clone)]
pub struct PgWorkoutRepository {
    db: PgPool,
}

impl PgWorkoutRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkoutRepository for PgWorkoutRepository {
    async fn list_all(&self) -> Result<Vec<Workout>> {
        let query = format!(
            "SELECT {} FROM workouts ORDER BY intensity_level ASC, title ASC",
            WORKOUT_COLUMNS
        );

        let workouts = sqlx::query_as::<_, Workout>(&query)
            .fetch_all(&self.db)
            .await
            .context("Failed to fetch workouts")?;

        Ok(workouts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Workout>> {
        let query = format!("SELECT {} FROM workouts WHERE id = $1", WORKOUT_COLUMNS);

        let workout = sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .context("Failed to fetch workout")?;

        Ok(workout)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Workout>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("SELECT {} FROM workouts WHERE id = ANY($1)", WORKOUT_COLUMNS);

        let workouts = sqlx::query_as::<_, Workout>(&query)
            .bind(ids.to_vec())
            .fetch_all(&self.db)
            .await
            .context("Failed to fetch recommended workouts")?;

        Ok(workouts)
    }

    async fn filter(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>> {
        let mut query = format!("SELECT {} FROM workouts WHERE TRUE", WORKOUT_COLUMNS);
        let mut param_count = 1;

        if filter.intensity.is_some() {
            query.push_str(&format!(" AND intensity_level = ${}", param_count));
            param_count += 1;
        }

        if filter.workout_type.is_some() {
            query.push_str(&format!(" AND workout_type = ${}", param_count));
            param_count += 1;
        }

        if filter.max_duration.is_some() {
            query.push_str(&format!(" AND duration <= ${}", param_count));
            param_count += 1;
        }

        if filter.symptoms.is_some() {
            query.push_str(&format!(" AND good_for_symptoms && ${}", param_count));
        }

        query.push_str(" ORDER BY intensity_level ASC, title ASC");

        let mut query_builder = sqlx::query_as::<_, Workout>(&query);

        if let Some(intensity) = filter.intensity {
            query_builder = query_builder.bind(intensity);
        }
        if let Some(workout_type) = filter.workout_type {
            query_builder = query_builder.bind(workout_type);
        }
        if let Some(max_duration) = filter.max_duration {
            query_builder = query_builder.bind(max_duration);
        }
        if let Some(symptoms) = &filter.symptoms {
            query_builder = query_builder.bind(symptoms.clone());
        }

        let workouts = query_builder
            .fetch_all(&self.db)
            .await
            .context("Failed to filter workouts")?;

        Ok(workouts)
    }

    async fn insert(&self, workout: &NewWorkout) -> Result<Workout> {
        let query = format!(
            r#"
            INSERT INTO workouts (
                title, youtube_url, youtube_id, duration, intensity_level, workout_type,
                description, good_for_symptoms, benefits, trimester_suitability
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            WORKOUT_COLUMNS
        );

        let created = sqlx::query_as::<_, Workout>(&query)
            .bind(&workout.title)
            .bind(&workout.youtube_url)
            .bind(&workout.youtube_id)
            .bind(workout.duration)
            .bind(workout.intensity_level)
            .bind(workout.workout_type)
            .bind(&workout.description)
            .bind(workout.good_for_symptoms.clone())
            .bind(workout.benefits.clone())
            .bind(workout.trimester_suitability.clone())
            .fetch_one(&self.db)
            .await
            .context("Failed to insert workout")?;

        Ok(created)
    }
}
