use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CheckIn, NewCheckIn};

const CHECK_IN_COLUMNS: &str = "id, user_id, energy_level, symptoms, moods, preferred_workout_type, \
     recommended_workout_ids, gemini_reasoning, created_at";

/// Check-ins are insert-only
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    async fn create(&self, check_in: &NewCheckIn) -> Result<CheckIn>;

    /// Newest first, at most `limit` records
    async fn list_by_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<CheckIn>>;
}

#[derive(Clone)]
pub struct PgCheckInRepository {
    db: PgPool,
}

impl PgCheckInRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CheckInRepository for PgCheckInRepository {
    async fn create(&self, check_in: &NewCheckIn) -> Result<CheckIn> {
        let query = format!(
            r#"
            INSERT INTO user_check_ins (
                user_id, energy_level, symptoms, moods, preferred_workout_type,
                recommended_workout_ids, gemini_reasoning
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            CHECK_IN_COLUMNS
        );

        let created = sqlx::query_as::<_, CheckIn>(&query)
            .bind(check_in.user_id)
            .bind(check_in.energy_level)
            .bind(check_in.symptoms.clone())
            .bind(check_in.moods.clone())
            .bind(check_in.preferred_workout_type)
            .bind(check_in.recommended_workout_ids.clone())
            .bind(&check_in.gemini_reasoning)
            .fetch_one(&self.db)
            .await
            .context("Failed to save check-in")?;

        Ok(created)
    }

    async fn list_by_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<CheckIn>> {
        let query = format!(
            "SELECT {} FROM user_check_ins WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
            CHECK_IN_COLUMNS
        );

        let check_ins = sqlx::query_as::<_, CheckIn>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(&self.db)
            .await
            .context("Failed to fetch check-in history")?;

        Ok(check_ins)
    }
}
