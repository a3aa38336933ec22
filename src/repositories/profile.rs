use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewUserProfile, UpdateProfileRequest, UserProfile};

const PROFILE_COLUMNS: &str =
    "id, user_id, display_name, preferred_workout_types, preferred_duration, created_at, updated_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>>;

    /// `None` when the user already has a profile
    async fn create(&self, profile: &NewUserProfile) -> Result<Option<UserProfile>>;

    /// `None` when the user has no profile
    async fn update(&self, user_id: Uuid, patch: &UpdateProfileRequest) -> Result<Option<UserProfile>>;
}

#[derive(Clone)]
pub struct PgProfileRepository {
    db: PgPool,
}

impl PgProfileRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>> {
        let query = format!("SELECT {} FROM user_profiles WHERE user_id = $1", PROFILE_COLUMNS);

        let profile = sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(&self.db)
            .await
            .context("Failed to fetch profile")?;

        Ok(profile)
    }

    async fn create(&self, profile: &NewUserProfile) -> Result<Option<UserProfile>> {
        let query = format!(
            r#"
            INSERT INTO user_profiles (user_id, display_name, preferred_workout_types, preferred_duration)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO NOTHING
            RETURNING {}
            "#,
            PROFILE_COLUMNS
        );

        let created = sqlx::query_as::<_, UserProfile>(&query)
            .bind(profile.user_id)
            .bind(&profile.display_name)
            .bind(profile.preferred_workout_types.clone())
            .bind(profile.preferred_duration)
            .fetch_optional(&self.db)
            .await
            .context("Failed to create profile")?;

        Ok(created)
    }

    async fn update(&self, user_id: Uuid, patch: &UpdateProfileRequest) -> Result<Option<UserProfile>> {
        let query = format!(
            r#"
            UPDATE user_profiles
            SET
                display_name = COALESCE($2, display_name),
                preferred_workout_types = COALESCE($3, preferred_workout_types),
                preferred_duration = CASE WHEN $4 THEN $5 ELSE preferred_duration END,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING {}
            "#,
            PROFILE_COLUMNS
        );

        let updated = sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(patch.display_name.clone())
            .bind(patch.preferred_workout_types.clone())
            .bind(patch.preferred_duration.is_some())
            .bind(patch.preferred_duration.flatten())
            .fetch_optional(&self.db)
            .await
            .context("Failed to update profile")?;

        Ok(updated)
    }
}
