use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{
    validate_duration, validate_new_profile, CreateProfileRequest, UpdateProfileRequest,
    UserProfile,
};
use crate::repositories::ProfileRepository;

#[derive(Clone)]
pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// `None` when the user has no profile yet
    pub async fn get(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.find_by_user(user_id).await?)
    }

    #[instrument(skip_all)]
    pub async fn create(&self, request: CreateProfileRequest) -> AppResult<UserProfile> {
        let new_profile = validate_new_profile(request)?;

        let profile = self
            .profiles
            .create(&new_profile)
            .await?
            .ok_or_else(|| AppError::Conflict("Profile already exists".to_string()))?;

        info!(user_id = %profile.user_id, "Profile created");
        Ok(profile)
    }

    /// An empty patch returns the stored profile without writing
    #[instrument(skip(self, patch))]
    pub async fn update(&self, user_id: Uuid, mut patch: UpdateProfileRequest) -> AppResult<UserProfile> {
        if patch.is_empty() {
            return self
                .profiles
                .find_by_user(user_id)
                .await?
                .ok_or_else(|| AppError::not_found("Profile not found"));
        }

        if let Some(name) = patch.display_name.take() {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::validation("Display name cannot be empty"));
            }
            patch.display_name = Some(name);
        }
        if let Some(Some(duration)) = patch.preferred_duration {
            validate_duration(duration, "Preferred duration")?;
        }

        self.profiles
            .update(user_id, &patch)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))
    }
}
