use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{Workout, WorkoutFilter};
use crate::repositories::WorkoutRepository;

/// Read access to the workout catalog
#[derive(Clone)]
pub struct WorkoutService {
    workouts: Arc<dyn WorkoutRepository>,
}

impl WorkoutService {
    pub fn new(workouts: Arc<dyn WorkoutRepository>) -> Self {
        Self { workouts }
    }

    pub async fn list(&self) -> AppResult<Vec<Workout>> {
        Ok(self.workouts.list_all().await?)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Workout> {
        self.workouts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout not found"))
    }

    pub async fn filter(&self, filter: &WorkoutFilter) -> AppResult<Vec<Workout>> {
        if filter.is_empty() {
            return self.list().await;
        }
        Ok(self.workouts.filter(filter).await?)
    }
}
