use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::workout::WorkoutType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub display_name: String,
    pub preferred_workout_types: Vec<WorkoutType>,
    pub preferred_duration: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub user_id: Option<Uuid>,
    pub display_name: Option<String>,
    pub preferred_workout_types: Option<Vec<WorkoutType>>,
    pub preferred_duration: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUserProfile {
    pub user_id: Uuid,
    pub display_name: String,
    pub preferred_workout_types: Vec<WorkoutType>,
    pub preferred_duration: Option<i32>,
}

/// Partial profile update. Absent fields are left untouched; an explicit
/// `null` duration clears it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub preferred_workout_types: Option<Vec<WorkoutType>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub preferred_duration: Option<Option<i32>>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.preferred_workout_types.is_none()
            && self.preferred_duration.is_none()
    }
}

/// Distinguishes a field sent as `null` from one that was never sent.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let absent: UpdateProfileRequest = serde_json::from_str(r#"{"display_name": "Ana"}"#).unwrap();
        assert_eq!(absent.preferred_duration, None);

        let cleared: UpdateProfileRequest = serde_json::from_str(r#"{"preferred_duration": null}"#).unwrap();
        assert_eq!(cleared.preferred_duration, Some(None));

        let set: UpdateProfileRequest = serde_json::from_str(r#"{"preferred_duration": 20}"#).unwrap();
        assert_eq!(set.preferred_duration, Some(Some(20)));
    }

    #[test]
    fn test_empty_update_request() {
        let request: UpdateProfileRequest = serde_json::from_str("{}").unwrap();
        assert!(request.is_empty());
    }
}
