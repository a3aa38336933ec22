use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::recommendation::RecommendationOutput;
use super::workout::{SymptomType, WorkoutType};

pub const MAX_SYMPTOMS: usize = 5;
pub const MAX_MOODS: usize = 3;
pub const MIN_ENERGY_LEVEL: i64 = 1;
pub const MAX_ENERGY_LEVEL: i64 = 5;
pub const DEFAULT_HISTORY_LIMIT: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CheckIn {
    pub id: Uuid,
    pub user_id: Uuid,
    pub energy_level: i16,
    pub symptoms: Vec<SymptomType>,
    pub moods: Vec<MoodType>,
    pub preferred_workout_type: Option<WorkoutType>,
    pub recommended_workout_ids: Vec<Uuid>,
    /// Serialized structured model output
    pub gemini_reasoning: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCheckIn {
    pub user_id: Uuid,
    pub energy_level: i16,
    pub symptoms: Vec<SymptomType>,
    pub moods: Vec<MoodType>,
    pub preferred_workout_type: Option<WorkoutType>,
    pub recommended_workout_ids: Vec<Uuid>,
    pub gemini_reasoning: String,
}

/// Check-in submission as received over the wire. Required fields are
/// optional here so that missing ones can be reported together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub user_id: Option<Uuid>,
    pub energy_level: Option<i64>,
    pub symptoms: Option<Vec<SymptomType>>,
    pub moods: Option<Vec<MoodType>>,
    pub preferred_workout_type: Option<WorkoutType>,
}

/// A validated check-in, ready to drive recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct CheckInState {
    pub user_id: Uuid,
    pub energy_level: i16,
    pub symptoms: Vec<SymptomType>,
    pub moods: Vec<MoodType>,
    pub preferred_workout_type: Option<WorkoutType>,
}

/// A stored check-in with its model output decoded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckInHistoryEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub energy_level: i16,
    pub symptoms: Vec<SymptomType>,
    pub moods: Vec<MoodType>,
    pub preferred_workout_type: Option<WorkoutType>,
    pub recommended_workout_ids: Vec<Uuid>,
    pub gemini_reasoning: Option<RecommendationOutput>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<CheckIn> for CheckInHistoryEntry {
    type Error = serde_json::Error;

    fn try_from(check_in: CheckIn) -> Result<Self, Self::Error> {
        let gemini_reasoning = match check_in.gemini_reasoning.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(serde_json::from_str(raw)?),
            _ => None,
        };

        Ok(Self {
            id: check_in.id,
            user_id: check_in.user_id,
            energy_level: check_in.energy_level,
            symptoms: check_in.symptoms,
            moods: check_in.moods,
            preferred_workout_type: check_in.preferred_workout_type,
            recommended_workout_ids: check_in.recommended_workout_ids,
            gemini_reasoning,
            created_at: check_in.created_at,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "mood_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MoodType {
    Anxious,
    Fear,
    Happy,
    Moody,
    Frustrated,
    Energetic,
    Lazy,
    Productive,
}

impl MoodType {
    pub const ALL: [MoodType; 8] = [
        MoodType::Anxious,
        MoodType::Fear,
        MoodType::Happy,
        MoodType::Moody,
        MoodType::Frustrated,
        MoodType::Energetic,
        MoodType::Lazy,
        MoodType::Productive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodType::Anxious => "anxious",
            MoodType::Fear => "fear",
            MoodType::Happy => "happy",
            MoodType::Moody => "moody",
            MoodType::Frustrated => "frustrated",
            MoodType::Energetic => "energetic",
            MoodType::Lazy => "lazy",
            MoodType::Productive => "productive",
        }
    }

    /// Moods that call for calming, low-arousal movement
    pub fn wants_calm(&self) -> bool {
        matches!(
            self,
            MoodType::Anxious | MoodType::Fear | MoodType::Moody | MoodType::Frustrated
        )
    }

    /// Moods that can take a more vigorous session
    pub fn wants_energy(&self) -> bool {
        matches!(self, MoodType::Energetic | MoodType::Productive | MoodType::Happy)
    }
}

impl FromStr for MoodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoodType::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| format!("Invalid mood '{}'", s))
    }
}

impl fmt::Display for MoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


impl sqlx::postgres::PgHasArrayType for MoodType {
    fn array_type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("_mood_type")
    }
}
