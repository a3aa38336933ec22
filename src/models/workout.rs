use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub id: Uuid,
    pub title: String,
    pub youtube_url: String,
    pub youtube_id: String,
    pub duration: i32, // minutes
    pub intensity_level: IntensityLevel,
    pub workout_type: WorkoutType,
    pub description: String,
    pub good_for_symptoms: Vec<SymptomType>,
    pub benefits: Option<Vec<String>>,
    pub trimester_suitability: Option<Vec<i16>>,
    pub created_at: DateTime<Utc>,
}

impl Workout {
    /// True unless the workout lists trimesters and the first one is not among them.
    pub fn suits_first_trimester(&self) -> bool {
        match &self.trimester_suitability {
            Some(trimesters) if !trimesters.is_empty() => trimesters.contains(&1),
            _ => true,
        }
    }

    pub fn helps_with(&self, symptom: SymptomType) -> bool {
        self.good_for_symptoms.contains(&symptom)
    }
}

/// Workout fields embedded in a favorite listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub id: Uuid,
    pub title: String,
    pub youtube_url: String,
    pub youtube_id: String,
    pub duration: i32,
    pub intensity_level: IntensityLevel,
    pub workout_type: WorkoutType,
    pub description: String,
    pub good_for_symptoms: Vec<SymptomType>,
}

impl From<Workout> for WorkoutSummary {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id,
            title: workout.title,
            youtube_url: workout.youtube_url,
            youtube_id: workout.youtube_id,
            duration: workout.duration,
            intensity_level: workout.intensity_level,
            workout_type: workout.workout_type,
            description: workout.description,
            good_for_symptoms: workout.good_for_symptoms,
        }
    }
}

/// Catalog entry used by the seeder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkout {
    pub title: String,
    pub youtube_url: String,
    pub youtube_id: String,
    pub duration: i32,
    pub intensity_level: IntensityLevel,
    pub workout_type: WorkoutType,
    pub description: String,
    pub good_for_symptoms: Vec<SymptomType>,
    pub benefits: Option<Vec<String>>,
    pub trimester_suitability: Option<Vec<i16>>,
}

/// Catalog filter. Every criterion that is set must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutFilter {
    pub intensity: Option<IntensityLevel>,
    pub workout_type: Option<WorkoutType>,
    pub max_duration: Option<i32>,
    /// Matches workouts that help with at least one of these
    pub symptoms: Option<Vec<SymptomType>>,
}

impl WorkoutFilter {
    pub fn is_empty(&self) -> bool {
        self.intensity.is_none()
            && self.workout_type.is_none()
            && self.max_duration.is_none()
            && self.symptoms.is_none()
    }

    pub fn matches(&self, workout: &Workout) -> bool {
        if let Some(intensity) = self.intensity {
            if workout.intensity_level != intensity {
                return false;
            }
        }

        if let Some(workout_type) = self.workout_type {
            if workout.workout_type != workout_type {
                return false;
            }
        }

        if let Some(max_duration) = self.max_duration {
            if workout.duration > max_duration {
                return false;
            }
        }

        if let Some(symptoms) = &self.symptoms {
            if !symptoms.iter().any(|s| workout.helps_with(*s)) {
                return false;
            }
        }

        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "intensity_level", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    Low,
    Medium,
    High,
}

impl IntensityLevel {
    pub const ALL: [IntensityLevel; 3] = [IntensityLevel::Low, IntensityLevel::Medium, IntensityLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityLevel::Low => "low",
            IntensityLevel::Medium => "medium",
            IntensityLevel::High => "high",
        }
    }
}

impl FromStr for IntensityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntensityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("Invalid intensity '{}'. Must be one of: low, medium, high", s))
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "workout_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Hiit,
    StrengthTraining,
    Core,
    Arms,
    Legs,
    Yoga,
    Stretching,
    Cardio,
    Pilates,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 9] = [
        WorkoutType::Hiit,
        WorkoutType::StrengthTraining,
        WorkoutType::Core,
        WorkoutType::Arms,
        WorkoutType::Legs,
        WorkoutType::Yoga,
        WorkoutType::Stretching,
        WorkoutType::Cardio,
        WorkoutType::Pilates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Hiit => "hiit",
            WorkoutType::StrengthTraining => "strength_training",
            WorkoutType::Core => "core",
            WorkoutType::Arms => "arms",
            WorkoutType::Legs => "legs",
            WorkoutType::Yoga => "yoga",
            WorkoutType::Stretching => "stretching",
            WorkoutType::Cardio => "cardio",
            WorkoutType::Pilates => "pilates",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Hiit => "HIIT",
            WorkoutType::StrengthTraining => "Strength Training",
            WorkoutType::Core => "Core",
            WorkoutType::Arms => "Arms",
            WorkoutType::Legs => "Legs",
            WorkoutType::Yoga => "Yoga",
            WorkoutType::Stretching => "Stretching",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Pilates => "Pilates",
        }
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Invalid workout type '{}'", s))
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "symptom_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SymptomType {
    BackPain,
    WeakArm,
    WeakLegs,
    SciaticaPain,
    Nausea,
    MorningSickness,
    Fatigue,
    Headaches,
    Bloating,
    Weakness,
    StomachPain,
    WeakInGeneral,
}

impl SymptomType {
    pub const ALL: [SymptomType; 12] = [
        SymptomType::BackPain,
        SymptomType::WeakArm,
        SymptomType::WeakLegs,
        SymptomType::SciaticaPain,
        SymptomType::Nausea,
        SymptomType::MorningSickness,
        SymptomType::Fatigue,
        SymptomType::Headaches,
        SymptomType::Bloating,
        SymptomType::Weakness,
        SymptomType::StomachPain,
        SymptomType::WeakInGeneral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomType::BackPain => "back_pain",
            SymptomType::WeakArm => "weak_arm",
            SymptomType::WeakLegs => "weak_legs",
            SymptomType::SciaticaPain => "sciatica_pain",
            SymptomType::Nausea => "nausea",
            SymptomType::MorningSickness => "morning_sickness",
            SymptomType::Fatigue => "fatigue",
            SymptomType::Headaches => "headaches",
            SymptomType::Bloating => "bloating",
            SymptomType::Weakness => "weakness",
            SymptomType::StomachPain => "stomach_pain",
            SymptomType::WeakInGeneral => "weak_in_general",
        }
    }
}

impl FromStr for SymptomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymptomType::ALL
            .into_iter()
            .find(|symptom| symptom.as_str() == s)
            .ok_or_else(|| format!("Invalid symptom '{}'", s))
    }
}

impl fmt::Display for SymptomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


impl sqlx::postgres::PgHasArrayType for SymptomType {
    fn array_type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("_symptom_type")
    }
}

impl sqlx::postgres::PgHasArrayType for WorkoutType {
    fn array_type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("_workout_type")
    }
}
