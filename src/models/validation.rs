use crate::errors::{AppError, AppResult};

use super::check_in::{
    CheckInRequest, CheckInState, DEFAULT_HISTORY_LIMIT, MAX_ENERGY_LEVEL, MAX_MOODS,
    MAX_SYMPTOMS, MIN_ENERGY_LEVEL,
};
use super::favorite::AddFavoriteRequest;
use super::user_profile::{CreateProfileRequest, NewUserProfile};
use super::workout::{IntensityLevel, SymptomType, WorkoutFilter, WorkoutType};
use uuid::Uuid;

/// Validate a check-in submission
pub fn validate_check_in(request: CheckInRequest) -> AppResult<CheckInState> {
    let (user_id, energy_level, symptoms, moods) = match (
        request.user_id,
        request.energy_level,
        request.symptoms,
        request.moods,
    ) {
        (Some(user_id), Some(energy_level), Some(symptoms), Some(moods)) => {
            (user_id, energy_level, symptoms, moods)
        }
        _ => {
            return Err(AppError::validation(
                "Missing required fields: user_id, energy_level, symptoms, moods",
            ))
        }
    };

    if symptoms.len() > MAX_SYMPTOMS {
        return Err(AppError::validation(format!(
            "Maximum {} symptoms allowed",
            MAX_SYMPTOMS
        )));
    }

    if moods.len() > MAX_MOODS {
        return Err(AppError::validation(format!("Maximum {} moods allowed", MAX_MOODS)));
    }

    if symptoms.is_empty() {
        return Err(AppError::validation("At least one symptom is required"));
    }

    if moods.is_empty() {
        return Err(AppError::validation("At least one mood is required"));
    }

    if !(MIN_ENERGY_LEVEL..=MAX_ENERGY_LEVEL).contains(&energy_level) {
        return Err(AppError::validation(format!(
            "Energy level must be between {} and {}",
            MIN_ENERGY_LEVEL, MAX_ENERGY_LEVEL
        )));
    }

    Ok(CheckInState {
        user_id,
        energy_level: energy_level as i16,
        symptoms: dedup(symptoms),
        moods: dedup(moods),
        preferred_workout_type: request.preferred_workout_type,
    })
}

/// Resolve the history limit, defaulting to 30
pub fn validate_history_limit(limit: Option<i64>) -> AppResult<i64> {
    match limit {
        None => Ok(DEFAULT_HISTORY_LIMIT),
        Some(limit) if limit >= 1 => Ok(limit),
        Some(_) => Err(AppError::validation("Limit must be a positive integer")),
    }
}

/// Validate an add-favorite request, returning `(user_id, workout_id)`
pub fn validate_new_favorite(request: AddFavoriteRequest) -> AppResult<(Uuid, Uuid)> {
    match (request.user_id, request.workout_id) {
        (Some(user_id), Some(workout_id)) => Ok((user_id, workout_id)),
        _ => Err(AppError::validation("Missing required fields: user_id, workout_id")),
    }
}

/// Validate a profile creation request
pub fn validate_new_profile(request: CreateProfileRequest) -> AppResult<NewUserProfile> {
    let display_name = request
        .display_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    let (user_id, display_name) = match (request.user_id, display_name) {
        (Some(user_id), Some(display_name)) => (user_id, display_name),
        _ => {
            return Err(AppError::validation(
                "Missing required fields: user_id, display_name",
            ))
        }
    };

    if let Some(duration) = request.preferred_duration {
        validate_duration(duration, "Preferred duration")?;
    }

    Ok(NewUserProfile {
        user_id,
        display_name,
        preferred_workout_types: dedup(request.preferred_workout_types.unwrap_or_default()),
        preferred_duration: request.preferred_duration,
    })
}

/// Durations are whole minutes and must be positive
pub fn validate_duration(duration: i32, field_name: &str) -> AppResult<()> {
    if duration <= 0 {
        return Err(AppError::validation(format!(
            "{} must be a positive number of minutes",
            field_name
        )));
    }
    Ok(())
}

/// Build a catalog filter from raw query values
pub fn parse_workout_filter(
    intensity: Option<&str>,
    workout_type: Option<&str>,
    duration: Option<&str>,
    symptoms: Option<&str>,
) -> AppResult<WorkoutFilter> {
    let intensity = non_empty(intensity)
        .map(|s| s.parse::<IntensityLevel>())
        .transpose()
        .map_err(AppError::Validation)?;

    let workout_type = non_empty(workout_type)
        .map(|s| s.parse::<WorkoutType>())
        .transpose()
        .map_err(AppError::Validation)?;

    let max_duration = non_empty(duration)
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| AppError::validation(format!("Invalid duration '{}'", s)))
        })
        .transpose()?;

    let symptoms = non_empty(symptoms)
        .map(parse_symptom_list)
        .transpose()?;

    Ok(WorkoutFilter {
        intensity,
        workout_type,
        max_duration,
        symptoms,
    })
}

/// Parse a comma-separated symptom list
pub fn parse_symptom_list(raw: &str) -> AppResult<Vec<SymptomType>> {
    let symptoms = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<SymptomType>().map_err(AppError::Validation))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(dedup(symptoms))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn dedup<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}
